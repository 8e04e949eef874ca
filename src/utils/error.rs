use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Theme is missing color role '{role}'")]
    MissingColor { role: String },

    #[error("Unknown icon '{name}'")]
    UnknownIcon { name: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Content or theme problems detected while composing the page.
    Content,
    /// Bad configuration file or CLI/env settings.
    Configuration,
    /// Filesystem or socket failures.
    System,
}

impl SiteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::MissingColor { .. } | SiteError::UnknownIcon { .. } => {
                ErrorCategory::Content
            }
            SiteError::TomlError(_)
            | SiteError::ConfigError { .. }
            | SiteError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SiteError::IoError(_) | SiteError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SiteError::MissingColor { role } => {
                format!("The site theme does not define the '{}' color", role)
            }
            SiteError::UnknownIcon { name } => {
                format!("The icon '{}' is not part of the icon set", name)
            }
            SiteError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Content => {
                "Check the [theme] and [[services]] sections of the content file"
            }
            ErrorCategory::Configuration => {
                "Fix the content file or the command line flags and start again"
            }
            ErrorCategory::System => "Check file permissions and that the port is free",
        }
    }

    /// Process exit code for the binary.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Content => 2,
            ErrorCategory::Configuration => 1,
            ErrorCategory::System => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_color_is_content_error() {
        let err = SiteError::MissingColor {
            role: "accent".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Content);
        assert_eq!(err.exit_code(), 2);
        assert!(err.user_friendly_message().contains("accent"));
    }

    #[test]
    fn test_invalid_value_message_names_field() {
        let err = SiteError::InvalidConfigValueError {
            field: "contact.whatsapp_number".to_string(),
            value: "+57 abc".to_string(),
            reason: "must contain only digits".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.to_string().contains("+57 abc"));
        assert!(err
            .user_friendly_message()
            .contains("contact.whatsapp_number"));
    }
}
