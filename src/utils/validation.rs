use crate::app::SiteContext;
use crate::domain::{ColorRole, Contact, ServiceCatalog, Theme, CATALOG_SIZE};
use crate::utils::error::{Result, SiteError};
use regex::Regex;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: &str, reason: impl Into<String>) -> SiteError {
    SiteError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

pub fn validate_not_empty(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(field_name, value, "cannot be empty"));
    }
    Ok(())
}

/// `#RRGGBB` only; tints append a two-digit alpha to it.
pub fn validate_hex_color(field_name: &str, value: &str) -> Result<()> {
    let re = Regex::new(r"^#[0-9a-fA-F]{6}$").map_err(|e| SiteError::ConfigError {
        message: format!("hex color pattern: {}", e),
    })?;
    if !re.is_match(value) {
        return Err(invalid(field_name, value, "expected a #RRGGBB hex color"));
    }
    Ok(())
}

pub fn validate_digits(
    field_name: &str,
    value: &str,
    min_len: usize,
    max_len: usize,
) -> Result<()> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid(field_name, value, "must contain only digits"));
    }
    if value.len() < min_len || value.len() > max_len {
        return Err(invalid(
            field_name,
            value,
            format!("must have between {} and {} digits", min_len, max_len),
        ));
    }
    Ok(())
}

/// Font family names end up inside the generated stylesheet, so only plain
/// names are accepted.
pub fn validate_font_name(field_name: &str, value: &str) -> Result<()> {
    let re = Regex::new(r"^[A-Za-z0-9 _-]+$").map_err(|e| SiteError::ConfigError {
        message: format!("font name pattern: {}", e),
    })?;
    if value.trim().is_empty() || !re.is_match(value) {
        return Err(invalid(
            field_name,
            value,
            "font names may only contain letters, digits, spaces, '_' and '-'",
        ));
    }
    Ok(())
}

/// Absolute https URL on `expected_host`.
pub fn validate_https_url(field_name: &str, url_str: &str, expected_host: &str) -> Result<()> {
    let url = Url::parse(url_str)
        .map_err(|e| invalid(field_name, url_str, format!("Invalid URL format: {}", e)))?;
    if url.scheme() != "https" {
        return Err(invalid(
            field_name,
            url_str,
            format!("Unsupported URL scheme: {}", url.scheme()),
        ));
    }
    if url.host_str() != Some(expected_host) {
        return Err(invalid(field_name, url_str, format!("host must be {}", expected_host)));
    }
    Ok(())
}

/// Social links are either an in-page placeholder (`#...`) or an absolute
/// http(s) URL.
pub fn validate_link(field_name: &str, href: &str) -> Result<()> {
    if href.starts_with('#') {
        return Ok(());
    }
    match Url::parse(href) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        Ok(url) => Err(invalid(
            field_name,
            href,
            format!("Unsupported URL scheme: {}", url.scheme()),
        )),
        Err(e) => Err(invalid(field_name, href, format!("Invalid URL format: {}", e))),
    }
}

impl Validate for Theme {
    fn validate(&self) -> Result<()> {
        for role in ColorRole::ALL {
            let value = self.color(role)?;
            validate_hex_color(&format!("theme.colors.{}", role), value)?;
        }
        if self.fonts().is_empty() {
            return Err(invalid("theme.fonts", "", "at least one font is required"));
        }
        for (idx, font) in self.fonts().iter().enumerate() {
            validate_font_name(&format!("theme.fonts[{}]", idx), font)?;
        }
        Ok(())
    }
}

impl Validate for ServiceCatalog {
    fn validate(&self) -> Result<()> {
        if self.len() != CATALOG_SIZE {
            return Err(invalid(
                "services",
                &self.len().to_string(),
                format!("exactly {} services are required", CATALOG_SIZE),
            ));
        }
        for (idx, service) in self.iter().enumerate() {
            validate_not_empty(&format!("services[{}].title", idx), &service.title)?;
            validate_not_empty(
                &format!("services[{}].description", idx),
                &service.description,
            )?;
        }
        Ok(())
    }
}

impl Validate for Contact {
    fn validate(&self) -> Result<()> {
        validate_not_empty("contact.email", &self.email)?;
        // E.164 allows at most 15 digits including the country code
        validate_digits("contact.whatsapp_number", &self.whatsapp_number, 8, 15)?;
        validate_https_url("contact.whatsapp_number", &self.deep_link(), "wa.me")?;
        validate_link("contact.linkedin_url", &self.linkedin_url)?;
        validate_link("contact.github_url", &self.github_url)?;
        Ok(())
    }
}

impl Validate for SiteContext {
    fn validate(&self) -> Result<()> {
        self.theme.validate()?;
        self.catalog.validate()?;
        self.contact.validate()?;
        validate_not_empty("brand.name", &self.brand.name)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_site_is_valid() {
        assert!(SiteContext::default().validate().is_ok());
    }

    #[test]
    fn test_short_hex_is_rejected() {
        assert!(validate_hex_color("c", "#FFF").is_err());
        assert!(validate_hex_color("c", "#00D29E").is_ok());
        assert!(validate_hex_color("c", "blue").is_err());
    }

    #[test]
    fn test_missing_role_fails_theme_validation() {
        let mut theme = Theme::default();
        theme.remove_color(ColorRole::Light);
        assert!(matches!(
            theme.validate(),
            Err(SiteError::MissingColor { role }) if role == "light"
        ));
    }

    #[test]
    fn test_whatsapp_number_must_be_digits() {
        let contact = Contact {
            whatsapp_number: "+57 320 780 3362".to_string(),
            ..Contact::default()
        };
        assert!(contact.validate().is_err());
    }

    #[test]
    fn test_social_links() {
        assert!(validate_link("l", "#").is_ok());
        assert!(validate_link("l", "https://www.linkedin.com/company/terrigo").is_ok());
        assert!(validate_link("l", "ftp://example.com").is_err());
        assert!(validate_link("l", "not a url").is_err());
    }

    #[test]
    fn test_catalog_must_have_six_services() {
        assert!(ServiceCatalog::new(vec![]).validate().is_err());

        let mut services: Vec<_> = ServiceCatalog::default().iter().cloned().collect();
        services.truncate(1);
        assert!(ServiceCatalog::new(services.clone()).validate().is_err());

        let mut seven: Vec<_> = ServiceCatalog::default().iter().cloned().collect();
        seven.push(services[0].clone());
        assert!(ServiceCatalog::new(seven).validate().is_err());
    }

    #[test]
    fn test_font_names_reject_css_syntax() {
        assert!(validate_font_name("f", "Inter").is_ok());
        assert!(validate_font_name("f", "system-ui").is_ok());
        assert!(validate_font_name("f", "Open Sans").is_ok());
        assert!(validate_font_name("f", "Inter;}body{display:none").is_err());
        assert!(validate_font_name("f", "</style><script>").is_err());
        assert!(validate_font_name("f", "  ").is_err());
    }

    #[test]
    fn test_theme_with_injected_font_is_invalid() {
        let mut theme = Theme::default();
        theme.set_fonts(vec!["Inter".to_string(), "x;}".to_string()]);
        assert!(matches!(
            theme.validate(),
            Err(SiteError::InvalidConfigValueError { field, .. }) if field == "theme.fonts[1]"
        ));
    }
}
