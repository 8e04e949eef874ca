use crate::domain::icon::Icon;
use crate::utils::error::{Result, SiteError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Semantic color roles every section builder may ask the theme for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorRole {
    Primary,
    Secondary,
    Accent,
    Dark,
    Light,
    Gray,
}

impl ColorRole {
    pub const ALL: [ColorRole; 6] = [
        ColorRole::Primary,
        ColorRole::Secondary,
        ColorRole::Accent,
        ColorRole::Dark,
        ColorRole::Light,
        ColorRole::Gray,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorRole::Primary => "primary",
            ColorRole::Secondary => "secondary",
            ColorRole::Accent => "accent",
            ColorRole::Dark => "dark",
            ColorRole::Light => "light",
            ColorRole::Gray => "gray",
        }
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorRole {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        ColorRole::ALL
            .iter()
            .copied()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| SiteError::InvalidConfigValueError {
                field: "theme.colors".to_string(),
                value: s.to_string(),
                reason: "unknown color role".to_string(),
            })
    }
}

/// Color-role name to CSS color mapping plus the font preference list.
///
/// Roles are kept as plain string keys so that a theme loaded from a content
/// file can be missing one; [`Theme::color`] is where that surfaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    colors: BTreeMap<String, String>,
    fonts: Vec<String>,
}

impl Theme {
    pub fn new(colors: BTreeMap<String, String>, fonts: Vec<String>) -> Self {
        Self { colors, fonts }
    }

    pub fn color(&self, role: ColorRole) -> Result<&str> {
        self.colors
            .get(role.as_str())
            .map(String::as_str)
            .ok_or_else(|| SiteError::MissingColor {
                role: role.as_str().to_string(),
            })
    }

    /// Color with a two-digit hex alpha suffix, e.g. `#007BFF15`.
    pub fn tint(&self, role: ColorRole, alpha: &str) -> Result<String> {
        Ok(format!("{}{}", self.color(role)?, alpha))
    }

    pub fn with_color(mut self, role: ColorRole, value: impl Into<String>) -> Self {
        self.colors.insert(role.as_str().to_string(), value.into());
        self
    }

    pub fn remove_color(&mut self, role: ColorRole) -> Option<String> {
        self.colors.remove(role.as_str())
    }

    pub fn colors(&self) -> impl Iterator<Item = (&str, &str)> {
        self.colors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn fonts(&self) -> &[String] {
        &self.fonts
    }

    pub fn set_fonts(&mut self, fonts: Vec<String>) {
        self.fonts = fonts;
    }

    pub fn font_family(&self) -> String {
        self.fonts.join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceDescriptor {
    pub title: String,
    pub description: String,
    pub icon: Icon,
}

impl ServiceDescriptor {
    pub fn new(title: impl Into<String>, description: impl Into<String>, icon: Icon) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            icon,
        }
    }
}

/// Number of services the landing page presents.
pub const CATALOG_SIZE: usize = 6;

/// Ordered list of services; order is display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceCatalog(Vec<ServiceDescriptor>);

impl ServiceCatalog {
    pub fn new(services: Vec<ServiceDescriptor>) -> Self {
        Self(services)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ServiceDescriptor> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
    pub tagline: String,
    pub logo_src: String,
    pub logo_alt: String,
    pub copyright_year: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    /// Country code and number, digits only (`573207803362`).
    pub whatsapp_number: String,
    pub whatsapp_display: String,
    pub location: String,
    pub linkedin_url: String,
    pub github_url: String,
}

impl Contact {
    pub fn deep_link(&self) -> String {
        format!("https://wa.me/{}", self.whatsapp_number)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Radius {
    None,
    Small,
    Medium,
    Large,
    Full,
}

impl Radius {
    pub fn as_str(&self) -> &'static str {
        match self {
            Radius::None => "none",
            Radius::Small => "small",
            Radius::Medium => "medium",
            Radius::Large => "large",
            Radius::Full => "full",
        }
    }

    /// Value exposed as `--radius` on `:root`; small surfaces such as the value
    /// badges follow it, larger cards and buttons keep fixed radii.
    pub fn css_value(&self) -> &'static str {
        match self {
            Radius::None => "0",
            Radius::Small => "4px",
            Radius::Medium => "8px",
            Radius::Large => "12px",
            Radius::Full => "9999px",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    Blue,
    Cyan,
    Teal,
    Green,
}

impl AccentColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccentColor::Blue => "blue",
            AccentColor::Cyan => "cyan",
            AccentColor::Teal => "teal",
            AccentColor::Green => "green",
        }
    }
}

/// Global visual theme applied at the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppTheme {
    pub appearance: Appearance,
    pub has_background: bool,
    pub radius: Radius,
    pub accent: AccentColor,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme() -> Theme {
        let colors = ColorRole::ALL
            .iter()
            .map(|role| (role.as_str().to_string(), "#000000".to_string()))
            .collect();
        Theme::new(colors, vec!["Inter".to_string(), "sans-serif".to_string()])
    }

    #[test]
    fn test_color_lookup_resolves_every_role() {
        let theme = theme().with_color(ColorRole::Accent, "#00D29E");
        for role in ColorRole::ALL {
            assert!(theme.color(role).is_ok());
        }
        assert_eq!(theme.color(ColorRole::Accent).unwrap(), "#00D29E");
    }

    #[test]
    fn test_removed_role_fails_lookup() {
        let mut theme = theme();
        assert!(theme.remove_color(ColorRole::Gray).is_some());
        let err = theme.color(ColorRole::Gray).unwrap_err();
        assert!(matches!(err, SiteError::MissingColor { role } if role == "gray"));
    }

    #[test]
    fn test_tint_appends_alpha() {
        let theme = theme().with_color(ColorRole::Primary, "#007BFF");
        assert_eq!(theme.tint(ColorRole::Primary, "15").unwrap(), "#007BFF15");
    }

    #[test]
    fn test_deep_link_uses_number() {
        let contact = Contact {
            email: "a@b.co".to_string(),
            whatsapp_number: "573207803362".to_string(),
            whatsapp_display: "+57 320 780 3362".to_string(),
            location: "Colombia".to_string(),
            linkedin_url: "#".to_string(),
            github_url: "#".to_string(),
        };
        assert_eq!(contact.deep_link(), "https://wa.me/573207803362");
    }

    #[test]
    fn test_font_family_joins_preferences() {
        assert_eq!(theme().font_family(), "Inter, sans-serif");
    }
}
