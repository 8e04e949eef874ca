use crate::app::SiteContext;
use crate::domain::{Brand, ColorRole, Contact, ServiceCatalog, ServiceDescriptor, Theme};
use crate::utils::error::{Result, SiteError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Optional overrides for the site content, read from a TOML file.
///
/// Every section and field may be omitted; whatever is missing falls back to
/// the canonical Terrigo content. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContentConfig {
    pub brand: Option<BrandConfig>,
    pub contact: Option<ContactConfig>,
    pub theme: Option<ThemeConfig>,
    pub services: Option<Vec<ServiceDescriptor>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BrandConfig {
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub logo_src: Option<String>,
    pub logo_alt: Option<String>,
    pub copyright_year: Option<u16>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactConfig {
    pub email: Option<String>,
    pub whatsapp_number: Option<String>,
    pub whatsapp_display: Option<String>,
    pub location: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    pub colors: Option<BTreeMap<String, String>>,
    pub fonts: Option<Vec<String>>,
}

fn apply<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

impl ContentConfig {
    /// 從 TOML 檔案載入內容設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed)?)
    }

    /// 替換環境變數 (例如 ${WHATSAPP_NUMBER})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SiteError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Merges the overrides onto the canonical content.
    pub fn into_site(self) -> Result<SiteContext> {
        let mut ctx = SiteContext::default();

        if let Some(brand) = self.brand {
            let target: &mut Brand = &mut ctx.brand;
            apply(&mut target.name, brand.name);
            apply(&mut target.tagline, brand.tagline);
            apply(&mut target.logo_src, brand.logo_src);
            apply(&mut target.logo_alt, brand.logo_alt);
            apply(&mut target.copyright_year, brand.copyright_year);
        }

        if let Some(contact) = self.contact {
            let target: &mut Contact = &mut ctx.contact;
            apply(&mut target.email, contact.email);
            apply(&mut target.whatsapp_number, contact.whatsapp_number);
            apply(&mut target.whatsapp_display, contact.whatsapp_display);
            apply(&mut target.location, contact.location);
            apply(&mut target.linkedin_url, contact.linkedin_url);
            apply(&mut target.github_url, contact.github_url);
        }

        if let Some(theme) = self.theme {
            let mut merged = Theme::default();
            for (role, value) in theme.colors.unwrap_or_default() {
                let role: ColorRole = role.parse()?;
                merged = merged.with_color(role, value);
            }
            if let Some(fonts) = theme.fonts {
                merged.set_fonts(fonts);
            }
            ctx.theme = merged;
        }

        if let Some(services) = self.services {
            ctx.catalog = ServiceCatalog::new(services);
        }

        Ok(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Icon, CATALOG_SIZE};
    use crate::utils::validation::Validate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_file_keeps_canonical_content() {
        let ctx = ContentConfig::from_toml_str("").unwrap().into_site().unwrap();
        assert_eq!(ctx, SiteContext::default());
    }

    #[test]
    fn test_contact_override() {
        let toml_content = r#"
[contact]
whatsapp_number = "573001234567"
whatsapp_display = "+57 300 123 4567"
"#;
        let ctx = ContentConfig::from_toml_str(toml_content).unwrap().into_site().unwrap();
        assert_eq!(ctx.contact.deep_link(), "https://wa.me/573001234567");
        assert_eq!(ctx.contact.email, "contacto@terrigo.com");
    }

    #[test]
    fn test_theme_colors_merge_onto_defaults() {
        let toml_content = r##"
[theme.colors]
accent = "#12A594"
"##;
        let ctx = ContentConfig::from_toml_str(toml_content).unwrap().into_site().unwrap();
        assert_eq!(ctx.theme.color(ColorRole::Accent).unwrap(), "#12A594");
        assert_eq!(ctx.theme.color(ColorRole::Primary).unwrap(), "#007BFF");
    }

    #[test]
    fn test_services_replace_catalog() {
        let mut toml_content = String::new();
        for idx in 0..CATALOG_SIZE {
            toml_content.push_str(&format!(
                "[[services]]\ntitle = \"Servicio {}\"\ndescription = \"Descripción {}\"\nicon = \"network\"\n",
                idx, idx
            ));
        }
        let ctx = ContentConfig::from_toml_str(&toml_content)
            .unwrap()
            .into_site()
            .unwrap();
        assert_eq!(ctx.catalog.len(), CATALOG_SIZE);
        let service = ctx.catalog.iter().next().unwrap();
        assert_eq!(service.title, "Servicio 0");
        assert_eq!(service.icon, Icon::Network);
        assert!(ctx.validate().is_ok());
    }

    #[test]
    fn test_unknown_color_role_is_rejected() {
        let toml_content = r##"
[theme.colors]
primray = "#FF0000"
"##;
        let err = ContentConfig::from_toml_str(toml_content)
            .unwrap()
            .into_site()
            .unwrap_err();
        assert!(matches!(
            err,
            SiteError::InvalidConfigValueError { field, value, .. }
                if field == "theme.colors" && value == "primray"
        ));
    }

    #[test]
    fn test_misspelt_keys_are_parse_errors() {
        let contact = "[contact]\nwhatsap_number = \"573001234567\"\n";
        assert!(matches!(
            ContentConfig::from_toml_str(contact),
            Err(SiteError::TomlError(_))
        ));

        let section = "[brnad]\nname = \"Terrigo\"\n";
        assert!(ContentConfig::from_toml_str(section).is_err());

        let service = "[[services]]\ntitle = \"X\"\ndescripton = \"Y\"\nicon = \"map\"\n";
        assert!(ContentConfig::from_toml_str(service).is_err());
    }

    #[test]
    fn test_unknown_icon_is_a_parse_error() {
        let toml_content = r#"
[[services]]
title = "X"
description = "Y"
icon = "rocket"
"#;
        let err = ContentConfig::from_toml_str(toml_content).unwrap_err();
        assert!(matches!(err, SiteError::TomlError(_)));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TERRIGO_TEST_EMAIL", "hola@terrigo.co");
        let toml_content = r#"
[contact]
email = "${TERRIGO_TEST_EMAIL}"
"#;
        let ctx = ContentConfig::from_toml_str(toml_content).unwrap().into_site().unwrap();
        assert_eq!(ctx.contact.email, "hola@terrigo.co");
        std::env::remove_var("TERRIGO_TEST_EMAIL");
    }

    #[test]
    fn test_content_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[brand]\ncopyright_year = 2025\n")
            .unwrap();
        let ctx = ContentConfig::from_file(temp_file.path()).unwrap().into_site().unwrap();
        assert_eq!(ctx.brand.copyright_year, 2025);
        assert_eq!(ctx.brand.name, "Terrigo S.A.S.");
    }
}
