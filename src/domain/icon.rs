use crate::utils::error::{Result, SiteError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Icons available to the page. Names follow the lucide icon set, which the
/// document loads to turn `data-lucide` placeholders into SVG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Icon {
    #[serde(rename = "bar-chart-3")]
    BarChart3,
    #[serde(rename = "brain")]
    Brain,
    #[serde(rename = "file-text")]
    FileText,
    #[serde(rename = "smartphone")]
    Smartphone,
    #[serde(rename = "cpu")]
    Cpu,
    #[serde(rename = "network")]
    Network,
    #[serde(rename = "menu")]
    Menu,
    #[serde(rename = "message-circle")]
    MessageCircle,
    #[serde(rename = "lightbulb")]
    Lightbulb,
    #[serde(rename = "eye")]
    Eye,
    #[serde(rename = "zap")]
    Zap,
    #[serde(rename = "map")]
    Map,
    #[serde(rename = "mail")]
    Mail,
    #[serde(rename = "map-pin")]
    MapPin,
    #[serde(rename = "linkedin")]
    Linkedin,
    #[serde(rename = "github")]
    Github,
}

impl Icon {
    pub const ALL: [Icon; 16] = [
        Icon::BarChart3,
        Icon::Brain,
        Icon::FileText,
        Icon::Smartphone,
        Icon::Cpu,
        Icon::Network,
        Icon::Menu,
        Icon::MessageCircle,
        Icon::Lightbulb,
        Icon::Eye,
        Icon::Zap,
        Icon::Map,
        Icon::Mail,
        Icon::MapPin,
        Icon::Linkedin,
        Icon::Github,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Icon::BarChart3 => "bar-chart-3",
            Icon::Brain => "brain",
            Icon::FileText => "file-text",
            Icon::Smartphone => "smartphone",
            Icon::Cpu => "cpu",
            Icon::Network => "network",
            Icon::Menu => "menu",
            Icon::MessageCircle => "message-circle",
            Icon::Lightbulb => "lightbulb",
            Icon::Eye => "eye",
            Icon::Zap => "zap",
            Icon::Map => "map",
            Icon::Mail => "mail",
            Icon::MapPin => "map-pin",
            Icon::Linkedin => "linkedin",
            Icon::Github => "github",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Icon {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        Icon::ALL
            .iter()
            .copied()
            .find(|icon| icon.name() == s)
            .ok_or_else(|| SiteError::UnknownIcon {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_parses_back_from_its_name() {
        for icon in Icon::ALL {
            assert_eq!(icon.name().parse::<Icon>().unwrap(), icon);
        }
    }

    #[test]
    fn test_unknown_icon_is_rejected() {
        let err = "rocket".parse::<Icon>().unwrap_err();
        assert!(matches!(err, SiteError::UnknownIcon { name } if name == "rocket"));
    }

    #[test]
    fn test_serde_uses_lucide_names() {
        let json = serde_json::to_string(&Icon::BarChart3).unwrap();
        assert_eq!(json, "\"bar-chart-3\"");
        let icon: Icon = serde_json::from_str("\"map-pin\"").unwrap();
        assert_eq!(icon, Icon::MapPin);
    }
}
