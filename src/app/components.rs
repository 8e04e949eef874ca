// Small building blocks shared by the section builders.

use crate::core::node::{link, Element};
use crate::core::style::{space, text_size, Style};
use crate::domain::{ColorRole, Contact, Icon, Theme};
use crate::utils::error::Result;

pub const CONTENT_MAX_WIDTH: &str = "1200px";
pub const MUTED_BACKGROUND: &str = "#F8F9FA";
const ACCENT_HOVER: &str = "#00B889";

pub fn icon(icon: Icon, size: u32) -> Element {
    let px = format!("{}px", size);
    Element::new("i")
        .attr("data-lucide", icon.name())
        .attr("aria-hidden", "true")
        .style(
            Style::new()
                .set("display", "inline-block")
                .set("width", px.clone())
                .set("height", px),
        )
}

pub fn colored_icon(icon_name: Icon, size: u32, color: &str) -> Element {
    let el = icon(icon_name, size);
    let style = el.style.clone().set("color", color);
    el.style(style)
}

pub fn stack(direction: &str, gap: u8) -> Style {
    Style::new()
        .set("display", "flex")
        .set("flex-direction", direction)
        .set("gap", space(gap))
}

/// Centered column wrapper that bounds section content width.
pub fn container(padding: &str) -> Element {
    Element::new("div").style(
        Style::new()
            .set("max-width", CONTENT_MAX_WIDTH)
            .set("margin", "0 auto")
            .set("padding", padding),
    )
}

/// Link that opens absolute URLs in a new browsing context.
pub fn outbound_link(href: &str) -> Element {
    let el = link(href);
    if href.starts_with("http://") || href.starts_with("https://") {
        el.attr("target", "_blank").attr("rel", "noopener noreferrer")
    } else {
        el
    }
}

/// WhatsApp call-to-action button. Hero and contact both go through here so
/// they always point at the same conversation.
pub fn whatsapp_cta(
    theme: &Theme,
    contact: &Contact,
    label: &str,
    icon_size: u32,
) -> Result<Element> {
    let accent = theme.color(ColorRole::Accent)?;
    let light = theme.color(ColorRole::Light)?;

    let button = stack("row", 2)
        .set("align-items", "center")
        .set("padding", "1rem 2rem")
        .set("background", accent)
        .set("color", light)
        .set("border-radius", "50px")
        .set("font-size", text_size(4))
        .set("font-weight", "500")
        .set("transition", "all 0.3s ease")
        .hover("background", ACCENT_HOVER)
        .hover("transform", "translateY(-2px)")
        .hover("box-shadow", "0 8px 25px rgba(0,210,158,0.3)");

    Ok(outbound_link(&contact.deep_link())
        .attr("data-cta", "whatsapp")
        .style(button)
        .child(icon(Icon::MessageCircle, icon_size))
        .child(Element::new("span").child(label)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outbound_link_only_targets_absolute_urls() {
        let external = outbound_link("https://wa.me/573207803362");
        assert_eq!(external.get_attr("target"), Some("_blank"));
        let anchor = outbound_link("#contacto");
        assert_eq!(anchor.get_attr("target"), None);
    }

    #[test]
    fn test_cta_points_at_deep_link() {
        let cta = whatsapp_cta(&Theme::default(), &Contact::default(), "Hablemos", 20).unwrap();
        assert_eq!(cta.get_attr("href"), Some("https://wa.me/573207803362"));
        assert_eq!(cta.text_content(), "Hablemos");
    }

    #[test]
    fn test_cta_requires_accent() {
        let mut theme = Theme::default();
        theme.remove_color(ColorRole::Accent);
        assert!(whatsapp_cta(&theme, &Contact::default(), "x", 20).is_err());
    }
}
