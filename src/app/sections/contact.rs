use crate::app::components::{colored_icon, container, stack, whatsapp_cta};
use crate::core::node::{div, heading, p, section, span, Element};
use crate::core::style::{below_above_md, space, text_size, Style};
use crate::domain::{ColorRole, Contact, Icon, Theme};
use crate::utils::error::Result;

pub const TITLE: &str = "Contacto";
pub const SUBTITLE: &str =
    "¿Listo para transformar tu territorio? Contáctanos y descubre cómo podemos ayudarte";
pub const CTA_LABEL: &str = "Iniciar Conversación";

fn channel(theme: &Theme, icon: Icon, label: &str, value: &str) -> Result<Element> {
    let accent = theme.color(ColorRole::Accent)?;
    let light = theme.color(ColorRole::Light)?;

    Ok(div()
        .attr("data-channel", icon.name())
        .style(stack("column", 2).set("align-items", "center"))
        .child(colored_icon(icon, 30, accent))
        .child(
            span()
                .style(
                    Style::new()
                        .set("font-size", text_size(4))
                        .set("font-weight", "700")
                        .set("color", light),
                )
                .child(label),
        )
        .child(
            span()
                .style(
                    Style::new()
                        .set("font-size", text_size(3))
                        .set("color", light)
                        .set("opacity", "0.8"),
                )
                .child(value),
        ))
}

pub fn contact(theme: &Theme, contact: &Contact) -> Result<Element> {
    let dark = theme.color(ColorRole::Dark)?;
    let primary = theme.color(ColorRole::Primary)?;
    let light = theme.color(ColorRole::Light)?;

    let channels = vec![
        channel(theme, Icon::Mail, "Email", &contact.email)?,
        channel(theme, Icon::MessageCircle, "WhatsApp", &contact.whatsapp_display)?,
        channel(theme, Icon::MapPin, "Ubicación", &contact.location)?,
    ];

    let content = div()
        .style(stack("column", 6).set("align-items", "center"))
        .child(
            heading(2, TITLE).style(
                Style::new()
                    .set("font-size", text_size(8))
                    .set("color", light)
                    .set("text-align", "center")
                    .set("margin-bottom", "2rem"),
            ),
        )
        .child(
            p(SUBTITLE).style(
                Style::new()
                    .set("font-size", text_size(4))
                    .set("color", light)
                    .set("text-align", "center")
                    .set("opacity", "0.9")
                    .set("margin-bottom", "3rem"),
            ),
        )
        .child(
            div()
                .attr("data-grid", "contact")
                .style(
                    Style::new()
                        .set("display", "grid")
                        .responsive(
                            "grid-template-columns",
                            below_above_md("minmax(0, 1fr)", "repeat(3, minmax(0, 1fr))"),
                        )
                        .set("gap", space(6))
                        .set("width", "100%")
                        .set("margin-bottom", "3rem"),
                )
                .children(channels),
        )
        .child(whatsapp_cta(theme, contact, CTA_LABEL, 24)?);

    Ok(section("contacto")
        .attr("data-section", "contact")
        .style(Style::new().set(
            "background",
            format!("linear-gradient(135deg, {} 0%, {} 100%)", dark, primary),
        ))
        .child(container("4rem 2rem").child(content)))
}
