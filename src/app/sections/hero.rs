use crate::app::components::{container, stack, whatsapp_cta};
use crate::core::node::{heading, p, section, Element};
use crate::core::style::{text_size, Breakpoint, Responsive, Style};
use crate::domain::{ColorRole, Contact, Theme};
use crate::utils::error::Result;

pub const HEADLINE: &str = "Transformamos Territorios con Tecnología";
pub const SUBHEADLINE: &str = "Soluciones inteligentes para la gestión pública";
pub const CTA_LABEL: &str = "Habla con nosotros por WhatsApp";
pub const BACKGROUND_IMAGE: &str = "/hero-bg.jpg";

pub fn hero(theme: &Theme, contact: &Contact) -> Result<Element> {
    let primary = theme.color(ColorRole::Primary)?;
    let secondary = theme.color(ColorRole::Secondary)?;
    let light = theme.color(ColorRole::Light)?;

    let headline_size = Responsive::fixed(text_size(7).to_string())
        .at(Breakpoint::Sm, text_size(8).to_string())
        .at(Breakpoint::Md, text_size(9).to_string());

    let headline = heading(1, HEADLINE).style(
        Style::new()
            .responsive("font-size", headline_size)
            .set("color", light)
            .set("text-align", "center")
            .set("font-weight", "700")
            .set("line-height", "1.2"),
    );

    let subheadline = p(SUBHEADLINE).style(
        Style::new()
            .responsive(
                "font-size",
                Responsive::fixed(text_size(4).to_string())
                    .at(Breakpoint::Md, text_size(5).to_string()),
            )
            .set("color", light)
            .set("text-align", "center")
            .set("opacity", "0.9"),
    );

    let content = Element::new("div")
        .style(
            stack("column", 6)
                .set("align-items", "center")
                .set("padding", "4rem 2rem"),
        )
        .child(headline)
        .child(subheadline)
        .child(whatsapp_cta(theme, contact, CTA_LABEL, 20)?);

    Ok(section("inicio")
        .attr("data-section", "hero")
        .style(
            Style::new()
                .set(
                    "background",
                    format!("linear-gradient(135deg, {} 0%, {} 100%)", primary, secondary),
                )
                .set("min-height", "100vh")
                .set("display", "flex")
                .set("align-items", "center")
                .set("justify-content", "center")
                .set("position", "relative")
                .set("isolation", "isolate")
                .before("content", "''")
                .before("position", "absolute")
                .before("inset", "0")
                .before("background", format!("url('{}') center/cover", BACKGROUND_IMAGE))
                .before("opacity", "0.1")
                .before("z-index", "-1"),
        )
        .child(container("0").child(content)))
}
