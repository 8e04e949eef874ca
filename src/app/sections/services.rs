use crate::app::components::{colored_icon, container, stack, MUTED_BACKGROUND};
use crate::core::node::{div, heading, p, section, Element};
use crate::core::style::{space, text_size, Breakpoint, Responsive, Style};
use crate::domain::{ColorRole, ServiceCatalog, ServiceDescriptor, Theme};
use crate::utils::error::Result;

pub const TITLE: &str = "Nuestros Servicios";
pub const SUBTITLE: &str =
    "Ofrecemos soluciones tecnológicas integrales para la modernización del sector público";

fn columns() -> Responsive<String> {
    Responsive::fixed("repeat(1, minmax(0, 1fr))".to_string())
        .at(Breakpoint::Md, "repeat(2, minmax(0, 1fr))".to_string())
        .at(Breakpoint::Lg, "repeat(3, minmax(0, 1fr))".to_string())
}

pub fn service_card(theme: &Theme, service: &ServiceDescriptor) -> Result<Element> {
    let primary = theme.color(ColorRole::Primary)?;
    let dark = theme.color(ColorRole::Dark)?;
    let gray = theme.color(ColorRole::Gray)?;
    let light = theme.color(ColorRole::Light)?;

    let badge = div()
        .style(
            Style::new()
                .set("padding", "1rem")
                .set(
                    "background",
                    format!(
                        "linear-gradient(135deg, {}, {})",
                        theme.tint(ColorRole::Primary, "15")?,
                        theme.tint(ColorRole::Secondary, "15")?
                    ),
                )
                .set("border-radius", "50%")
                .set("margin-bottom", "1rem")
                .set("display", "flex"),
        )
        .child(colored_icon(service.icon, 40, primary));

    Ok(div()
        .attr("data-card", "service")
        .attr("data-icon", service.icon.name())
        .style(
            stack("column", 3)
                .set("align-items", "center")
                .set("padding", "2rem")
                .set("background", light)
                .set("border-radius", "12px")
                .set("box-shadow", "0 4px 20px rgba(0,0,0,0.1)")
                .set("transition", "all 0.3s ease")
                .set("height", "100%")
                .hover("transform", "translateY(-5px)")
                .hover("box-shadow", "0 8px 30px rgba(0,123,255,0.2)"),
        )
        .child(badge)
        .child(
            heading(3, service.title.as_str()).style(
                Style::new()
                    .set("font-size", text_size(5))
                    .set("color", dark)
                    .set("text-align", "center"),
            ),
        )
        .child(
            p(service.description.as_str()).style(
                Style::new()
                    .set("font-size", text_size(3))
                    .set("color", gray)
                    .set("text-align", "center")
                    .set("line-height", "1.5"),
            ),
        ))
}

pub fn services(theme: &Theme, catalog: &ServiceCatalog) -> Result<Element> {
    let dark = theme.color(ColorRole::Dark)?;
    let gray = theme.color(ColorRole::Gray)?;

    let cards = catalog
        .iter()
        .map(|service| service_card(theme, service))
        .collect::<Result<Vec<_>>>()?;

    let grid = div()
        .attr("data-grid", "services")
        .style(
            Style::new()
                .set("display", "grid")
                .responsive("grid-template-columns", columns())
                .set("gap", space(6))
                .set("width", "100%"),
        )
        .children(cards);

    let content = div()
        .style(stack("column", 6).set("align-items", "center"))
        .child(
            heading(2, TITLE).style(
                Style::new()
                    .responsive(
                        "font-size",
                        Responsive::fixed(text_size(6).to_string())
                            .at(Breakpoint::Md, text_size(8).to_string()),
                    )
                    .set("color", dark)
                    .set("text-align", "center")
                    .set("margin-bottom", "1rem"),
            ),
        )
        .child(
            p(SUBTITLE).style(
                Style::new()
                    .set("font-size", text_size(4))
                    .set("color", gray)
                    .set("text-align", "center")
                    .set("margin-bottom", "3rem"),
            ),
        )
        .child(grid);

    Ok(section("servicios")
        .attr("data-section", "services")
        .style(Style::new().set("background", MUTED_BACKGROUND))
        .child(container("4rem 2rem").child(content)))
}
