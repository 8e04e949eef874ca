use crate::app::components::{colored_icon, stack};
use crate::core::node::{img, link, span, Element};
use crate::core::style::{below_above_md, text_size, Style};
use crate::domain::{Brand, ColorRole, Icon, Theme};
use crate::utils::error::Result;

/// In-page anchors, in menu order.
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("Inicio", "#inicio"),
    ("Servicios", "#servicios"),
    ("Sobre Nosotros", "#sobre-nosotros"),
    ("Contacto", "#contacto"),
];

/// Sticky top bar: logo block on the left, anchor links on wide viewports and
/// a menu glyph on narrow ones.
pub fn navbar(theme: &Theme, brand: &Brand) -> Result<Element> {
    let dark = theme.color(ColorRole::Dark)?;
    let gray = theme.color(ColorRole::Gray)?;
    let primary = theme.color(ColorRole::Primary)?;
    let light = theme.color(ColorRole::Light)?;

    let logo = Element::new("div")
        .style(stack("row", 4).set("align-items", "center"))
        .child(
            img(&brand.logo_src, &brand.logo_alt)
                .style(Style::new().set("width", "50px").set("height", "50px")),
        )
        .child(
            Element::new("div")
                .style(stack("column", 1).set("align-items", "flex-start"))
                .child(
                    span()
                        .style(
                            Style::new()
                                .set("font-size", text_size(6))
                                .set("font-weight", "700")
                                .set("color", dark),
                        )
                        .child(brand.name.as_str()),
                )
                .child(
                    span()
                        .style(
                            Style::new()
                                .set("font-size", text_size(2))
                                .set("font-style", "italic")
                                .set("color", gray),
                        )
                        .child(brand.tagline.as_str()),
                ),
        );

    let links = NAV_LINKS.iter().map(|(label, href)| {
        link(href)
            .style(
                Style::new()
                    .set("color", dark)
                    .set("transition", "color 0.2s ease")
                    .hover("color", primary),
            )
            .child(*label)
    });

    let link_list = Element::new("div")
        .attr("data-nav", "links")
        .style(stack("row", 6).responsive("display", below_above_md("none", "flex")))
        .children(links);

    let menu = Element::new("div")
        .attr("data-nav", "menu")
        .style(Style::new().responsive("display", below_above_md("flex", "none")))
        .child(colored_icon(Icon::Menu, 24, dark));

    Ok(Element::new("header")
        .attr("data-section", "navbar")
        .style(
            Style::new()
                .set("background", light)
                .set("padding", "1rem 2rem")
                .set("box-shadow", "0 2px 4px rgba(0,0,0,0.1)")
                .set("position", "sticky")
                .set("top", "0")
                .set("z-index", "1000"),
        )
        .child(
            Element::new("nav")
                .style(
                    Style::new()
                        .set("display", "flex")
                        .set("justify-content", "space-between")
                        .set("align-items", "center")
                        .set("width", "100%"),
                )
                .child(logo)
                .child(link_list)
                .child(menu),
        ))
}
