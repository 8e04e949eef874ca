use crate::app::components::{colored_icon, container, stack};
use crate::core::node::{div, heading, p, section, span, Element};
use crate::core::style::{below_above_md, space, text_size, Style};
use crate::domain::{ColorRole, Icon, Theme};
use crate::utils::error::Result;

pub const TITLE: &str = "Sobre Nosotros";
pub const MISSION: &str = "Terrigo S.A.S. es una empresa líder en transformación digital para el sector público, \
formando parte de la alianza estratégica con UnityGov y CiviData. Nos especializamos \
en crear soluciones tecnológicas innovadoras que optimizan la gestión territorial.";
pub const VISION_TITLE: &str = "Nuestra Visión";
pub const VISION: &str = "Ser el aliado tecnológico de los territorios, impulsando la innovación \
y la eficiencia en la gestión pública a través de soluciones digitales.";

pub const VALUES: [(Icon, &str); 3] = [
    (Icon::Lightbulb, "Innovación"),
    (Icon::Eye, "Transparencia"),
    (Icon::Zap, "Eficiencia"),
];

fn value_badge(theme: &Theme, icon: Icon, label: &str) -> Result<Element> {
    let accent = theme.color(ColorRole::Accent)?;
    let dark = theme.color(ColorRole::Dark)?;

    Ok(div()
        .attr("data-value", label)
        .style(stack("column", 2).set("align-items", "center"))
        .child(
            div()
                .style(
                    Style::new()
                        .set("padding", "0.5rem")
                        .set("background", theme.tint(ColorRole::Accent, "20")?)
                        .set("border-radius", "var(--radius)")
                        .set("display", "flex"),
                )
                .child(colored_icon(icon, 24, accent)),
        )
        .child(
            span()
                .style(
                    Style::new()
                        .set("font-size", text_size(3))
                        .set("font-weight", "700")
                        .set("color", dark),
                )
                .child(label),
        ))
}

fn illustration(theme: &Theme) -> Result<Element> {
    let primary = theme.color(ColorRole::Primary)?;
    let dark = theme.color(ColorRole::Dark)?;
    let gray = theme.color(ColorRole::Gray)?;

    let frame = stack("column", 3)
        .set("align-items", "center")
        .set("justify-content", "center")
        .set("padding", "3rem")
        .set(
            "background",
            format!(
                "linear-gradient(135deg, {}, {})",
                theme.tint(ColorRole::Primary, "10")?,
                theme.tint(ColorRole::Secondary, "10")?
            ),
        )
        .set("border-radius", "16px")
        .set("border", format!("2px solid {}", theme.tint(ColorRole::Primary, "30")?))
        .set("text-align", "center")
        .set("height", "100%");

    Ok(div()
        .attr("data-about", "illustration")
        .style(Style::new().set("height", "400px"))
        .child(
            div()
                .style(frame)
                .child(colored_icon(Icon::Map, 60, primary))
                .child(
                    span()
                        .style(
                            Style::new()
                                .set("font-size", text_size(5))
                                .set("font-weight", "700")
                                .set("color", dark),
                        )
                        .child("Territorio Digital"),
                )
                .child(
                    span()
                        .style(Style::new().set("font-size", text_size(3)).set("color", gray))
                        .child("Visualización de datos territoriales"),
                ),
        ))
}

pub fn about(theme: &Theme) -> Result<Element> {
    let primary = theme.color(ColorRole::Primary)?;
    let dark = theme.color(ColorRole::Dark)?;
    let gray = theme.color(ColorRole::Gray)?;
    let light = theme.color(ColorRole::Light)?;

    let badges = VALUES
        .iter()
        .map(|(icon, label)| value_badge(theme, *icon, label))
        .collect::<Result<Vec<_>>>()?;

    let copy = div()
        .attr("data-about", "copy")
        .style(stack("column", 4).set("align-items", "flex-start"))
        .child(
            heading(2, TITLE).style(
                Style::new()
                    .set("font-size", text_size(8))
                    .set("color", dark)
                    .set("margin-bottom", "2rem"),
            ),
        )
        .child(
            p(MISSION).style(
                Style::new()
                    .set("font-size", text_size(4))
                    .set("color", gray)
                    .set("line-height", "1.6")
                    .set("margin-bottom", "2rem"),
            ),
        )
        .child(
            div()
                .style(
                    stack("column", 2)
                        .set("align-items", "flex-start")
                        .set("margin-bottom", "2rem"),
                )
                .child(
                    heading(3, VISION_TITLE)
                        .style(Style::new().set("font-size", text_size(5)).set("color", primary)),
                )
                .child(
                    p(VISION).style(
                        Style::new()
                            .set("font-size", text_size(3))
                            .set("color", gray)
                            .set("line-height", "1.5"),
                    ),
                ),
        )
        .child(
            div()
                .attr("data-about", "values")
                .style(stack("row", 4).set("justify-content", "flex-start"))
                .children(badges),
        );

    Ok(section("sobre-nosotros")
        .attr("data-section", "about")
        .style(Style::new().set("background", light))
        .child(
            container("4rem 2rem").child(
                div()
                    .style(
                        Style::new()
                            .set("display", "grid")
                            .responsive(
                                "grid-template-columns",
                                below_above_md("minmax(0, 1fr)", "repeat(2, minmax(0, 1fr))"),
                            )
                            .set("gap", space(6))
                            .set("align-items", "center"),
                    )
                    .child(copy)
                    .child(illustration(theme)?),
            ),
        ))
}
