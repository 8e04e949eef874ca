use crate::app::components::{colored_icon, container, outbound_link, stack, MUTED_BACKGROUND};
use crate::core::node::{div, p, Element};
use crate::core::style::{below_above_md, text_size, Style};
use crate::domain::{Brand, ColorRole, Contact, Icon, Theme};
use crate::utils::error::Result;

pub fn copyright_line(brand: &Brand) -> String {
    format!("© {} {} - {}", brand.copyright_year, brand.name, brand.tagline)
}

fn social_link(theme: &Theme, icon: Icon, label: &str, href: &str) -> Result<Element> {
    let gray = theme.color(ColorRole::Gray)?;
    let primary = theme.color(ColorRole::Primary)?;

    Ok(outbound_link(href)
        .attr("aria-label", label)
        .attr("data-social", icon.name())
        .style(Style::new().set("color", gray).hover("color", primary))
        .child(colored_icon(icon, 20, "currentColor")))
}

pub fn footer(theme: &Theme, brand: &Brand, contact: &Contact) -> Result<Element> {
    let gray = theme.color(ColorRole::Gray)?;

    let socials = div()
        .style(stack("row", 3))
        .child(social_link(theme, Icon::Linkedin, "LinkedIn", &contact.linkedin_url)?)
        .child(social_link(theme, Icon::Github, "GitHub", &contact.github_url)?);

    let row = div()
        .style(
            stack("column", 4)
                .responsive("flex-direction", below_above_md("column", "row"))
                .set("justify-content", "space-between")
                .set("align-items", "center")
                .set("width", "100%")
                .set("flex-wrap", "wrap"),
        )
        .child(
            p(copyright_line(brand))
                .style(Style::new().set("font-size", text_size(3)).set("color", gray)),
        )
        .child(socials);

    Ok(Element::new("footer")
        .attr("data-section", "footer")
        .style(
            Style::new()
                .set("background", MUTED_BACKGROUND)
                .set("border-top", format!("1px solid {}", theme.tint(ColorRole::Gray, "30")?)),
        )
        .child(container("2rem").child(row)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::style::Breakpoint;

    #[test]
    fn test_copyright_line_format() {
        assert_eq!(
            copyright_line(&Brand::default()),
            "© 2024 Terrigo S.A.S. - Innovación y Desarrollo para el Territorio"
        );
    }

    #[test]
    fn test_two_social_links() {
        let footer = footer(&Theme::default(), &Brand::default(), &Contact::default()).unwrap();
        let socials: Vec<&str> = footer
            .find_all(|el| el.get_attr("data-social").is_some())
            .iter()
            .filter_map(|el| el.get_attr("data-social"))
            .collect();
        assert_eq!(socials, vec!["linkedin", "github"]);
    }

    #[test]
    fn test_layout_stacks_below_md() {
        let footer = footer(&Theme::default(), &Brand::default(), &Contact::default()).unwrap();
        let rows = footer.find_all(|el| el.style.get("flex-direction").is_some_and(|v| !v.is_fixed()));
        assert_eq!(rows.len(), 1);
        let direction = rows[0].style.get("flex-direction").unwrap();
        assert_eq!(direction.value_at(Breakpoint::Initial).unwrap(), "column");
        assert_eq!(direction.value_at(Breakpoint::Md).unwrap(), "row");
    }
}
