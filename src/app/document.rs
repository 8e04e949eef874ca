use crate::app::page::SiteContext;
use crate::app::sections::hero;
use crate::core::render::{escape_attr, escape_html, Fragment};
use crate::domain::Appearance;
use std::fmt::Write;

/// Pinned lucide build; icons are `<i data-lucide="...">` placeholders until
/// `createIcons` swaps them for SVG.
pub const ICON_SCRIPT: &str = "https://unpkg.com/lucide@0.468.0/dist/umd/lucide.min.js";

const RESET_CSS: &str = "*,*::before,*::after{box-sizing:border-box;}\
html{scroll-behavior:smooth;}\
body{margin:0;}\
h1,h2,h3,h4,p{margin:0;}\
a{text-decoration:none;color:inherit;}";

fn root_css(ctx: &SiteContext) -> String {
    let app = &ctx.app_theme;
    let mut css = format!(":root{{--radius:{};}}", app.radius.css_value());
    if app.has_background {
        let (background, foreground) = match app.appearance {
            Appearance::Light => ("#FFFFFF", "#1C2024"),
            Appearance::Dark => ("#111113", "#EDEEF0"),
        };
        let _ = write!(css, "body{{background:{};color:{};}}", background, foreground);
    }
    css
}

/// Wraps a rendered page fragment in the full HTML document.
pub fn render_document(ctx: &SiteContext, fragment: &Fragment) -> String {
    let app = &ctx.app_theme;
    let appearance = match app.appearance {
        Appearance::Light => "light",
        Appearance::Dark => "dark",
    };
    let title = format!("{} | {}", ctx.brand.name, ctx.brand.tagline);

    let mut doc = String::with_capacity(fragment.html.len() + fragment.css.len() + 1024);
    doc.push_str("<!DOCTYPE html>\n");
    let _ = write!(
        doc,
        "<html lang=\"es\" class=\"{}\" data-accent-color=\"{}\" data-radius=\"{}\" data-has-background=\"{}\">",
        appearance,
        app.accent.as_str(),
        app.radius.as_str(),
        app.has_background
    );
    doc.push_str("<head><meta charset=\"utf-8\">");
    doc.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
    let _ = write!(doc, "<title>{}</title>", escape_html(&title));
    let _ = write!(
        doc,
        "<meta name=\"description\" content=\"{}\">",
        escape_attr(hero::SUBHEADLINE)
    );
    let _ = write!(
        doc,
        "<style>{}{}{}</style>",
        RESET_CSS,
        root_css(ctx),
        fragment.css
    );
    let _ = write!(doc, "<script src=\"{}\"></script>", ICON_SCRIPT);
    doc.push_str("</head><body>");
    doc.push_str(&fragment.html);
    doc.push_str("<script>lucide.createIcons();</script></body></html>\n");
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Radius;

    fn fragment() -> Fragment {
        Fragment {
            html: "<div class=\"t0\"></div>".to_string(),
            css: ".t0{color:red;}".to_string(),
        }
    }

    #[test]
    fn test_document_applies_app_theme() {
        let doc = render_document(&SiteContext::default(), &fragment());
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains(
            "<html lang=\"es\" class=\"light\" data-accent-color=\"blue\" data-radius=\"medium\" data-has-background=\"true\">"
        ));
        assert!(doc.contains("body{background:#FFFFFF;"));
        assert!(doc.contains(".t0{color:red;}"));
    }

    #[test]
    fn test_document_title_uses_brand() {
        let doc = render_document(&SiteContext::default(), &fragment());
        assert!(doc.contains(
            "<title>Terrigo S.A.S. | Innovación y Desarrollo para el Territorio</title>"
        ));
    }

    #[test]
    fn test_root_exposes_theme_radius() {
        let mut ctx = SiteContext::default();
        assert!(render_document(&ctx, &fragment()).contains(":root{--radius:8px;}"));
        ctx.app_theme.radius = Radius::Full;
        assert!(render_document(&ctx, &fragment()).contains(":root{--radius:9999px;}"));
    }

    #[test]
    fn test_no_body_background_when_disabled() {
        let mut ctx = SiteContext::default();
        ctx.app_theme.has_background = false;
        let doc = render_document(&ctx, &fragment());
        assert!(!doc.contains("body{background"));
    }
}
