use crate::app::document::render_document;
use crate::app::sections;
use crate::core::node::{div, Element, Node};
use crate::core::render::render_fragment;
use crate::core::style::Style;
use crate::domain::{AppTheme, Brand, Contact, ServiceCatalog, Theme};
use crate::utils::error::Result;
use serde::Serialize;

/// Section names in the order the page emits them.
pub const SECTION_ORDER: [&str; 6] = ["navbar", "hero", "services", "about", "contact", "footer"];

/// Everything the page is built from. Built once at startup and only read
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SiteContext {
    pub theme: Theme,
    pub catalog: ServiceCatalog,
    pub brand: Brand,
    pub contact: Contact,
    pub app_theme: AppTheme,
}

pub fn compose_page(ctx: &SiteContext) -> Result<Element> {
    let sections = vec![
        sections::navbar(&ctx.theme, &ctx.brand)?,
        sections::hero(&ctx.theme, &ctx.contact)?,
        sections::services(&ctx.theme, &ctx.catalog)?,
        sections::about(&ctx.theme)?,
        sections::contact(&ctx.theme, &ctx.contact)?,
        sections::footer(&ctx.theme, &ctx.brand, &ctx.contact)?,
    ];

    tracing::debug!(sections = sections.len(), "composed landing page");

    Ok(div()
        .attr("data-page", "landing")
        .style(Style::new().set("font-family", ctx.theme.font_family()))
        .children(sections))
}

/// Composes the page and renders it into a complete HTML document.
pub fn render_site(ctx: &SiteContext) -> Result<String> {
    let page: Node = compose_page(ctx)?.into();
    let fragment = render_fragment(&page);
    Ok(render_document(ctx, &fragment))
}
