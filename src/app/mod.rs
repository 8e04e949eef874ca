// Landing page assembly: section builders, page composer and HTML document.

pub mod components;
pub mod document;
pub mod page;
pub mod sections;

pub use page::{compose_page, render_site, SiteContext, SECTION_ORDER};

/// The only route the site serves.
pub const ROOT_ROUTE: &str = "/";
