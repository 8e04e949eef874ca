pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::{compose_page, render_site, SiteContext};
pub use config::{ContentConfig, ServerConfig};
pub use server::{router, RenderedPage};
pub use utils::error::{Result, SiteError};
