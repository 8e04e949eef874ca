#[cfg(feature = "cli")]
pub mod cli;
pub mod content;
pub mod server;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command, ServeArgs};
pub use content::ContentConfig;
pub use server::{EnvMode, ServerConfig};
