use crate::config::server::{EnvMode, ServerConfig, DEFAULT_HOST, DEFAULT_PORT};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "terrigo-landing")]
#[command(about = "Terrigo S.A.S. landing page server")]
pub struct CliConfig {
    /// Optional TOML file overriding brand, contact, theme or services
    #[arg(long, global = true, env = "TERRIGO_CONTENT")]
    pub content: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Serve the page on GET / (default)
    Serve(ServeArgs),
    /// Write the rendered HTML document to a file or stdout
    Render {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the component tree as JSON
    Tree,
    /// Validate the content and exit
    Check,
}

#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    #[arg(long, env = "TERRIGO_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    #[arg(long, env = "TERRIGO_ENV", value_enum, default_value_t = EnvMode::Dev)]
    pub env: EnvMode,
}

impl From<ServeArgs> for ServerConfig {
    fn from(args: ServeArgs) -> Self {
        ServerConfig {
            host: args.host,
            port: args.port,
            env: args.env,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_flags() {
        let cli = CliConfig::parse_from([
            "terrigo-landing",
            "serve",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--env",
            "prod",
        ]);
        let Some(Command::Serve(args)) = cli.command else {
            panic!("expected serve");
        };
        let server: ServerConfig = args.into();
        assert_eq!(server.port, 9000);
        assert_eq!(server.env, EnvMode::Prod);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = CliConfig::parse_from([
            "terrigo-landing",
            "render",
            "--output",
            "index.html",
            "--content",
            "site.toml",
            "-v",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.content, Some(PathBuf::from("site.toml")));
        assert!(matches!(cli.command, Some(Command::Render { output: Some(_) })));
    }
}
