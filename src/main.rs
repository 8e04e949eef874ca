use clap::Parser;
use terrigo_landing::config::{Command, EnvMode};
use terrigo_landing::utils::{logger, validation::Validate};
use terrigo_landing::{
    compose_page, render_site, server, CliConfig, ContentConfig, RenderedPage, ServerConfig,
    SiteContext, SiteError,
};

fn fail(e: &SiteError) -> ! {
    tracing::error!("❌ Startup failed: {} (Category: {:?})", e, e.category());
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn load_site(config: &CliConfig) -> Result<SiteContext, SiteError> {
    let ctx = match &config.content {
        Some(path) => {
            tracing::info!("📁 Loading content from: {}", path.display());
            ContentConfig::from_file(path)?.into_site()?
        }
        None => SiteContext::default(),
    };
    ctx.validate()?;
    Ok(ctx)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 先決定伺服器設定，日誌格式依執行模式而定
    let server_config = match &config.command {
        Some(Command::Serve(args)) => Ok(ServerConfig::from(args.clone())),
        None => ServerConfig::from_env(),
        Some(_) => Ok(ServerConfig::default()),
    };
    let log_mode = server_config
        .as_ref()
        .map(|c| c.env)
        .unwrap_or(EnvMode::Dev);
    logger::init_logger(config.verbose, log_mode);
    let server_config = server_config.unwrap_or_else(|e| fail(&e));

    tracing::info!("🚀 Starting terrigo-landing");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 組合頁面前先驗證內容，錯誤時立即中止
    let site = load_site(&config).unwrap_or_else(|e| fail(&e));

    match config.command.clone() {
        Some(Command::Check) => {
            compose_page(&site).unwrap_or_else(|e| fail(&e));
            println!("✅ Content is valid");
        }
        Some(Command::Tree) => {
            let page = compose_page(&site).unwrap_or_else(|e| fail(&e));
            println!("{}", serde_json::to_string_pretty(&page)?);
        }
        Some(Command::Render { output }) => {
            let html = render_site(&site).unwrap_or_else(|e| fail(&e));
            match output {
                Some(path) => {
                    std::fs::write(&path, html)?;
                    tracing::info!("✅ Page written to: {}", path.display());
                }
                None => print!("{}", html),
            }
        }
        Some(Command::Serve(_)) | None => {
            server_config.validate().unwrap_or_else(|e| fail(&e));
            let html = render_site(&site).unwrap_or_else(|e| fail(&e));
            tracing::info!(bytes = html.len(), "page rendered");
            server::serve(&server_config, RenderedPage::new(html)).await?;
        }
    }

    Ok(())
}
