use crate::config::server::EnvMode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_filter(verbose: bool) -> EnvFilter {
    let default = if verbose {
        "terrigo_landing=debug,info"
    } else {
        "terrigo_landing=info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// 依執行模式選擇日誌格式
pub fn init_logger(verbose: bool, mode: EnvMode) {
    match mode {
        EnvMode::Dev => init_dev_logger(verbose),
        EnvMode::Prod => init_json_logger(verbose),
    }
}

pub fn init_dev_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(), // production log collectors expect one JSON object per line
        )
        .init();
}
