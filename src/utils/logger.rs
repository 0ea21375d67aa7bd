use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn build_filter(verbose: bool, default_level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("cookify_pantry=debug,info")
        } else {
            let level = default_level.unwrap_or("info");
            EnvFilter::new(format!("cookify_pantry={}", level))
        }
    })
}

pub fn init_cli_logger(verbose: bool, default_level: Option<&str>) {
    tracing_subscriber::registry()
        .with(build_filter(verbose, default_level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(verbose: bool, default_level: Option<&str>) {
    tracing_subscriber::registry()
        .with(build_filter(verbose, default_level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .json(), // 供日誌收集器解析
        )
        .init();
}
