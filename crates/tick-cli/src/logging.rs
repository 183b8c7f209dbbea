use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "TICK_LOG";

/// Installs a stderr subscriber when `TICK_LOG` is set, e.g. `TICK_LOG=tick=debug`.
pub fn init() {
    let Ok(directives) = std::env::var(LOG_ENV) else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directives))
        .with_writer(std::io::stderr)
        .init();
}
