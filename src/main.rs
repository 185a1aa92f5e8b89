use tracing_subscriber::EnvFilter;

use fenix_beta_ac_version::action;
use fenix_beta_ac_version::config::{ActionConfig, LogFormat};
use fenix_beta_ac_version::output;

fn init_tracing(config: &ActionConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_log_directive()));

    // stdout carries workflow commands, so logs go to stderr
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    match config.log_format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn main() -> anyhow::Result<()> {
    let config = match ActionConfig::try_load_from(std::env::args_os()) {
        Ok(config) => config,
        Err(e) => {
            if e.use_stderr() {
                let rendered = e.to_string();
                let message = rendered.lines().next().unwrap_or_default();
                println!("{}", output::error_annotation(message));
            }
            e.exit()
        }
    };
    init_tracing(&config);

    let result = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(action::run(&config));

    if let Err(e) = &result {
        println!("{}", output::error_annotation(&format!("{:#}", e)));
    }

    result.map(|_| ())
}
