//! geoshapes - prints the measurements of a circle, a square, a sphere and a cube

use std::process::ExitCode;

use geoshapes::AppConfig;

fn main() -> ExitCode {
    let loaded = AppConfig::load();

    // RUST_LOG takes precedence over the configured level
    let default_level = match &loaded {
        Ok(config) => config.debug.log_level.clone(),
        Err(_) => AppConfig::default().debug.log_level,
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    match geoshapes::run(&config) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
