//! Pong - native entry point

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use env_logger::Env;
use pong::settings::{SETTINGS_FILE, Settings};

fn init_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {:<5} {}:{}] {}",
                buf.timestamp_seconds(),
                record.level(),
                record.file().unwrap_or("?"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}

fn main() -> ExitCode {
    init_logging();
    log::info!("Pong starting...");

    let result = Settings::load(Path::new(SETTINGS_FILE))
        .map_err(pong::InitError::from)
        .and_then(pong::app::run);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
