// example_simple — консоль и файл, порог из LOG_LEVEL

use liblog::{debug, error, info, warn, LogFlags, LogLevel, Logger};
use std::path::Path;

const APP_NAME: &str = "example_simple";

fn main() {
    let version = option_env!("CARGO_PKG_VERSION").unwrap_or("dev");

    // 1. Порог: LOG_LEVEL=debug|info|warn|error, по умолчанию warn
    let level = match std::env::var("LOG_LEVEL") {
        Ok(value) => match value.parse::<LogLevel>() {
            Ok(level) => level,
            Err(e) => {
                eprintln!("[WARN] {}, using WARN", e);
                LogLevel::Warn
            }
        },
        Err(_) => LogLevel::Warn,
    };

    // 2. Инициализация: консоль + файл с метками времени
    let logger = Logger::new();
    logger.open(
        APP_NAME,
        Some(Path::new("/tmp/app.log")),
        LogFlags::CONSOLE | LogFlags::FILE | LogFlags::TIMESTAMP,
    );
    logger.set_level(level);

    info!(logger, "Starting {} v{}", APP_NAME, version);

    // 3. Основной код
    warn!(logger, "disk at {}%", 91);
    debug!(logger, "trace");
    error!(logger, "request {} failed after {:.1}s", "GET /status", 2.5);

    // 4. Финальная часть
    info!(logger, "{} finished", APP_NAME);
    logger.close();
}
