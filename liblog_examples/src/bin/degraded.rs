// example_degraded — файл не открылся, логгер продолжает писать в консоль

use liblog::{error, warn, LogFlags, LogLevel, Logger};
use std::path::Path;

const APP_NAME: &str = "example_degraded";

fn main() {
    let logger = Logger::new();

    // Недоступная директория: open не возвращает ошибку
    let log_path = Path::new("/root/forbidden/degraded.log");
    logger.open(APP_NAME, Some(log_path), LogFlags::CONSOLE | LogFlags::FILE);
    logger.set_level(LogLevel::Warn);

    if !logger.is_file_open() {
        warn!(
            logger,
            "file sink {} unavailable, {} sink(s) active",
            log_path.display(),
            logger.active_sinks()
        );
    }

    error!(logger, "this line reaches the console only");
    logger.close();
}
