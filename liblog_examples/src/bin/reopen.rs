//! example_reopen — внешняя ротация: файл переименовывается, логгер переоткрывается

use liblog::{info, LogFlags, LogLevel, Logger};
use std::fs;
use std::path::Path;

const APP_NAME: &str = "example_reopen";
const ROUNDS: usize = 3;
const LINES_PER_ROUND: usize = 5;

fn main() {
    if let Err(e) = fs::create_dir_all("logs") {
        eprintln!("[FATAL] Cannot create logs/: {}", e);
        std::process::exit(1);
    }

    let path = Path::new("logs/reopen.log");
    let flags = LogFlags::FILE | LogFlags::TIMESTAMP;

    let logger = Logger::new();
    logger.open(APP_NAME, Some(path), flags);
    logger.set_level(LogLevel::Info);

    for round in 0..ROUNDS {
        for i in 0..LINES_PER_ROUND {
            info!(logger, "round {} message {}", round, i);
        }

        // Текущий файл → .N, затем логгер открывает новый под старым именем
        let rotated = format!("logs/reopen.log.{}", round + 1);
        if let Err(e) = fs::rename(path, &rotated) {
            eprintln!("[WARN] Failed to rotate log: {}", e);
        }
        logger.reopen(APP_NAME, Some(path), flags);
    }

    info!(logger, "done, check 'logs/' for rotated files");
    logger.close();
}
