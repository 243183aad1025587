// example_tokio — асинхронный пример с tokio и shared Logger
// Логгер синхронный: вызов не содержит точек ожидания

use liblog::{debug, error, info, warn, LogFlags, LogLevel, Logger};
use std::sync::Arc;
use tokio::task;
use tokio::time::{sleep, Duration};

const APP_NAME: &str = "example_tokio";

// Асинхронный "воркер"
pub struct Worker {
    id: u32,
    log: Arc<Logger>,
}

impl Worker {
    pub fn new(id: u32, log: Arc<Logger>) -> Self {
        Self { id, log }
    }

    pub async fn run(&self) {
        debug!(self.log, "Worker {} started (async)", self.id);

        sleep(Duration::from_millis(50 + (self.id as u64) * 100)).await;

        if self.id % 3 == 0 {
            warn!(self.log, "Worker {} has high priority task", self.id);
        }

        if self.id == 2 {
            error!(self.log, "Worker {} failed to process data", self.id);
        }

        debug!(self.log, "Worker {} completed", self.id);
    }
}

#[tokio::main]
async fn main() {
    let logger = Arc::new(Logger::new());
    logger.open(
        APP_NAME,
        Some(std::path::Path::new("/tmp/tokio.log")),
        LogFlags::CONSOLE | LogFlags::FILE | LogFlags::TIMESTAMP,
    );
    logger.set_level(LogLevel::Debug);

    info!(logger, "Tokio runtime initialized, spawning async tasks...");

    let handles: Vec<_> = (0..5)
        .map(|i| {
            let log = Arc::clone(&logger);
            task::spawn(async move { Worker::new(i, log).run().await })
        })
        .collect();

    // Ждём завершения всех задач
    for h in handles {
        let _ = h.await;
    }

    info!(logger, "All async tasks completed");
    logger.close();
}
