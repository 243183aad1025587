// example_threads — многопоточный пример: глобальный логгер и Worker с Arc<Logger>

use liblog::{debug, gerror, ginfo, warn, LogFlags, LogLevel, Logger};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

const APP_NAME: &str = "example_threads";

// Структура, моделирующая "класс" потока
pub struct Worker {
    id: u32,
    log: Arc<Logger>,
}

impl Worker {
    pub fn new(id: u32, log: Arc<Logger>) -> Self {
        Self { id, log }
    }

    pub fn run(&self) {
        debug!(self.log, "Worker {} started execution", self.id);

        // Имитация работы
        thread::sleep(Duration::from_millis(50 + (self.id as u64) * 100));

        if self.id % 2 == 1 {
            warn!(self.log, "Worker {} detected odd workload", self.id);
        }

        debug!(self.log, "Worker {} finished", self.id);
    }
}

fn main() {
    // 1. Глобальный логгер: консоль + системный журнал
    liblog::open(APP_NAME, None, LogFlags::CONSOLE | LogFlags::SYSLOG);
    liblog::set_level(LogLevel::Info);
    ginfo!("Starting {}", APP_NAME);

    // 2. Отдельный логгер для воркеров, общий через Arc
    let workers_log = Arc::new(Logger::new());
    workers_log.open(APP_NAME, None, LogFlags::CONSOLE | LogFlags::TIMESTAMP);
    workers_log.set_level(LogLevel::Debug);

    // 3. Основной код: создание потоков с объектами Worker
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let log = Arc::clone(&workers_log);
            thread::spawn(move || Worker::new(i, log).run())
        })
        .collect();

    for h in handles {
        if h.join().is_err() {
            gerror!("worker thread panicked");
        }
    }

    // 4. Финальная часть
    ginfo!("{} finished", APP_NAME);
    workers_log.close();
    liblog::close();
}
