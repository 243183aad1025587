//! # liblog
//!
//! Уровневый логгер: одно сообщение проходит фильтр по уровню и
//! рассылается в консоль, файл и системный журнал.
//!
//! ```no_run
//! use liblog::{LogFlags, LogLevel};
//! use std::path::Path;
//!
//! liblog::open("svc", Some(Path::new("/tmp/app.log")), LogFlags::CONSOLE | LogFlags::FILE);
//! liblog::set_level(LogLevel::Warn);
//! liblog::gwarn!("disk at {}%", 91);
//! liblog::gdebug!("trace"); // ниже порога — никуда не попадает
//! liblog::close();
//! ```

mod flags;
mod level;
mod logger;
mod system_log;
mod timestamp;

pub use flags::LogFlags;
pub use level::{LogLevel, ParseLevelError};
pub use logger::Logger;
pub use timestamp::TIMESTAMP_FORMAT;

use once_cell::sync::Lazy;
use std::path::Path;

// ===== Глобальный логгер =====

static GLOBAL_LOGGER: Lazy<Logger> = Lazy::new(Logger::new);

/// Логгер процесса. До `open` приёмников нет.
pub fn global() -> &'static Logger {
    &GLOBAL_LOGGER
}

pub fn open(name: &str, file: Option<&Path>, flags: LogFlags) {
    global().open(name, file, flags);
}

pub fn reopen(name: &str, file: Option<&Path>, flags: LogFlags) {
    global().reopen(name, file, flags);
}

pub fn close() {
    global().close();
}

pub fn set_level(level: LogLevel) {
    global().set_level(level);
}

// ===== Макросы =====

#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)*) => {{
        $logger.log($level, ::std::format_args!($($arg)*));
    }};
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)*) => {{
        $logger.debug(::std::format_args!($($arg)*));
    }};
}
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)*) => {{
        $logger.info(::std::format_args!($($arg)*));
    }};
}
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)*) => {{
        $logger.warn(::std::format_args!($($arg)*));
    }};
}
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)*) => {{
        $logger.error(::std::format_args!($($arg)*));
    }};
}

// ===== Глобальные макросы =====

#[macro_export]
macro_rules! glog {
    ($level:expr, $($arg:tt)*) => {{
        $crate::global().log($level, ::std::format_args!($($arg)*));
    }};
}
#[macro_export]
macro_rules! gdebug {
    ($($arg:tt)*) => {{
        $crate::global().debug(::std::format_args!($($arg)*));
    }};
}
#[macro_export]
macro_rules! ginfo {
    ($($arg:tt)*) => {{
        $crate::global().info(::std::format_args!($($arg)*));
    }};
}
#[macro_export]
macro_rules! gwarn {
    ($($arg:tt)*) => {{
        $crate::global().warn(::std::format_args!($($arg)*));
    }};
}
#[macro_export]
macro_rules! gerror {
    ($($arg:tt)*) => {{
        $crate::global().error(::std::format_args!($($arg)*));
    }};
}
