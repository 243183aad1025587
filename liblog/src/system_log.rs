//! Приёмник системного журнала (платформозависимо).
//!
//! Сообщение уходит без метки времени: её добавляет сам журнал.

use crate::level::LogLevel;
#[cfg(unix)]
use std::path::Path;

#[cfg(unix)]
type Backend = syslog::Logger<syslog::LoggerBackend, syslog::Formatter3164>;

#[cfg(target_os = "windows")]
type Backend = winlog_rs::EventSource;

pub(crate) struct SystemLog {
    #[cfg(any(unix, target_os = "windows"))]
    backend: Backend,
}

impl SystemLog {
    /// Регистрация под именем `name`. `None`, если журнал недоступен.
    #[cfg(unix)]
    pub(crate) fn open(name: &str) -> Option<Self> {
        syslog::unix(formatter(name))
            .ok()
            .map(|backend| SystemLog { backend })
    }

    /// То же, но через явно заданный сокет.
    #[cfg(unix)]
    pub(crate) fn open_at(name: &str, socket: &Path) -> Option<Self> {
        syslog::unix_custom(formatter(name), socket)
            .ok()
            .map(|backend| SystemLog { backend })
    }

    #[cfg(target_os = "windows")]
    pub(crate) fn open(name: &str) -> Option<Self> {
        winlog_rs::EventSource::register(name).map(|backend| SystemLog { backend })
    }

    #[cfg(not(any(unix, target_os = "windows")))]
    pub(crate) fn open(_name: &str) -> Option<Self> {
        None
    }

    /// `level = None` — фиксированный приоритет NOTICE.
    pub(crate) fn submit(&mut self, level: Option<LogLevel>, message: &str) {
        self.submit_impl(level, message);
    }

    #[cfg(unix)]
    fn submit_impl(&mut self, level: Option<LogLevel>, message: &str) {
        use syslog::Severity::*;
        let _ = match level.map(LogLevel::to_syslog_severity) {
            Some(LOG_ERR) => self.backend.err(message),
            Some(LOG_WARNING) => self.backend.warning(message),
            Some(LOG_INFO) => self.backend.info(message),
            Some(LOG_DEBUG) => self.backend.debug(message),
            _ => self.backend.notice(message),
        };
    }

    #[cfg(target_os = "windows")]
    fn submit_impl(&mut self, level: Option<LogLevel>, message: &str) {
        let kind = level
            .map(LogLevel::to_event_kind)
            .unwrap_or(winlog_rs::EventKind::Information);
        let _ = self.backend.report(kind, message);
    }

    #[cfg(not(any(unix, target_os = "windows")))]
    fn submit_impl(&mut self, _level: Option<LogLevel>, _message: &str) {}
}

#[cfg(unix)]
fn formatter(name: &str) -> syslog::Formatter3164 {
    syslog::Formatter3164 {
        facility: syslog::Facility::LOG_DAEMON,
        hostname: None,
        process: name.to_owned(),
        pid: std::process::id(),
    }
}
