use std::fmt;
use std::str::FromStr;

// ===== Уровни логгирования =====

/// Чем важнее сообщение, тем меньше порядковый номер.
/// Сообщение проходит, если его уровень `<=` текущего порога.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum LogLevel {
    #[default]
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub const ALL: [LogLevel; 4] = [
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    pub(crate) fn from_u8(value: u8) -> LogLevel {
        match value {
            0 => LogLevel::Error,
            1 => LogLevel::Warn,
            2 => LogLevel::Info,
            _ => LogLevel::Debug,
        }
    }

    #[cfg(unix)]
    pub(crate) fn to_syslog_severity(self) -> syslog::Severity {
        use syslog::Severity::*;
        match self {
            LogLevel::Error => LOG_ERR,
            LogLevel::Warn => LOG_WARNING,
            LogLevel::Info => LOG_INFO,
            LogLevel::Debug => LOG_DEBUG,
        }
    }

    #[cfg(target_os = "windows")]
    pub(crate) fn to_event_kind(self) -> winlog_rs::EventKind {
        match self {
            LogLevel::Error => winlog_rs::EventKind::Error,
            LogLevel::Warn => winlog_rs::EventKind::Warning,
            LogLevel::Info | LogLevel::Debug => winlog_rs::EventKind::Information,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log level: {0:?} (expected error, warn, info or debug)")]
pub struct ParseLevelError(pub String);

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" | "err" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            _ => Err(ParseLevelError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_is_most_severe() {
        assert!(LogLevel::Error < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Debug);
        assert_eq!(LogLevel::default(), LogLevel::Error);
    }

    #[test]
    fn ordinal_survives_u8() {
        for level in LogLevel::ALL {
            assert_eq!(LogLevel::from_u8(level as u8), level);
        }
    }

    #[test]
    fn parses_names() {
        assert_eq!("WARNING".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!(" info ".parse::<LogLevel>(), Ok(LogLevel::Info));
        assert_eq!("Debug".parse::<LogLevel>(), Ok(LogLevel::Debug));
        assert_eq!(
            "trace".parse::<LogLevel>(),
            Err(ParseLevelError("trace".to_owned()))
        );
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(LogLevel::Warn.to_string(), "WARN");
    }
}
