use bitflags::bitflags;

bitflags! {
    /// Набор приёмников и модификаторов, объединяется через `|`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct LogFlags: u32 {
        /// Запись в stdout (или в подменённый поток консоли).
        const CONSOLE = 1 << 0;
        /// Запись в файл, если он успешно открыт.
        const FILE = 1 << 1;
        /// Системный журнал: syslog на Unix, Event Log на Windows.
        const SYSLOG = 1 << 2;
        /// Префикс `Mon DD HH:MM:SS` для консоли и файла.
        const TIMESTAMP = 1 << 3;
        /// Приоритет syslog по уровню сообщения вместо фиксированного NOTICE.
        const SYSLOG_LEVELS = 1 << 4;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_are_independent_bits() {
        let all = [
            LogFlags::CONSOLE,
            LogFlags::FILE,
            LogFlags::SYSLOG,
            LogFlags::TIMESTAMP,
            LogFlags::SYSLOG_LEVELS,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert!((*a & *b).is_empty());
            }
        }
    }

    #[test]
    fn combined_flags() {
        let flags = LogFlags::CONSOLE | LogFlags::TIMESTAMP;
        assert!(flags.contains(LogFlags::CONSOLE));
        assert!(flags.contains(LogFlags::TIMESTAMP));
        assert!(!flags.contains(LogFlags::FILE));
        assert!(!flags.contains(LogFlags::CONSOLE | LogFlags::FILE));
        assert_eq!(LogFlags::default(), LogFlags::empty());
    }
}
