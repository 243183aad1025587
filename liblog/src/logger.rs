use crate::flags::LogFlags;
use crate::level::LogLevel;
use crate::system_log::SystemLog;
use crate::timestamp;
use std::fmt::{self, Write as _};
use std::fs::{File, OpenOptions};
use std::io::{self, LineWriter, Write};
use std::path::Path;
#[cfg(unix)]
use std::path::PathBuf;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

// ===== Состояние приёмников =====

struct State {
    flags: LogFlags,
    console: Box<dyn Write + Send>,
    // Some только при FILE и успешном открытии
    file: Option<LineWriter<File>>,
    system_log: Option<SystemLog>,
    // None — сокет syslog по умолчанию
    #[cfg(unix)]
    syslog_socket: Option<PathBuf>,
}

impl State {
    fn acquire(&mut self, name: &str, path: Option<&Path>, flags: LogFlags) {
        self.flags = flags;

        if flags.contains(LogFlags::SYSLOG) {
            self.system_log = self.open_system_log(name);
        }

        if flags.contains(LogFlags::FILE) {
            self.file = path
                .filter(|p| !p.as_os_str().is_empty())
                .and_then(|p| open_append(p).ok());
        }
    }

    #[cfg(unix)]
    fn open_system_log(&self, name: &str) -> Option<SystemLog> {
        match self.syslog_socket {
            Some(ref socket) => SystemLog::open_at(name, socket),
            None => SystemLog::open(name),
        }
    }

    #[cfg(not(unix))]
    fn open_system_log(&self, name: &str) -> Option<SystemLog> {
        SystemLog::open(name)
    }

    // Флаги не трогаем: после close консоль продолжает работать
    fn release(&mut self) {
        self.system_log = None;
        if let Some(mut file) = self.file.take() {
            let _ = file.flush();
        }
    }

    fn active_sinks(&self) -> usize {
        let flags = self.flags;
        usize::from(flags.contains(LogFlags::CONSOLE))
            + usize::from(flags.contains(LogFlags::FILE) && self.file.is_some())
            + usize::from(flags.contains(LogFlags::SYSLOG))
    }

    /// `line` — готовая строка `[stamp ]message\n`, `message` — только текст.
    fn dispatch(&mut self, level: LogLevel, line: &str, message: &str) {
        let flags = self.flags;

        if flags.contains(LogFlags::CONSOLE) {
            let _ = self.console.write_all(line.as_bytes());
        }

        if flags.contains(LogFlags::FILE) {
            if let Some(ref mut file) = self.file {
                let _ = file.write_all(line.as_bytes());
            }
        }

        if flags.contains(LogFlags::SYSLOG) {
            if let Some(ref mut system_log) = self.system_log {
                let priority = flags.contains(LogFlags::SYSLOG_LEVELS).then_some(level);
                system_log.submit(priority, message);
            }
        }
    }
}

fn open_append(path: &Path) -> io::Result<LineWriter<File>> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(LineWriter::new(file))
}

/// Рендер `[stamp ]message\n` в одну строку. Возвращает строку и начало текста.
fn render_line(stamp: Option<String>, args: fmt::Arguments<'_>) -> Option<(String, usize)> {
    let mut line = stamp.unwrap_or_default();
    if !line.is_empty() {
        line.push(' ');
    }
    let start = line.len();
    line.write_fmt(args).ok()?;
    line.push('\n');
    Some((line, start))
}

// ===== Основной логгер =====

/// Логгер с порогом уровня и набором приёмников.
///
/// Все операции молчаливые: ошибки открытия файла, системного журнала
/// или записи поглощаются, соответствующий приёмник просто пропускается.
///
/// Сообщение рендерится один раз, до захвата блокировки, поэтому `Display`
/// аргументов может сам писать в этот же логгер. Если `Display` вернул
/// ошибку, вызов не пишет ничего ни в один приёмник, включая системный журнал.
pub struct Logger {
    level: AtomicU8,
    state: Mutex<State>,
}

impl Logger {
    /// Пустой логгер: порог `Error`, приёмников нет, консоль — stdout.
    pub fn new() -> Self {
        Self::with_console(io::stdout())
    }

    /// То же, но консольный приёмник пишет в `console`.
    pub fn with_console<W: Write + Send + 'static>(console: W) -> Self {
        Logger {
            level: AtomicU8::new(LogLevel::default() as u8),
            state: Mutex::new(State {
                flags: LogFlags::empty(),
                console: Box::new(console),
                file: None,
                system_log: None,
                #[cfg(unix)]
                syslog_socket: None,
            }),
        }
    }

    /// Логгер, который для `SYSLOG` подключается к сокету `socket`
    /// вместо системного (`/dev/log` и т.п.).
    #[cfg(unix)]
    pub fn with_syslog_socket<W, P>(console: W, socket: P) -> Self
    where
        W: Write + Send + 'static,
        P: AsRef<Path>,
    {
        let logger = Self::with_console(console);
        logger.lock().syslog_socket = Some(socket.as_ref().to_path_buf());
        logger
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Настраивает приёмники. Ранее открытые ресурсы освобождаются.
    ///
    /// `name` используется только с `SYSLOG`, `file` — только с `FILE`.
    /// Если файл не открылся, флаг `FILE` остаётся, но запись в файл пропускается.
    pub fn open(&self, name: &str, file: Option<&Path>, flags: LogFlags) {
        let mut state = self.lock();
        state.release();
        state.acquire(name, file, flags);
    }

    /// `close()` + `open()` под одной блокировкой.
    pub fn reopen(&self, name: &str, file: Option<&Path>, flags: LogFlags) {
        self.open(name, file, flags);
    }

    /// Закрывает файл и системный журнал. Флаги и порог сохраняются.
    pub fn close(&self) {
        self.lock().release();
    }

    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::Relaxed))
    }

    pub fn flags(&self) -> LogFlags {
        self.lock().flags
    }

    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        (level as u8) <= self.level.load(Ordering::Relaxed)
    }

    pub fn is_file_open(&self) -> bool {
        self.lock().file.is_some()
    }

    pub fn is_syslog_open(&self) -> bool {
        self.lock().system_log.is_some()
    }

    /// Число приёмников, получающих вывод. `SYSLOG` считается по флагу.
    pub fn active_sinks(&self) -> usize {
        self.lock().active_sinks()
    }

    /// Ошибка `Display` в `args` молча отменяет вызов для всех приёмников.
    pub fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }

        let flags = {
            let state = self.lock();
            if state.active_sinks() == 0 {
                return;
            }
            state.flags
        };

        // Рендер без блокировки: Display может сам логировать
        let stamp = flags.contains(LogFlags::TIMESTAMP).then(timestamp::now);
        let Some((line, start)) = render_line(stamp, args) else {
            return;
        };
        let message = &line[start..line.len() - 1];

        self.lock().dispatch(level, &line, message);
    }

    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Debug, args);
    }

    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Info, args);
    }

    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Warn, args);
    }

    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Error, args);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.lock().release();
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("flags", &state.flags)
            .field("file_open", &state.file.is_some())
            .field("syslog_open", &state.system_log.is_some())
            .finish()
    }
}
