#![cfg(unix)]

use liblog::{error, warn, LogFlags, LogLevel, Logger};
use std::io;
use std::os::unix::net::UnixDatagram;
use std::time::Duration;
use tempfile::TempDir;

// LOG_DAEMON = 3 << 3
const NOTICE: &str = "<29>";
const ERR: &str = "<27>";
const WARNING: &str = "<28>";

fn bind(dir: &TempDir) -> (UnixDatagram, std::path::PathBuf) {
    let path = dir.path().join("log.sock");
    let socket = UnixDatagram::bind(&path).unwrap();
    socket
        .set_read_timeout(Some(Duration::from_secs(5)))
        .unwrap();
    (socket, path)
}

// Запись может прийти несколькими датаграммами: читаем, пока не встретим текст
fn recv(socket: &UnixDatagram, text: &str) -> String {
    let mut record = String::new();
    let mut buf = [0u8; 2048];
    while !record.contains(text) {
        let n = socket.recv(&mut buf).unwrap();
        record.push_str(&String::from_utf8_lossy(&buf[..n]));
    }
    record
}

#[test]
fn test_syslog_uses_fixed_notice_priority() {
    let dir = TempDir::new().unwrap();
    let (socket, path) = bind(&dir);
    let logger = Logger::with_syslog_socket(io::sink(), &path);

    logger.open("liblog-test", None, LogFlags::SYSLOG);
    assert!(logger.is_syslog_open());
    error!(logger, "disk at {}%", 91);

    let record = recv(&socket, "disk at 91%");
    assert!(record.starts_with(NOTICE), "record {:?}", record);
    assert!(record.contains("liblog-test"));
    assert!(record.contains("disk at 91%"));
}

#[test]
fn test_syslog_levels_map_severity() {
    let dir = TempDir::new().unwrap();
    let (socket, path) = bind(&dir);
    let logger = Logger::with_syslog_socket(io::sink(), &path);

    logger.open(
        "liblog-test",
        None,
        LogFlags::SYSLOG | LogFlags::SYSLOG_LEVELS,
    );
    logger.set_level(LogLevel::Warn);
    error!(logger, "failed");
    warn!(logger, "slow");

    let first = recv(&socket, "failed");
    assert!(first.starts_with(ERR), "record {:?}", first);
    assert!(first.contains("failed"));
    let second = recv(&socket, "slow");
    assert!(second.starts_with(WARNING), "record {:?}", second);
}

#[test]
fn test_syslog_has_no_stream_timestamp_prefix() {
    let dir = TempDir::new().unwrap();
    let (socket, path) = bind(&dir);
    let logger = Logger::with_syslog_socket(io::sink(), &path);

    logger.open("liblog-test", None, LogFlags::SYSLOG | LogFlags::TIMESTAMP);
    error!(logger, "plain message");

    let record = recv(&socket, "plain message");
    assert!(record.trim_end_matches(&['\0', '\n'][..]).ends_with(": plain message"));
}

#[test]
fn test_syslog_closed_after_close() {
    let dir = TempDir::new().unwrap();
    let (_socket, path) = bind(&dir);
    let logger = Logger::with_syslog_socket(io::sink(), &path);

    logger.open("liblog-test", None, LogFlags::SYSLOG);
    logger.close();

    assert!(!logger.is_syslog_open());
    assert_eq!(logger.flags(), LogFlags::SYSLOG);
}

struct Failing;

impl std::fmt::Display for Failing {
    fn fmt(&self, _f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Err(std::fmt::Error)
    }
}

#[test]
fn test_render_failure_skips_syslog_too() {
    let dir = TempDir::new().unwrap();
    let (socket, path) = bind(&dir);
    let logger = Logger::with_syslog_socket(io::sink(), &path);

    logger.open("liblog-test", None, LogFlags::SYSLOG);
    error!(logger, "broken {}", Failing);
    error!(logger, "fine");

    let record = recv(&socket, "fine");
    assert!(!record.contains("broken"), "record {:?}", record);
}
