use liblog::{gdebug, gerror, glog, gwarn, LogFlags, LogLevel};
use std::fs;
use tempfile::TempDir;

// Один тест на файл: глобальный логгер общий для всего процесса
#[test]
fn test_global_logger_lifecycle() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("global.log");
    let rotated = dir.path().join("global.log.1");

    assert_eq!(liblog::global().level(), LogLevel::Error);
    assert_eq!(liblog::global().flags(), LogFlags::empty());

    liblog::open("global-test", Some(&path), LogFlags::FILE);
    liblog::set_level(LogLevel::Warn);
    gwarn!("disk at {}%", 91);
    gdebug!("trace");
    glog!(LogLevel::Info, "also filtered");

    fs::rename(&path, &rotated).unwrap();
    liblog::reopen("global-test", Some(&path), LogFlags::FILE);
    gerror!("after reopen");

    liblog::close();
    liblog::close();
    gerror!("after close");

    assert_eq!(fs::read_to_string(&rotated).unwrap(), "disk at 91%\n");
    assert_eq!(fs::read_to_string(&path).unwrap(), "after reopen\n");
    assert!(!liblog::global().is_file_open());
    assert_eq!(liblog::global().flags(), LogFlags::FILE);
}
