//! # winlog-rs
//!
//! Источник событий Windows Event Log с явным жизненным циклом:
//! регистрируется один раз при открытии, снимается с регистрации при `Drop`.
//! Если кастомный источник не зарегистрирован — использует "Application" с префиксом.

#![cfg(target_os = "windows")]

use std::ffi::CString;
use windows_sys::core::PCSTR;
use windows_sys::Win32::Foundation::{HANDLE, PSID};
use windows_sys::Win32::System::EventLog::{
    DeregisterEventSource, RegisterEventSourceA, ReportEventA, EVENTLOG_ERROR_TYPE,
    EVENTLOG_INFORMATION_TYPE, EVENTLOG_WARNING_TYPE,
};

const FALLBACK_SOURCE: &str = "Application";
const EVENT_ID: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Information,
    Warning,
    Error,
}

impl EventKind {
    fn to_event_type(self) -> u16 {
        match self {
            EventKind::Information => EVENTLOG_INFORMATION_TYPE,
            EventKind::Warning => EVENTLOG_WARNING_TYPE,
            EventKind::Error => EVENTLOG_ERROR_TYPE,
        }
    }
}

#[derive(Debug)]
pub struct EventSource {
    handle: HANDLE,
    // Some(name), если работаем через fallback-источник
    prefix: Option<String>,
}

impl EventSource {
    /// Регистрирует источник `name`, при неудаче — "Application".
    pub fn register(name: &str) -> Option<Self> {
        if let Some(handle) = register_source(name) {
            return Some(Self {
                handle,
                prefix: None,
            });
        }

        register_source(FALLBACK_SOURCE).map(|handle| Self {
            handle,
            prefix: Some(name.to_owned()),
        })
    }

    pub fn report(&self, kind: EventKind, message: &str) -> bool {
        let text = match self.prefix {
            Some(ref name) => format!("[{}] {}", name, message),
            None => message.to_owned(),
        };
        let c_message = match CString::new(text) {
            Ok(s) => s,
            Err(_) => return false,
        };
        let msg_ptr: PCSTR = c_message.as_ptr() as _;

        let success: i32 = unsafe {
            ReportEventA(
                self.handle,
                kind.to_event_type(),
                0,
                EVENT_ID,
                0 as PSID,
                1,
                0,
                &msg_ptr,
                std::ptr::null_mut(),
            )
        };

        success != 0
    }
}

impl Drop for EventSource {
    fn drop(&mut self) {
        let _ = unsafe { DeregisterEventSource(self.handle) };
    }
}

fn register_source(source: &str) -> Option<HANDLE> {
    let c_source = CString::new(source).ok()?;
    let source_ptr: PCSTR = c_source.as_ptr() as _;

    let handle = unsafe { RegisterEventSourceA(std::ptr::null(), source_ptr) };
    if handle == 0 {
        return None;
    }
    Some(handle)
}
