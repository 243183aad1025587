use chrono::{DateTime, Local, TimeZone};
use std::fmt;

/// `Mar 07 09:05:03`: без года, зоны и долей секунды.
pub const TIMESTAMP_FORMAT: &str = "%b %d %H:%M:%S";

pub(crate) fn now() -> String {
    render(&Local::now())
}

pub(crate) fn render<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}
