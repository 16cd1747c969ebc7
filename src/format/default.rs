//! Default single-line formatter.

use crate::format::Format;
use crate::logger::{CallerInfo, Level};
use chrono::{DateTime, Datelike, TimeZone, Timelike};
use std::fmt::Write;

/// The built-in formatter.
///
/// Produces one line terminated by `\n`:
///
/// ```text
/// 26-07-19:10:08:203 (main:1) [DEBUG] main.rs:main:15 - Test log 1
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFormat;

impl Format for DefaultFormat {
    fn format(&self, level: Level, caller: &CallerInfo, message: &str) -> String {
        let mut line = String::with_capacity(64 + message.len());
        let lineno = caller.line.map_or(-1, i64::from);
        // Writing into a String cannot fail.
        let _ = writeln!(
            line,
            "{} ({}:{}) [{}] {}:{}:{} - {}",
            format_timestamp(&caller.timestamp),
            caller.thread_name,
            caller.thread_id,
            level,
            caller.location,
            caller.method,
            lineno,
            message,
        );
        line
    }
}

/// Render `dd-MM-yy:HH:mm:SS`.
///
/// `SS` is the millisecond field padded to at least two digits, so 5 ms
/// renders as `05` and 203 ms as `203`. There is no seconds field.
pub fn format_timestamp<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String {
    format!(
        "{:02}-{:02}-{:02}:{:02}:{:02}:{:02}",
        timestamp.day(),
        timestamp.month(),
        timestamp.year().rem_euclid(100),
        timestamp.hour(),
        timestamp.minute(),
        timestamp.timestamp_subsec_millis(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, NaiveDate};

    fn at(millis: u32) -> DateTime<Local> {
        let naive = NaiveDate::from_ymd_opt(2019, 7, 26)
            .unwrap()
            .and_hms_milli_opt(10, 8, 41, millis)
            .unwrap();
        Local.from_local_datetime(&naive).earliest().unwrap()
    }

    fn caller(millis: u32) -> CallerInfo {
        CallerInfo {
            timestamp: at(millis),
            thread_name: "main".to_string(),
            thread_id: 1,
            location: "main.rs".to_string(),
            method: "main".to_string(),
            line: Some(15),
        }
    }

    #[test]
    fn test_default_format_golden() {
        let line = DefaultFormat.format(Level::Info, &caller(203), "hello");
        assert_eq!(line, "26-07-19:10:08:203 (main:1) [INFO] main.rs:main:15 - hello\n");
    }

    #[test]
    fn test_millis_below_ten_are_padded() {
        assert_eq!(format_timestamp(&at(5)), "26-07-19:10:08:05");
        assert_eq!(format_timestamp(&at(45)), "26-07-19:10:08:45");
        assert_eq!(format_timestamp(&at(0)), "26-07-19:10:08:00");
    }

    #[test]
    fn test_unknown_line_renders_minus_one() {
        let mut info = caller(10);
        info.location.clear();
        info.method.clear();
        info.line = None;
        let line = DefaultFormat.format(Level::Error, &info, "boom");
        assert_eq!(line, "26-07-19:10:08:10 (main:1) [ERROR] ::-1 - boom\n");
    }

    #[test]
    fn test_single_terminated_line() {
        let line = DefaultFormat.format(Level::Warning, &caller(99), "x");
        assert!(line.ends_with('\n'));
        assert_eq!(line.matches('\n').count(), 1);
        assert!(line.contains(" [WARNING] "));
    }
}
