//! Compact formatter.

use crate::format::Format;
use crate::logger::{CallerInfo, Level};

/// `<LEVEL> - <message>`, without caller metadata or trailing newline.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleFormat;

impl Format for SimpleFormat {
    fn format(&self, level: Level, _caller: &CallerInfo, message: &str) -> String {
        format!("{level} - {message}")
    }
}
