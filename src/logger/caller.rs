//! Call-site capture.
//!
//! Locations are resolved at compile time: the logging macros inject
//! `file!()`, `line!()`, `module_path!()` and the enclosing function name,
//! while the plain `Logger` methods rely on `#[track_caller]`. Either way the
//! reported frame is the first one outside the logger.

use chrono::{DateTime, Local};
use std::cell::Cell;
use std::panic::Location;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;

/// Compile-time description of where a log call was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub module: &'static str,
    pub function: &'static str,
    pub line: u32,
}

impl CallSite {
    /// Call site of the caller, as reported by `#[track_caller]`.
    ///
    /// No function name is available on this path.
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self {
            file: location.file(),
            module: "",
            function: "",
            line: location.line(),
        }
    }

    /// A call site with no location information.
    pub const fn unknown() -> Self {
        Self {
            file: "",
            module: "",
            function: "",
            line: 0,
        }
    }

    fn is_unknown(&self) -> bool {
        self.file.is_empty() && self.line == 0
    }
}

/// Snapshot of where and when a log call happened.
///
/// Built fresh for every permitted call and handed to the formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerInfo {
    pub timestamp: DateTime<Local>,
    pub thread_name: String,
    pub thread_id: u64,
    /// File name of the call site, without directories.
    pub location: String,
    /// Name of the calling function, without its module path.
    pub method: String,
    /// `None` when the call site is unknown.
    pub line: Option<u32>,
}

impl CallerInfo {
    /// Capture time and thread metadata for `site` on the current thread.
    pub fn capture(site: &CallSite) -> Self {
        let current = thread::current();
        let thread_name = current.name().unwrap_or("<unnamed>").to_string();

        let (location, method, line) = if site.is_unknown() {
            (String::new(), String::new(), None)
        } else {
            (
                file_name(site.file).to_string(),
                short_function_name(site.function).to_string(),
                Some(site.line),
            )
        };

        Self {
            timestamp: Local::now(),
            thread_name,
            thread_id: current_thread_id(),
            location,
            method,
            line,
        }
    }
}

static NEXT_THREAD_ID: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static THREAD_ID: Cell<u64> = const { Cell::new(0) };
}

/// Small numeric id of the current thread, assigned on first use.
pub fn current_thread_id() -> u64 {
    THREAD_ID.with(|id| {
        if id.get() == 0 {
            id.set(NEXT_THREAD_ID.fetch_add(1, Ordering::Relaxed));
        }
        id.get()
    })
}

fn file_name(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}

/// Reduce a full function path such as `app::worker::run::{{closure}}`
/// to `run`.
pub fn short_function_name(path: &str) -> &str {
    let mut trimmed = path;
    while let Some(stripped) = trimmed.strip_suffix("::{{closure}}") {
        trimmed = stripped;
    }
    trimmed.rsplit("::").next().unwrap_or(trimmed)
}

/// Full path of the function the macro is expanded in.
#[doc(hidden)]
#[macro_export]
macro_rules! __function_path {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = __type_name_of(__here);
        name.strip_suffix("::__here").unwrap_or(name)
    }};
}

/// Capture the current [`CallSite`] at compile time.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite {
            file: ::std::file!(),
            module: ::std::module_path!(),
            function: $crate::__function_path!(),
            line: ::std::line!(),
        }
    };
}
