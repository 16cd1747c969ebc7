//! Logging macros.
//!
//! `log_trace!` .. `log_error!` log through a given logger; `t!` .. `e!`
//! log through the shared one. Both capture the call site (file, module,
//! enclosing function, line) at compile time and evaluate to
//! `Result<(), LogError>`.

#[macro_export]
macro_rules! log_at {
    ($logger:expr, $lvl:expr, $($arg:tt)+) => {
        $logger.log_at($lvl, &$crate::call_site!(), ::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $($arg:tt)+) => { $crate::log_at!($logger, $crate::Level::Trace, $($arg)+) };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => { $crate::log_at!($logger, $crate::Level::Debug, $($arg)+) };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => { $crate::log_at!($logger, $crate::Level::Info, $($arg)+) };
}

#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $($arg:tt)+) => { $crate::log_at!($logger, $crate::Level::Warning, $($arg)+) };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => { $crate::log_at!($logger, $crate::Level::Error, $($arg)+) };
}

/// Trace through the shared logger.
#[macro_export]
macro_rules! t {
    ($($arg:tt)+) => { $crate::log_at!($crate::shared(), $crate::Level::Trace, $($arg)+) };
}

/// Debug through the shared logger.
#[macro_export]
macro_rules! d {
    ($($arg:tt)+) => { $crate::log_at!($crate::shared(), $crate::Level::Debug, $($arg)+) };
}

/// Info through the shared logger.
#[macro_export]
macro_rules! i {
    ($($arg:tt)+) => { $crate::log_at!($crate::shared(), $crate::Level::Info, $($arg)+) };
}

/// Warning through the shared logger.
#[macro_export]
macro_rules! w {
    ($($arg:tt)+) => { $crate::log_at!($crate::shared(), $crate::Level::Warning, $($arg)+) };
}

/// Error through the shared logger.
#[macro_export]
macro_rules! e {
    ($($arg:tt)+) => { $crate::log_at!($crate::shared(), $crate::Level::Error, $($arg)+) };
}
