//! Call-site reporting and the default line layout.

use tinylog::{log_info, DefaultFormat, Level, Logger, MemorySink};

mod common;

#[track_caller]
fn audit(logger: &Logger, what: &str) {
    logger.info(format_args!("audit: {what}")).unwrap();
}

#[test]
fn test_wrapper_reports_its_caller() {
    let (logger, sink) = common::capturing_logger(Level::Error);

    let line = line!() + 1;
    audit(&logger, "login");

    assert_eq!(
        sink.lines(),
        vec![format!("[INFO] caller_location.rs::{line} - audit: login")]
    );
}

#[test]
fn test_method_call_reports_this_line() {
    let (logger, sink) = common::capturing_logger(Level::Error);
    let line = line!() + 1;
    logger.error(format_args!("{}", 42)).unwrap();
    assert_eq!(
        sink.lines(),
        vec![format!("[ERROR] caller_location.rs::{line} - 42")]
    );
}

#[test]
fn test_default_format_layout() {
    let sink = MemorySink::new();
    let logger = Logger::with(sink.clone(), DefaultFormat, Level::Error);

    let worker = std::thread::Builder::new()
        .name("io-worker".into())
        .spawn(move || {
            let line = line!() + 1;
            log_info!(logger, "hello").unwrap();
            (line, tinylog::logger::current_thread_id())
        })
        .unwrap();
    let (line, thread_id) = worker.join().unwrap();

    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    let out = &lines[0];

    // "dd-MM-yy:HH:mm:SS " prefix, then the fixed layout.
    let (timestamp, rest) = out.split_once(' ').unwrap();
    let parts: Vec<&str> = timestamp.split(':').collect();
    assert_eq!(parts.len(), 4, "timestamp {timestamp}");
    assert_eq!(parts[0].len(), 8);
    assert!(parts[3].len() >= 2 && parts[3].len() <= 3);

    assert_eq!(
        rest,
        format!(
            "(io-worker:{thread_id}) [INFO] caller_location.rs:test_default_format_layout:{line} - hello\n"
        )
    );
}

#[test]
fn test_default_logger_writes_to_stdout() {
    let logger = Logger::default();
    logger.debug(format_args!("stdout smoke test")).unwrap();
    logger.info(format_args!("suppressed at the default threshold")).unwrap();
}
