//! Concurrent first access to the shared logger.
//!
//! Kept alone in its own test binary so the shared cell starts empty.

use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn test_concurrent_first_access_yields_one_instance() {
    const THREADS: usize = 16;
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                tinylog::shared() as *const tinylog::Logger as usize
            })
        })
        .collect();

    let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let first = addresses[0];
    assert!(addresses.iter().all(|&addr| addr == first));
    assert_eq!(tinylog::shared() as *const tinylog::Logger as usize, first);

    // The lazily created instance uses the defaults.
    assert_eq!(tinylog::shared().level(), tinylog::Level::Debug);

    // Too late to install another one.
    let late = tinylog::init_shared(tinylog::Logger::new());
    assert!(matches!(late, Err(tinylog::LogError::AlreadyInitialized)));
}
