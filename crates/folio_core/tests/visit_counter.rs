use folio_core::{VisitCounter, VisitSource};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Counts its own hits and returns a deterministic growing total.
struct CountingSource {
    hits: AtomicU64,
}

impl CountingSource {
    fn new() -> Self {
        Self {
            hits: AtomicU64::new(0),
        }
    }
}

impl VisitSource for CountingSource {
    fn hit(&self) -> Option<u64> {
        Some(self.hits.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

struct DownSource;

impl VisitSource for DownSource {
    fn hit(&self) -> Option<u64> {
        None
    }
}

#[test]
fn holds_one_hit_for_the_whole_window() {
    let counter = VisitCounter::with_window(CountingSource::new(), Duration::from_secs(3600));
    assert_eq!(counter.current(), Some(1));
    assert_eq!(counter.current(), Some(1));
    assert_eq!(counter.current(), Some(1));
}

#[test]
fn hits_again_after_the_window_elapses() {
    let counter = VisitCounter::with_window(CountingSource::new(), Duration::from_millis(5));
    assert_eq!(counter.current(), Some(1));
    std::thread::sleep(Duration::from_millis(15));
    assert_eq!(counter.current(), Some(2));
}

#[test]
fn unavailable_source_is_retried_on_every_read() {
    let counter = VisitCounter::with_window(DownSource, Duration::from_secs(3600));
    assert_eq!(counter.current(), None);
    assert_eq!(counter.current(), None);
}
