//! Visit counter with a memoized hit.
//!
//! # Responsibility
//! - Register a page visit against the hit endpoint and expose the latest
//!   known count.
//!
//! # Invariants
//! - At most one endpoint hit per elapsed memo window; reads inside the
//!   window reuse the cached count instead of re-incrementing.
//! - Only successes are cached. A failed hit returns `None` and the next
//!   read tries the endpoint again.

use log::{info, warn};
use serde::Deserialize;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// How long a fetched count is reused before the endpoint is hit again.
pub const VISIT_MEMO_WINDOW: Duration = Duration::from_secs(300);

const VISIT_TIMEOUT: Duration = Duration::from_secs(6);

/// Where visit counts come from. The production source is HTTP; tests swap
/// in a scripted source.
pub trait VisitSource {
    /// Registers one visit and returns the updated total, or `None` when the
    /// source is unavailable.
    fn hit(&self) -> Option<u64>;
}

#[derive(Debug, Deserialize)]
struct HitResponse {
    value: u64,
}

/// CountAPI-style source: `GET` on a `hit` endpoint returning `{"value": N}`.
pub struct HttpVisitSource {
    url: String,
    agent: ureq::Agent,
}

impl HttpVisitSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            agent: ureq::AgentBuilder::new().timeout(VISIT_TIMEOUT).build(),
        }
    }
}

impl VisitSource for HttpVisitSource {
    fn hit(&self) -> Option<u64> {
        let started_at = Instant::now();
        let response = match self.agent.get(&self.url).call() {
            Ok(response) => response,
            Err(err) => {
                warn!(
                    "event=visit_hit module=remote status=warn duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return None;
            }
        };
        match response.into_json::<HitResponse>() {
            Ok(body) => {
                info!(
                    "event=visit_hit module=remote status=ok duration_ms={} count={}",
                    started_at.elapsed().as_millis(),
                    body.value
                );
                Some(body.value)
            }
            Err(err) => {
                warn!(
                    "event=visit_hit module=remote status=warn duration_ms={} error_code=visit_decode_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                None
            }
        }
    }
}

#[derive(Debug, Default)]
struct MemoState {
    fetched_at: Option<Instant>,
    count: Option<u64>,
}

/// Memoizing wrapper around a [`VisitSource`].
pub struct VisitCounter<S: VisitSource> {
    source: S,
    window: Duration,
    state: Mutex<MemoState>,
}

impl<S: VisitSource> VisitCounter<S> {
    pub fn new(source: S) -> Self {
        Self::with_window(source, VISIT_MEMO_WINDOW)
    }

    /// Same counter with a custom memo window.
    pub fn with_window(source: S, window: Duration) -> Self {
        Self {
            source,
            window,
            state: Mutex::new(MemoState::default()),
        }
    }

    /// Current visit count: the memoized value while the window holds,
    /// otherwise one fresh hit against the source.
    pub fn current(&self) -> Option<u64> {
        let mut state = match self.state.lock() {
            Ok(state) => state,
            Err(poisoned) => poisoned.into_inner(),
        };

        if let (Some(fetched_at), Some(count)) = (state.fetched_at, state.count) {
            if Instant::now().saturating_duration_since(fetched_at) < self.window {
                return Some(count);
            }
        }

        match self.source.hit() {
            Some(count) => {
                state.fetched_at = Some(Instant::now());
                state.count = Some(count);
                Some(count)
            }
            None => None,
        }
    }
}
