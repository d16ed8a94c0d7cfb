//! Hero animation fetch.
//!
//! # Responsibility
//! - Download the hero animation JSON from its configured endpoint.
//!
//! # Invariants
//! - The whole fetch is capped at [`ANIMATION_TIMEOUT`]; a slow endpoint can
//!   only delay a render, never hang it.
//! - Any failure (transport, non-success status, undecodable body) degrades
//!   to `None`; the hero then renders without the animation.

use log::{info, warn};
use std::time::{Duration, Instant};

/// Hard cap on the animation download.
pub const ANIMATION_TIMEOUT: Duration = Duration::from_secs(6);

/// Fetches the animation document, degrading to `None` on any failure.
pub fn fetch_animation(url: &str) -> Option<serde_json::Value> {
    let started_at = Instant::now();
    let agent = ureq::AgentBuilder::new().timeout(ANIMATION_TIMEOUT).build();

    let response = match agent.get(url).call() {
        Ok(response) => response,
        Err(err) => {
            warn!(
                "event=animation_fetch module=remote status=warn duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return None;
        }
    };

    match response.into_json::<serde_json::Value>() {
        Ok(value) => {
            info!(
                "event=animation_fetch module=remote status=ok duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Some(value)
        }
        Err(err) => {
            warn!(
                "event=animation_fetch module=remote status=warn duration_ms={} error_code=animation_decode_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            None
        }
    }
}
