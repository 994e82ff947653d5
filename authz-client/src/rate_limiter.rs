//! Token-bucket rate limiter with a burst of one
//!
//! With a burst of one the bucket reduces to a schedule of evenly spaced
//! slots: each `acquire` claims the next free slot and sleeps until it.
//! `M` back-to-back acquisitions therefore span at least `(M - 1) / rate`.

use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{self, Instant};

use shared::Cancellation;
use crate::error::{AuthzError, AuthzResult};

#[derive(Debug)]
pub struct RateLimiter {
    interval: Duration,
    /// Earliest instant the next token may be handed out
    next_slot: Mutex<Instant>,
}

impl RateLimiter {
    /// `rate_per_second` must be non-zero; `ClientConfig::normalized` enforces it.
    pub fn new(rate_per_second: u32) -> Self {
        let rate = rate_per_second.max(1);
        Self {
            interval: Duration::from_secs(1) / rate,
            next_slot: Mutex::new(Instant::now()),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Wait for one token.
    ///
    /// Fails with `RateLimitExceeded` if `ctx` is cancelled before or while
    /// waiting.
    pub async fn acquire(&self, ctx: &Cancellation) -> AuthzResult<()> {
        if ctx.is_cancelled() {
            return Err(AuthzError::RateLimitExceeded);
        }

        let slot = {
            let mut next_slot = self.next_slot.lock().await;
            let slot = (*next_slot).max(Instant::now());
            *next_slot = slot + self.interval;
            slot
        };

        tokio::select! {
            _ = ctx.cancelled() => Err(AuthzError::RateLimitExceeded),
            _ = time::sleep_until(slot) => Ok(()),
        }
    }
}
