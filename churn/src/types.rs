//! Run configuration and results

use std::time::Duration;

use shared::{SharedError, SharedResult};

/// Tenant every churn run operates against
pub const TENANT_ID: &str = "test";
pub const DEFAULT_ITERATIONS: u32 = 100;
pub const DEFAULT_COUNT: usize = 100;
/// Upper bound of the random delay before each add
pub const DEFAULT_MAX_SLEEP_MS: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChurnConfig {
    pub iterations: u32,
    /// Relationship sets per iteration; also the handoff queue capacity
    pub count: usize,
    pub max_sleep_ms: u64,
}

impl Default for ChurnConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            count: DEFAULT_COUNT,
            max_sleep_ms: DEFAULT_MAX_SLEEP_MS,
        }
    }
}

impl ChurnConfig {
    pub fn new(iterations: u32, count: usize) -> Self {
        Self { iterations, count, ..Default::default() }
    }

    pub fn with_max_sleep_ms(mut self, max_sleep_ms: u64) -> Self {
        self.max_sleep_ms = max_sleep_ms;
        self
    }

    pub fn validate(&self) -> SharedResult<()> {
        if self.iterations == 0 {
            return Err(SharedError::invalid("iterations", self.iterations));
        }
        if self.count == 0 {
            return Err(SharedError::invalid("count", self.count));
        }
        Ok(())
    }
}

/// Outcome of a run in which every add and delete succeeded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub iterations: u32,
    pub sets_per_iteration: usize,
    pub elapsed: Duration,
}

impl RunSummary {
    /// Adds plus deletes issued over the whole run
    pub fn total_operations(&self) -> usize {
        let per_set = 1 + crate::generator::SET_SIZE;
        self.iterations as usize * self.sets_per_iteration * per_set
    }
}
