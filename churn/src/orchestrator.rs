//! Iteration driver: producers add sets, consumers delete them
//!
//! Each iteration spawns `count` producers and `count` consumers into one
//! `JoinSet`. A producer sleeps a random jitter, adds its set and publishes
//! the index; a consumer takes whichever index arrives and deletes that set
//! tuple by tuple in reverse. The `JoinSet` draining is the iteration
//! barrier. The first failure cancels the run context, aborts the rest of
//! the iteration and ends the run with that error.

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use tokio::task::JoinSet;
use tokio::time::{self, Instant};
use tracing::{debug, info};

use shared::{logging, Cancellation};

use crate::error::{ChurnError, ChurnResult};
use crate::generator::{self, RelationshipSet};
use crate::handoff::HandoffQueue;
use crate::traits::{ProgressReporter, RelationshipStore};
use crate::types::{ChurnConfig, RunSummary};

pub struct ChurnOrchestrator<S, P> {
    config: ChurnConfig,
    store: Arc<S>,
    progress: Arc<P>,
}

impl<S, P> ChurnOrchestrator<S, P>
where
    S: RelationshipStore + 'static,
    P: ProgressReporter + 'static,
{
    pub fn new(config: ChurnConfig, store: Arc<S>, progress: Arc<P>) -> Self {
        Self { config, store, progress }
    }

    /// Run every iteration. Returns the first failure, if any.
    pub async fn run(&self, ctx: &Cancellation) -> ChurnResult<RunSummary> {
        self.config.validate()?;

        let started = Instant::now();
        self.progress.run_started(self.config.iterations, self.config.count);

        for iteration in 1..=self.config.iterations {
            if ctx.is_cancelled() {
                return Err(ChurnError::Cancelled);
            }

            self.progress.iteration_started(iteration);
            let iteration_started = Instant::now();

            self.run_iteration(ctx).await?;

            info!(
                iteration,
                elapsed_ms = iteration_started.elapsed().as_millis() as u64,
                "iteration drained"
            );
            self.progress.iteration_done(iteration);
        }

        let summary = RunSummary {
            iterations: self.config.iterations,
            sets_per_iteration: self.config.count,
            elapsed: started.elapsed(),
        };
        self.progress.run_complete(&summary);
        Ok(summary)
    }

    async fn run_iteration(&self, ctx: &Cancellation) -> ChurnResult<()> {
        let count = self.config.count;
        let sets = Arc::new(generator::generate(0, count));
        // Fresh per iteration so a straggler can never publish into the next round
        let queue = HandoffQueue::new(count);
        let mut tasks = JoinSet::new();

        for _ in 0..count {
            tasks.spawn(consume(
                sets.clone(),
                queue.clone(),
                self.store.clone(),
                self.progress.clone(),
                ctx.clone(),
            ));
        }

        for index in 0..count {
            tasks.spawn(produce(
                index,
                sets.clone(),
                queue.clone(),
                self.store.clone(),
                self.progress.clone(),
                ctx.clone(),
                self.config.max_sleep_ms,
            ));
        }

        let outcome = drain(&mut tasks, ctx).await;
        queue.close().await;
        outcome
    }
}

/// Wait for every task; on the first failure cancel and abort the rest.
async fn drain(tasks: &mut JoinSet<ChurnResult<()>>, ctx: &Cancellation) -> ChurnResult<()> {
    let mut first_error = None;

    while let Some(joined) = tasks.join_next().await {
        let result = match joined {
            Ok(result) => result,
            Err(err) if err.is_cancelled() => continue,
            Err(err) => Err(ChurnError::Join(err)),
        };

        if let Err(err) = result {
            if first_error.is_none() {
                logging::log_error("churn iteration", &err);
                ctx.cancel();
                tasks.abort_all();
                first_error = Some(err);
            }
        }
    }

    match first_error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn jitter(max_sleep_ms: u64) -> Duration {
    Duration::from_millis(rand::thread_rng().gen_range(0..=max_sleep_ms))
}

async fn produce<S, P>(
    index: usize,
    sets: Arc<Vec<RelationshipSet>>,
    queue: HandoffQueue,
    store: Arc<S>,
    progress: Arc<P>,
    ctx: Cancellation,
    max_sleep_ms: u64,
) -> ChurnResult<()>
where
    S: RelationshipStore,
    P: ProgressReporter,
{
    tokio::select! {
        _ = ctx.cancelled() => return Err(ChurnError::Cancelled),
        _ = time::sleep(jitter(max_sleep_ms)) => {}
    }

    let token = store
        .add(&ctx, &sets[index])
        .await
        .map_err(|source| ChurnError::Add { index, source })?;
    debug!(index, snap_token = %token, "set added");

    queue.publish(index).await?;
    progress.added(index);
    Ok(())
}

async fn consume<S, P>(
    sets: Arc<Vec<RelationshipSet>>,
    queue: HandoffQueue,
    store: Arc<S>,
    progress: Arc<P>,
    ctx: Cancellation,
) -> ChurnResult<()>
where
    S: RelationshipStore,
    P: ProgressReporter,
{
    let index = tokio::select! {
        _ = ctx.cancelled() => return Err(ChurnError::Cancelled),
        taken = queue.take() => taken?,
    };

    for relationship in sets[index].iter().rev() {
        store
            .delete(&ctx, relationship)
            .await
            .map_err(|source| ChurnError::Delete {
                index,
                relationship: relationship.clone(),
                source,
            })?;
    }

    debug!(index, "set deleted");
    progress.deleted(index);
    Ok(())
}
