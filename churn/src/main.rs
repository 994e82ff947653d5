//! Entry point for the relationship churn binary

use std::sync::Arc;

use clap::Parser;
use tokio::signal;

use authz_client::{ClientConfig, HttpAuthzClient};
use churn::services::{ConsoleProgress, RateLimitedLinkStore};
use churn::types::{DEFAULT_COUNT, DEFAULT_ITERATIONS, DEFAULT_MAX_SLEEP_MS};
use churn::{bootstrap, ChurnConfig, ChurnError, ChurnOrchestrator, ChurnResult, RunSummary, TENANT_ID};
use shared::{logging, Cancellation};

/// Repeatedly create and destroy the same relationships to shake out
/// concurrency bugs in the authorization service
#[derive(Parser)]
#[command(name = "churn")]
#[command(about = "Create and destroy the same relationship sets concurrently")]
pub struct Args {
    /// Number of iterations
    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: u32,

    /// Relationship sets added and deleted per iteration
    #[arg(long, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Requests per second across the whole run (burst 1)
    #[arg(long, default_value_t = authz_client::config::DEFAULT_RATE_LIMIT)]
    pub rate_limit: u32,

    /// Upper bound of the random delay before each add, in milliseconds
    #[arg(long, default_value_t = DEFAULT_MAX_SLEEP_MS)]
    pub max_sleep_ms: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    dotenv::dotenv().ok();
    logging::init_tracing(Some(&args.log_level));
    logging::log_startup("relationship churn");

    match run(args).await {
        Ok(summary) => logging::log_success(&format!(
            "{} iterations of {} sets, {} operations in {:.1?}",
            summary.iterations,
            summary.sets_per_iteration,
            summary.total_operations(),
            summary.elapsed
        )),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

async fn run(args: Args) -> ChurnResult<RunSummary> {
    let client_config = ClientConfig::from_env()?
        .with_tenant(TENANT_ID)
        .with_rate_limit(args.rate_limit);
    let client = HttpAuthzClient::new(client_config)
        .map_err(|source| ChurnError::Setup { step: "configuring client", source })?;
    let client = Arc::new(client);

    let ctx = Cancellation::new();
    let on_signal = ctx.clone();
    tokio::spawn(async move {
        match signal::ctrl_c().await {
            Ok(()) => {
                logging::log_shutdown("Received Ctrl+C signal");
                on_signal.cancel();
            }
            Err(err) => logging::log_error("Signal handling", &err),
        }
    });

    bootstrap(client.as_ref(), &ctx, TENANT_ID).await?;

    let config = ChurnConfig::new(args.iterations, args.count).with_max_sleep_ms(args.max_sleep_ms);
    let orchestrator = ChurnOrchestrator::new(
        config,
        Arc::new(RateLimitedLinkStore::new(client)),
        Arc::new(ConsoleProgress::stdout()),
    );

    orchestrator.run(&ctx).await
}
