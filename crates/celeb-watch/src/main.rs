//! Dashboard watch client entry point
//!
//! Run with:
//! ```bash
//! cargo run -p celeb-watch
//! ```

use std::sync::Arc;
use std::time::Duration;

use celeb_common::try_init_tracing;
use celeb_watch::{render_dashboard, DashboardClient, Poller, WatchConfig};
use tracing::{error, info};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() {
    if let Err(e) = try_init_tracing() {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run().await {
        error!(error = %e, "Watch client failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = WatchConfig::from_env()?;
    info!(
        api_url = %config.api_url,
        interval_secs = config.interval.as_secs(),
        auto_refresh = config.auto_refresh,
        time_range = %config.filters.time_range,
        "Watching dashboard"
    );

    let client = Arc::new(DashboardClient::new(&config.api_url, REQUEST_TIMEOUT)?);
    let mut poller = Poller::new(client, config.filters.clone(), config.interval);
    let mut updates = poller.subscribe();

    if !config.auto_refresh {
        poller.refresh().await;
        println!("{}", render_dashboard(&updates.borrow(), config.page));
        return Ok(());
    }

    poller.set_enabled(true).await;

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let text = render_dashboard(&updates.borrow_and_update(), config.page);
                println!("{text}");
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted");
                break;
            }
        }
    }

    poller.stop().await;
    Ok(())
}
