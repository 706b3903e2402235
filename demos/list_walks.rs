//! List the silly walks.
//!
//! Reads configuration from `SILLYWALKS_URL`, `SILLYWALKS_THRESHOLD` and
//! `SILLYWALKS_TIMEOUT_SECS`, then prints every walk above the threshold.
//!
//! ```bash
//! RUST_LOG=sillywalks=debug cargo run --example list_walks
//! ```

use sillywalks::{Error, SillyWalksClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sillywalks=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = SillyWalksClient::from_env()?;
    println!(
        "Walks sillier than {} from {}:",
        client.walks().threshold(),
        client.walks().url()
    );

    match client.walks().list_walks() {
        Ok(walks) if walks.is_empty() => println!("   (none)"),
        Ok(walks) => {
            for walk in walks {
                println!("   {walk}");
            }
        }
        Err(Error::Transport(e)) => {
            eprintln!("   Could not reach the registry: {e}");
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
