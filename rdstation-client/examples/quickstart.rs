//! Minimal end-to-end demo: exchange an authorization code and read
//! the account info.
//!
//! ```sh
//! RD_CLIENT_ID=... RD_CLIENT_SECRET=... RD_AUTH_CODE=... \
//!     cargo run --example quickstart
//! ```

use anyhow::{Context, Result};
use rdstation_client::{Credentials, RdStationClient};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rdstation_client=debug".into()),
        )
        .init();

    let client_id = std::env::var("RD_CLIENT_ID").context("RD_CLIENT_ID not set")?;
    let client_secret = std::env::var("RD_CLIENT_SECRET").context("RD_CLIENT_SECRET not set")?;
    let code = std::env::var("RD_AUTH_CODE").context("RD_AUTH_CODE not set")?;

    let client = RdStationClient::new(Credentials::new(client_id, client_secret, code))?;

    let account = client.account_info().await?;
    println!("account: {account}");

    let fields = client.list_fields().await?;
    println!("fields: {fields}");

    Ok(())
}
