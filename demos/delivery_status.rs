use std::io;

use tracing_subscriber::EnvFilter;
use voodoosms::{ClientConfig, VoodooSmsClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let reference_id = std::env::var("VOODOO_REFERENCE_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "VOODOO_REFERENCE_ID environment variable is required",
        )
    })?;

    let client = VoodooSmsClient::new(ClientConfig::from_env()?);
    let response = client.get_delivery_status(reference_id).await?;
    println!(
        "result: {}, status: {}, delivered at: {}, message: {:?}",
        response.result()?,
        response.delivery_status()?,
        response.delivery_datetime()?,
        response.message()?
    );

    Ok(())
}
