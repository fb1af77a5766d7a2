use std::io;

use tracing_subscriber::EnvFilter;
use voodoosms::{ClientConfig, SendSms, VoodooSmsClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let destination = std::env::var("VOODOO_TO").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "VOODOO_TO environment variable is required",
        )
    })?;
    let message = std::env::var("VOODOO_MESSAGE")
        .unwrap_or_else(|_| "Hello from the voodoosms demo.".to_owned());

    let client = VoodooSmsClient::new(ClientConfig::from_env()?);
    let mut request = SendSms::new(message, destination);
    if let Ok(reference) = std::env::var("VOODOO_EREF") {
        request = request.external_reference(reference);
    }

    let response = client.send(request).await?;
    println!(
        "result: {}, text: {}, reference ids: {:?}",
        response.result()?,
        response.result_text()?,
        response.reference_ids()?
    );

    Ok(())
}
