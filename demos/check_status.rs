use std::io;

use textbelt::{ApiKey, CheckStatus, TextId, TextbeltClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("TEXTBELT_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TEXTBELT_API_KEY environment variable is required",
        )
    })?;
    let text_id_raw = std::env::var("TEXTBELT_TEXT_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TEXTBELT_TEXT_ID environment variable is required",
        )
    })?;

    let client = TextbeltClient::new(ApiKey::new(api_key)?);
    let request = CheckStatus::new(TextId::new(text_id_raw)?);

    let response = client.check_status(request).await?;
    println!(
        "status: {}, raw: {}",
        response.status,
        serde_json::Value::Object(response.raw)
    );

    Ok(())
}
