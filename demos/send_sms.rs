use std::io;

use textbelt::{ApiKey, MessageText, RawPhoneNumber, SendSms, TextbeltClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("TEXTBELT_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TEXTBELT_API_KEY environment variable is required",
        )
    })?;
    let phone_raw = std::env::var("TEXTBELT_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TEXTBELT_PHONE environment variable is required",
        )
    })?;
    let message = std::env::var("TEXTBELT_MESSAGE")
        .unwrap_or_else(|_| "Hello from the textbelt example.".to_owned());

    let client = TextbeltClient::new(ApiKey::new(api_key)?);
    let request = SendSms::new(RawPhoneNumber::new(phone_raw)?, MessageText::new(message)?);

    let response = client.send_sms(request).await?;
    println!(
        "textId: {:?}, quotaRemaining: {:?}",
        response.text_id, response.quota_remaining
    );

    Ok(())
}
