//! Typed Rust client for the Textbelt SMS HTTP API.
//!
//! The crate follows a small layered design: a domain layer of strong types,
//! a transport layer for wire-format quirks, a client layer classifying
//! outcomes, and on top of those a [`StatusMirror`] tracking the last sent
//! message and an [`SmsService`] facade exposing the send/refresh/reply
//! surface a host application consumes.
//!
//! ```rust,no_run
//! use textbelt::{ApiKey, MessageText, RawPhoneNumber, SendSms, TextbeltClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), textbelt::TextbeltError> {
//!     let client = TextbeltClient::new(ApiKey::new("...")?);
//!     let request = SendSms::new(
//!         RawPhoneNumber::new("+15550001234")?,
//!         MessageText::new("hello")?,
//!     );
//!     let response = client.send_sms(request).await?;
//!     println!("textId: {:?}", response.text_id);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod domain;
pub mod mirror;
pub mod service;
mod transport;

pub use client::{TextbeltClient, TextbeltClientBuilder, TextbeltError};
pub use config::{ConfigError, Settings};
pub use domain::{
    ApiKey, CheckStatus, CheckStatusResponse, DeliveryStatus, MessageText, PhoneNumber,
    RawPhoneNumber, SendSms, SendSmsResponse, TextId, ValidationError, WebhookUrl,
};
pub use mirror::{MirrorState, StatusMirror};
pub use service::{ReplyEvent, SmsService};
