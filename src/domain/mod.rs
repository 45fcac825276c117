//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{CheckStatus, SendSms};
pub use response::{CheckStatusResponse, DeliveryStatus, SendSmsResponse};
pub use validation::ValidationError;
pub use value::{ApiKey, MessageText, PhoneNumber, RawPhoneNumber, TextId, WebhookUrl};
