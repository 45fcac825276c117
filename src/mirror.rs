//! Status mirror: last-known send/status pair, refreshed on demand.

use tracing::{debug, error};

use crate::client::TextbeltClient;
use crate::domain::{CheckStatus, DeliveryStatus, MessageText, RawPhoneNumber, TextId};

#[derive(Debug, Clone, Default, PartialEq)]
/// Observable state of the most recently sent message.
///
/// All fields start empty; `last_text_id`, `last_phone`, and `last_message`
/// are set together when a send succeeds, while `last_status` and
/// `last_raw_response` are updated by each completed refresh.
pub struct MirrorState {
    pub last_text_id: Option<TextId>,
    pub last_status: DeliveryStatus,
    pub last_phone: Option<RawPhoneNumber>,
    pub last_message: Option<MessageText>,
    pub last_raw_response: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Tracks the delivery status of the most recently sent message.
///
/// The mirror is the only writer to its [`MirrorState`]; it polls the client
/// on [`StatusMirror::refresh`] and degrades to [`DeliveryStatus::Failed`]
/// when a poll errors, so an observer always sees a value.
pub struct StatusMirror {
    client: TextbeltClient,
    state: MirrorState,
}

impl StatusMirror {
    pub fn new(client: TextbeltClient) -> Self {
        Self {
            client,
            state: MirrorState::default(),
        }
    }

    /// Borrow the current observable state.
    pub fn state(&self) -> &MirrorState {
        &self.state
    }

    /// Record a new tracked id (or clear it) and reset dependent display state.
    ///
    /// Callers should [`StatusMirror::refresh`] soon after to pick up the
    /// initial delivery status.
    pub fn set_last_text_id(&mut self, text_id: Option<TextId>) {
        self.state.last_text_id = text_id;
        self.state.last_status = DeliveryStatus::Unknown;
        self.state.last_raw_response = None;
    }

    /// Record the phone/message pair alongside the tracked id, for display only.
    pub fn update_message_info(&mut self, phone: RawPhoneNumber, message: MessageText) {
        self.state.last_phone = Some(phone);
        self.state.last_message = Some(message);
    }

    /// Poll the provider for the tracked id and mirror the result.
    ///
    /// Without a tracked id this is a no-op: no request is issued and the
    /// value stays whatever it was. Any classified client error forces the
    /// value to [`DeliveryStatus::Failed`] and leaves other fields untouched.
    pub async fn refresh(&mut self) {
        let Some(text_id) = self.state.last_text_id.clone() else {
            return;
        };

        match self.client.check_status(CheckStatus::new(text_id)).await {
            Ok(response) => {
                debug!(status = %response.status, "delivery status refreshed");
                self.state.last_status = response.status;
                self.state.last_raw_response = Some(response.raw);
            }
            Err(err) => {
                error!(error = %err, "failed to refresh delivery status");
                self.state.last_status = DeliveryStatus::Failed;
            }
        }
    }

    /// One-line display string: `"<textId>: <status>"`, or a placeholder
    /// before anything has been sent.
    pub fn summary(&self) -> String {
        match &self.state.last_text_id {
            Some(text_id) => format!("{}: {}", text_id.as_str(), self.state.last_status),
            None => "no message sent".to_owned(),
        }
    }
}
