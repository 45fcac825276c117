//! Host-facing surface: the send operation, status refresh, and reply events.

use tokio::sync::broadcast;
use tracing::{error, info, warn};

use crate::client::{TextbeltClient, TextbeltError};
use crate::config::Settings;
use crate::domain::{MessageText, RawPhoneNumber, SendSms, SendSmsResponse, WebhookUrl};
use crate::mirror::{MirrorState, StatusMirror};

const REPLY_CHANNEL_CAPACITY: usize = 16;

#[derive(Debug, Clone)]
/// An inbound SMS reply, republished verbatim.
///
/// The payload is whatever JSON the provider posted to the reply webhook;
/// no schema validation is performed.
pub struct ReplyEvent {
    pub payload: serde_json::Value,
}

/// Service facade wiring the client and the status mirror together.
///
/// One instance per configuration; the client and mirror are owned here and
/// passed by reference, never looked up from shared storage. Only one send
/// and one status check are in flight at a time per instance.
pub struct SmsService {
    client: TextbeltClient,
    mirror: StatusMirror,
    reply_webhook_url: Option<WebhookUrl>,
    reply_events: broadcast::Sender<ReplyEvent>,
}

impl SmsService {
    /// Build a service around an existing client.
    pub fn new(client: TextbeltClient, reply_webhook_url: Option<WebhookUrl>) -> Self {
        let (reply_events, _) = broadcast::channel(REPLY_CHANNEL_CAPACITY);
        Self {
            mirror: StatusMirror::new(client.clone()),
            client,
            reply_webhook_url,
            reply_events,
        }
    }

    /// Build a service from host-stored settings.
    ///
    /// Validates the credential and webhook URL, and applies any endpoint
    /// overrides to the client.
    pub fn from_settings(settings: &Settings) -> Result<Self, TextbeltError> {
        let mut builder = TextbeltClient::builder(settings.api_key()?);
        if let Some(endpoint) = settings.send_endpoint.as_deref() {
            builder = builder.send_endpoint(endpoint);
        }
        if let Some(endpoint) = settings.status_endpoint.as_deref() {
            builder = builder.status_endpoint(endpoint);
        }

        Ok(Self::new(builder.build()?, settings.reply_webhook_url()?))
    }

    /// Send an SMS and start tracking its delivery status.
    ///
    /// Validates `phone` and `message`, attaches the configured reply webhook,
    /// and on success records the returned text id in the mirror and refreshes
    /// it once. Errors are logged and returned; nothing here panics.
    pub async fn send_sms(
        &mut self,
        phone: &str,
        message: &str,
    ) -> Result<SendSmsResponse, TextbeltError> {
        let phone = RawPhoneNumber::new(phone)?;
        let message = MessageText::new(message)?;

        let mut request = SendSms::new(phone.clone(), message.clone());
        if let Some(webhook_url) = &self.reply_webhook_url {
            request = request.with_webhook_url(webhook_url.clone());
        }

        let response = match self.client.send_sms(request).await {
            Ok(response) => response,
            Err(err) => {
                error!(phone = phone.raw(), error = %err, "failed to send SMS");
                return Err(err);
            }
        };

        info!(phone = phone.raw(), "SMS sent");
        if response.text_id.is_none() {
            warn!("send succeeded but the response carried no textId");
        }
        self.mirror.set_last_text_id(response.text_id.clone());
        self.mirror.update_message_info(phone, message);
        self.mirror.refresh().await;

        Ok(response)
    }

    /// Refresh the tracked message's delivery status.
    ///
    /// Suitable for a host polling cadence; a no-op until a send succeeds.
    pub async fn refresh_status(&mut self) {
        self.mirror.refresh().await;
    }

    /// Current observable state of the last sent message.
    pub fn mirror_state(&self) -> &MirrorState {
        self.mirror.state()
    }

    /// One-line display string for the last sent message.
    pub fn mirror_summary(&self) -> String {
        self.mirror.summary()
    }

    /// Republish an inbound reply payload to all subscribers.
    pub fn handle_reply_webhook(&self, payload: serde_json::Value) {
        info!("received SMS reply via webhook");
        // Send only fails when nobody is subscribed; replies are fire-and-forget.
        let _ = self.reply_events.send(ReplyEvent { payload });
    }

    /// Subscribe to inbound reply events.
    pub fn subscribe_replies(&self) -> broadcast::Receiver<ReplyEvent> {
        self.reply_events.subscribe()
    }
}
