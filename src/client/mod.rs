//! Client layer: orchestrates transport calls and classifies outcomes.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{
    ApiKey, CheckStatus, CheckStatusResponse, SendSms, SendSmsResponse, ValidationError,
};

const DEFAULT_SEND_ENDPOINT: &str = "https://textbelt.com/text";
const DEFAULT_STATUS_ENDPOINT: &str = "https://textbelt.com/status";

const GENERIC_API_ERROR: &str = "unknown error from the Textbelt API";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
pub(crate) struct HttpResponse {
    pub(crate) status: u16,
    pub(crate) body: String,
}

pub(crate) trait HttpTransport: Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;

    fn get<'a>(
        &'a self,
        url: &'a str,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.post(url).form(&params).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }

    fn get<'a>(
        &'a self,
        url: &'a str,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.get(url).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`TextbeltClient`].
///
/// The taxonomy mirrors what callers need to decide on:
/// - [`TextbeltError::Communication`] may be retried at the caller's discretion,
/// - [`TextbeltError::Authentication`] needs reconfiguration,
/// - [`TextbeltError::Api`] is a provider-reported logical failure.
pub enum TextbeltError {
    /// Transport-level failure (DNS, TLS, timeouts) or an undecodable body.
    #[error("communication error: {0}")]
    Communication(#[source] Box<dyn StdError + Send + Sync>),

    /// The provider rejected the API key (HTTP 401/403).
    #[error("invalid API key or unauthorized")]
    Authentication,

    /// The provider reported a logical failure.
    #[error("API error: {message}")]
    Api { message: String },

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`TextbeltClient`].
///
/// Use this when you need to customize the endpoints, timeout, or user-agent.
pub struct TextbeltClientBuilder {
    api_key: ApiKey,
    send_endpoint: String,
    status_endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl TextbeltClientBuilder {
    /// Create a builder with the default endpoints and no timeout/user-agent override.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            send_endpoint: DEFAULT_SEND_ENDPOINT.to_owned(),
            status_endpoint: DEFAULT_STATUS_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the Textbelt send endpoint URL.
    pub fn send_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.send_endpoint = endpoint.into();
        self
    }

    /// Override the Textbelt status endpoint URL (the text id is appended as a path segment).
    pub fn status_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.status_endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`TextbeltClient`].
    pub fn build(self) -> Result<TextbeltClient, TextbeltError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| TextbeltError::Communication(Box::new(err)))?;

        Ok(TextbeltClient {
            api_key: self.api_key,
            send_endpoint: self.send_endpoint,
            status_endpoint: self.status_endpoint,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level Textbelt client.
///
/// This type orchestrates form encoding, response decoding, and error
/// classification. By default it uses:
/// - `https://textbelt.com/text` for sending messages
/// - `https://textbelt.com/status/<textId>` for checking delivery status
///
/// The client holds no mutable state and never logs; every call is a pure
/// function of its arguments plus the remote response.
pub struct TextbeltClient {
    api_key: ApiKey,
    send_endpoint: String,
    status_endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl TextbeltClient {
    /// Create a client using the default endpoints.
    ///
    /// For more customization, use [`TextbeltClient::builder`].
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            send_endpoint: DEFAULT_SEND_ENDPOINT.to_owned(),
            status_endpoint: DEFAULT_STATUS_ENDPOINT.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: ApiKey) -> TextbeltClientBuilder {
        TextbeltClientBuilder::new(api_key)
    }

    /// Send an SMS message through Textbelt.
    ///
    /// Errors:
    /// - [`TextbeltError::Communication`] for transport failures or undecodable bodies,
    /// - [`TextbeltError::Authentication`] for HTTP 401/403, regardless of body content,
    /// - [`TextbeltError::Api`] when the decoded body has `success` missing or false,
    ///   carrying the body's `error` text when present.
    pub async fn send_sms(&self, request: SendSms) -> Result<SendSmsResponse, TextbeltError> {
        let mut params = vec![(ApiKey::FIELD.to_owned(), self.api_key.as_str().to_owned())];
        params.extend(crate::transport::encode_send_sms_form(&request));

        let response = self
            .http
            .post_form(&self.send_endpoint, params)
            .await
            .map_err(TextbeltError::Communication)?;

        if response.status == 401 || response.status == 403 {
            return Err(TextbeltError::Authentication);
        }

        let parsed = crate::transport::decode_send_sms_json_response(&response.body)
            .map_err(|err| TextbeltError::Communication(Box::new(err)))?;

        if !parsed.success {
            return Err(TextbeltError::Api {
                message: parsed.error.unwrap_or_else(|| GENERIC_API_ERROR.to_owned()),
            });
        }

        Ok(parsed)
    }

    /// Check delivery status for an already sent message.
    ///
    /// Errors:
    /// - [`TextbeltError::Communication`] for transport failures or undecodable bodies,
    /// - [`TextbeltError::Api`] for any HTTP status other than 200, carrying the
    ///   body's `error` text when present.
    pub async fn check_status(
        &self,
        request: CheckStatus,
    ) -> Result<CheckStatusResponse, TextbeltError> {
        let url = format!(
            "{}/{}",
            self.status_endpoint.trim_end_matches('/'),
            request.text_id().as_str()
        );

        let response = self
            .http
            .get(&url)
            .await
            .map_err(TextbeltError::Communication)?;

        if response.status != 200 {
            return Err(TextbeltError::Api {
                message: extract_error_message(&response.body),
            });
        }

        crate::transport::decode_check_status_json_response(&response.body)
            .map_err(|err| TextbeltError::Communication(Box::new(err)))
    }
}

fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned)
        })
        .unwrap_or_else(|| GENERIC_API_ERROR.to_owned())
}


#[cfg(test)]
mod tests {
    use crate::domain::{MessageText, RawPhoneNumber, TextId, WebhookUrl};

    use super::test_support::{FakeTransport, make_client};
    use super::*;

    fn assert_param(params: &[(String, String)], key: &str, value: &str) {
        assert!(
            params.iter().any(|(k, v)| k == key && v == value),
            "missing param {key}={value}; got: {params:?}"
        );
    }

    fn send_request() -> SendSms {
        SendSms::new(
            RawPhoneNumber::new("+15550001234").unwrap(),
            MessageText::new("Hello").unwrap(),
        )
    }

    #[tokio::test]
    async fn send_sms_includes_key_and_parses_success_response() {
        let transport = FakeTransport::respond(
            200,
            r#"{"success": true, "textId": "abc123", "quotaRemaining": 40}"#,
        );
        let client = make_client(ApiKey::new("test_key").unwrap(), transport.clone());

        let response = client.send_sms(send_request()).await.unwrap();
        assert!(response.success);
        assert_eq!(response.text_id, Some(TextId::new("abc123").unwrap()));
        assert_eq!(response.quota_remaining, Some(40));
        assert_eq!(response.error, None);

        let (url, params) = transport.last_request();
        assert_eq!(url.as_deref(), Some("https://example.invalid/text"));
        assert_param(&params, "key", "test_key");
        assert_param(&params, "phone", "+15550001234");
        assert_param(&params, "message", "Hello");
    }

    #[tokio::test]
    async fn send_sms_forwards_webhook_url() {
        let transport = FakeTransport::respond(200, r#"{"success": true, "textId": "abc123"}"#);
        let client = make_client(ApiKey::new("test_key").unwrap(), transport.clone());

        let request = send_request().with_webhook_url(
            WebhookUrl::new("https://example.com/api/webhook/sms_reply").unwrap(),
        );
        client.send_sms(request).await.unwrap();

        let (_, params) = transport.last_request();
        assert_param(
            &params,
            "webhookUrl",
            "https://example.com/api/webhook/sms_reply",
        );
    }

    #[tokio::test]
    async fn send_sms_maps_401_and_403_to_authentication_error() {
        for status in [401_u16, 403] {
            // Body content must not matter here, even a success-shaped one.
            let transport = FakeTransport::respond(status, r#"{"success": true}"#);
            let client = make_client(ApiKey::new("bad_key").unwrap(), transport);

            let err = client.send_sms(send_request()).await.unwrap_err();
            assert!(matches!(err, TextbeltError::Authentication), "{status}");
        }
    }

    #[tokio::test]
    async fn send_sms_maps_unsuccessful_body_to_api_error() {
        let transport =
            FakeTransport::respond(200, r#"{"success": false, "error": "Out of quota"}"#);
        let client = make_client(ApiKey::new("test_key").unwrap(), transport);

        let err = client.send_sms(send_request()).await.unwrap_err();
        match err {
            TextbeltError::Api { message } => assert_eq!(message, "Out of quota"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn send_sms_uses_generic_message_when_error_field_is_absent() {
        let transport = FakeTransport::respond(200, r#"{"success": false}"#);
        let client = make_client(ApiKey::new("test_key").unwrap(), transport);

        let err = client.send_sms(send_request()).await.unwrap_err();
        match err {
            TextbeltError::Api { message } => {
                assert_eq!(message, "unknown error from the Textbelt API");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn send_sms_maps_transport_failure_to_communication_error() {
        let transport = FakeTransport::new();
        transport.push_error("connection refused");
        let client = make_client(ApiKey::new("test_key").unwrap(), transport);

        let err = client.send_sms(send_request()).await.unwrap_err();
        match err {
            TextbeltError::Communication(source) => {
                assert!(source.to_string().contains("connection refused"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn send_sms_maps_invalid_json_to_communication_error() {
        let transport = FakeTransport::respond(200, "{ not json }");
        let client = make_client(ApiKey::new("test_key").unwrap(), transport);

        let err = client.send_sms(send_request()).await.unwrap_err();
        assert!(matches!(err, TextbeltError::Communication(_)));
    }

    #[tokio::test]
    async fn check_status_appends_text_id_and_parses_response() {
        let transport = FakeTransport::respond(200, r#"{"status": "delivered"}"#);
        let client = make_client(ApiKey::new("test_key").unwrap(), transport.clone());

        let request = CheckStatus::new(TextId::new("abc123").unwrap());
        let response = client.check_status(request).await.unwrap();
        assert_eq!(response.status, crate::domain::DeliveryStatus::Delivered);
        assert_eq!(
            response.raw.get("status").and_then(|v| v.as_str()),
            Some("delivered")
        );

        let (url, _) = transport.last_request();
        assert_eq!(url.as_deref(), Some("https://example.invalid/status/abc123"));
    }

    #[tokio::test]
    async fn check_status_maps_non_200_to_api_error() {
        let transport = FakeTransport::respond(404, r#"{"error": "Unknown textId"}"#);
        let client = make_client(ApiKey::new("test_key").unwrap(), transport);

        let request = CheckStatus::new(TextId::new("missing").unwrap());
        let err = client.check_status(request).await.unwrap_err();
        match err {
            TextbeltError::Api { message } => assert_eq!(message, "Unknown textId"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn check_status_uses_generic_message_for_bodyless_failures() {
        let transport = FakeTransport::respond(500, "");
        let client = make_client(ApiKey::new("test_key").unwrap(), transport);

        let request = CheckStatus::new(TextId::new("abc123").unwrap());
        let err = client.check_status(request).await.unwrap_err();
        match err {
            TextbeltError::Api { message } => {
                assert_eq!(message, "unknown error from the Textbelt API");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn check_status_maps_transport_failure_to_communication_error() {
        let transport = FakeTransport::new();
        transport.push_error("dns failure");
        let client = make_client(ApiKey::new("test_key").unwrap(), transport);

        let request = CheckStatus::new(TextId::new("abc123").unwrap());
        let err = client.check_status(request).await.unwrap_err();
        assert!(matches!(err, TextbeltError::Communication(_)));
    }

    #[test]
    fn builder_endpoint_overrides_are_applied() {
        let client = TextbeltClient::builder(ApiKey::new("key").unwrap())
            .send_endpoint("https://example.invalid/text")
            .status_endpoint("https://example.invalid/status")
            .build()
            .unwrap();
        assert_eq!(client.send_endpoint, "https://example.invalid/text");
        assert_eq!(client.status_endpoint, "https://example.invalid/status");
    }
}
