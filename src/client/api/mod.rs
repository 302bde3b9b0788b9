//! HTTP plumbing for the Marquee REST API.
//!
//! [`ApiClient`] owns the base URL and a handle to the auth store; every
//! request picks up the current bearer token from there. Responses are
//! unwrapped from the `{success, message, data}` envelope in one place so
//! the per-resource service modules stay one-liners.

#[cfg(feature = "web")]
pub mod actors;
#[cfg(feature = "web")]
pub mod analytics;
#[cfg(feature = "web")]
pub mod auth;
#[cfg(feature = "web")]
pub mod dramas;
#[cfg(feature = "web")]
pub mod episodes;
pub mod error;
#[cfg(feature = "web")]
pub mod genres;
#[cfg(feature = "web")]
pub mod seasons;
#[cfg(feature = "web")]
pub mod users;

pub use error::ApiError;

use serde::de::DeserializeOwned;
#[cfg(feature = "web")]
use serde::Serialize;

use dioxus::prelude::ReadableExt;

use crate::client::store::AuthStore;
use crate::model::api::Envelope;

/// The base URL is fixed at build time (wasm has no runtime environment),
/// which keeps the client `Copy` and cheap to hand to every event handler.
#[derive(Clone, Copy)]
pub struct ApiClient {
    base_url: &'static str,
    auth: AuthStore,
}

impl ApiClient {
    pub fn new(base_url: &'static str, auth: AuthStore) -> Self {
        Self { base_url, auth }
    }

    fn token(&self) -> Option<String> {
        self.auth.peek().token.clone()
    }

    fn url(&self, path: &str, query: &[(&str, String)]) -> String {
        if query.is_empty() {
            format!("{}{}", self.base_url, path)
        } else {
            let encoded = serde_urlencoded::to_string(query).unwrap_or_default();
            format!("{}{}?{}", self.base_url, path, encoded)
        }
    }

    #[cfg(feature = "web")]
    async fn send<T: DeserializeOwned>(
        &self,
        method: reqwasm::http::Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<String>,
    ) -> Result<Envelope<T>, ApiError> {
        use reqwasm::http::Request;

        let url = self.url(path, query);
        let mut request = Request::new(&url)
            .method(method)
            .header("Accept", "application/json");

        if let Some(token) = self.token() {
            request = request.header("Authorization", &format!("Bearer {token}"));
        }
        if let Some(body) = body {
            request = request.header("Content-Type", "application/json").body(body);
        }

        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;

        match response.status() {
            401 => Err(ApiError::Unauthorized),
            404 => Err(ApiError::NotFound),
            status if !(200..300).contains(&status) => {
                // failures usually still carry an envelope with a message
                let message = match response.json::<Envelope<serde_json::Value>>().await {
                    Ok(envelope) if !envelope.message.is_empty() => envelope.message,
                    _ => format!("request failed with status {status}"),
                };
                Err(ApiError::Server(message))
            }
            _ => response
                .json::<Envelope<T>>()
                .await
                .map_err(|err| ApiError::Decode(err.to_string())),
        }
    }

    #[cfg(feature = "web")]
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let envelope = self
            .send(reqwasm::http::Method::GET, path, query, None)
            .await?;
        unwrap_envelope(envelope)
    }

    #[cfg(feature = "web")]
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let envelope = self
            .send(reqwasm::http::Method::POST, path, &[], Some(encode_body(body)?))
            .await?;
        unwrap_envelope(envelope)
    }

    #[cfg(feature = "web")]
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let envelope = self
            .send(reqwasm::http::Method::PUT, path, &[], Some(encode_body(body)?))
            .await?;
        unwrap_envelope(envelope)
    }

    #[cfg(feature = "web")]
    pub async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let envelope = self
            .send(reqwasm::http::Method::PATCH, path, &[], Some(encode_body(body)?))
            .await?;
        unwrap_envelope(envelope)
    }

    /// DELETE; the envelope's `data` is ignored, only `success` matters.
    #[cfg(feature = "web")]
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let envelope: Envelope<serde_json::Value> = self
            .send(reqwasm::http::Method::DELETE, path, &[], None)
            .await?;
        check_envelope(&envelope)
    }
}

#[cfg(feature = "web")]
fn encode_body<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|err| ApiError::Decode(err.to_string()))
}

fn check_envelope<T>(envelope: &Envelope<T>) -> Result<(), ApiError> {
    if envelope.success {
        Ok(())
    } else if envelope.message.is_empty() {
        Err(ApiError::Server("the server rejected the request".into()))
    } else {
        Err(ApiError::Server(envelope.message.clone()))
    }
}

fn unwrap_envelope<T: DeserializeOwned>(envelope: Envelope<T>) -> Result<T, ApiError> {
    check_envelope(&envelope)?;
    envelope
        .data
        .ok_or_else(|| ApiError::Decode("response envelope is missing data".into()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{unwrap_envelope, ApiError};
    use crate::model::api::Envelope;

    /// Tests that a success envelope yields its data.
    ///
    /// Expected: Ok with the payload.
    #[test]
    fn unwraps_success_envelope() {
        let envelope: Envelope<i64> =
            serde_json::from_value(json!({ "success": true, "data": 42 })).unwrap();

        assert_eq!(unwrap_envelope(envelope), Ok(42));
    }

    /// Tests that `success:false` surfaces the server message even though
    /// the HTTP status was 2xx.
    ///
    /// Expected: ApiError::Server carrying the message.
    #[test]
    fn surfaces_business_failure_message() {
        let envelope: Envelope<i64> = serde_json::from_value(json!({
            "success": false,
            "message": "slug already in use",
        }))
        .unwrap();

        assert_eq!(
            unwrap_envelope(envelope),
            Err(ApiError::Server("slug already in use".into()))
        );
    }

    /// Tests the degenerate envelope that claims success without data.
    ///
    /// Expected: decode error rather than a panic or silent default.
    #[test]
    fn rejects_success_without_data() {
        let envelope: Envelope<i64> =
            serde_json::from_value(json!({ "success": true })).unwrap();

        assert!(matches!(unwrap_envelope(envelope), Err(ApiError::Decode(_))));
    }
}
