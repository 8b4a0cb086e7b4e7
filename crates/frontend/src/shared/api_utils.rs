//! API utilities for frontend-backend communication
//!
//! All requests go to one fixed origin. Responses are decoded by HTTP
//! status: 2xx bodies as the expected type, anything else as [`ApiError`].

use contracts::shared::api_error::ApiError;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Origin used when `ORDERS_API_BASE` was not set at build time
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Get the base URL for API requests
pub fn api_base() -> &'static str {
    option_env!("ORDERS_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/orders/7");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base().trim_end_matches('/'), path)
}

/// Outcome of a failed API call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    /// The service rejected the request with an `{error, message}` body
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Network failure, or a body that could not be decoded
    #[error("transport error: {0}")]
    Transport(String),
}

/// Decides the outcome from the status alone: a 2xx body must be `T`,
/// anything else must be an `{error, message}` body.
pub fn decode_body<T: DeserializeOwned>(
    ok: bool,
    status: u16,
    text: &str,
) -> Result<T, ClientError> {
    if ok {
        return serde_json::from_str::<T>(text)
            .map_err(|e| ClientError::Transport(format!("Failed to parse response: {}", e)));
    }

    match serde_json::from_str::<ApiError>(text) {
        Ok(err) => Err(ClientError::Api(err)),
        Err(_) => Err(ClientError::Transport(format!("HTTP error: {}", status))),
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let text = response
        .text()
        .await
        .map_err(|e| ClientError::Transport(format!("Failed to read response: {}", e)))?;
    decode_body(response.ok(), response.status(), &text)
}

fn send_failed(e: gloo_net::Error) -> ClientError {
    ClientError::Transport(format!("Failed to send request: {}", e))
}

/// `GET {base}{path}`
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ClientError> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(send_failed)?;
    decode(response).await
}

/// `POST {base}{path}` with a JSON body
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ClientError> {
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| ClientError::Transport(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(send_failed)?;
    decode(response).await
}

/// `POST {base}{path}` without a body
pub async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, ClientError> {
    let response = Request::post(&api_url(path))
        .send()
        .await
        .map_err(send_failed)?;
    decode(response).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::api_error::ApiErrorKind;

    #[test]
    fn api_url_joins_base_and_path() {
        let url = api_url("/orders?status=PAID");
        assert!(url.ends_with("/orders?status=PAID"));
        assert!(!url.contains("//orders"));
    }

    #[test]
    fn success_body_decodes_as_payload() {
        let ids: Vec<i32> = decode_body(true, 200, "[1, 2]").unwrap();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn success_status_with_wrong_shape_is_transport() {
        // an error-shaped body on 200 is not an ApiError
        let result: Result<Vec<i32>, _> =
            decode_body(true, 200, r#"{"error":"INVALID_STATUS","message":"x"}"#);
        assert!(matches!(result, Err(ClientError::Transport(_))));
    }

    #[test]
    fn error_status_with_error_body_is_api() {
        let result: Result<Vec<i32>, _> = decode_body(
            false,
            409,
            r#"{"error":"INVALID_STATUS","message":"Only PAID order can be shipped"}"#,
        );
        assert_eq!(
            result,
            Err(ClientError::Api(ApiError::new(
                ApiErrorKind::InvalidStatus,
                "Only PAID order can be shipped"
            )))
        );
    }

    #[test]
    fn error_status_with_other_body_is_transport() {
        let result: Result<Vec<i32>, _> = decode_body(false, 502, "<html>Bad Gateway</html>");
        assert_eq!(result, Err(ClientError::Transport("HTTP error: 502".into())));
    }

    #[test]
    fn api_errors_display_verbatim() {
        let err = ClientError::from(ApiError::new(ApiErrorKind::OrderNotFound, "Order not found"));
        assert_eq!(err.to_string(), "ORDER_NOT_FOUND: Order not found");
    }
}
