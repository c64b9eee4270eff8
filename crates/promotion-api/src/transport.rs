//! HTTP transport seam.
//!
//! [`PromotionClient`](crate::PromotionClient) builds requests and interprets
//! responses; moving bytes is delegated to an [`HttpTransport`]. The default
//! implementation is [`ReqwestTransport`], which runs both natively and in the
//! browser (reqwest uses `fetch` on `wasm32`).

use crate::error::{ApiError, ApiResult};
use async_trait::async_trait;
use http::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

/// Content type declared on every request.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A request ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
	/// HTTP method
	pub method: Method,
	/// Absolute or origin-relative URL
	pub url: String,
	/// JSON body, `None` for bodiless requests
	pub body: Option<Vec<u8>>,
}

impl ApiRequest {
	/// Creates a request without a body.
	pub fn new(method: Method, url: impl Into<String>) -> Self {
		Self {
			method,
			url: url.into(),
			body: None,
		}
	}

	/// Attaches a JSON-encoded body.
	pub fn with_json<B: serde::Serialize>(mut self, body: &B) -> ApiResult<Self> {
		let bytes =
			serde_json::to_vec(body).map_err(|e| ApiError::serialization(e.to_string()))?;
		self.body = Some(bytes);
		Ok(self)
	}
}

/// A raw response: status and body bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
	/// HTTP status code
	pub status: u16,
	/// Response body
	pub body: Vec<u8>,
}

impl ApiResponse {
	/// Creates a response.
	pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
		Self {
			status,
			body: body.into(),
		}
	}

	/// Creates a response whose body is `value` encoded as JSON.
	pub fn json(status: u16, value: &serde_json::Value) -> Self {
		Self::new(status, value.to_string())
	}

	/// Returns `true` for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Sends requests and returns raw responses.
///
/// Implementations return `Err` only when no HTTP response was obtained.
/// Non-success statuses are responses, not errors, at this layer.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait HttpTransport {
	/// Sends `request` and waits for the complete response.
	async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse>;
}

/// [`HttpTransport`] backed by a [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
	client: reqwest::Client,
}

impl ReqwestTransport {
	/// Creates a transport with a default client.
	pub fn new() -> Self {
		Self::default()
	}
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl HttpTransport for ReqwestTransport {
	async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
		let mut builder = self
			.client
			.request(request.method, &request.url)
			.header(CONTENT_TYPE, JSON_CONTENT_TYPE)
			.header(ACCEPT, JSON_CONTENT_TYPE);

		if let Some(body) = request.body {
			builder = builder.body(body);
		}

		let response = builder
			.send()
			.await
			.map_err(|e| ApiError::network(e.to_string()))?;

		let status = response.status().as_u16();
		let body = response
			.bytes()
			.await
			.map_err(|e| ApiError::network(e.to_string()))?;

		Ok(ApiResponse::new(status, body.to_vec()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(200, true)]
	#[case(201, true)]
	#[case(204, true)]
	#[case(301, false)]
	#[case(404, false)]
	#[case(500, false)]
	fn test_is_success(#[case] status: u16, #[case] expected: bool) {
		assert_eq!(ApiResponse::new(status, Vec::new()).is_success(), expected);
	}

	#[rstest]
	fn test_with_json_encodes_body() {
		let request = ApiRequest::new(Method::POST, "/promotions")
			.with_json(&json!({"name": "x"}))
			.unwrap();

		assert_eq!(request.body.as_deref(), Some(br#"{"name":"x"}"#.as_slice()));
	}
}
