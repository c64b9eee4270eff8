//! Test doubles for [`HttpTransport`].
//!
//! [`ScriptedTransport`] answers requests from a queue of prepared outcomes
//! and records every request it receives, so callers can assert on both the
//! requests a component sends and how it reacts to the replies.

use crate::error::{ApiError, ApiResult};
use crate::transport::{ApiRequest, ApiResponse, HttpTransport};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

/// Transport that replays queued outcomes in order.
///
/// Clones share the same queue and request log.
///
/// When the queue is empty, requests fail with a network error.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTransport {
	replies: Arc<Mutex<VecDeque<ApiResult<ApiResponse>>>>,
	requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl ScriptedTransport {
	/// Creates a transport with an empty script.
	pub fn new() -> Self {
		Self::default()
	}

	/// Queues a raw response.
	pub fn push(&self, response: ApiResponse) {
		self.replies.lock().push_back(Ok(response));
	}

	/// Queues a response with a JSON body.
	pub fn push_json(&self, status: u16, body: serde_json::Value) {
		self.push(ApiResponse::json(status, &body));
	}

	/// Queues a transport-level failure.
	pub fn push_error(&self, error: ApiError) {
		self.replies.lock().push_back(Err(error));
	}

	/// Requests received so far.
	pub fn requests(&self) -> Vec<ApiRequest> {
		self.requests.lock().clone()
	}
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl HttpTransport for ScriptedTransport {
	async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
		self.requests.lock().push(request);
		self.replies
			.lock()
			.pop_front()
			.unwrap_or_else(|| Err(ApiError::network("no scripted reply")))
	}
}
