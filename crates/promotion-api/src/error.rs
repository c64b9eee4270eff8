//! Request failure type.
//!
//! Callers only ever surface one category to the user ("the request failed"),
//! but the variants keep the cause around so it can be logged.

use serde::Deserialize;
use thiserror::Error;

/// Result alias for promotion API calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Error returned when a promotion request does not succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
	/// The request never produced an HTTP response (connection refused, DNS, etc.)
	#[error("Network error: {0}")]
	Network(String),

	/// The request body could not be encoded.
	#[error("Serialization error: {0}")]
	Serialization(String),

	/// The response body did not have the expected shape.
	#[error("Deserialization error: {0}")]
	Deserialization(String),

	/// The server answered with a non-success status.
	#[error("Server error ({status}): {}", .message.as_deref().unwrap_or("no message"))]
	Server {
		/// HTTP status code
		status: u16,
		/// The `message` field of the JSON error body, if there was one
		message: Option<String>,
	},
}

/// Error body shape returned by the promotions service.
#[derive(Debug, Deserialize)]
struct ErrorBody {
	message: Option<String>,
}

impl ApiError {
	/// Create a network error
	pub fn network(msg: impl Into<String>) -> Self {
		Self::Network(msg.into())
	}

	/// Create a serialization error
	pub fn serialization(msg: impl Into<String>) -> Self {
		Self::Serialization(msg.into())
	}

	/// Create a deserialization error
	pub fn deserialization(msg: impl Into<String>) -> Self {
		Self::Deserialization(msg.into())
	}

	/// Builds a server error from a non-success status and its raw body.
	///
	/// The body is expected to be a JSON object with a `message` field. Any
	/// other body (empty, HTML, malformed JSON) yields `message: None`.
	pub fn from_response(status: u16, body: &[u8]) -> Self {
		let message = serde_json::from_slice::<ErrorBody>(body)
			.ok()
			.and_then(|b| b.message);
		Self::Server { status, message }
	}

	/// Returns the HTTP status if the server responded.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Server { status, .. } => Some(*status),
			_ => None,
		}
	}

	/// Text shown to the user for this failure.
	///
	/// The server's own `message` is used verbatim when present. Failures that
	/// carry no server message fall back to the display text of the error.
	pub fn user_message(&self) -> String {
		match self {
			Self::Server {
				message: Some(message),
				..
			} => message.clone(),
			other => other.to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_from_response_reads_message_field() {
		let err = ApiError::from_response(404, br#"{"message": "Promotion with id '3' was not found."}"#);

		assert_eq!(err.status(), Some(404));
		assert_eq!(err.user_message(), "Promotion with id '3' was not found.");
	}

	#[rstest]
	#[case(b"".as_slice())]
	#[case(b"<html>oops</html>".as_slice())]
	#[case(br#"{"error": "x"}"#.as_slice())]
	fn test_from_response_without_message(#[case] body: &[u8]) {
		let err = ApiError::from_response(500, body);

		assert_eq!(
			err,
			ApiError::Server {
				status: 500,
				message: None
			}
		);
		assert_eq!(err.user_message(), "Server error (500): no message");
	}

	#[rstest]
	fn test_network_error_user_message() {
		let err = ApiError::network("connection refused");
		assert_eq!(err.status(), None);
		assert_eq!(err.user_message(), "Network error: connection refused");
	}
}
