//! Endpoint configuration.

use serde::{Deserialize, Serialize};

/// Default collection path of the promotions resource.
pub const DEFAULT_COLLECTION_PATH: &str = "/promotions";

/// Where the promotions resource lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
	/// Scheme and authority prepended to every path, e.g. `http://localhost:8080`.
	///
	/// Empty means same-origin relative URLs, which is what a page served by the
	/// promotions service itself wants.
	pub base_url: String,
	/// Path of the collection endpoint.
	pub collection_path: String,
}

impl Default for ApiSettings {
	fn default() -> Self {
		Self {
			base_url: String::new(),
			collection_path: DEFAULT_COLLECTION_PATH.to_string(),
		}
	}
}

impl ApiSettings {
	/// Settings pointing at `base_url` with the default collection path.
	pub fn with_base_url(base_url: impl Into<String>) -> Self {
		Self {
			base_url: base_url.into(),
			..Self::default()
		}
	}

	/// URL of the collection endpoint.
	pub fn collection_url(&self) -> String {
		format!(
			"{}/{}",
			self.base_url.trim_end_matches('/'),
			self.collection_path.trim_matches('/')
		)
	}

	/// URL of the record endpoint for `id`.
	///
	/// The identifier is percent-encoded as a single path segment. An empty
	/// identifier is not rejected; the URL simply ends in `/`.
	pub fn record_url(&self, id: &str) -> String {
		format!("{}/{}", self.collection_url(), urlencoding::encode(id))
	}

	/// URL of the collection endpoint with a query string appended.
	pub fn search_url(&self, query_string: &str) -> String {
		if query_string.is_empty() {
			self.collection_url()
		} else {
			format!("{}?{}", self.collection_url(), query_string)
		}
	}
}
