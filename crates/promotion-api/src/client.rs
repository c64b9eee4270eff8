//! Typed client for the promotions resource.

use crate::error::{ApiError, ApiResult};
use crate::model::{Promotion, PromotionPayload};
use crate::query::SearchQuery;
use crate::settings::ApiSettings;
use crate::transport::{ApiRequest, ApiResponse, HttpTransport};
use http::Method;
use serde::de::DeserializeOwned;

/// REST client for `/promotions`.
///
/// | Call | Method | Path |
/// |------|--------|------|
/// | [`create`](Self::create) | POST | `/promotions` |
/// | [`update`](Self::update) | PUT | `/promotions/{id}` |
/// | [`retrieve`](Self::retrieve) | GET | `/promotions/{id}` |
/// | [`delete`](Self::delete) | DELETE | `/promotions/{id}` |
/// | [`search`](Self::search) | GET | `/promotions?{query}` |
///
/// Identifiers are passed as they appear in the form. Nothing is validated
/// before sending; an empty identifier is the server's to reject.
#[derive(Debug, Clone)]
pub struct PromotionClient<T> {
	transport: T,
	settings: ApiSettings,
}

impl<T: HttpTransport> PromotionClient<T> {
	/// Creates a client over `transport`.
	pub fn new(transport: T, settings: ApiSettings) -> Self {
		Self {
			transport,
			settings,
		}
	}

	/// Underlying transport.
	pub fn transport(&self) -> &T {
		&self.transport
	}

	/// Creates a promotion and returns the stored record, including its new id.
	pub async fn create(&self, payload: &PromotionPayload) -> ApiResult<Promotion> {
		let request =
			ApiRequest::new(Method::POST, self.settings.collection_url()).with_json(payload)?;
		let response = self.execute(request).await?;
		decode(&response)
	}

	/// Replaces the promotion identified by `id`.
	pub async fn update(&self, id: &str, payload: &PromotionPayload) -> ApiResult<Promotion> {
		let request =
			ApiRequest::new(Method::PUT, self.settings.record_url(id)).with_json(payload)?;
		let response = self.execute(request).await?;
		decode(&response)
	}

	/// Fetches the promotion identified by `id`.
	pub async fn retrieve(&self, id: &str) -> ApiResult<Promotion> {
		let request = ApiRequest::new(Method::GET, self.settings.record_url(id));
		let response = self.execute(request).await?;
		decode(&response)
	}

	/// Deletes the promotion identified by `id`.
	///
	/// Any success status counts; the response body is ignored.
	pub async fn delete(&self, id: &str) -> ApiResult<()> {
		let request = ApiRequest::new(Method::DELETE, self.settings.record_url(id));
		self.execute(request).await?;
		Ok(())
	}

	/// Lists promotions matching `query`, in server order.
	pub async fn search(&self, query: &SearchQuery) -> ApiResult<Vec<Promotion>> {
		let url = self.settings.search_url(&query.to_query_string());
		let request = ApiRequest::new(Method::GET, url);
		let response = self.execute(request).await?;
		decode(&response)
	}

	async fn execute(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
		let method = request.method.clone();
		let url = request.url.clone();
		tracing::debug!(%method, %url, "sending promotion request");

		let response = self.transport.send(request).await.inspect_err(|err| {
			tracing::warn!(%method, %url, error = %err, "promotion request did not complete");
		})?;

		if !response.is_success() {
			let err = ApiError::from_response(response.status, &response.body);
			tracing::warn!(%method, %url, status = response.status, error = %err, "promotion request failed");
			return Err(err);
		}

		tracing::debug!(%method, %url, status = response.status, "promotion request succeeded");
		Ok(response)
	}
}

fn decode<R: DeserializeOwned>(response: &ApiResponse) -> ApiResult<R> {
	serde_json::from_slice(&response.body).map_err(|e| ApiError::deserialization(e.to_string()))
}
