//! Over-the-wire tests for `PromotionClient` with `ReqwestTransport`.
//!
//! Each test starts an in-process promotions service on a random port.

#![cfg(not(target_arch = "wasm32"))]

mod common;

use common::server::{self, TestServer};
use promotion_api::{
	ApiError, ApiSettings, PromotionClient, PromotionPayload, ReqwestTransport, SearchQuery,
};
use rstest::{fixture, rstest};

#[fixture]
fn flash_sale() -> PromotionPayload {
	PromotionPayload {
		name: "flash sale".to_string(),
		category: "electronics".to_string(),
		available: true,
		gender: "unisex".to_string(),
		birthday: "2024-01-01".to_string(),
	}
}

fn client_for(server: &TestServer) -> PromotionClient<ReqwestTransport> {
	PromotionClient::new(
		ReqwestTransport::new(),
		ApiSettings::with_base_url(server.url.clone()),
	)
}

#[rstest]
#[tokio::test]
async fn test_create_then_retrieve_round_trip(flash_sale: PromotionPayload) {
	let server = server::spawn().await;
	let client = client_for(&server);

	let created = client.create(&flash_sale).await.unwrap();
	let id = created.id.clone().unwrap();
	let fetched = client.retrieve(id.as_str()).await.unwrap();

	assert_eq!(fetched, created);
	assert_eq!(fetched.payload(), flash_sale);
}

#[rstest]
#[tokio::test]
async fn test_update_replaces_record(flash_sale: PromotionPayload) {
	let server = server::spawn().await;
	let client = client_for(&server);
	let created = client.create(&flash_sale).await.unwrap();
	let id = created.id.unwrap();

	let changed = PromotionPayload {
		available: false,
		..flash_sale
	};
	let updated = client.update(id.as_str(), &changed).await.unwrap();

	assert!(!updated.available);
	assert!(!client.retrieve(id.as_str()).await.unwrap().available);
}

#[rstest]
#[tokio::test]
async fn test_delete_then_retrieve_reports_server_message(flash_sale: PromotionPayload) {
	let server = server::spawn().await;
	let client = client_for(&server);
	let id = client.create(&flash_sale).await.unwrap().id.unwrap();

	client.delete(id.as_str()).await.unwrap();
	let err = client.retrieve(id.as_str()).await.unwrap_err();

	assert_eq!(err.status(), Some(404));
	assert_eq!(
		err.user_message(),
		format!("Promotion with id '{}' was not found.", id)
	);
}

#[rstest]
#[tokio::test]
async fn test_search_filters_by_query(flash_sale: PromotionPayload) {
	let server = server::spawn().await;
	let client = client_for(&server);
	client.create(&flash_sale).await.unwrap();
	client
		.create(&PromotionPayload {
			name: "clearance".to_string(),
			available: false,
			..flash_sale.clone()
		})
		.await
		.unwrap();

	let all = client.search(&SearchQuery::new()).await.unwrap();
	let available = client
		.search(&SearchQuery::new().available(true))
		.await
		.unwrap();
	let by_name = client
		.search(&SearchQuery::new().name("flash sale"))
		.await
		.unwrap();

	assert_eq!(all.len(), 2);
	assert_eq!(available.len(), 1);
	assert_eq!(available[0].name, "flash sale");
	assert_eq!(by_name.len(), 1);
}

#[rstest]
#[tokio::test]
async fn test_unreachable_server_is_network_error() {
	// Bind then drop to get a port nothing listens on
	let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
	let addr = listener.local_addr().unwrap();
	drop(listener);

	let client = PromotionClient::new(
		ReqwestTransport::new(),
		ApiSettings::with_base_url(format!("http://{}", addr)),
	);

	let err = client.retrieve("1").await.unwrap_err();
	assert!(matches!(err, ApiError::Network(_)));
}
