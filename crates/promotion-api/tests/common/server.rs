//! In-process promotions service used by over-the-wire tests.
//!
//! Implements the collection and record endpoints against an in-memory map,
//! returning `{"message": ...}` bodies on failure like the real service.

use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Json;
use promotion_api::{Promotion, PromotionPayload};
use serde_json::json;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

#[derive(Default)]
struct Store {
	next_id: u64,
	records: BTreeMap<u64, Promotion>,
}

type Shared = Arc<Mutex<Store>>;

/// Running test server. Aborted on drop.
pub struct TestServer {
	/// Base URL, e.g. `http://127.0.0.1:41234`
	pub url: String,
	task: JoinHandle<()>,
}

impl Drop for TestServer {
	fn drop(&mut self) {
		self.task.abort();
	}
}

/// Binds to a random local port and starts serving.
pub async fn spawn() -> TestServer {
	let store: Shared = Arc::new(Mutex::new(Store::default()));
	let app = Router::new()
		.route("/promotions", get(list).post(create))
		.route(
			"/promotions/:id",
			get(retrieve).put(update).delete(remove),
		)
		.with_state(store);

	let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
	let addr = listener.local_addr().unwrap();
	let task = tokio::spawn(async move {
		axum::serve(listener, app).await.unwrap();
	});

	TestServer {
		url: format!("http://{}", addr),
		task,
	}
}

fn not_found(id: &str) -> Response {
	(
		StatusCode::NOT_FOUND,
		Json(json!({"message": format!("Promotion with id '{}' was not found.", id)})),
	)
		.into_response()
}

async fn create(State(store): State<Shared>, Json(payload): Json<PromotionPayload>) -> Response {
	let mut store = store.lock().unwrap();
	store.next_id += 1;
	let id = store.next_id;
	let record = payload.with_id(id);
	store.records.insert(id, record.clone());
	(StatusCode::CREATED, Json(record)).into_response()
}

async fn retrieve(State(store): State<Shared>, Path(id): Path<String>) -> Response {
	let store = store.lock().unwrap();
	match id.parse::<u64>().ok().and_then(|n| store.records.get(&n)) {
		Some(record) => Json(record.clone()).into_response(),
		None => not_found(&id),
	}
}

async fn update(
	State(store): State<Shared>,
	Path(id): Path<String>,
	Json(payload): Json<PromotionPayload>,
) -> Response {
	let mut store = store.lock().unwrap();
	let Some(key) = id.parse::<u64>().ok().filter(|n| store.records.contains_key(n)) else {
		return not_found(&id);
	};
	let record = payload.with_id(key);
	store.records.insert(key, record.clone());
	Json(record).into_response()
}

async fn remove(State(store): State<Shared>, Path(id): Path<String>) -> Response {
	let mut store = store.lock().unwrap();
	if let Ok(key) = id.parse::<u64>() {
		store.records.remove(&key);
	}
	StatusCode::NO_CONTENT.into_response()
}

async fn list(
	State(store): State<Shared>,
	Query(params): Query<HashMap<String, String>>,
) -> Response {
	if params.get("available").is_some_and(|v| v != "true" && v != "false") {
		return (
			StatusCode::BAD_REQUEST,
			Json(json!({"message": "available must be true or false"})),
		)
			.into_response();
	}

	let store = store.lock().unwrap();
	let matches: Vec<Promotion> = store
		.records
		.values()
		.filter(|p| params.get("name").is_none_or(|n| &p.name == n))
		.filter(|p| params.get("category").is_none_or(|c| &p.category == c))
		.filter(|p| {
			params
				.get("available")
				.is_none_or(|a| p.available == (a == "true"))
		})
		.cloned()
		.collect();
	Json(matches).into_response()
}
