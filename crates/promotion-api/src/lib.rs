//! REST client for promotion records.
//!
//! This crate covers everything between a filled-in form and the wire:
//!
//! - [`model`]: the [`Promotion`] record and its [`PromotionPayload`] request body
//! - [`query`]: search filter construction ([`SearchQuery`])
//! - [`client`]: typed create/update/retrieve/delete/search calls ([`PromotionClient`])
//! - [`transport`]: the [`HttpTransport`] seam and its reqwest implementation
//! - [`error`]: the single "request failed" error type ([`ApiError`])
//! - [`settings`]: endpoint configuration ([`ApiSettings`])
//! - [`testing`]: a scripted transport for tests
//!
//! ## Example
//!
//! ```no_run
//! use promotion_api::{ApiSettings, PromotionClient, ReqwestTransport, SearchQuery};
//!
//! # async fn run() -> Result<(), promotion_api::ApiError> {
//! let client = PromotionClient::new(
//!     ReqwestTransport::new(),
//!     ApiSettings::with_base_url("http://localhost:8080"),
//! );
//!
//! let available = client.search(&SearchQuery::new().available(true)).await?;
//! for promotion in available {
//!     println!("{}", promotion.name);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod client;
pub mod error;
pub mod model;
pub mod query;
pub mod settings;
pub mod testing;
pub mod transport;

pub use client::PromotionClient;
pub use error::{ApiError, ApiResult};
pub use model::{Promotion, PromotionId, PromotionPayload};
pub use query::SearchQuery;
pub use settings::ApiSettings;
pub use transport::{ApiRequest, ApiResponse, HttpTransport, ReqwestTransport};
