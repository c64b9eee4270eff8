//! # Promotion Desk
//!
//! Browser-side client for a REST "promotions" resource.
//!
//! A page holds a single-record form (id, name, category, available, gender,
//! birthday), a flash message area, a results container, and six buttons:
//! Create, Update, Retrieve, Delete, Search, and Clear. This crate binds that
//! form to `/promotions` and renders every outcome back into the page.
//!
//! ## Feature Flags
//!
//! - `pages` (default) - Form binding ([`pages::FormBinder`], views, settings)
//! - `debug-hooks` - `debug_log!` output in debug builds
//! - `console_error_panic_hook` - Readable panics in the browser console
//! - `full` - All features enabled
//!
//! Without `pages` only the REST client in [`api`] is compiled.
//!
//! ## Quick Example
//!
//! ```rust,no_run
//! use promotion_desk::prelude::*;
//!
//! # async fn run() {
//! let client = PromotionClient::new(
//! 	ReqwestTransport::new(),
//! 	ApiSettings::with_base_url("http://localhost:8080"),
//! );
//! let binder = FormBinder::new(client, MemoryView::new(), FlashMessages::default());
//!
//! binder.with_view_mut(|view| view.set_input(FormField::Name, "flash sale"));
//! binder.dispatch(Action::Search).await;
//! # }
//! ```
//!
//! In the browser, `promotion_pages::mount` attaches the same binder to the
//! live document.

pub mod api;
#[cfg(feature = "pages")]
pub mod pages;

pub use promotion_api::{ApiError, ApiResult, Promotion, PromotionClient, PromotionId};

#[cfg(feature = "pages")]
pub use promotion_pages::{Action, BinderSettings, Dispatch, FormBinder};

/// Commonly used types.
pub mod prelude {
	pub use crate::api::{
		ApiError, ApiResult, ApiSettings, HttpTransport, Promotion, PromotionClient, PromotionId,
		PromotionPayload, ReqwestTransport, SearchQuery,
	};

	#[cfg(feature = "pages")]
	pub use crate::pages::{
		Action, BinderSettings, Dispatch, DomIds, FlashMessages, FormBinder, FormField,
		MemoryView, PromotionForm, View, ViewState,
	};
}
