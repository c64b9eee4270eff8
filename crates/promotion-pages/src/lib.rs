//! # promotion-pages
//!
//! Binds the promotion form on a web page to the promotions REST resource.
//!
//! ## Overview
//!
//! The page holds six inputs (`id`, `name`, `category`, `available`,
//! `gender`, `birthday`), a flash message area, a results container, and six
//! buttons. Each button maps to an [`Action`]; the [`FormBinder`] runs the
//! action through a [`promotion_api::PromotionClient`] and writes the outcome
//! back through a [`View`].
//!
//! ## Architecture
//!
//! ```text
//! button ──▶ FormBinder::dispatch ──▶ PromotionClient ──▶ HttpTransport
//!                 │
//!                 ├── RequestSequencer (latest action wins)
//!                 └── ViewState ──render──▶ Frame ──▶ View::apply
//! ```
//!
//! - [`form`]: input values and their conversion to and from records
//! - [`view`]: state, pure rendering, the [`View`] seam, and [`MemoryView`]
//! - [`table`]: results table markup
//! - [`sequencer`]: request ordering
//! - [`settings`]: element identifiers, flash texts, API location
//! - `dom` (WASM only): the browser [`View`] and [`mount`](dom::mount)
//!
//! ## Example
//!
//! ```no_run
//! use promotion_api::{ApiSettings, PromotionClient, ReqwestTransport};
//! use promotion_pages::{Action, FlashMessages, FormBinder, MemoryView};
//!
//! # async fn run() {
//! let client = PromotionClient::new(
//! 	ReqwestTransport::new(),
//! 	ApiSettings::with_base_url("http://localhost:8080"),
//! );
//! let binder = FormBinder::new(client, MemoryView::new(), FlashMessages::default());
//! binder.dispatch(Action::Search).await;
//! # }
//! ```

#![warn(missing_docs)]

pub mod binder;
pub mod form;
pub mod logging;
pub mod sequencer;
pub mod settings;
pub mod table;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use binder::{Action, Dispatch, FormBinder};
pub use form::{FormField, PromotionForm, coerce_available};
pub use sequencer::{RequestSequencer, Ticket};
pub use settings::{BinderSettings, DomIds, FlashMessages, SettingsError};
pub use table::{PromotionColumn, render_results_table};
pub use view::{Frame, MemoryView, View, ViewState, render};

#[cfg(target_arch = "wasm32")]
pub use dom::{DomError, DomView, PageBinder, mount};

#[doc(hidden)]
pub mod __private {
	pub use tracing;
	#[cfg(target_arch = "wasm32")]
	pub use web_sys;
}
