//! Form binding for the promotions page
//!
//! This module provides access to promotion-pages, which maps the six form
//! buttons to REST calls and renders the outcome through a [`View`].
//!
//! ## Architecture
//!
//! - **Binder**: [`FormBinder`] runs each [`Action`] and keeps only the latest outcome
//! - **Rendering**: [`ViewState`] is turned into a [`Frame`] by [`render`]
//! - **Views**: [`MemoryView`] for headless use, `DomView` in the browser
//! - **Settings**: [`BinderSettings`] loaded from TOML

// Re-export all promotion-pages functionality
pub use promotion_pages::*;
