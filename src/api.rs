//! Typed REST client for `/promotions`
//!
//! Re-exports [`promotion_api`]: records, search filters, the client, and the
//! transport seam.

pub use promotion_api::*;
