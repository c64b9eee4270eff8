//! Binder configuration.
//!
//! Every value has a default matching the stock promotions page, so an empty
//! TOML document is a valid configuration:
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8080"
//!
//! [messages]
//! deleted = "Promotion deleted."
//!
//! [dom]
//! flash = "status"
//! ```

use promotion_api::ApiSettings;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
	/// The document is not valid TOML or has wrongly typed values.
	#[error("invalid binder settings: {0}")]
	Toml(#[from] toml::de::Error),
}

/// Top-level binder configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BinderSettings {
	/// Where the promotions resource lives.
	pub api: ApiSettings,
	/// Fixed flash texts.
	pub messages: FlashMessages,
	/// Element identifiers of the page.
	pub dom: DomIds,
}

impl BinderSettings {
	/// Parses settings from a TOML document. Missing keys take their defaults.
	pub fn from_toml_str(source: &str) -> Result<Self, SettingsError> {
		Ok(toml::from_str(source)?)
	}
}

/// Flash texts that do not come from the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlashMessages {
	/// Shown after a successful create, update, retrieve, or search.
	pub success: String,
	/// Shown after a successful delete.
	pub deleted: String,
	/// Shown after a failed delete, in place of the server's message.
	pub delete_failed: String,
}

impl Default for FlashMessages {
	fn default() -> Self {
		Self {
			success: "Success".to_string(),
			deleted: "promotion has been Deleted!".to_string(),
			delete_failed: "Server error!".to_string(),
		}
	}
}

/// Element identifiers the page must provide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomIds {
	/// Identifier input
	pub id: String,
	/// Name input
	pub name: String,
	/// Category input
	pub category: String,
	/// Availability input
	pub available: String,
	/// Gender input
	pub gender: String,
	/// Birthday input
	pub birthday: String,
	/// Flash message output
	pub flash: String,
	/// Search results container
	pub results: String,
	/// Create button
	pub create_button: String,
	/// Update button
	pub update_button: String,
	/// Retrieve button
	pub retrieve_button: String,
	/// Delete button
	pub delete_button: String,
	/// Clear button
	pub clear_button: String,
	/// Search button
	pub search_button: String,
}

impl Default for DomIds {
	fn default() -> Self {
		Self {
			id: "promotion_id".to_string(),
			name: "promotion_name".to_string(),
			category: "promotion_category".to_string(),
			available: "promotion_available".to_string(),
			gender: "promotion_gender".to_string(),
			birthday: "promotion_birthday".to_string(),
			flash: "flash_message".to_string(),
			results: "search_results".to_string(),
			create_button: "create-btn".to_string(),
			update_button: "update-btn".to_string(),
			retrieve_button: "retrieve-btn".to_string(),
			delete_button: "delete-btn".to_string(),
			clear_button: "clear-btn".to_string(),
			search_button: "search-btn".to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_empty_document_gives_defaults() {
		let settings = BinderSettings::from_toml_str("").unwrap();
		assert_eq!(settings, BinderSettings::default());
		assert_eq!(settings.api.collection_path, "/promotions");
		assert_eq!(settings.dom.flash, "flash_message");
	}

	#[rstest]
	fn test_partial_override() {
		let settings = BinderSettings::from_toml_str(
			r#"
			[api]
			base_url = "http://localhost:8080"

			[messages]
			delete_failed = "Could not delete"
			"#,
		)
		.unwrap();

		assert_eq!(settings.api.base_url, "http://localhost:8080");
		assert_eq!(settings.api.collection_path, "/promotions");
		assert_eq!(settings.messages.delete_failed, "Could not delete");
		assert_eq!(settings.messages.success, "Success");
	}

	#[rstest]
	fn test_wrong_type_is_error() {
		let err = BinderSettings::from_toml_str("[api]\nbase_url = 3").unwrap_err();
		assert!(err.to_string().starts_with("invalid binder settings"));
	}
}
