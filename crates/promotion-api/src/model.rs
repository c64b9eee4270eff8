//! Promotion record types.
//!
//! The wire contract distinguishes between what the server sends back
//! ([`Promotion`], which carries an identifier) and what the client sends
//! ([`PromotionPayload`], which never does). Keeping them as separate types
//! means a client-supplied `id` on create cannot be expressed.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Server-assigned identifier of a promotion.
///
/// Backends differ in whether they emit identifiers as JSON integers or
/// strings, so both are accepted. The value is kept in its textual form since
/// that is what ends up in the form field and in record URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PromotionId(String);

impl PromotionId {
	/// Creates an identifier from its textual form.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the identifier as text.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for PromotionId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<u64> for PromotionId {
	fn from(value: u64) -> Self {
		Self(value.to_string())
	}
}

impl From<&str> for PromotionId {
	fn from(value: &str) -> Self {
		Self(value.to_string())
	}
}

impl Serialize for PromotionId {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		// Integers go back out as integers so a round trip preserves the shape
		match self.0.parse::<i64>() {
			Ok(n) if n.to_string() == self.0 => serializer.serialize_i64(n),
			_ => serializer.serialize_str(&self.0),
		}
	}
}

impl<'de> Deserialize<'de> for PromotionId {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		#[derive(Deserialize)]
		#[serde(untagged)]
		enum RawId {
			Int(i64),
			Uint(u64),
			Text(String),
		}

		Ok(match RawId::deserialize(deserializer)? {
			RawId::Int(n) => Self(n.to_string()),
			RawId::Uint(n) => Self(n.to_string()),
			RawId::Text(s) => Self(s),
		})
	}
}

/// A promotion record as returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promotion {
	/// Server-assigned identifier, absent until the record is created.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<PromotionId>,
	/// Display name.
	#[serde(default)]
	pub name: String,
	/// Category label.
	#[serde(default)]
	pub category: String,
	/// Whether the promotion is currently available.
	#[serde(default)]
	pub available: bool,
	/// Target gender.
	#[serde(default)]
	pub gender: String,
	/// Date-like string. Not validated on the client.
	#[serde(default)]
	pub birthday: String,
}

impl Promotion {
	/// Returns the payload that would recreate this record's editable fields.
	pub fn payload(&self) -> PromotionPayload {
		PromotionPayload {
			name: self.name.clone(),
			category: self.category.clone(),
			available: self.available,
			gender: self.gender.clone(),
			birthday: self.birthday.clone(),
		}
	}
}

/// Request body for create and update.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PromotionPayload {
	/// Display name.
	pub name: String,
	/// Category label.
	pub category: String,
	/// Availability flag, serialized as a JSON boolean.
	pub available: bool,
	/// Target gender.
	pub gender: String,
	/// Date-like string.
	pub birthday: String,
}

impl PromotionPayload {
	/// Attaches a server-assigned identifier, producing a full record.
	pub fn with_id(self, id: impl Into<PromotionId>) -> Promotion {
		Promotion {
			id: Some(id.into()),
			name: self.name,
			category: self.category,
			available: self.available,
			gender: self.gender,
			birthday: self.birthday,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use assert_json_diff::assert_json_eq;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(json!(7), "7")]
	#[case(json!("7"), "7")]
	#[case(json!("a1b2"), "a1b2")]
	fn test_id_accepts_integer_and_string(#[case] raw: serde_json::Value, #[case] expected: &str) {
		let id: PromotionId = serde_json::from_value(raw).unwrap();
		assert_eq!(id.as_str(), expected);
	}

	#[rstest]
	fn test_id_serializes_numeric_text_as_integer() {
		assert_eq!(serde_json::to_value(PromotionId::from(7u64)).unwrap(), json!(7));
		assert_eq!(
			serde_json::to_value(PromotionId::from("007")).unwrap(),
			json!("007")
		);
	}

	#[rstest]
	fn test_promotion_missing_fields_use_defaults() {
		let promotion: Promotion = serde_json::from_value(json!({"id": 3, "name": "x"})).unwrap();

		assert_eq!(promotion.id, Some(PromotionId::from(3u64)));
		assert_eq!(promotion.name, "x");
		assert_eq!(promotion.category, "");
		assert!(!promotion.available);
	}

	#[rstest]
	fn test_payload_has_no_id_key() {
		let payload = PromotionPayload {
			name: "flash sale".to_string(),
			category: "electronics".to_string(),
			available: true,
			gender: "unisex".to_string(),
			birthday: "2024-01-01".to_string(),
		};

		assert_json_eq!(
			serde_json::to_value(&payload).unwrap(),
			json!({
				"name": "flash sale",
				"category": "electronics",
				"available": true,
				"gender": "unisex",
				"birthday": "2024-01-01"
			})
		);
	}

	#[rstest]
	fn test_with_id_then_payload_preserves_fields() {
		let payload = PromotionPayload {
			name: "n".to_string(),
			..Default::default()
		};
		let promotion = payload.clone().with_id(9u64);

		assert_eq!(promotion.id, Some(PromotionId::from(9u64)));
		assert_eq!(promotion.payload(), payload);
	}
}
