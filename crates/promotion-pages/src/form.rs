//! Form state for a single promotion.
//!
//! [`PromotionForm`] mirrors the six inputs of the page exactly as text, the
//! same way the browser holds them. Conversion to and from the typed API
//! records happens here and nowhere else.

use crate::settings::DomIds;
use promotion_api::{Promotion, PromotionPayload, SearchQuery};

/// The only form value that counts as "available".
pub const AVAILABLE_TRUE: &str = "true";
/// Form value written for an unavailable promotion.
pub const AVAILABLE_FALSE: &str = "false";

/// Coerces the availability input to a boolean.
///
/// Only the exact string `"true"` is true. Case variants, whitespace, and the
/// empty string are all false.
pub fn coerce_available(value: &str) -> bool {
	value == AVAILABLE_TRUE
}

/// One input of the promotion form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
	/// Server-assigned identifier
	Id,
	/// Display name
	Name,
	/// Category label
	Category,
	/// Availability flag (`"true"` / `"false"`)
	Available,
	/// Target gender
	Gender,
	/// Date-like string
	Birthday,
}

impl FormField {
	/// Every field, in form order.
	pub const ALL: [FormField; 6] = [
		FormField::Id,
		FormField::Name,
		FormField::Category,
		FormField::Available,
		FormField::Gender,
		FormField::Birthday,
	];

	/// Element identifier of this field's input.
	pub fn dom_id<'a>(&self, ids: &'a DomIds) -> &'a str {
		match self {
			FormField::Id => &ids.id,
			FormField::Name => &ids.name,
			FormField::Category => &ids.category,
			FormField::Available => &ids.available,
			FormField::Gender => &ids.gender,
			FormField::Birthday => &ids.birthday,
		}
	}
}

/// Text contents of the promotion form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromotionForm {
	/// Identifier input
	pub id: String,
	/// Name input
	pub name: String,
	/// Category input
	pub category: String,
	/// Availability input, `"true"` or `"false"` once filled from a record
	pub available: String,
	/// Gender input
	pub gender: String,
	/// Birthday input
	pub birthday: String,
}

impl PromotionForm {
	/// Returns the value of `field`.
	pub fn get(&self, field: FormField) -> &str {
		match field {
			FormField::Id => &self.id,
			FormField::Name => &self.name,
			FormField::Category => &self.category,
			FormField::Available => &self.available,
			FormField::Gender => &self.gender,
			FormField::Birthday => &self.birthday,
		}
	}

	/// Sets the value of `field`.
	pub fn set(&mut self, field: FormField, value: impl Into<String>) {
		let slot = match field {
			FormField::Id => &mut self.id,
			FormField::Name => &mut self.name,
			FormField::Category => &mut self.category,
			FormField::Available => &mut self.available,
			FormField::Gender => &mut self.gender,
			FormField::Birthday => &mut self.birthday,
		};
		*slot = value.into();
	}

	/// Builder-style [`set`](Self::set).
	pub fn with(mut self, field: FormField, value: impl Into<String>) -> Self {
		self.set(field, value);
		self
	}

	/// Request body built from the editable fields.
	///
	/// `id` is never part of the payload.
	pub fn payload(&self) -> PromotionPayload {
		PromotionPayload {
			name: self.name.clone(),
			category: self.category.clone(),
			available: coerce_available(&self.available),
			gender: self.gender.clone(),
			birthday: self.birthday.clone(),
		}
	}

	/// Search filters taken from name, category, and availability.
	pub fn search_query(&self) -> SearchQuery {
		SearchQuery::new()
			.name(self.name.clone())
			.category(self.category.clone())
			.available(coerce_available(&self.available))
	}

	/// Overwrites every field from a server record.
	///
	/// A record without an `id` leaves the current `id` in place.
	pub fn fill_from(&mut self, promotion: &Promotion) {
		if let Some(id) = &promotion.id {
			self.id = id.to_string();
		}
		self.name = promotion.name.clone();
		self.category = promotion.category.clone();
		self.available = if promotion.available {
			AVAILABLE_TRUE
		} else {
			AVAILABLE_FALSE
		}
		.to_string();
		self.gender = promotion.gender.clone();
		self.birthday = promotion.birthday.clone();
	}

	/// Empties every field except `id`.
	pub fn clear_fields(&mut self) {
		let id = std::mem::take(&mut self.id);
		*self = Self {
			id,
			..Self::default()
		};
	}

	/// Empties every field.
	pub fn clear(&mut self) {
		*self = Self::default();
	}
}
