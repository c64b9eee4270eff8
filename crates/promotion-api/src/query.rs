//! Search filter construction.
//!
//! Filters are optional and independent. A filter that is not set is left out
//! of the query string entirely rather than being sent with an empty value,
//! and availability is a one-way filter: it can ask for available promotions
//! but never for unavailable ones.

/// Query parameter name for the name filter.
pub const NAME_PARAM: &str = "name";
/// Query parameter name for the category filter.
pub const CATEGORY_PARAM: &str = "category";
/// Query parameter name for the availability filter.
pub const AVAILABLE_PARAM: &str = "available";

/// Filters for a promotion search.
///
/// # Example
///
/// ```
/// use promotion_api::SearchQuery;
///
/// let query = SearchQuery::new().name("a").category("").available(true);
/// assert_eq!(query.to_query_string(), "name=a&available=true");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
	name: Option<String>,
	category: Option<String>,
	available: bool,
}

impl SearchQuery {
	/// Creates a query with no filters.
	pub fn new() -> Self {
		Self::default()
	}

	/// Filters by name. An empty string clears the filter.
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = non_empty(name.into());
		self
	}

	/// Filters by category. An empty string clears the filter.
	pub fn category(mut self, category: impl Into<String>) -> Self {
		self.category = non_empty(category.into());
		self
	}

	/// Restricts results to available promotions when `true`.
	///
	/// `false` removes the filter; it does not ask for unavailable promotions.
	pub fn available(mut self, only_available: bool) -> Self {
		self.available = only_available;
		self
	}

	/// Returns `true` when no filter is set.
	pub fn is_empty(&self) -> bool {
		self.name.is_none() && self.category.is_none() && !self.available
	}

	/// Returns the active filters as key/value pairs, in `name`, `category`,
	/// `available` order.
	pub fn params(&self) -> Vec<(&'static str, String)> {
		let mut params = Vec::with_capacity(3);

		if let Some(name) = &self.name {
			params.push((NAME_PARAM, name.clone()));
		}
		if let Some(category) = &self.category {
			params.push((CATEGORY_PARAM, category.clone()));
		}
		if self.available {
			params.push((AVAILABLE_PARAM, "true".to_string()));
		}

		params
	}

	/// Builds the query string without a leading `?`.
	///
	/// Values are percent-encoded; pairs are joined by `&`.
	pub fn to_query_string(&self) -> String {
		self.params()
			.iter()
			.map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
			.collect::<Vec<_>>()
			.join("&")
	}
}

fn non_empty(value: String) -> Option<String> {
	if value.is_empty() { None } else { Some(value) }
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("a", "", true, "name=a&available=true")]
	#[case("", "electronics", false, "category=electronics")]
	#[case("", "", true, "available=true")]
	#[case("a", "b", true, "name=a&category=b&available=true")]
	#[case("a", "b", false, "name=a&category=b")]
	#[case("", "", false, "")]
	fn test_query_string_omits_unset_filters(
		#[case] name: &str,
		#[case] category: &str,
		#[case] available: bool,
		#[case] expected: &str,
	) {
		let query = SearchQuery::new()
			.name(name)
			.category(category)
			.available(available);

		assert_eq!(query.to_query_string(), expected);
	}

	#[rstest]
	fn test_query_string_encodes_values() {
		let query = SearchQuery::new().name("flash sale").category("a&b");
		assert_eq!(query.to_query_string(), "name=flash%20sale&category=a%26b");
	}

	#[rstest]
	fn test_is_empty() {
		assert!(SearchQuery::new().is_empty());
		assert!(SearchQuery::new().name("").available(false).is_empty());
		assert!(!SearchQuery::new().available(true).is_empty());
	}
}
