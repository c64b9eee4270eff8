//! Search results table.

use promotion_api::Promotion;
use std::borrow::Cow;
use std::fmt::Write;

/// Prefix of the positional row identifier (`row_0`, `row_1`, ...).
pub const ROW_ID_PREFIX: &str = "row_";

/// A column of the results table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromotionColumn {
	/// Identifier
	Id,
	/// Name
	Name,
	/// Category
	Category,
	/// Availability, rendered as `true` / `false`
	Available,
	/// Gender
	Gender,
	/// Birthday
	Birthday,
}

impl PromotionColumn {
	/// Every column, in display order.
	pub const ALL: [PromotionColumn; 6] = [
		PromotionColumn::Id,
		PromotionColumn::Name,
		PromotionColumn::Category,
		PromotionColumn::Available,
		PromotionColumn::Gender,
		PromotionColumn::Birthday,
	];

	/// Header label.
	pub fn label(&self) -> &'static str {
		match self {
			PromotionColumn::Id => "ID",
			PromotionColumn::Name => "Name",
			PromotionColumn::Category => "Category",
			PromotionColumn::Available => "Available",
			PromotionColumn::Gender => "Gender",
			PromotionColumn::Birthday => "Birthday",
		}
	}

	/// Unescaped cell text for `promotion`.
	pub fn value<'a>(&self, promotion: &'a Promotion) -> Cow<'a, str> {
		match self {
			PromotionColumn::Id => promotion
				.id
				.as_ref()
				.map(|id| Cow::Borrowed(id.as_str()))
				.unwrap_or(Cow::Borrowed("")),
			PromotionColumn::Name => Cow::Borrowed(&promotion.name),
			PromotionColumn::Category => Cow::Borrowed(&promotion.category),
			PromotionColumn::Available => Cow::Owned(promotion.available.to_string()),
			PromotionColumn::Gender => Cow::Borrowed(&promotion.gender),
			PromotionColumn::Birthday => Cow::Borrowed(&promotion.birthday),
		}
	}
}

/// Renders `rows` as an HTML table.
///
/// The header row is always present. Rows keep the given order and are tagged
/// `row_<index>`. Cell text is HTML-escaped.
pub fn render_results_table(rows: &[Promotion]) -> String {
	let mut html = String::from(r#"<table class="table table-striped" cellpadding="10">"#);

	html.push_str("<thead><tr>");
	for column in PromotionColumn::ALL {
		// Writing to a String cannot fail
		let _ = write!(html, r#"<th class="col-md-2">{}</th>"#, column.label());
	}
	html.push_str("</tr></thead><tbody>");

	for (index, promotion) in rows.iter().enumerate() {
		let _ = write!(html, r#"<tr id="{}{}">"#, ROW_ID_PREFIX, index);
		for column in PromotionColumn::ALL {
			let _ = write!(html, "<td>{}</td>", html_escape(&column.value(promotion)));
		}
		html.push_str("</tr>");
	}

	html.push_str("</tbody></table>");
	html
}

/// Escapes HTML special characters.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
pub(crate) fn html_escape(s: &str) -> Cow<'_, str> {
	if !s.contains(['&', '<', '>', '"', '\'']) {
		return Cow::Borrowed(s);
	}

	let mut escaped = String::with_capacity(s.len() + 8);
	for c in s.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#x27;"),
			_ => escaped.push(c),
		}
	}
	Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
	use super::*;
	use promotion_api::PromotionId;
	use rstest::rstest;

	const HEADER: &str = concat!(
		r#"<table class="table table-striped" cellpadding="10"><thead><tr>"#,
		r#"<th class="col-md-2">ID</th><th class="col-md-2">Name</th>"#,
		r#"<th class="col-md-2">Category</th><th class="col-md-2">Available</th>"#,
		r#"<th class="col-md-2">Gender</th><th class="col-md-2">Birthday</th>"#,
		"</tr></thead><tbody>"
	);

	fn promotion(id: u64, name: &str, available: bool) -> Promotion {
		Promotion {
			id: Some(PromotionId::from(id)),
			name: name.to_string(),
			category: "c".to_string(),
			available,
			gender: "g".to_string(),
			birthday: "b".to_string(),
		}
	}

	#[rstest]
	fn test_empty_results_header_only() {
		assert_eq!(
			render_results_table(&[]),
			format!("{}</tbody></table>", HEADER)
		);
	}

	#[rstest]
	fn test_rows_in_order_with_positional_ids() {
		let html = render_results_table(&[promotion(9, "first", true), promotion(2, "second", false)]);

		let expected = format!(
			"{}{}{}</tbody></table>",
			HEADER,
			r#"<tr id="row_0"><td>9</td><td>first</td><td>c</td><td>true</td><td>g</td><td>b</td></tr>"#,
			r#"<tr id="row_1"><td>2</td><td>second</td><td>c</td><td>false</td><td>g</td><td>b</td></tr>"#,
		);
		assert_eq!(html, expected);
	}

	#[rstest]
	fn test_cells_are_escaped() {
		let html = render_results_table(&[promotion(1, "<b>50% off</b> & more", true)]);

		assert!(html.contains("<td>&lt;b&gt;50% off&lt;/b&gt; &amp; more</td>"));
		assert!(!html.contains("<b>"));
	}

	#[rstest]
	#[case("Hello World", "Hello World")]
	#[case("a & b", "a &amp; b")]
	#[case("\"q\" 'v'", "&quot;q&quot; &#x27;v&#x27;")]
	fn test_html_escape(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(html_escape(input), expected);
	}

	#[rstest]
	fn test_missing_id_renders_empty_cell() {
		let mut p = promotion(1, "x", true);
		p.id = None;
		assert_eq!(PromotionColumn::Id.value(&p), "");
	}
}
