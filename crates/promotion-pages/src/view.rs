//! View state and rendering.
//!
//! The binder never touches the page directly. It mutates a [`ViewState`],
//! turns it into a [`Frame`] with the pure [`render`] function, and hands the
//! frame to a [`View`]. On the browser the view is
//! [`DomView`](crate::dom::DomView); headless callers and tests use
//! [`MemoryView`].

use crate::form::{FormField, PromotionForm};
use crate::table::render_results_table;
use promotion_api::Promotion;

/// Everything the page displays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
	/// Contents of the single-record form.
	pub form: PromotionForm,
	/// Flash message, `None` when the message area is empty.
	pub flash: Option<String>,
	/// Last successful search, `None` until a search succeeds.
	pub results: Option<Vec<Promotion>>,
}

/// Rendered output for one [`ViewState`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
	/// Input values.
	pub form: PromotionForm,
	/// Flash message text (empty when there is none).
	pub flash: String,
	/// Results table markup, `None` to leave the container untouched.
	pub results_html: Option<String>,
}

/// Renders `state` into a [`Frame`].
pub fn render(state: &ViewState) -> Frame {
	Frame {
		form: state.form.clone(),
		flash: state.flash.clone().unwrap_or_default(),
		results_html: state.results.as_deref().map(render_results_table),
	}
}

/// Narrow interface between the binder and whatever displays the form.
pub trait View {
	/// Reads the inputs as the user currently sees them.
	fn read_form(&self) -> PromotionForm;

	/// Displays `frame`.
	fn apply(&mut self, frame: &Frame);
}

/// In-memory [`View`].
///
/// Holds the input values the way a page would: [`apply`](View::apply)
/// overwrites them, and [`set_input`](Self::set_input) plays the part of the
/// user typing.
#[derive(Debug, Clone, Default)]
pub struct MemoryView {
	inputs: PromotionForm,
	flash: String,
	results_html: Option<String>,
	renders: usize,
}

impl MemoryView {
	/// Creates a view with empty inputs.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a view whose inputs hold `form`.
	pub fn with_inputs(form: PromotionForm) -> Self {
		Self {
			inputs: form,
			..Self::default()
		}
	}

	/// Changes one input, as a user would.
	pub fn set_input(&mut self, field: FormField, value: impl Into<String>) {
		self.inputs.set(field, value);
	}

	/// Replaces every input, as a user would.
	pub fn set_inputs(&mut self, form: PromotionForm) {
		self.inputs = form;
	}

	/// Current input values.
	pub fn inputs(&self) -> &PromotionForm {
		&self.inputs
	}

	/// Displayed flash text.
	pub fn flash(&self) -> &str {
		&self.flash
	}

	/// Displayed results table markup, if a table has been rendered.
	pub fn results_html(&self) -> Option<&str> {
		self.results_html.as_deref()
	}

	/// Number of frames applied so far.
	pub fn renders(&self) -> usize {
		self.renders
	}
}

impl View for MemoryView {
	fn read_form(&self) -> PromotionForm {
		self.inputs.clone()
	}

	fn apply(&mut self, frame: &Frame) {
		self.inputs = frame.form.clone();
		self.flash = frame.flash.clone();
		if let Some(html) = &frame.results_html {
			self.results_html = Some(html.clone());
		}
		self.renders += 1;
	}
}
