//! Browser DOM adapter (WASM only).
//!
//! [`DomView`] reads the promotion inputs by element identifier and writes
//! rendered [`Frame`]s back. [`mount`] builds a binder over the live page and
//! attaches click handlers to the six buttons.

use crate::binder::{Action, FormBinder};
use crate::form::{FormField, PromotionForm};
use crate::settings::{BinderSettings, DomIds};
use crate::view::{Frame, View};
use crate::{error_log, info_log};
use promotion_api::{PromotionClient, ReqwestTransport};
use std::rc::Rc;
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{
	Document, Element, Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
};

/// Errors raised while attaching to the page.
#[derive(Debug, Error)]
pub enum DomError {
	/// There is no `window` (not running in a browser main thread).
	#[error("no global window")]
	NoWindow,
	/// The window has no document.
	#[error("no document on window")]
	NoDocument,
	/// A required element is not on the page.
	#[error("element #{0} not found")]
	MissingElement(String),
	/// A browser API call failed.
	#[error("DOM call failed: {0}")]
	Js(String),
}

/// Binder type produced by [`mount`].
pub type PageBinder = FormBinder<ReqwestTransport, DomView>;

/// [`View`] over the live document.
#[derive(Debug, Clone)]
pub struct DomView {
	document: Document,
	ids: DomIds,
}

impl DomView {
	/// Attaches to the current document.
	///
	/// Fails if any input or output element named in `ids` is missing.
	pub fn new(ids: DomIds) -> Result<Self, DomError> {
		let window = web_sys::window().ok_or(DomError::NoWindow)?;
		let document = window.document().ok_or(DomError::NoDocument)?;
		let view = Self { document, ids };

		for field in FormField::ALL {
			view.element(field.dom_id(&view.ids))?;
		}
		view.element(&view.ids.flash)?;
		view.element(&view.ids.results)?;

		Ok(view)
	}

	fn element(&self, id: &str) -> Result<Element, DomError> {
		self.document
			.get_element_by_id(id)
			.ok_or_else(|| DomError::MissingElement(id.to_string()))
	}

	fn read_value(&self, id: &str) -> String {
		let Ok(element) = self.element(id) else {
			return String::new();
		};
		if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
			input.value()
		} else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
			select.value()
		} else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
			area.value()
		} else {
			element.text_content().unwrap_or_default()
		}
	}

	fn write_value(&self, id: &str, value: &str) {
		let Ok(element) = self.element(id) else {
			error_log!("element #{} disappeared", id);
			return;
		};
		if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
			input.set_value(value);
		} else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
			select.set_value(value);
		} else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
			area.set_value(value);
		} else {
			element.set_text_content(Some(value));
		}
	}
}

impl View for DomView {
	fn read_form(&self) -> PromotionForm {
		let mut form = PromotionForm::default();
		for field in FormField::ALL {
			form.set(field, self.read_value(field.dom_id(&self.ids)));
		}
		form
	}

	fn apply(&mut self, frame: &Frame) {
		for field in FormField::ALL {
			self.write_value(field.dom_id(&self.ids), frame.form.get(field));
		}

		if let Ok(flash) = self.element(&self.ids.flash) {
			flash.set_text_content(Some(&frame.flash));
		}

		if let Some(html) = &frame.results_html
			&& let Ok(container) = self.element(&self.ids.results)
		{
			// SAFETY(XSS): render_results_table() escapes every cell via html_escape().
			container.set_inner_html(html);
		}
	}
}

/// Attaches a binder to the current page.
///
/// An empty `api.base_url` is replaced with the page's origin. Each button
/// named in `settings.dom` gets a click handler that runs its [`Action`] on
/// the browser's task queue. The handlers live as long as the page.
pub fn mount(mut settings: BinderSettings) -> Result<Rc<PageBinder>, DomError> {
	#[cfg(feature = "console_error_panic_hook")]
	console_error_panic_hook::set_once();

	let window = web_sys::window().ok_or(DomError::NoWindow)?;
	if settings.api.base_url.is_empty() {
		settings.api.base_url = window
			.location()
			.origin()
			.map_err(|e| DomError::Js(format!("{:?}", e)))?;
	}

	let view = DomView::new(settings.dom.clone())?;
	let client = PromotionClient::new(ReqwestTransport::new(), settings.api.clone());
	let binder = Rc::new(FormBinder::new(client, view, settings.messages.clone()));

	let document = window.document().ok_or(DomError::NoDocument)?;
	for action in Action::ALL {
		let id = action.button_id(&settings.dom);
		let button = document
			.get_element_by_id(id)
			.ok_or_else(|| DomError::MissingElement(id.to_string()))?;

		let handler_binder = Rc::clone(&binder);
		let handler = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
			let binder = Rc::clone(&handler_binder);
			wasm_bindgen_futures::spawn_local(async move {
				binder.dispatch(action).await;
			});
		});

		button
			.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
			.map_err(|e| DomError::Js(format!("{:?}", e)))?;
		// Handlers stay attached for the page's lifetime
		handler.forget();
	}

	info_log!("promotion form mounted against {}", settings.api.collection_url());
	Ok(binder)
}

/// WASM entry point
///
/// Mounts the binder with default settings. `PROMOTION_API_BASE_URL`, when
/// set at build time, points the client at another origin.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
	let mut settings = BinderSettings::default();
	if let Some(base_url) = option_env!("PROMOTION_API_BASE_URL") {
		settings.api.base_url = base_url.to_string();
	}

	// The click handlers keep their own references to the binder
	mount(settings).map_err(|e| JsValue::from_str(&e.to_string()))?;
	Ok(())
}
