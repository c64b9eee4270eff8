//! The form-resource binder.
//!
//! [`FormBinder`] turns the six user actions into requests against the
//! promotions resource and folds each response back into the [`ViewState`].
//!
//! Every network action follows the same shape:
//!
//! 1. read the inputs from the [`View`], take a [`Ticket`], clear the flash
//!    message, and render
//! 2. await the request (no lock is held)
//! 3. if the ticket is still current, re-read the inputs, apply the outcome
//!    to them, and render; otherwise drop it and report
//!    [`Dispatch::Superseded`]
//!
//! ```text
//!  click ──▶ begin ──▶ client.<op>().await ──▶ finish ──▶ render ──▶ View::apply
//!              │                                  │
//!              └── flash cleared, ticket N        └── applied only if N is latest
//! ```

use crate::form::PromotionForm;
use crate::sequencer::{RequestSequencer, Ticket};
use crate::settings::{DomIds, FlashMessages};
use crate::view::{View, ViewState, render};
use crate::{debug_log, info_log};
use parking_lot::Mutex;
use promotion_api::{HttpTransport, PromotionClient};

/// A user action on the promotion form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
	/// POST the editable fields
	Create,
	/// PUT the editable fields to the record named by `id`
	Update,
	/// GET the record named by `id`
	Retrieve,
	/// DELETE the record named by `id`
	Delete,
	/// GET the collection filtered by name, category, and availability
	Search,
	/// Empty the form and the flash message, locally
	Clear,
}

impl Action {
	/// Every action, in button order.
	pub const ALL: [Action; 6] = [
		Action::Create,
		Action::Update,
		Action::Retrieve,
		Action::Delete,
		Action::Clear,
		Action::Search,
	];

	/// Element identifier of the button that triggers this action.
	pub fn button_id<'a>(&self, ids: &'a DomIds) -> &'a str {
		match self {
			Action::Create => &ids.create_button,
			Action::Update => &ids.update_button,
			Action::Retrieve => &ids.retrieve_button,
			Action::Delete => &ids.delete_button,
			Action::Search => &ids.search_button,
			Action::Clear => &ids.clear_button,
		}
	}

	/// Returns `true` if the action issues a request.
	pub fn is_network(&self) -> bool {
		!matches!(self, Action::Clear)
	}
}

/// What happened to an action's outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
	/// The outcome was written to the view.
	Applied,
	/// A newer action started before this one finished; its outcome was dropped.
	Superseded,
}

/// Binds a [`View`] to the promotions resource.
pub struct FormBinder<T, V> {
	client: PromotionClient<T>,
	messages: FlashMessages,
	state: Mutex<ViewState>,
	view: Mutex<V>,
	sequencer: RequestSequencer,
}

impl<T, V> std::fmt::Debug for FormBinder<T, V> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FormBinder")
			.field("messages", &self.messages)
			.field("state", &*self.state.lock())
			.field("sequencer", &self.sequencer)
			.finish_non_exhaustive()
	}
}

impl<T: HttpTransport, V: View> FormBinder<T, V> {
	/// Creates a binder. Nothing is rendered until the first action.
	pub fn new(client: PromotionClient<T>, view: V, messages: FlashMessages) -> Self {
		Self {
			client,
			messages,
			state: Mutex::new(ViewState::default()),
			view: Mutex::new(view),
			sequencer: RequestSequencer::new(),
		}
	}

	/// Snapshot of the current view state.
	pub fn state(&self) -> ViewState {
		self.state.lock().clone()
	}

	/// Runs `f` with the view.
	pub fn with_view<R>(&self, f: impl FnOnce(&V) -> R) -> R {
		f(&self.view.lock())
	}

	/// Runs `f` with mutable access to the view.
	pub fn with_view_mut<R>(&self, f: impl FnOnce(&mut V) -> R) -> R {
		f(&mut self.view.lock())
	}

	/// The REST client.
	pub fn client(&self) -> &PromotionClient<T> {
		&self.client
	}

	/// Runs `action`.
	pub async fn dispatch(&self, action: Action) -> Dispatch {
		debug_log!("dispatching {:?}", action);
		match action {
			Action::Create => self.create().await,
			Action::Update => self.update().await,
			Action::Retrieve => self.retrieve().await,
			Action::Delete => self.delete().await,
			Action::Search => self.search().await,
			Action::Clear => {
				self.clear();
				Dispatch::Applied
			}
		}
	}

	/// Creates a promotion from the editable fields.
	///
	/// On success the form is overwritten from the stored record, `id`
	/// included. On failure only the flash message changes.
	pub async fn create(&self) -> Dispatch {
		let (ticket, form) = self.begin();
		let outcome = self.client.create(&form.payload()).await;

		self.finish(ticket, |state, messages| match outcome {
			Ok(promotion) => {
				state.form.fill_from(&promotion);
				state.flash = Some(messages.success.clone());
			}
			Err(err) => state.flash = Some(err.user_message()),
		})
	}

	/// Replaces the promotion named by the `id` input.
	///
	/// On failure the form is left as the user entered it.
	pub async fn update(&self) -> Dispatch {
		let (ticket, form) = self.begin();
		let outcome = self.client.update(&form.id, &form.payload()).await;

		self.finish(ticket, |state, messages| match outcome {
			Ok(promotion) => {
				state.form.fill_from(&promotion);
				state.flash = Some(messages.success.clone());
			}
			Err(err) => state.flash = Some(err.user_message()),
		})
	}

	/// Loads the promotion named by the `id` input.
	///
	/// On failure every field but `id` is cleared.
	pub async fn retrieve(&self) -> Dispatch {
		let (ticket, form) = self.begin();
		let outcome = self.client.retrieve(&form.id).await;

		self.finish(ticket, |state, messages| match outcome {
			Ok(promotion) => {
				state.form.fill_from(&promotion);
				state.flash = Some(messages.success.clone());
			}
			Err(err) => {
				state.form.clear_fields();
				state.flash = Some(err.user_message());
			}
		})
	}

	/// Deletes the promotion named by the `id` input.
	///
	/// Both outcomes show a fixed message; the server's error text is not
	/// displayed.
	pub async fn delete(&self) -> Dispatch {
		let (ticket, form) = self.begin();
		let outcome = self.client.delete(&form.id).await;

		self.finish(ticket, |state, messages| match outcome {
			Ok(()) => {
				state.form.clear_fields();
				state.flash = Some(messages.deleted.clone());
			}
			Err(_) => state.flash = Some(messages.delete_failed.clone()),
		})
	}

	/// Searches by name, category, and availability.
	///
	/// On success the results table is replaced and the first result, if any,
	/// is copied into the form. On failure the previous table stays.
	pub async fn search(&self) -> Dispatch {
		let (ticket, form) = self.begin();
		let outcome = self.client.search(&form.search_query()).await;

		self.finish(ticket, |state, messages| match outcome {
			Ok(results) => {
				if let Some(first) = results.first() {
					state.form.fill_from(first);
				}
				state.results = Some(results);
				state.flash = Some(messages.success.clone());
			}
			Err(err) => state.flash = Some(err.user_message()),
		})
	}

	/// Empties the form and the flash message.
	///
	/// Also supersedes any request still in flight, so a late response cannot
	/// refill a form the user just cleared.
	pub fn clear(&self) {
		{
			let mut state = self.state.lock();
			self.sequencer.issue();
			state.form.clear();
			state.flash = None;
		}
		self.publish();
	}

	fn begin(&self) -> (Ticket, PromotionForm) {
		let form = self.view.lock().read_form();
		let ticket = {
			let mut state = self.state.lock();
			let ticket = self.sequencer.issue();
			state.form = form.clone();
			state.flash = None;
			ticket
		};
		self.publish();
		(ticket, form)
	}

	fn finish(
		&self,
		ticket: Ticket,
		apply: impl FnOnce(&mut ViewState, &FlashMessages),
	) -> Dispatch {
		// Outcomes apply to the inputs as they are now, including edits made
		// while the request was in flight
		let current = self.view.lock().read_form();
		{
			let mut state = self.state.lock();
			if !self.sequencer.is_current(ticket) {
				debug_log!("dropping response for superseded ticket {}", ticket.get());
				return Dispatch::Superseded;
			}
			state.form = current;
			apply(&mut state, &self.messages);
			info_log!("flash: {}", state.flash.as_deref().unwrap_or(""));
		}
		self.publish();
		Dispatch::Applied
	}

	fn publish(&self) {
		let frame = render(&self.state.lock());
		self.view.lock().apply(&frame);
	}
}
