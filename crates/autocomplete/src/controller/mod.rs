//! The autocomplete controller.
//!
//! [`Autocomplete`] owns one [`SearchSession`] and turns keystrokes, focus
//! changes and clock ticks into lookups, list state and [`ControllerEvent`]s.
//! It never reads the clock itself: every time-dependent operation takes the
//! current [`Instant`], and the host drives [`Autocomplete::poll`] once per
//! frame.

use std::collections::VecDeque;
use std::time::Instant;

use clientes_lookup_api::Customer;

use crate::events::ControllerEvent;
use crate::lookup::{LookupDispatch, LookupRequest, LookupResponse, LookupRuntime, RequestTokens};
use crate::options::AutocompleteOptions;
use crate::presentation;
use crate::session::{SearchSession, Status};
use crate::timer::Timer;
use crate::view::{self, RenderView, RowAction};


type SelectCallback = Box<dyn FnMut(&Customer)>;
type CreateCallback = Box<dyn FnMut(&str)>;

/// Result of [`Autocomplete::handle_input`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
	/// Text is shorter than the minimum length; nothing will be searched.
	Skipped,
	/// A lookup will be dispatched once the debounce elapses.
	Scheduled,
}

/// Keys the list reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
	ArrowDown,
	ArrowUp,
	Enter,
	Escape,
	Other,
}

/// Whether the controller consumed a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
	Handled,
	Ignored,
}

impl KeyOutcome {
	#[must_use]
	pub fn is_handled(self) -> bool {
		self == Self::Handled
	}
}

pub struct Autocomplete<D = LookupRuntime> {
	options: AutocompleteOptions,
	session: SearchSession,
	lookups: D,
	tokens: RequestTokens,
	debounce: Timer<String>,
	blur: Timer<()>,
	on_select: Option<SelectCallback>,
	on_create: Option<CreateCallback>,
	events: VecDeque<ControllerEvent>,
}

impl<D: LookupDispatch> Autocomplete<D> {
	pub fn new(options: AutocompleteOptions, lookups: D) -> Self {
		Self {
			options,
			session: SearchSession::default(),
			lookups,
			tokens: RequestTokens::default(),
			debounce: Timer::default(),
			blur: Timer::default(),
			on_select: None,
			on_create: None,
			events: VecDeque::new(),
		}
	}

	/// Invoke `callback` whenever a customer is selected, before the
	/// `customerSelected` event is queued.
	#[must_use]
	pub fn on_select(mut self, callback: impl FnMut(&Customer) + 'static) -> Self {
		self.on_select = Some(Box::new(callback));
		self
	}

	/// Offer a "create new" row and invoke `callback` when it is activated.
	#[must_use]
	pub fn on_create(mut self, callback: impl FnMut(&str) + 'static) -> Self {
		self.on_create = Some(Box::new(callback));
		self
	}

	/// React to the input text changing to `text`.
	pub fn handle_input(&mut self, text: &str, now: Instant) -> InputOutcome {
		self.session.input = text.to_string();
		self.debounce.cancel();

		if !self.options.accepts(text) {
			self.session.go_idle();
			self.session.selected_customer = None;
			self.tokens.invalidate();
			return InputOutcome::Skipped;
		}

		self.debounce.arm(now, self.options.debounce, text.to_string());
		InputOutcome::Scheduled
	}

	/// Advance the controller to `now`: apply arrived responses, then fire
	/// elapsed timers. Returns whether anything observable changed.
	pub fn poll(&mut self, now: Instant) -> bool {
		let mut changed = false;

		while let Some(response) = self.lookups.try_recv() {
			changed |= self.apply_response(response);
		}

		if let Some(query) = self.debounce.fire(now) {
			self.search(&query);
			changed = true;
		}

		if self.blur.fire(now).is_some() && self.session.is_visible() {
			self.session.hide();
			changed = true;
		}

		changed
	}

	/// Dispatch a lookup for `query` right away.
	pub fn search(&mut self, query: &str) {
		let token = self.tokens.issue();
		self.session.start_loading(query.to_string());
		tracing::debug!(token, query, "dispatching customer lookup");
		self.lookups.dispatch(LookupRequest {
			token,
			query: query.to_string(),
		});
	}

	fn apply_response(&mut self, response: LookupResponse) -> bool {
		if !self.tokens.settle(response.token) {
			tracing::debug!(
				token = response.token,
				query = %response.query,
				"discarding stale lookup response"
			);
			return false;
		}

		match response.result {
			Ok(customers) => {
				tracing::debug!(
					token = response.token,
					count = customers.len(),
					"lookup completed"
				);
				self.session.show_results(customers, self.options.max_results);
			}
			Err(error) => {
				tracing::warn!(query = %response.query, %error, "customer lookup failed");
				self.session.show_error(error.kind());
			}
		}
		true
	}

	/// Choose `customer`: fill the input with its name and close the list.
	pub fn select_customer(&mut self, customer: Customer) {
		self.debounce.cancel();
		self.tokens.invalidate();
		self.session.selected_customer = Some(customer.clone());
		self.session.input = customer.display_name().to_string();
		self.session.hide();
		if let Some(callback) = self.on_select.as_mut() {
			callback(&customer);
		}
		self.events.push_back(ControllerEvent::CustomerSelected(customer));
	}

	/// Ask the host to create a customer named `query`.
	pub fn create_new_customer(&mut self, query: &str) {
		self.debounce.cancel();
		self.tokens.invalidate();
		self.session.hide();
		if let Some(callback) = self.on_create.as_mut() {
			callback(query);
		}
		self.events.push_back(ControllerEvent::CreateCustomer {
			name: query.to_string(),
		});
	}

	/// Run the keyboard state machine for `key`.
	pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
		if !self.session.is_visible() {
			return KeyOutcome::Ignored;
		}

		if key == Key::Escape {
			self.blur.cancel();
			self.session.hide();
			self.session.focused = false;
			return KeyOutcome::Handled;
		}

		if self.session.status() != Status::Showing {
			// Enter never falls through to the host while the list is open.
			return if key == Key::Enter {
				KeyOutcome::Handled
			} else {
				KeyOutcome::Ignored
			};
		}

		match key {
			Key::ArrowDown => self.session.move_down(),
			Key::ArrowUp => self.session.move_up(),
			Key::Enter => {
				if let Some(customer) = self.session.active_customer().cloned() {
					self.select_customer(customer);
				}
			}
			Key::Escape | Key::Other => return KeyOutcome::Ignored,
		}
		KeyOutcome::Handled
	}

	/// Apply a row action taken from [`Autocomplete::view`].
	pub fn perform(&mut self, action: RowAction) {
		match action {
			RowAction::Select(index) => {
				if let Some(customer) = self.session.results.get(index).cloned() {
					self.select_customer(customer);
				}
			}
			RowAction::Create(query) => self.create_new_customer(&query),
		}
	}

	pub fn focus(&mut self) {
		self.session.focused = true;
		self.blur.cancel();
		if self.options.accepts(&self.session.input) && self.session.status() != Status::Idle {
			self.session.show();
		}
	}

	/// Lose focus; the list hides once the blur grace has elapsed.
	pub fn blur(&mut self, now: Instant) {
		self.session.focused = false;
		self.blur.arm(now, self.options.blur_grace, ());
	}

	/// Forget the selected customer and reset the input.
	pub fn clear_selection(&mut self) {
		self.debounce.cancel();
		self.tokens.invalidate();
		self.session.selected_customer = None;
		self.session.input.clear();
		self.session.go_idle();
	}

	/// Prefill the input with `name` and search for it immediately.
	pub fn set_value(&mut self, name: &str) {
		self.session.input = name.to_string();
		if !name.is_empty() {
			self.debounce.cancel();
			self.search(name);
		}
	}

	/// Detach: pending timers are cancelled and the dispatcher is dropped.
	pub fn destroy(mut self) {
		self.debounce.cancel();
		self.blur.cancel();
		tracing::debug!(
			in_flight = self.tokens.is_in_flight(),
			"autocomplete detached"
		);
	}

	/// Describe the list as it should currently be drawn.
	#[must_use]
	pub fn view(&self) -> RenderView {
		view::render(
			&self.session,
			&self.options,
			self.on_create.is_some(),
			presentation::current(),
		)
	}

	/// Take every event queued since the last drain, oldest first.
	pub fn drain_events(&mut self) -> Vec<ControllerEvent> {
		self.events.drain(..).collect()
	}

	/// Earliest instant at which [`Autocomplete::poll`] has timer work.
	#[must_use]
	pub fn next_deadline(&self) -> Option<Instant> {
		match (self.debounce.deadline(), self.blur.deadline()) {
			(Some(a), Some(b)) => Some(a.min(b)),
			(a, b) => a.or(b),
		}
	}

	/// Whether a lookup is awaited or scheduled.
	#[must_use]
	pub fn is_busy(&self) -> bool {
		self.debounce.is_armed() || self.tokens.is_in_flight()
	}

	#[must_use]
	pub fn session(&self) -> &SearchSession {
		&self.session
	}

	#[must_use]
	pub fn selected_customer(&self) -> Option<&Customer> {
		self.session.selected_customer()
	}

	#[must_use]
	pub fn input(&self) -> &str {
		self.session.input()
	}

	#[must_use]
	pub fn is_visible(&self) -> bool {
		self.session.is_visible()
	}

	#[must_use]
	pub fn options(&self) -> &AutocompleteOptions {
		&self.options
	}
}
