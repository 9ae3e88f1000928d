use std::time::Instant;

use clientes_autocomplete::{Autocomplete, ControllerEvent, LookupDispatch, LookupRuntime};
use throbber_widgets_tui::ThrobberState;

use crate::components::RowHitbox;
use crate::config::UiLabels;
use crate::input::QueryInput;
use crate::outcome::{OrderCustomer, SessionOutcome};
use crate::style::Theme;

/// State of the terminal host.
pub struct App<'a, D: LookupDispatch = LookupRuntime> {
	pub(crate) controller: Autocomplete<D>,
	/// Text input bound to the controller.
	pub input: QueryInput<'a>,
	pub(crate) labels: UiLabels,
	pub(crate) theme: Theme,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) order: OrderCustomer,
	pub(crate) hitboxes: Vec<RowHitbox>,
}

impl<'a, D: LookupDispatch> App<'a, D> {
	/// Bind `controller` to a fresh, focused input.
	pub fn new(controller: Autocomplete<D>) -> Self {
		let mut app = Self {
			controller,
			input: QueryInput::new(""),
			labels: UiLabels::default(),
			theme: Theme::default(),
			throbber_state: ThrobberState::default(),
			order: OrderCustomer::default(),
			hitboxes: Vec::new(),
		};
		app.controller.focus();
		app
	}

	#[must_use]
	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		self.labels = labels;
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = theme;
		self
	}

	/// Prefill the input and search for `query` right away.
	#[must_use]
	pub fn with_initial_query(mut self, query: &str) -> Self {
		self.controller.set_value(query);
		self.input.set_text(query);
		self
	}

	#[must_use]
	pub fn controller(&self) -> &Autocomplete<D> {
		&self.controller
	}

	#[must_use]
	pub fn order(&self) -> &OrderCustomer {
		&self.order
	}

	/// Advance timers and apply lookup responses.
	pub fn tick(&mut self, now: Instant) {
		self.controller.poll(now);
		self.sync();
		if self.controller.is_busy() {
			self.throbber_state.calc_next();
		}
	}

	/// Pull controller events into the order and mirror the controller's
	/// input text into the widget.
	pub(crate) fn sync(&mut self) {
		for event in self.controller.drain_events() {
			match event {
				ControllerEvent::CustomerSelected(customer) => {
					tracing::info!(id = %customer.id, name = %customer.name, "customer attached to order");
					self.order.attach(customer);
				}
				ControllerEvent::CreateCustomer { name } => {
					tracing::info!(%name, "new customer requested");
					self.order.attach_new(name);
				}
			}
		}
		self.input.set_text(self.controller.input());
	}

	pub(crate) fn finish(&self, accepted: bool) -> SessionOutcome {
		SessionOutcome::new(accepted, self.input.text().to_string(), self.order.clone())
	}
}
