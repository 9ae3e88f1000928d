use clientes_lookup_api::{Customer, FailureKind};

/// Lifecycle of the most recent search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
	Idle,
	Loading,
	Showing,
	Error(FailureKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
	Hidden,
	Visible,
}

/// Mutable state of one controller attachment.
///
/// `selected_index`, when set, always points into `results`.
#[derive(Debug, Clone)]
pub struct SearchSession {
	pub(crate) input: String,
	pub(crate) query: String,
	pub(crate) results: Vec<Customer>,
	pub(crate) selected_index: Option<usize>,
	pub(crate) status: Status,
	pub(crate) selected_customer: Option<Customer>,
	pub(crate) visibility: Visibility,
	pub(crate) focused: bool,
}

impl Default for SearchSession {
	fn default() -> Self {
		Self {
			input: String::new(),
			query: String::new(),
			results: Vec::new(),
			selected_index: None,
			status: Status::Idle,
			selected_customer: None,
			visibility: Visibility::Hidden,
			focused: false,
		}
	}
}

impl SearchSession {
	/// Current text of the bound input.
	#[must_use]
	pub fn input(&self) -> &str {
		&self.input
	}

	/// Text of the latest dispatched search.
	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	#[must_use]
	pub fn results(&self) -> &[Customer] {
		&self.results
	}

	#[must_use]
	pub fn selected_index(&self) -> Option<usize> {
		self.selected_index
	}

	#[must_use]
	pub fn status(&self) -> Status {
		self.status
	}

	#[must_use]
	pub fn selected_customer(&self) -> Option<&Customer> {
		self.selected_customer.as_ref()
	}

	#[must_use]
	pub fn is_visible(&self) -> bool {
		self.visibility == Visibility::Visible
	}

	#[must_use]
	pub fn is_focused(&self) -> bool {
		self.focused
	}

	/// The customer under the active row, if any.
	#[must_use]
	pub fn active_customer(&self) -> Option<&Customer> {
		self.selected_index.and_then(|index| self.results.get(index))
	}

	pub(crate) fn show(&mut self) {
		self.visibility = Visibility::Visible;
	}

	pub(crate) fn hide(&mut self) {
		self.visibility = Visibility::Hidden;
	}

	pub(crate) fn go_idle(&mut self) {
		self.status = Status::Idle;
		self.results.clear();
		self.selected_index = None;
		self.hide();
	}

	pub(crate) fn start_loading(&mut self, query: String) {
		self.query = query;
		self.status = Status::Loading;
		self.selected_index = None;
		self.show();
	}

	pub(crate) fn show_results(&mut self, mut customers: Vec<Customer>, max_results: usize) {
		customers.truncate(max_results);
		self.results = customers;
		self.selected_index = None;
		self.status = Status::Showing;
		self.show();
	}

	pub(crate) fn show_error(&mut self, kind: FailureKind) {
		self.results.clear();
		self.selected_index = None;
		self.status = Status::Error(kind);
		self.show();
	}

	/// Advance the active row, wrapping from the last row to the first.
	pub(crate) fn move_down(&mut self) {
		let len = self.results.len();
		if len == 0 {
			return;
		}
		self.selected_index = Some(match self.selected_index {
			None => 0,
			Some(index) => (index + 1) % len,
		});
	}

	/// Retreat the active row, wrapping from the first row to the last.
	pub(crate) fn move_up(&mut self) {
		let len = self.results.len();
		if len == 0 {
			return;
		}
		self.selected_index = Some(match self.selected_index {
			None | Some(0) => len - 1,
			Some(index) => index - 1,
		});
	}
}
