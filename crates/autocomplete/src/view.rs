//! Toolkit-neutral description of the result list.
//!
//! [`render`] is a pure function of the session; hosts project the rows onto
//! whatever widgets they have and feed [`RowAction`]s back to the controller
//! when a row is clicked.

use clientes_lookup_api::Customer;

use crate::options::AutocompleteOptions;
use crate::presentation::Presentation;
use crate::session::{SearchSession, Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
	Loading,
	Customer,
	Empty,
	Error,
	Create,
}

/// What activating a row does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
	/// Select `results[index]`.
	Select(usize),
	/// Create a customer named after the literal query text.
	Create(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRow {
	pub kind: RowKind,
	pub label: String,
	pub details: Vec<String>,
	pub badge: Option<String>,
	pub stats: Vec<String>,
	pub active: bool,
	pub action: Option<RowAction>,
}

impl RenderRow {
	fn message(kind: RowKind, label: String) -> Self {
		Self {
			kind,
			label,
			details: Vec::new(),
			badge: None,
			stats: Vec::new(),
			active: false,
			action: None,
		}
	}

	fn customer(
		index: usize,
		customer: &Customer,
		active: bool,
		show_details: bool,
		presentation: &Presentation,
	) -> Self {
		let details = if show_details {
			[customer.phone.as_ref(), customer.email.as_ref()]
				.into_iter()
				.flatten()
				.cloned()
				.collect()
		} else {
			Vec::new()
		};
		Self {
			kind: RowKind::Customer,
			label: customer.name.clone(),
			details,
			badge: customer.is_vip.then(|| presentation.vip_badge.clone()),
			stats: vec![
				presentation.visits_label(customer.total_visits),
				presentation.currency(customer.total_spent),
			],
			active,
			action: Some(RowAction::Select(index)),
		}
	}

	fn create(query: &str, presentation: &Presentation) -> Self {
		Self {
			action: Some(RowAction::Create(query.to_string())),
			..Self::message(RowKind::Create, presentation.create_label(query))
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderView {
	pub visible: bool,
	pub rows: Vec<RenderRow>,
}

impl RenderView {
	/// Rows bound to a customer, in result order.
	pub fn customer_rows(&self) -> impl Iterator<Item = &RenderRow> {
		self.rows.iter().filter(|row| row.kind == RowKind::Customer)
	}

	/// Index into `rows` of the active customer row.
	#[must_use]
	pub fn active_row(&self) -> Option<usize> {
		self.rows.iter().position(|row| row.active)
	}
}

/// Describe the list for `session`.
#[must_use]
pub fn render(
	session: &SearchSession,
	options: &AutocompleteOptions,
	can_create: bool,
	presentation: &Presentation,
) -> RenderView {
	let query = session.query();
	let mut rows = Vec::new();

	match session.status() {
		Status::Idle => {}
		Status::Loading => rows.push(RenderRow::message(RowKind::Loading, presentation.loading.clone())),
		Status::Error(_) => rows.push(RenderRow::message(RowKind::Error, presentation.error.clone())),
		Status::Showing => {
			if session.results().is_empty() {
				rows.push(RenderRow::message(RowKind::Empty, presentation.empty_label(query)));
			}
			rows.extend(session.results().iter().enumerate().map(|(index, customer)| {
				let active = session.selected_index() == Some(index);
				RenderRow::customer(index, customer, active, options.show_details, presentation)
			}));
			if can_create && !query.is_empty() {
				rows.push(RenderRow::create(query, presentation));
			}
		}
	}

	RenderView {
		visible: session.is_visible() && !rows.is_empty(),
		rows,
	}
}
