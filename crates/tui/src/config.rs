/// Text rendered around the autocomplete input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	/// Prompt shown in front of the input.
	pub title: String,
	/// Title of the dropdown border.
	pub results_title: String,
	/// Title of the order panel.
	pub order_title: String,
	/// Order panel text while no customer is attached.
	pub no_customer: String,
	/// Prefix for a customer that still has to be created.
	pub new_customer: String,
	/// One-line key reference at the bottom of the screen.
	pub hint: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			title: "Cliente".to_string(),
			results_title: "Clientes".to_string(),
			order_title: "Pedido".to_string(),
			no_customer: "Sin cliente asignado".to_string(),
			new_customer: "Nuevo cliente".to_string(),
			hint: "↑/↓ navegar · Enter confirmar · Esc salir · Tab foco · Ctrl+U limpiar".to_string(),
		}
	}
}

impl UiLabels {
	/// Prompt text including the trailing separator.
	#[must_use]
	pub fn prompt(&self) -> String {
		format!("{}: ", self.title)
	}
}
