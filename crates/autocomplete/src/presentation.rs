//! Process-wide presentation settings: localized strings and currency format.
//!
//! Presentation is installed once at application start-up. Later calls to
//! [`install`] are ignored, and readers that run before any install observe
//! the Spanish defaults used by the POS.

use std::sync::OnceLock;

/// Localized labels used by the render description.
///
/// `{query}` and `{count}` placeholders are substituted when rows are built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
	pub loading: String,
	pub empty: String,
	pub error: String,
	pub create: String,
	pub visits: String,
	pub vip_badge: String,
	pub currency_symbol: String,
}

impl Default for Presentation {
	fn default() -> Self {
		Self {
			loading: "Buscando clientes...".to_string(),
			empty: "No se encontraron clientes para \"{query}\"".to_string(),
			error: "Error al buscar clientes".to_string(),
			create: "Crear nuevo cliente: \"{query}\"".to_string(),
			visits: "{count} visitas".to_string(),
			vip_badge: "VIP".to_string(),
			currency_symbol: "$".to_string(),
		}
	}
}

impl Presentation {
	#[must_use]
	pub fn empty_label(&self, query: &str) -> String {
		self.empty.replace("{query}", query)
	}

	#[must_use]
	pub fn create_label(&self, query: &str) -> String {
		self.create.replace("{query}", query)
	}

	#[must_use]
	pub fn visits_label(&self, count: u32) -> String {
		self.visits.replace("{count}", &count.to_string())
	}

	/// Format an amount with two decimals and thousands separators.
	#[must_use]
	pub fn currency(&self, amount: f64) -> String {
		format_currency(amount, &self.currency_symbol)
	}
}

static PRESENTATION: OnceLock<Presentation> = OnceLock::new();

/// Install the process-wide presentation. Returns `false` if one was already
/// in place, in which case `presentation` is dropped.
pub fn install(presentation: Presentation) -> bool {
	PRESENTATION.set(presentation).is_ok()
}

/// The installed presentation, or the defaults.
pub fn current() -> &'static Presentation {
	PRESENTATION.get_or_init(Presentation::default)
}

fn format_currency(amount: f64, symbol: &str) -> String {
	let cents = (amount * 100.0).round() as i64;
	let sign = if cents < 0 { "-" } else { "" };
	let cents = cents.unsigned_abs();
	let whole = group_thousands(cents / 100);
	format!("{sign}{symbol}{whole}.{:02}", cents % 100)
}

fn group_thousands(value: u64) -> String {
	let digits = value.to_string();
	let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
	for (index, ch) in digits.chars().enumerate() {
		if index > 0 && (digits.len() - index) % 3 == 0 {
			grouped.push(',');
		}
		grouped.push(ch);
	}
	grouped
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn currency_uses_two_decimals_and_grouping() {
		let presentation = Presentation::default();
		assert_eq!(presentation.currency(120.5), "$120.50");
		assert_eq!(presentation.currency(0.0), "$0.00");
		assert_eq!(presentation.currency(1234.5), "$1,234.50");
		assert_eq!(presentation.currency(1_000_000.0), "$1,000,000.00");
		assert_eq!(presentation.currency(-3.456), "-$3.46");
	}

	#[test]
	fn labels_substitute_placeholders() {
		let presentation = Presentation::default();
		assert_eq!(presentation.visits_label(5), "5 visitas");
		assert_eq!(presentation.create_label("zzz"), "Crear nuevo cliente: \"zzz\"");
		assert_eq!(
			presentation.empty_label("zzz"),
			"No se encontraron clientes para \"zzz\""
		);
	}

	#[test]
	fn install_is_once_only() {
		// Other tests may already have read the defaults; either way the
		// installed value stays the defaults and a second install loses.
		let _ = install(Presentation::default());
		let replacement = Presentation {
			vip_badge: "★".into(),
			..Presentation::default()
		};
		assert!(!install(replacement));
		assert_eq!(current(), &Presentation::default());
	}
}
