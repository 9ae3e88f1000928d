use clientes_autocomplete::Presentation;
use serde::Deserialize;

/// Overrides for the labels drawn in the result list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct MessagesSection {
	pub(super) loading: Option<String>,
	pub(super) empty: Option<String>,
	pub(super) error: Option<String>,
	pub(super) create: Option<String>,
	pub(super) visits: Option<String>,
	pub(super) vip_badge: Option<String>,
	pub(super) currency_symbol: Option<String>,
}

impl MessagesSection {
	pub(super) fn resolve(self) -> Presentation {
		let defaults = Presentation::default();
		Presentation {
			loading: self.loading.unwrap_or(defaults.loading),
			empty: self.empty.unwrap_or(defaults.empty),
			error: self.error.unwrap_or(defaults.error),
			create: self.create.unwrap_or(defaults.create),
			visits: self.visits.unwrap_or(defaults.visits),
			vip_badge: self.vip_badge.unwrap_or(defaults.vip_badge),
			currency_symbol: self.currency_symbol.unwrap_or(defaults.currency_symbol),
		}
	}
}
