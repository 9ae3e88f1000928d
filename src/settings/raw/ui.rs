use serde::Deserialize;

use super::super::resolved::UiConfig;
use super::super::util::non_blank;
use crate::cli::CliArgs;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) title: Option<String>,
	pub(super) theme: Option<String>,
	pub(super) initial_query: Option<String>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
	}

	pub(super) fn resolve(self) -> UiConfig {
		UiConfig {
			title: non_blank(self.title),
			theme: non_blank(self.theme),
			initial_query: self.initial_query.unwrap_or_default(),
		}
	}
}
