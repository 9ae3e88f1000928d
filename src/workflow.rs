use std::sync::Arc;

use anyhow::{Context, Result};
use clientes_autocomplete::{Autocomplete, LookupRuntime, presentation};
use clientes_lookup_api::CustomerProvider;
use clientes_provider_fixture::FixtureProvider;
use clientes_provider_http::HttpProvider;
use clientes_tui::{App, SessionOutcome, UiLabels};

use crate::settings::{ProviderConfig, ResolvedConfig, UiConfig};

/// Coordinates building and running the interactive customer lookup.
pub(crate) struct LookupWorkflow {
	app: App<'static>,
}

impl LookupWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let app = AppFactory::build(config)?;
		Ok(Self { app })
	}

	pub(crate) fn run(self) -> Result<SessionOutcome> {
		clientes_tui::run(self.app)
	}
}

/// Build the customer source described by `config`.
pub(crate) fn build_provider(config: &ProviderConfig) -> Result<Arc<dyn CustomerProvider>> {
	let provider: Arc<dyn CustomerProvider> = match config {
		ProviderConfig::Http {
			base_url,
			endpoint,
			timeout,
		} => Arc::new(HttpProvider::new(base_url.clone(), endpoint.clone(), *timeout)),
		ProviderConfig::Fixture { path, latency } => Arc::new(
			FixtureProvider::from_path(path)
				.with_context(|| format!("failed to load customers from {}", path.display()))?
				.with_latency(*latency),
		),
	};
	tracing::info!(provider = %provider.describe(), "customer provider ready");
	Ok(provider)
}

/// Translates resolved configuration into a configured host [`App`].
struct AppFactory;

impl AppFactory {
	fn build(config: ResolvedConfig) -> Result<App<'static>> {
		let ResolvedConfig {
			search,
			allow_create,
			provider,
			ui,
			presentation,
			logging: _,
		} = config;

		if !presentation::install(presentation) {
			tracing::debug!("presentation already installed, keeping the first one");
		}

		let provider = build_provider(&provider)?;
		let mut controller = Autocomplete::new(search, LookupRuntime::spawn(provider))
			.on_select(|customer| tracing::debug!(id = %customer.id, "customer picked"));
		if allow_create {
			controller = controller
				.on_create(|name| tracing::info!(name, "new customer requested"));
		}

		Ok(Self::with_ui(App::new(controller), ui))
	}

	fn with_ui(mut app: App<'static>, ui: UiConfig) -> App<'static> {
		if let Some(title) = ui.title {
			app = app.with_labels(UiLabels {
				title,
				..UiLabels::default()
			});
		}
		if let Some(theme) = ui.theme.as_deref().and_then(clientes_tui::by_name) {
			app = app.with_theme(theme);
		}
		if !ui.initial_query.is_empty() {
			app = app.with_initial_query(&ui.initial_query);
		}
		app
	}
}

#[cfg(test)]
mod tests {
	use std::fs;
	use std::time::Duration;

	use super::*;

	#[test]
	fn fixture_provider_is_built_from_a_file() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("clientes.json");
		fs::write(
			&path,
			r#"[{"id": "c-1", "name": "Ana Gómez", "isVIP": true, "totalVisits": 5, "totalSpent": 120.5}]"#,
		)
		.expect("write fixture");

		let provider = build_provider(&ProviderConfig::Fixture {
			path,
			latency: Duration::ZERO,
		})
		.expect("provider");
		let customers = provider.lookup("ana").expect("lookup");
		assert_eq!(customers.len(), 1);
		assert!(customers[0].is_vip);
	}

	#[test]
	fn missing_fixture_reports_the_path() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("missing.json");
		let err = build_provider(&ProviderConfig::Fixture {
			path,
			latency: Duration::ZERO,
		})
		.err()
		.expect("missing file fails");
		assert!(format!("{err:#}").contains("missing.json"));
	}
}
