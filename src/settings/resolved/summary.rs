use std::io::{self, Write};

use super::{ProviderConfig, ResolvedConfig};

pub(super) fn print_summary(config: &ResolvedConfig) {
	let _ = write_summary(&mut io::stdout().lock(), config);
}

fn write_summary(out: &mut impl Write, config: &ResolvedConfig) -> io::Result<()> {
	writeln!(out, "Effective configuration:")?;
	match &config.provider {
		ProviderConfig::Http {
			base_url,
			endpoint,
			timeout,
		} => {
			writeln!(out, "  Provider: http")?;
			writeln!(out, "  Base URL: {base_url}")?;
			writeln!(out, "  Endpoint: {endpoint}")?;
			writeln!(out, "  Timeout: {} ms", timeout.as_millis())?;
		}
		ProviderConfig::Fixture { path, latency } => {
			writeln!(out, "  Provider: fixture")?;
			writeln!(out, "  Fixture: {}", path.display())?;
			writeln!(out, "  Latency: {} ms", latency.as_millis())?;
		}
	}

	let search = &config.search;
	writeln!(out, "  Minimum length: {}", search.min_length)?;
	writeln!(out, "  Max results: {}", search.max_results)?;
	writeln!(out, "  Debounce: {} ms", search.debounce.as_millis())?;
	writeln!(out, "  Blur grace: {} ms", search.blur_grace.as_millis())?;
	writeln!(out, "  Show details: {}", bool_to_word(search.show_details))?;
	writeln!(out, "  Create customers: {}", bool_to_word(config.allow_create))?;

	writeln!(
		out,
		"  UI theme: {}",
		config.ui.theme.as_deref().unwrap_or("(use the library default)")
	)?;
	if let Some(title) = &config.ui.title {
		writeln!(out, "  Prompt title: {title}")?;
	}
	if !config.ui.initial_query.is_empty() {
		writeln!(out, "  Initial query: {}", config.ui.initial_query)?;
	}
	writeln!(out, "  Currency symbol: {}", config.presentation.currency_symbol)?;

	writeln!(out, "  Log level: {}", config.logging.level)?;
	match &config.logging.file {
		Some(path) => writeln!(out, "  Log file: {}", path.display()),
		None => writeln!(out, "  Log file: (data directory)"),
	}
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
