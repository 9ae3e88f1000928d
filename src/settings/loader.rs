use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;

	use super::*;
	use crate::settings::ProviderConfig;

	fn write_config(dir: &tempfile::TempDir, body: &str) -> String {
		let path = dir.path().join("clientes.toml");
		fs::write(&path, body).expect("write config");
		path.display().to_string()
	}

	#[test]
	fn file_values_are_loaded_and_cli_wins() {
		let dir = tempfile::tempdir().expect("tempdir");
		let config = write_config(
			&dir,
			r#"
[search]
max_results = 5
debounce_ms = 150

[provider]
kind = "fixture"
fixture = "clientes.json"
latency_ms = 40

[ui]
theme = "light"

[messages]
currency_symbol = "MX$"
"#,
		);

		let cli = CliArgs::parse_from(["clientes", "-n", "-c", &config, "--max-results", "3"]);
		let resolved = load(&cli).expect("loads");

		assert_eq!(resolved.search.max_results, 3);
		assert_eq!(resolved.search.debounce.as_millis(), 150);
		assert_eq!(resolved.ui.theme.as_deref(), Some("light"));
		assert_eq!(resolved.presentation.currency(12.0), "MX$12.00");
		match resolved.provider {
			ProviderConfig::Fixture { path, latency } => {
				assert!(path.ends_with("clientes.json"));
				assert_eq!(latency.as_millis(), 40);
			}
			other => panic!("unexpected provider {other:?}"),
		}
	}

	#[test]
	fn invalid_file_value_names_the_config_key() {
		let dir = tempfile::tempdir().expect("tempdir");
		let config = write_config(&dir, "[search]\nmax_results = 0\n");

		let cli = CliArgs::parse_from(["clientes", "-n", "-c", &config]);
		let message = load(&cli).unwrap_err().to_string();
		assert!(message.contains("search.max_results"));
		assert!(message.contains("configuration key"));
	}

	#[test]
	fn invalid_cli_value_names_the_flag() {
		let cli = CliArgs::parse_from(["clientes", "-n", "--timeout-ms", "0"]);
		let message = load(&cli).unwrap_err().to_string();
		assert!(message.contains("`--timeout-ms`"));
		assert!(message.contains("value: 0"));
	}

	#[test]
	fn missing_explicit_config_file_is_an_error() {
		let dir = tempfile::tempdir().expect("tempdir");
		let missing = dir.path().join("missing.toml").display().to_string();
		let cli = CliArgs::parse_from(["clientes", "-n", "-c", &missing]);
		assert!(load(&cli).is_err());
	}
}
