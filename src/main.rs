mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use clientes::{app_dirs, logging};
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use workflow::LookupWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for descriptor in clientes_tui::descriptors() {
			let marker = if descriptor.is_default { " (default)" } else { "" };
			if descriptor.aliases.is_empty() {
				println!("{}{marker}", descriptor.name);
			} else {
				println!("{}{marker}: {}", descriptor.name, descriptor.aliases.join(", "));
			}
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	init_logging(&resolved);

	run_lookup(cli.output, resolved)
}

/// Best effort: a broken log destination must not keep the till from working.
fn init_logging(config: &ResolvedConfig) {
	let path = match &config.logging.file {
		Some(path) => path.clone(),
		None => match app_dirs::default_log_file() {
			Ok(path) => path,
			Err(err) => {
				eprintln!("logging disabled: {err:#}");
				return;
			}
		},
	};
	match logging::initialize(&config.logging.level, &path) {
		Ok(_) => tracing::info!(version = env!("CARGO_PKG_VERSION"), "clientes starting"),
		Err(err) => eprintln!("logging disabled: {err:#}"),
	}
}

/// Run the lookup session and print the outcome in the chosen format.
fn run_lookup(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = LookupWorkflow::from_config(settings)?;
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
