mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_countries, print_json, print_plain};
use country_picker::logging;
use settings::ResolvedConfig;
use workflow::{PickerWorkflow, offered_countries};

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in country_picker::tui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	if cli.list_countries {
		let countries = offered_countries(&resolved.props);
		return print_countries(&countries, cli.output == OutputFormat::Json);
	}

	logging::initialize(resolved.log_level)?;
	run_picker(cli.output, resolved)
}

/// Run the picker and print the outcome in the chosen format.
fn run_picker(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = PickerWorkflow::from_config(settings);
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
