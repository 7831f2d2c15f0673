use clap::{CommandFactory, FromArgMatches};

use super::options::LogLevelArg;
use super::{CliArgs, OutputFormat};

fn parse(args: &[&str]) -> CliArgs {
	let command = CliArgs::command();
	let mut matches = command
		.try_get_matches_from(std::iter::once("country-picker").chain(args.iter().copied()))
		.expect("valid arguments");
	CliArgs::from_arg_matches_mut(&mut matches).expect("parses")
}

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let parsed = parse(&[]);
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert_eq!(parsed.with_modal, None);
	assert!(parsed.config.is_empty());
}

#[test]
fn toggles_accept_bare_flags_and_boolish_values() {
	let parsed = parse(&[
		"--with-currency",
		"--with-modal=no",
		"--with-emoji",
		"off",
		"--visible=1",
	]);
	assert_eq!(parsed.with_currency, Some(true));
	assert_eq!(parsed.with_modal, Some(false));
	assert_eq!(parsed.with_emoji, Some(false));
	assert_eq!(parsed.visible, Some(true));
	assert_eq!(parsed.with_flag, None);
}

#[test]
fn code_lists_are_comma_delimited() {
	let parsed = parse(&["--only", "de,at", "--exclude=FR", "-C", "ch", "-o", "json"]);
	assert_eq!(parsed.only, Some(vec!["de".to_string(), "at".to_string()]));
	assert_eq!(parsed.exclude, Some(vec!["FR".to_string()]));
	assert_eq!(parsed.country.as_deref(), Some("ch"));
	assert_eq!(parsed.output, OutputFormat::Json);
}

#[test]
fn log_level_is_a_closed_set() {
	assert_eq!(parse(&["--log-level", "debug"]).log_level, Some(LogLevelArg::Debug));
	let command = CliArgs::command();
	assert!(
		command
			.try_get_matches_from(["country-picker", "--log-level", "loud"])
			.is_err()
	);
}
