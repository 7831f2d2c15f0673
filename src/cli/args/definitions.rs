use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser};

use super::options::{LogLevelArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `country-picker` binary.
///
/// Toggles take an optional boolish value: `--with-currency` alone means
/// `true`, `--with-currency=no` turns it off.
#[derive(Parser, Debug)]
#[command(
	name = "country-picker",
	version,
	long_version = long_version(),
	about = "Pick a country from a filterable list in the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "COUNTRY_PICKER_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'C',
		long,
		value_name = "CODE",
		help = "Country shown on the trigger, as a two-letter code (default: none)"
	)]
	pub(crate) country: Option<String>,
	#[arg(
		short = 't',
		long,
		value_name = "LOCALE",
		help = "Language of country names, e.g. deu or jpn (default: common)"
	)]
	pub(crate) translation: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long,
		value_name = "TITLE",
		help = "Title of the country list (default: Select a country)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long,
		value_name = "TEXT",
		help = "Placeholder of the filter input (default: Enter country name)"
	)]
	pub(crate) placeholder: Option<String>,
	#[arg(
		long = "button-color",
		value_name = "COLOR",
		help = "Text colour of the trigger: a name, #rrggbb or palette index (default: theme)"
	)]
	pub(crate) button_color: Option<String>,
	#[arg(
		long,
		value_name = "REGION",
		help = "Only offer countries from this region (default: all)"
	)]
	pub(crate) region: Option<String>,
	#[arg(
		long,
		value_name = "SUBREGION",
		help = "Only offer countries from this subregion (default: all)"
	)]
	pub(crate) subregion: Option<String>,
	#[arg(
		long,
		value_delimiter = ',',
		value_name = "CODE",
		help = "Comma-separated country codes to offer exclusively (default: all)"
	)]
	pub(crate) only: Option<Vec<String>>,
	#[arg(
		long,
		value_delimiter = ',',
		value_name = "CODE",
		help = "Comma-separated country codes to leave out (default: none)"
	)]
	pub(crate) exclude: Option<Vec<String>>,
	#[arg(
		long = "with-filter",
		value_name = "BOOL",
		num_args = 0..=1,
		default_missing_value = "true",
		value_parser = BoolishValueParser::new(),
		help = "Show the filter input above the list (default: enabled)"
	)]
	pub(crate) with_filter: Option<bool>,
	#[arg(
		long = "with-alpha-filter",
		value_name = "BOOL",
		num_args = 0..=1,
		default_missing_value = "true",
		value_parser = BoolishValueParser::new(),
		help = "Show the alphabet jump strip while the filter is empty (default: disabled)"
	)]
	pub(crate) with_alpha_filter: Option<bool>,
	#[arg(
		long = "with-calling-code",
		value_name = "BOOL",
		num_args = 0..=1,
		default_missing_value = "true",
		value_parser = BoolishValueParser::new(),
		help = "Show calling codes in the list (default: disabled)"
	)]
	pub(crate) with_calling_code: Option<bool>,
	#[arg(
		long = "with-currency",
		value_name = "BOOL",
		num_args = 0..=1,
		default_missing_value = "true",
		value_parser = BoolishValueParser::new(),
		help = "Show currencies in the list (default: disabled)"
	)]
	pub(crate) with_currency: Option<bool>,
	#[arg(
		long = "with-flag",
		value_name = "BOOL",
		num_args = 0..=1,
		default_missing_value = "true",
		value_parser = BoolishValueParser::new(),
		help = "Show flags in the list (default: enabled)"
	)]
	pub(crate) with_flag: Option<bool>,
	#[arg(
		long = "with-emoji",
		value_name = "BOOL",
		num_args = 0..=1,
		default_missing_value = "true",
		value_parser = BoolishValueParser::new(),
		help = "Draw flags as emoji instead of asset references (default: enabled)"
	)]
	pub(crate) with_emoji: Option<bool>,
	#[arg(
		long = "with-country-name-button",
		value_name = "BOOL",
		num_args = 0..=1,
		default_missing_value = "true",
		value_parser = BoolishValueParser::new(),
		help = "Show the country name on the trigger (default: disabled)"
	)]
	pub(crate) with_country_name_button: Option<bool>,
	#[arg(
		long = "with-currency-button",
		value_name = "BOOL",
		num_args = 0..=1,
		default_missing_value = "true",
		value_parser = BoolishValueParser::new(),
		help = "Show the currency on the trigger (default: disabled)"
	)]
	pub(crate) with_currency_button: Option<bool>,
	#[arg(
		long = "with-calling-code-button",
		value_name = "BOOL",
		num_args = 0..=1,
		default_missing_value = "true",
		value_parser = BoolishValueParser::new(),
		help = "Show the calling code on the trigger (default: disabled)"
	)]
	pub(crate) with_calling_code_button: Option<bool>,
	#[arg(
		long = "with-modal",
		value_name = "BOOL",
		num_args = 0..=1,
		default_missing_value = "true",
		value_parser = BoolishValueParser::new(),
		help = "Open the list in a modal behind a trigger; disable for an inline list (default: enabled)"
	)]
	pub(crate) with_modal: Option<bool>,
	#[arg(
		long = "visible",
		value_name = "BOOL",
		num_args = 0..=1,
		default_missing_value = "true",
		value_parser = BoolishValueParser::new(),
		help = "Start with the modal open (default: disabled)"
	)]
	pub(crate) visible: Option<bool>,
	#[arg(
		long = "filter-calling-codes",
		value_name = "BOOL",
		num_args = 0..=1,
		default_missing_value = "true",
		value_parser = BoolishValueParser::new(),
		help = "Match the filter against calling codes (default: follows --with-calling-code)"
	)]
	pub(crate) filter_calling_codes: Option<bool>,
	#[arg(
		long = "log-level",
		value_enum,
		help = "Minimum level shown in the log pane (default: info)"
	)]
	pub(crate) log_level: Option<LogLevelArg>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		long = "list-countries",
		help = "Print the countries the picker would offer and exit (default: disabled)"
	)]
	pub(crate) list_countries: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
