use country_picker::PickerProps;
use country_picker::tui::UiLabels;
use country_picker::tui::style::StyleConfig;
use log::LevelFilter;

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub props: PickerProps,
	pub theme_name: String,
	pub style: StyleConfig,
	pub labels: UiLabels,
	pub log_level: LevelFilter,
}

impl ResolvedConfig {
	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		let props = &self.props;
		println!("Effective configuration:");
		match props.country_code {
			Some(code) => println!("  Country: {code}"),
			None => println!("  Country: (none)"),
		}
		println!("  Translation: {}", props.translation);
		println!("  Flag style: {}", props.flag_style());
		println!("  Modal: {}", bool_to_word(props.with_modal));
		println!("  Start open: {}", bool_to_word(props.visible));
		println!("  Filter: {}", bool_to_word(props.with_filter));
		println!("  Alphabet strip: {}", bool_to_word(props.with_alpha_filter));
		println!(
			"  List columns: flag {}, currency {}, calling code {}",
			bool_to_word(props.with_flag),
			bool_to_word(props.with_currency),
			bool_to_word(props.with_calling_code)
		);
		println!(
			"  Trigger labels: name {}, currency {}, calling code {}",
			bool_to_word(props.with_country_name_button),
			bool_to_word(props.with_currency_button),
			bool_to_word(props.with_calling_code_button)
		);
		println!(
			"  Filter calling codes: {}",
			bool_to_word(props.filter_options().calling_codes)
		);

		let scope = &props.scope;
		if scope.is_unrestricted() {
			println!("  Countries: (all)");
		} else {
			if let Some(region) = scope.region {
				println!("  Region: {region}");
			}
			if let Some(subregion) = &scope.subregion {
				println!("  Subregion: {subregion}");
			}
			if !scope.only.is_empty() {
				println!("  Only: {}", join_codes(&scope.only));
			}
			if !scope.exclude.is_empty() {
				println!("  Exclude: {}", join_codes(&scope.exclude));
			}
		}

		println!("  UI theme: {}", self.theme_name);
		println!("  Title: {}", self.labels.title);
		println!("  Placeholder: {}", self.labels.placeholder);
		match self.style.button.text_color {
			Some(color) => println!("  Button colour: {color}"),
			None => println!("  Button colour: (theme)"),
		}
		println!("  Log level: {}", self.log_level);
	}
}

fn join_codes<T: ToString>(codes: &[T]) -> String {
	codes
		.iter()
		.map(ToString::to_string)
		.collect::<Vec<_>>()
		.join(", ")
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
	use country_picker::{CountryCode, CountryScope};

	use super::*;

	#[test]
	fn bool_to_word_matches_expectations() {
		assert_eq!(super::bool_to_word(true), "yes");
		assert_eq!(super::bool_to_word(false), "no");
	}

	#[test]
	fn summary_prints_without_panic() {
		let props = PickerProps {
			scope: CountryScope {
				only: vec![CountryCode::parse("FR").unwrap()],
				..CountryScope::default()
			},
			..PickerProps::new()
		}
		.with_country_code(CountryCode::parse("DE").unwrap());
		let config = ResolvedConfig {
			props,
			theme_name: "slate".into(),
			style: StyleConfig::default(),
			labels: UiLabels::default(),
			log_level: LevelFilter::Info,
		};

		config.print_summary();
	}
}
