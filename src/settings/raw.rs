use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

use country_picker::logging;
use country_picker::tui::UiLabels;
use country_picker::tui::style::{StyleConfig, by_name, names, parse_color};
use country_picker::{
	CountryCode, CountryScope, CountryService, PickerProps, Region, Translation,
};

use crate::cli::CliArgs;

use super::resolved::ResolvedConfig;
use super::util::{non_empty, parse_codes};

const DEFAULT_THEME: &str = "slate";

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	picker: PickerSection,
	ui: UiSection,
}

/// Picker behaviour as read from disk or the environment.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct PickerSection {
	country: Option<String>,
	translation: Option<String>,
	region: Option<String>,
	subregion: Option<String>,
	only: Option<Vec<String>>,
	exclude: Option<Vec<String>>,
	with_filter: Option<bool>,
	with_alpha_filter: Option<bool>,
	with_calling_code: Option<bool>,
	with_currency: Option<bool>,
	with_flag: Option<bool>,
	with_emoji: Option<bool>,
	with_country_name_button: Option<bool>,
	with_currency_button: Option<bool>,
	with_calling_code_button: Option<bool>,
	with_modal: Option<bool>,
	visible: Option<bool>,
	filter_calling_codes: Option<bool>,
}

/// Presentation settings prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	theme: Option<String>,
	title: Option<String>,
	placeholder: Option<String>,
	button_color: Option<String>,
	log_level: Option<String>,
}

/// Replace `slot` when the command line supplied a value.
fn overlay<T: Clone>(slot: &mut Option<T>, value: &Option<T>) {
	if let Some(value) = value {
		*slot = Some(value.clone());
	}
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		let picker = &mut self.picker;
		overlay(&mut picker.country, &cli.country);
		overlay(&mut picker.translation, &cli.translation);
		overlay(&mut picker.region, &cli.region);
		overlay(&mut picker.subregion, &cli.subregion);
		overlay(&mut picker.only, &cli.only);
		overlay(&mut picker.exclude, &cli.exclude);
		overlay(&mut picker.with_filter, &cli.with_filter);
		overlay(&mut picker.with_alpha_filter, &cli.with_alpha_filter);
		overlay(&mut picker.with_calling_code, &cli.with_calling_code);
		overlay(&mut picker.with_currency, &cli.with_currency);
		overlay(&mut picker.with_flag, &cli.with_flag);
		overlay(&mut picker.with_emoji, &cli.with_emoji);
		overlay(
			&mut picker.with_country_name_button,
			&cli.with_country_name_button,
		);
		overlay(&mut picker.with_currency_button, &cli.with_currency_button);
		overlay(
			&mut picker.with_calling_code_button,
			&cli.with_calling_code_button,
		);
		overlay(&mut picker.with_modal, &cli.with_modal);
		overlay(&mut picker.visible, &cli.visible);
		overlay(&mut picker.filter_calling_codes, &cli.filter_calling_codes);

		let ui = &mut self.ui;
		overlay(&mut ui.theme, &cli.theme);
		overlay(&mut ui.title, &cli.title);
		overlay(&mut ui.placeholder, &cli.placeholder);
		overlay(&mut ui.button_color, &cli.button_color);
		if let Some(level) = cli.log_level {
			ui.log_level = Some(level.as_str().to_string());
		}
	}

	/// Validate the merged values and fill in defaults.
	pub(super) fn resolve(self) -> Result<ResolvedConfig> {
		let props = self.picker.resolve()?;
		let ui = self.ui;

		let theme_name = non_empty(ui.theme)
			.unwrap_or_else(|| DEFAULT_THEME.to_string())
			.to_ascii_lowercase();
		let theme = by_name(&theme_name).ok_or_else(|| {
			anyhow!(
				"unknown theme '{theme_name}' (available: {})",
				names().join(", ")
			)
		})?;
		let mut style = StyleConfig::with_theme(theme);
		if let Some(color) = non_empty(ui.button_color) {
			let parsed = parse_color(&color)
				.with_context(|| format!("invalid button colour '{color}'"))?;
			style.button.text_color = Some(parsed);
		}

		let mut labels = UiLabels::default();
		if let Some(title) = ui.title {
			labels = labels.with_title(title);
		}
		if let Some(placeholder) = ui.placeholder {
			labels = labels.with_placeholder(placeholder);
		}

		let log_level = match non_empty(ui.log_level) {
			Some(level) => logging::parse_level(&level)?,
			None => logging::DEFAULT_LEVEL,
		};

		Ok(ResolvedConfig {
			props,
			theme_name,
			style,
			labels,
			log_level,
		})
	}
}

impl PickerSection {
	fn resolve(self) -> Result<PickerProps> {
		let country_code = non_empty(self.country)
			.map(|value| {
				CountryCode::parse(&value).with_context(|| format!("invalid country '{value}'"))
			})
			.transpose()?;
		let translation = match non_empty(self.translation) {
			Some(value) => value
				.parse::<Translation>()
				.context("invalid translation")?,
			None => Translation::Common,
		};
		let region = non_empty(self.region)
			.map(|value| value.parse::<Region>().context("invalid region"))
			.transpose()?;
		let subregion = non_empty(self.subregion)
			.map(|value| known_subregion(&value))
			.transpose()?;
		let scope = CountryScope {
			region,
			subregion,
			only: parse_codes(self.only.unwrap_or_default()).context("invalid 'only' list")?,
			exclude: parse_codes(self.exclude.unwrap_or_default())
				.context("invalid 'exclude' list")?,
		};

		let defaults = PickerProps::new();
		Ok(PickerProps {
			country_code,
			with_filter: self.with_filter.unwrap_or(true),
			with_alpha_filter: self.with_alpha_filter.unwrap_or(defaults.with_alpha_filter),
			with_calling_code: self.with_calling_code.unwrap_or(defaults.with_calling_code),
			with_currency: self.with_currency.unwrap_or(defaults.with_currency),
			with_flag: self.with_flag.unwrap_or(defaults.with_flag),
			with_emoji: self.with_emoji.unwrap_or(defaults.with_emoji),
			with_country_name_button: self
				.with_country_name_button
				.unwrap_or(defaults.with_country_name_button),
			with_currency_button: self
				.with_currency_button
				.unwrap_or(defaults.with_currency_button),
			with_calling_code_button: self
				.with_calling_code_button
				.unwrap_or(defaults.with_calling_code_button),
			with_modal: self.with_modal.unwrap_or(defaults.with_modal),
			visible: self.visible.unwrap_or(defaults.visible),
			translation,
			filter_calling_codes: self.filter_calling_codes,
			scope,
		})
	}
}

/// Canonical spelling of a dataset subregion, matched case-insensitively.
fn known_subregion(value: &str) -> Result<String> {
	let service = CountryService::default();
	let subregions = service.subregions();
	subregions
		.iter()
		.find(|name| name.eq_ignore_ascii_case(value.trim()))
		.map(|name| (*name).to_string())
		.ok_or_else(|| {
			anyhow!(
				"unknown subregion '{value}' (expected one of: {})",
				subregions.join(", ")
			)
		})
}
