use anyhow::Result;
use country_picker::tui::UiLabels;
use country_picker::tui::style::StyleConfig;
use country_picker::{Country, CountryPickerUi, CountryService, PickerOutcome, PickerProps};

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive picker.
pub(crate) struct PickerWorkflow {
	picker_ui: CountryPickerUi,
}

impl PickerWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Self {
		let picker_ui = PickerUiFactory::build(config);
		Self { picker_ui }
	}

	pub(crate) fn run(self) -> Result<PickerOutcome> {
		self.picker_ui.run()
	}
}

/// Countries the picker would offer for `props`, in display order.
pub(crate) fn offered_countries(props: &PickerProps) -> Vec<Country> {
	CountryService::default().list_countries_in(&props.scope, props.flag_style(), props.translation)
}

/// Helper for translating resolved configuration into a configured
/// [`CountryPickerUi`].
struct PickerUiFactory {
	picker_ui: CountryPickerUi,
}

impl PickerUiFactory {
	fn build(config: ResolvedConfig) -> CountryPickerUi {
		let ResolvedConfig {
			props,
			theme_name: _,
			style,
			labels,
			log_level: _,
		} = config;

		Self::new(props)
			.with_style(style)
			.with_labels(labels)
			.finish()
	}

	fn new(props: PickerProps) -> Self {
		if let Some(code) = props.country_code
			&& CountryService::default().country_by_code(code).is_none()
		{
			log::warn!("country {code} is not in the dataset; the trigger will be blank");
		}
		let picker_ui = CountryPickerUi::new(props);
		Self { picker_ui }
	}

	fn with_style(mut self, style: StyleConfig) -> Self {
		self.picker_ui = self.picker_ui.with_style(style);
		self
	}

	fn with_labels(mut self, labels: UiLabels) -> Self {
		self.picker_ui = self.picker_ui.with_labels(labels);
		self
	}

	fn finish(self) -> CountryPickerUi {
		self.picker_ui
	}
}
