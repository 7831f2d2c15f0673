use country_picker_data::{CountryCode, CountryScope, FilterOptions, FlagStyle, Translation};

use crate::components::{ButtonToggles, ListColumns};

/// Configuration of a [`CountryPicker`](super::CountryPicker).
///
/// Toggles are taken as given; conflicting combinations are not rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerProps {
	/// Country shown on the trigger.
	pub country_code: Option<CountryCode>,
	/// Show the filter input above the list.
	pub with_filter: bool,
	/// Show the alphabet strip while the filter is empty.
	pub with_alpha_filter: bool,
	/// Show the calling code column.
	pub with_calling_code: bool,
	/// Show the currency column.
	pub with_currency: bool,
	/// Show the flag column.
	pub with_flag: bool,
	/// Emoji flags when set, image asset references otherwise.
	pub with_emoji: bool,
	pub with_country_name_button: bool,
	pub with_currency_button: bool,
	pub with_calling_code_button: bool,
	/// Present the list in a modal behind a trigger. When unset the list is
	/// always shown inline and there is no trigger.
	pub with_modal: bool,
	/// Start with the modal open.
	pub visible: bool,
	pub translation: Translation,
	/// Match the filter against calling codes. Defaults to `with_calling_code`.
	pub filter_calling_codes: Option<bool>,
	/// Restricts which countries are offered.
	pub scope: CountryScope,
}

impl Default for PickerProps {
	fn default() -> Self {
		Self::new()
	}
}

impl PickerProps {
	#[must_use]
	pub fn new() -> Self {
		Self {
			country_code: None,
			with_filter: false,
			with_alpha_filter: false,
			with_calling_code: false,
			with_currency: false,
			with_flag: true,
			with_emoji: true,
			with_country_name_button: false,
			with_currency_button: false,
			with_calling_code_button: false,
			with_modal: true,
			visible: false,
			translation: Translation::Common,
			filter_calling_codes: None,
			scope: CountryScope::default(),
		}
	}

	#[must_use]
	pub fn with_country_code(mut self, code: CountryCode) -> Self {
		self.country_code = Some(code);
		self
	}

	#[must_use]
	pub fn flag_style(&self) -> FlagStyle {
		FlagStyle::from_emoji(self.with_emoji)
	}

	#[must_use]
	pub fn button_toggles(&self) -> ButtonToggles {
		ButtonToggles {
			name: self.with_country_name_button,
			currency: self.with_currency_button,
			calling_code: self.with_calling_code_button,
		}
	}

	#[must_use]
	pub fn list_columns(&self) -> ListColumns {
		ListColumns {
			flag: self.with_flag,
			currency: self.with_currency,
			calling_code: self.with_calling_code,
		}
	}

	#[must_use]
	pub fn filter_options(&self) -> FilterOptions {
		FilterOptions::with_calling_codes(
			self.filter_calling_codes
				.unwrap_or(self.with_calling_code),
		)
	}
}
