//! Terminal host for a [`CountryPicker`](crate::CountryPicker).
//!
//! The [`App`] type owns the picker plus everything needed to draw it: the
//! filter editor, list scroll state, styling and renderer overrides.
//! Supporting modules split input handling and rendering.

mod actions;
mod render;
mod state;

use country_picker_data::Country;
pub use state::App;

/// How an interactive session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOutcome {
	/// `true` when a country was chosen.
	pub accepted: bool,
	pub country: Option<Country>,
}

impl PickerOutcome {
	#[must_use]
	pub fn accepted(country: Country) -> Self {
		Self {
			accepted: true,
			country: Some(country),
		}
	}

	#[must_use]
	pub fn cancelled() -> Self {
		Self {
			accepted: false,
			country: None,
		}
	}
}
