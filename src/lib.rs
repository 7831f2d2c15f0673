//! Command line front end for the terminal country picker.
//!
//! The library half exposes directory resolution and logging setup alongside
//! re-exports of the data and UI crates, so embedders can depend on this
//! crate alone.

pub mod app_dirs;
pub mod logging;

pub use country_picker_data as data;
pub use country_picker_tui as tui;

pub use country_picker_data::{
	Country, CountryCode, CountryScope, CountryService, Flag, FlagStyle, Region, Translation,
};
pub use country_picker_tui::{CountryPicker, CountryPickerUi, PickerOutcome, PickerProps};
