//! Interactive terminal country picker.
//!
//! The [`CountryPicker`] state machine is headless and drives everything:
//! open/closed phase, filter text, selection callbacks. The [`App`] host
//! draws it with ratatui as a trigger button plus a modal (or an inline
//! panel), and [`CountryPickerUi`] wires both together for a full-screen
//! session.

mod app;
mod builder;
pub mod components;
mod config;
pub mod input;
pub mod logs;
pub mod picker;
mod runtime;
pub mod style;

pub use app::{App, PickerOutcome};
pub use builder::CountryPickerUi;
pub use config::UiLabels;
pub use picker::{
	CountryPicker, LifecycleCallback, PickerEvent, PickerPhase, PickerProps, PickerState,
	SelectCallback,
};

pub use crate::components::{
	ButtonToggles, FilterProps, FilterRenderer, FlagButton, TextFilter, TriggerContent,
	TriggerProps, TriggerRenderer,
};
pub use crate::input::FilterInput;
pub use crate::logs::LogPane;
pub use crate::style::{
	ButtonStyle, FilterStyle, ListStyle, ModalStyle, StyleConfig, Theme, builtin_themes,
	default_theme,
};
