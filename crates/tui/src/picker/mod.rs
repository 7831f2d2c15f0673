//! The picker state machine.
//!
//! [`CountryPicker`] owns the open/closed phase, the filter text and focus,
//! and the resolved country list. Every interaction goes through one of its
//! operations (or [`CountryPicker::dispatch`]), which mutate the state in
//! event order and fire the registered callbacks. Nothing here touches the
//! terminal; the [`App`](crate::App) host renders from the derived views.

mod props;
#[cfg(test)]
mod tests;

use std::fmt;

use country_picker_data::{
	AlphabetIndex, Country, CountryCode, CountryService, FlagStyle, Translation, filter_countries,
};
pub use props::PickerProps;

use crate::components::TriggerContent;

/// Rows occupied by one country in the list.
pub const LIST_ROW_HEIGHT: usize = 1;

/// Called with the chosen country, before the picker closes.
pub type SelectCallback = Box<dyn FnMut(&Country)>;
/// Called after the picker opens or closes.
pub type LifecycleCallback = Box<dyn FnMut()>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PickerPhase {
	#[default]
	Closed,
	Open,
}

/// Local UI state owned by the picker.
#[derive(Debug, Clone, Default)]
pub struct PickerState {
	pub phase: PickerPhase,
	pub filter_text: String,
	pub filter_focused: bool,
	/// Countries for the current translation and flag style, sorted by name.
	pub visible_countries: Vec<Country>,
}

/// Interaction routed through [`CountryPicker::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
	Open,
	Close,
	FilterChanged(String),
	FilterFocused,
	FilterBlurred,
	Select(CountryCode),
	TranslationChanged(Translation),
	FlagStyleChanged(FlagStyle),
}

pub struct CountryPicker {
	service: CountryService,
	props: PickerProps,
	state: PickerState,
	on_select: SelectCallback,
	on_open: Option<LifecycleCallback>,
	on_close: Option<LifecycleCallback>,
}

impl fmt::Debug for CountryPicker {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CountryPicker")
			.field("props", &self.props)
			.field("phase", &self.state.phase)
			.field("filter_text", &self.state.filter_text)
			.field("filter_focused", &self.state.filter_focused)
			.field("visible_countries", &self.state.visible_countries.len())
			.finish_non_exhaustive()
	}
}

impl CountryPicker {
	/// Create a picker over the built-in dataset.
	pub fn new(props: PickerProps, on_select: impl FnMut(&Country) + 'static) -> Self {
		Self::with_service(CountryService::default(), props, on_select)
	}

	pub fn with_service(
		service: CountryService,
		props: PickerProps,
		on_select: impl FnMut(&Country) + 'static,
	) -> Self {
		let phase = if props.visible {
			PickerPhase::Open
		} else {
			PickerPhase::Closed
		};
		let visible_countries =
			service.list_countries_in(&props.scope, props.flag_style(), props.translation);
		log::debug!(
			"picker created with {} countries ({phase:?})",
			visible_countries.len()
		);
		Self {
			service,
			props,
			state: PickerState {
				phase,
				visible_countries,
				..PickerState::default()
			},
			on_select: Box::new(on_select),
			on_open: None,
			on_close: None,
		}
	}

	#[must_use]
	pub fn on_open(mut self, callback: impl FnMut() + 'static) -> Self {
		self.on_open = Some(Box::new(callback));
		self
	}

	#[must_use]
	pub fn on_close(mut self, callback: impl FnMut() + 'static) -> Self {
		self.on_close = Some(Box::new(callback));
		self
	}

	#[must_use]
	pub fn props(&self) -> &PickerProps {
		&self.props
	}

	#[must_use]
	pub fn state(&self) -> &PickerState {
		&self.state
	}

	#[must_use]
	pub fn service(&self) -> &CountryService {
		&self.service
	}

	#[must_use]
	pub fn is_open(&self) -> bool {
		self.state.phase == PickerPhase::Open
	}

	/// Whether the list is on screen: the modal is open or the picker is inline.
	#[must_use]
	pub fn list_visible(&self) -> bool {
		self.is_open() || !self.props.with_modal
	}

	#[must_use]
	pub fn country_code(&self) -> Option<CountryCode> {
		self.props.country_code
	}

	#[must_use]
	pub fn filter_text(&self) -> &str {
		&self.state.filter_text
	}

	#[must_use]
	pub fn filter_focused(&self) -> bool {
		self.state.filter_focused
	}

	#[must_use]
	pub fn translation(&self) -> Translation {
		self.props.translation
	}

	#[must_use]
	pub fn flag_style(&self) -> FlagStyle {
		self.props.flag_style()
	}

	#[must_use]
	pub fn visible_countries(&self) -> &[Country] {
		&self.state.visible_countries
	}

	/// The current country resolved for display, if the code is known.
	#[must_use]
	pub fn selected_country(&self) -> Option<Country> {
		let code = self.props.country_code?;
		self.service
			.country(code, self.flag_style(), self.translation())
	}

	/// Show the modal. Returns `false` when it was already open.
	pub fn open(&mut self) -> bool {
		if self.is_open() {
			return false;
		}
		self.state.phase = PickerPhase::Open;
		log::debug!("picker opened");
		if let Some(on_open) = self.on_open.as_mut() {
			on_open();
		}
		true
	}

	/// Hide the modal and clear the filter.
	///
	/// Inline pickers stay on screen, so the request only clears the filter
	/// and notifies `on_close`. Returns `false` when there was nothing to close.
	pub fn close(&mut self) -> bool {
		match (self.state.phase, self.props.with_modal) {
			(PickerPhase::Open, _) => {
				self.state.phase = PickerPhase::Closed;
				self.state.filter_focused = false;
			}
			(PickerPhase::Closed, false) => {}
			(PickerPhase::Closed, true) => return false,
		}
		self.state.filter_text.clear();
		log::debug!("picker closed");
		if let Some(on_close) = self.on_close.as_mut() {
			on_close();
		}
		true
	}

	/// Choose `code` from the countries matching the current filter.
	///
	/// `on_select` runs exactly once before the picker closes. Returns `None`,
	/// without firing anything, when the list is hidden or the code is not
	/// currently listed.
	pub fn select(&mut self, code: CountryCode) -> Option<Country> {
		if !self.list_visible() {
			log::debug!("ignoring selection of {code}: list is hidden");
			return None;
		}
		let Some(country) = self
			.filtered_countries()
			.into_iter()
			.find(|country| country.code() == code)
			.cloned()
		else {
			log::warn!("ignoring selection of {code}: not in the list");
			return None;
		};

		log::info!("selected {} ({code})", country.name());
		(self.on_select)(&country);
		self.props.country_code = Some(code);
		self.close();
		Some(country)
	}

	/// Replace the filter text verbatim. Ignored while the list is hidden.
	pub fn set_filter(&mut self, text: impl Into<String>) -> bool {
		if !self.list_visible() {
			return false;
		}
		let text = text.into();
		if self.state.filter_text == text {
			return false;
		}
		self.state.filter_text = text;
		true
	}

	pub fn focus_filter(&mut self) -> bool {
		!std::mem::replace(&mut self.state.filter_focused, true)
	}

	pub fn blur_filter(&mut self) -> bool {
		std::mem::replace(&mut self.state.filter_focused, false)
	}

	/// Switch the display language, re-resolving the list when it changes.
	pub fn set_translation(&mut self, translation: Translation) -> bool {
		if self.props.translation == translation {
			return false;
		}
		self.props.translation = translation;
		self.refresh_countries();
		true
	}

	/// Switch between emoji and asset flags, re-resolving the list when it
	/// changes. The current country is kept.
	pub fn set_flag_style(&mut self, style: FlagStyle) -> bool {
		if self.flag_style() == style {
			return false;
		}
		self.props.with_emoji = style == FlagStyle::Emoji;
		self.refresh_countries();
		true
	}

	/// Apply one event. Returns the chosen country for [`PickerEvent::Select`].
	pub fn dispatch(&mut self, event: PickerEvent) -> Option<Country> {
		log::trace!("dispatch {event:?}");
		match event {
			PickerEvent::Open => {
				self.open();
			}
			PickerEvent::Close => {
				self.close();
			}
			PickerEvent::FilterChanged(text) => {
				self.set_filter(text);
			}
			PickerEvent::FilterFocused => {
				self.focus_filter();
			}
			PickerEvent::FilterBlurred => {
				self.blur_filter();
			}
			PickerEvent::Select(code) => return self.select(code),
			PickerEvent::TranslationChanged(translation) => {
				self.set_translation(translation);
			}
			PickerEvent::FlagStyleChanged(style) => {
				self.set_flag_style(style);
			}
		}
		None
	}

	/// Visible countries matching the filter text, in list order.
	#[must_use]
	pub fn filtered_countries(&self) -> Vec<&Country> {
		filter_countries(
			&self.state.visible_countries,
			&self.state.filter_text,
			self.props.filter_options(),
		)
	}

	/// Jump index over the full list; only offered with the alphabet filter
	/// enabled and no filter text.
	#[must_use]
	pub fn alphabet_index(&self) -> Option<AlphabetIndex> {
		if !self.props.with_alpha_filter || !self.state.filter_text.trim().is_empty() {
			return None;
		}
		Some(AlphabetIndex::build(
			&self.state.visible_countries,
			LIST_ROW_HEIGHT,
		))
	}

	/// Content for the trigger. Inline pickers and pickers without a
	/// country have none.
	#[must_use]
	pub fn trigger_content(&self) -> Option<TriggerContent> {
		if !self.props.with_modal {
			return None;
		}
		let code = self.props.country_code?;
		Some(TriggerContent::compose(
			&self.service,
			code,
			self.props.button_toggles(),
			self.translation(),
			self.flag_style(),
		))
	}

	fn refresh_countries(&mut self) {
		self.state.visible_countries = self.service.list_countries_in(
			&self.props.scope,
			self.flag_style(),
			self.translation(),
		);
		log::debug!(
			"resolved {} countries ({}, {})",
			self.state.visible_countries.len(),
			self.translation(),
			self.flag_style()
		);
	}
}
