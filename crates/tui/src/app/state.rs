//! State container for the terminal front-end.

use ratatui::layout::Rect;
use ratatui::widgets::ListState;

use crate::components::{FilterRenderer, FlagButton, ListAreas, TextFilter, TriggerRenderer};
use crate::config::UiLabels;
use crate::input::FilterInput;
use crate::logs::LogPane;
use crate::picker::CountryPicker;
use crate::style::StyleConfig;

/// Screen areas recorded during the last draw, used for mouse hit tests.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct LayoutCache {
	pub(crate) trigger: Option<Rect>,
	pub(crate) panel: Option<Rect>,
	pub(crate) filter: Option<Rect>,
	pub(crate) list: Option<ListAreas>,
}

/// Aggregate state shared across the terminal UI.
pub struct App {
	pub(crate) picker: CountryPicker,
	/// Editor mirroring the picker's filter text.
	pub(crate) filter_input: FilterInput,
	pub(crate) list_state: ListState,
	pub(crate) ui: UiLabels,
	/// Current style and theme configuration.
	pub style: StyleConfig,
	pub(crate) trigger_renderer: Box<dyn TriggerRenderer>,
	pub(crate) filter_renderer: Box<dyn FilterRenderer>,
	pub(crate) logs: LogPane,
	pub(crate) layout: LayoutCache,
	/// End the session as soon as a country is chosen.
	pub(crate) exit_on_select: bool,
}

impl App {
	/// Wrap `picker` with the default labels, style and renderers.
	pub fn new(picker: CountryPicker) -> Self {
		let mut app = Self {
			picker,
			filter_input: FilterInput::default(),
			list_state: ListState::default(),
			ui: UiLabels::default(),
			style: StyleConfig::default(),
			trigger_renderer: Box::new(FlagButton),
			filter_renderer: Box::new(TextFilter),
			logs: LogPane::new(),
			layout: LayoutCache::default(),
			exit_on_select: true,
		};
		if app.picker.list_visible() {
			app.on_list_shown();
		}
		app.apply_style();
		app
	}

	#[must_use]
	pub fn picker(&self) -> &CountryPicker {
		&self.picker
	}

	pub fn picker_mut(&mut self) -> &mut CountryPicker {
		&mut self.picker
	}

	pub fn set_labels(&mut self, ui: UiLabels) {
		self.ui = ui;
	}

	pub fn set_style(&mut self, style: StyleConfig) {
		self.style = style;
		self.apply_style();
		if self.picker.list_visible() {
			self.on_list_shown();
		}
	}

	pub fn set_trigger_renderer(&mut self, renderer: Box<dyn TriggerRenderer>) {
		self.trigger_renderer = renderer;
	}

	pub fn set_filter_renderer(&mut self, renderer: Box<dyn FilterRenderer>) {
		self.filter_renderer = renderer;
	}

	pub fn set_exit_on_select(&mut self, exit: bool) {
		self.exit_on_select = exit;
	}

	/// Index of the highlighted row in the filtered list.
	#[must_use]
	pub fn highlighted(&self) -> Option<usize> {
		self.list_state.selected()
	}

	#[must_use]
	pub fn logs_visible(&self) -> bool {
		self.logs.is_visible()
	}

	fn apply_style(&mut self) {
		self.filter_input.set_text_style(self.style.theme.prompt);
	}

	/// Prepare focus and highlight after the list appears.
	pub(crate) fn on_list_shown(&mut self) {
		if self.picker.props().with_filter && self.style.filter.autofocus {
			self.picker.focus_filter();
		}
		let current = self.picker.country_code();
		let filtered = self.picker.filtered_countries();
		let position = current
			.and_then(|code| filtered.iter().position(|country| country.code() == code))
			.or_else(|| (!filtered.is_empty()).then_some(0));
		self.list_state = ListState::default().with_selected(position);
		self.sync_filter_input();
	}

	/// Bring the editor in line with the picker's filter text and focus.
	pub(crate) fn sync_filter_input(&mut self) {
		if self.filter_input.text() != self.picker.filter_text() {
			self.filter_input.set_text(self.picker.filter_text());
		}
		self.filter_input.set_focused(self.picker.filter_focused());
	}
}
