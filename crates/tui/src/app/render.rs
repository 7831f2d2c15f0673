use country_picker_data::text::first_letter;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Clear, Widget};
use unicode_width::UnicodeWidthStr;

use super::App;
use super::state::LayoutCache;
use crate::components::{
	FilterProps, ListProps, TriggerProps, centered_rect, modal_block, render_country_list,
};

/// Horizontal padding around the trigger label inside its border.
const TRIGGER_PADDING: u16 = 4;
const MIN_TRIGGER_WIDTH: u16 = 8;

impl App {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		self.layout = LayoutCache::default();
		let mut area = frame.area();

		if self.logs.is_visible() {
			let [main, logs] =
				Layout::vertical([Constraint::Fill(1), Constraint::Percentage(35)]).areas(area);
			self.logs.render(frame, logs, &self.style.theme);
			area = main;
		}

		if self.picker.props().with_modal {
			self.render_trigger(frame, area);
			if self.picker.is_open() {
				let modal = centered_rect(area, self.style.modal);
				frame.render_widget(Clear, modal);
				self.render_panel(frame, modal);
			}
		} else {
			self.render_panel(frame, area);
		}
	}

	fn render_trigger(&mut self, frame: &mut Frame, area: Rect) {
		let area = area.inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let height = self.trigger_renderer.height();
		let [button_row, hint_row] =
			Layout::vertical([Constraint::Length(height), Constraint::Length(1)]).areas(area);

		let content = self.picker.trigger_content();
		let label_width = content
			.as_ref()
			.map(|content| content.label().width() as u16)
			.unwrap_or_default();
		let width = (label_width + TRIGGER_PADDING)
			.max(MIN_TRIGGER_WIDTH)
			.min(button_row.width);
		let button = Rect {
			width,
			..button_row
		};

		let props = TriggerProps {
			content: content.as_ref(),
			focused: !self.picker.is_open(),
			theme: &self.style.theme,
			style: &self.style.button,
		};
		self.trigger_renderer
			.render(&props, button, frame.buffer_mut());
		self.layout.trigger = Some(button);

		if !self.picker.is_open() {
			Line::styled(self.ui.trigger_hint.as_str(), self.style.theme.muted_style())
				.render(hint_row, frame.buffer_mut());
		}
	}

	/// Draw the bordered panel holding the filter row and the list.
	fn render_panel(&mut self, frame: &mut Frame, area: Rect) {
		let block = modal_block(&self.ui.title, &self.ui.list_hint, &self.style.theme);
		let inner = block.inner(area);
		frame.render_widget(block, area);
		self.layout.panel = Some(area);

		let list_area = if self.picker.props().with_filter {
			let [filter_area, _gap, list_area] = Layout::vertical([
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Fill(1),
			])
			.areas(inner);
			let props = FilterProps {
				input: &self.filter_input,
				placeholder: &self.ui.placeholder,
				focused: self.picker.filter_focused(),
				theme: &self.style.theme,
				style: &self.style.filter,
			};
			self.filter_renderer
				.render(&props, filter_area, frame.buffer_mut());
			self.layout.filter = Some(filter_area);
			list_area
		} else {
			inner
		};

		let filtered = self.picker.filtered_countries();
		let alphabet = self.picker.alphabet_index();
		let active_letter = self
			.list_state
			.selected()
			.and_then(|index| filtered.get(index))
			.and_then(|country| first_letter(country.name()));
		let props = ListProps {
			countries: &filtered,
			columns: self.picker.props().list_columns(),
			alphabet: alphabet.as_ref(),
			active_letter,
			empty_message: &self.ui.empty_message,
			theme: &self.style.theme,
			style: &self.style.list,
		};
		let areas = render_country_list(&props, list_area, frame.buffer_mut(), &mut self.list_state);
		self.layout.list = Some(areas);
	}
}
