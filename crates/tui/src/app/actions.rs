use country_picker_data::CountryCode;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::widgets::ListState;

use super::{App, PickerOutcome};
use crate::components::list::{letter_at, row_at};
use crate::components::point_in_rect;

const PAGE_STEP: isize = 10;

impl App {
	/// React to a key press. Returns an outcome when the session should end.
	pub fn handle_key(&mut self, key: KeyEvent) -> Option<PickerOutcome> {
		if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
			return Some(PickerOutcome::cancelled());
		}
		if key.code == KeyCode::F(2) {
			self.logs.toggle();
			return None;
		}
		if self.logs.handle_key(key) {
			return None;
		}

		if self.picker.list_visible() {
			self.handle_list_key(key)
		} else {
			self.handle_trigger_key(key)
		}
	}

	fn handle_trigger_key(&mut self, key: KeyEvent) -> Option<PickerOutcome> {
		match key.code {
			KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => {
				self.open();
				None
			}
			KeyCode::Esc | KeyCode::Char('q') => Some(PickerOutcome::cancelled()),
			_ => None,
		}
	}

	fn handle_list_key(&mut self, key: KeyEvent) -> Option<PickerOutcome> {
		let filter_focused = self.picker.filter_focused();
		match key.code {
			KeyCode::Esc => {
				if self.picker.props().with_modal {
					self.close();
					None
				} else {
					Some(PickerOutcome::cancelled())
				}
			}
			KeyCode::Enter => self.select_highlighted(),
			KeyCode::Up => {
				self.move_selection(-1);
				None
			}
			KeyCode::Down => {
				self.move_selection(1);
				None
			}
			KeyCode::PageUp => {
				self.move_selection(-PAGE_STEP);
				None
			}
			KeyCode::PageDown => {
				self.move_selection(PAGE_STEP);
				None
			}
			KeyCode::Home if !filter_focused => {
				self.move_selection(isize::MIN);
				None
			}
			KeyCode::End if !filter_focused => {
				self.move_selection(isize::MAX);
				None
			}
			KeyCode::Tab | KeyCode::BackTab => {
				self.toggle_filter_focus();
				None
			}
			_ if filter_focused => {
				if self.filter_input.input(key) {
					self.apply_filter();
				}
				None
			}
			KeyCode::Char(letter) if letter.is_alphabetic() => {
				if !self.jump_to_letter(letter) && self.picker.props().with_filter {
					// Typing in the list starts filtering.
					self.picker.focus_filter();
					self.sync_filter_input();
					if self.filter_input.input(key) {
						self.apply_filter();
					}
				}
				None
			}
			_ => None,
		}
	}

	/// React to a mouse event. Returns an outcome when a click selects a
	/// country and the session should end.
	pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<PickerOutcome> {
		let (column, row) = (mouse.column, mouse.row);
		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) => self.handle_click(column, row),
			MouseEventKind::ScrollDown if self.picker.list_visible() => {
				self.move_selection(1);
				None
			}
			MouseEventKind::ScrollUp if self.picker.list_visible() => {
				self.move_selection(-1);
				None
			}
			_ => None,
		}
	}

	fn handle_click(&mut self, column: u16, row: u16) -> Option<PickerOutcome> {
		if !self.picker.list_visible() {
			if self
				.layout
				.trigger
				.is_some_and(|area| point_in_rect(column, row, area))
			{
				self.open();
			}
			return None;
		}

		if let Some(panel) = self.layout.panel
			&& !point_in_rect(column, row, panel)
		{
			if self.picker.props().with_modal {
				self.close();
			}
			return None;
		}

		if self
			.layout
			.filter
			.is_some_and(|area| point_in_rect(column, row, area))
		{
			self.picker.focus_filter();
			self.sync_filter_input();
			return None;
		}

		let areas = self.layout.list?;
		if let Some(strip) = areas.alphabet
			&& let Some(index) = self.picker.alphabet_index()
			&& let Some(letter) = letter_at(&index, strip, column, row)
		{
			self.jump_to_letter(letter);
			return None;
		}

		let len = self.picker.filtered_countries().len();
		let index = row_at(&self.list_state, areas.rows, column, row, len)?;
		self.list_state.select(Some(index));
		self.select_highlighted()
	}

	pub(crate) fn open(&mut self) {
		if self.picker.open() {
			self.on_list_shown();
		}
	}

	pub(crate) fn close(&mut self) {
		self.picker.close();
		self.sync_filter_input();
		if self.picker.list_visible() {
			self.on_list_shown();
		}
	}

	fn select_highlighted(&mut self) -> Option<PickerOutcome> {
		let code: CountryCode = {
			let filtered = self.picker.filtered_countries();
			filtered.get(self.list_state.selected()?)?.code()
		};
		let country = self.picker.select(code)?;
		self.sync_filter_input();
		if self.picker.list_visible() {
			self.on_list_shown();
		}
		self.exit_on_select
			.then(|| PickerOutcome::accepted(country))
	}

	fn apply_filter(&mut self) {
		let text = self.filter_input.text().to_string();
		if self.picker.set_filter(text) {
			let has_rows = !self.picker.filtered_countries().is_empty();
			self.list_state = ListState::default().with_selected(has_rows.then_some(0));
		}
	}

	fn toggle_filter_focus(&mut self) {
		if !self.picker.props().with_filter {
			return;
		}
		if !self.picker.blur_filter() {
			self.picker.focus_filter();
		}
		self.sync_filter_input();
	}

	/// Highlight the first country for `letter` and scroll it to the top.
	fn jump_to_letter(&mut self, letter: char) -> bool {
		let Some(entry) = self
			.picker
			.alphabet_index()
			.and_then(|index| index.get(letter).copied())
		else {
			return false;
		};
		self.list_state.select(Some(entry.position));
		// Offsets are in rows; each country occupies one row.
		*self.list_state.offset_mut() = entry.offset;
		true
	}

	fn move_selection(&mut self, delta: isize) {
		let len = self.picker.filtered_countries().len();
		if len == 0 {
			self.list_state.select(None);
			return;
		}
		let current = self.list_state.selected().unwrap_or(0);
		let last = len - 1;
		let next = current.saturating_add_signed(delta).min(last);
		self.list_state.select(Some(next));
	}
}
