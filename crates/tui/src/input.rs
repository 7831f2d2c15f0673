//! Single-line text input backing the country filter.

use ratatui::buffer::Buffer;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;
use tui_textarea::{CursorMove, Input, Key, TextArea};

/// Wrapper around [`TextArea`] that never grows past one line.
#[derive(Debug, Clone)]
pub struct FilterInput {
	textarea: TextArea<'static>,
	focused: bool,
}

impl Default for FilterInput {
	fn default() -> Self {
		Self::new("")
	}
}

impl FilterInput {
	#[must_use]
	pub fn new(initial: &str) -> Self {
		let mut textarea = TextArea::from([initial.to_string()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		let mut input = Self {
			textarea,
			focused: false,
		};
		input.set_focused(false);
		input
	}

	/// Current filter text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	/// Feed a key press to the editor. Returns `true` when the text changed.
	///
	/// Line breaks are swallowed so the filter stays on a single line.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let input = Input::from(key);
		if is_line_break(&input) {
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(input);
		self.text() != before
	}

	/// Replace the text and park the cursor at the end.
	pub fn set_text(&mut self, text: &str) {
		if self.text() == text {
			return;
		}
		let style = self.textarea.style();
		let mut textarea = TextArea::from([text.to_string()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.set_style(style);
		textarea.move_cursor(CursorMove::End);
		self.textarea = textarea;
		self.set_focused(self.focused);
	}

	pub fn set_text_style(&mut self, style: Style) {
		self.textarea.set_style(style);
	}

	/// Show or hide the cursor.
	pub fn set_focused(&mut self, focused: bool) {
		self.focused = focused;
		let cursor = if focused {
			Style::default().add_modifier(Modifier::REVERSED)
		} else {
			Style::default()
		};
		self.textarea.set_cursor_style(cursor);
	}

	#[must_use]
	pub fn is_focused(&self) -> bool {
		self.focused
	}

	pub fn render(&self, area: Rect, buf: &mut Buffer) {
		Widget::render(&self.textarea, area, buf);
	}
}

fn is_line_break(input: &Input) -> bool {
	match input.key {
		Key::Enter => true,
		Key::Char('m' | 'j') => input.ctrl,
		_ => false,
	}
}
