//! The filter row shown above the country list.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

use crate::input::FilterInput;
use crate::style::{FilterStyle, Theme};

/// Everything a filter renderer needs to draw the input row.
pub struct FilterProps<'a> {
	pub input: &'a FilterInput,
	pub placeholder: &'a str,
	pub focused: bool,
	pub theme: &'a Theme,
	pub style: &'a FilterStyle,
}

/// Draws the filter row. Implementations fully replace the default input.
pub trait FilterRenderer {
	fn render(&self, props: &FilterProps<'_>, area: Rect, buf: &mut Buffer);
}

/// Default filter: a prompt glyph followed by the text editor.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFilter;

impl FilterRenderer for TextFilter {
	fn render(&self, props: &FilterProps<'_>, area: Rect, buf: &mut Buffer) {
		if area.width == 0 || area.height == 0 {
			return;
		}
		let prompt_width = props.style.prompt.width() as u16;
		let [prompt_area, input_area] =
			Layout::horizontal([Constraint::Length(prompt_width), Constraint::Fill(1)]).areas(area);

		Line::from(Span::styled(props.style.prompt.as_str(), props.theme.prompt))
			.render(prompt_area, buf);
		props.input.render(input_area, buf);

		if props.input.text().is_empty() {
			render_placeholder(buf, input_area, props);
		}
	}
}

fn render_placeholder(buf: &mut Buffer, area: Rect, props: &FilterProps<'_>) {
	// Leave the cursor cell visible while focused.
	let skip = u16::from(props.focused);
	if area.width <= skip || props.placeholder.is_empty() {
		return;
	}
	let available = usize::from(area.width - skip);
	let text: String = props.placeholder.chars().take(available).collect();
	buf.set_line(
		area.left() + skip,
		area.top(),
		&Line::from(Span::styled(text, props.theme.muted_style())),
		area.width - skip,
	);
}
