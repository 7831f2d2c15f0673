//! Popup container for the picker list.

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders};

use crate::style::{ModalStyle, Theme};

/// Area of the modal centred in `area`.
#[must_use]
pub fn centered_rect(area: Rect, style: ModalStyle) -> Rect {
	let width = style.width_percent.clamp(10, 100);
	let height = style.height_percent.clamp(10, 100);
	let [row] = Layout::vertical([Constraint::Percentage(height)])
		.flex(Flex::Center)
		.areas(area);
	let [rect] = Layout::horizontal([Constraint::Percentage(width)])
		.flex(Flex::Center)
		.areas(row);
	rect
}

/// Bordered frame of the modal with its title and key hint.
#[must_use]
pub fn modal_block<'a>(title: &'a str, hint: &'a str, theme: &Theme) -> Block<'a> {
	let mut block = Block::default()
		.borders(Borders::ALL)
		.border_type(BorderType::Rounded)
		.border_style(theme.border)
		.title(Line::styled(format!(" {title} "), theme.header));
	if !hint.is_empty() {
		block = block.title_bottom(Line::styled(format!(" {hint} "), theme.muted_style()).right_aligned());
	}
	block
}
