//! Widgets composing the picker: trigger button, filter row, country list
//! and modal frame.

/// Trigger button and its composed content.
pub mod button;
/// Filter input row.
pub mod filter;
/// Terminal presentation of flags.
pub mod flag;
/// Country rows and alphabet strip.
pub mod list;
/// Modal frame and placement.
pub mod modal;

use ratatui::layout::Rect;

pub use button::{ButtonToggles, Decoration, FlagButton, TriggerContent, TriggerProps, TriggerRenderer};
pub use filter::{FilterProps, FilterRenderer, TextFilter};
pub use list::{ListAreas, ListColumns, ListProps, render_country_list};
pub use modal::{centered_rect, modal_block};

/// Check if a point (column, row) is inside a rectangle.
#[must_use]
pub fn point_in_rect(column: u16, row: u16, area: Rect) -> bool {
	if area.width == 0 || area.height == 0 {
		return false;
	}
	let inside_x = column >= area.x && column < area.x.saturating_add(area.width);
	let inside_y = row >= area.y && row < area.y.saturating_add(area.height);
	inside_x && inside_y
}
