//! Visual styling utilities.
//!
//! Themes carry the colour scheme. The per-component style structs layer
//! pass-through tweaks (button colour, modal size, highlight symbol) on top
//! without touching the theme.

/// Theme definitions, the built-in themes and lookup by name.
pub mod theme;

use ratatui::style::{Color, Style};
pub use theme::{Theme, ThemeRegistration, builtin_themes, by_name, default_theme, names, parse_color};

/// Trigger button styling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonStyle {
	/// Foreground colour of the button text. `None` keeps the theme colour.
	pub text_color: Option<Color>,
}

impl ButtonStyle {
	/// Apply the configured text colour over `base`.
	#[must_use]
	pub fn apply(&self, base: Style) -> Style {
		match self.text_color {
			Some(color) => base.fg(color),
			None => base,
		}
	}
}

/// Filter input styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterStyle {
	/// Glyph rendered before the editable text.
	pub prompt: String,
	/// Focus the filter whenever the list is shown.
	pub autofocus: bool,
}

impl Default for FilterStyle {
	fn default() -> Self {
		Self {
			prompt: "> ".to_string(),
			autofocus: true,
		}
	}
}

/// Size of the modal relative to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalStyle {
	pub width_percent: u16,
	pub height_percent: u16,
}

impl Default for ModalStyle {
	fn default() -> Self {
		Self {
			width_percent: 60,
			height_percent: 70,
		}
	}
}

/// Country list styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListStyle {
	/// Symbol drawn in front of the highlighted row.
	pub highlight_symbol: String,
}

impl Default for ListStyle {
	fn default() -> Self {
		Self {
			highlight_symbol: "▶ ".to_string(),
		}
	}
}

/// Aggregate container for styling knobs.
#[derive(Clone, Debug, Default)]
pub struct StyleConfig {
	/// The active theme for the UI.
	pub theme: Theme,
	pub button: ButtonStyle,
	pub filter: FilterStyle,
	pub modal: ModalStyle,
	pub list: ListStyle,
}

impl StyleConfig {
	/// Creates a new style configuration with the given theme.
	#[must_use]
	pub fn with_theme(theme: Theme) -> Self {
		Self {
			theme,
			..Self::default()
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn button_colour_overrides_theme_foreground() {
		let base = Style::new().fg(Color::Gray).bg(Color::Black);
		let styled = ButtonStyle {
			text_color: Some(Color::Red),
		}
		.apply(base);
		assert_eq!(styled.fg, Some(Color::Red));
		assert_eq!(styled.bg, Some(Color::Black));
		assert_eq!(ButtonStyle::default().apply(base), base);
	}
}
