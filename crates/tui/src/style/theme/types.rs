use ratatui::style::{Color, Modifier, Style};

/// Colour scheme applied to the picker widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Modal title and list header.
	pub header: Style,
	/// Highlighted list row.
	pub row_highlight: Style,
	/// Filter prompt glyph and typed text.
	pub prompt: Style,
	/// Placeholder text, empty results and secondary columns.
	pub empty: Style,
	/// Focused trigger and the active alphabet letter.
	pub highlight: Style,
	/// Modal and panel borders.
	pub border: Style,
}

impl Theme {
	/// Dimmed style used for secondary text.
	#[must_use]
	pub fn muted_style(&self) -> Style {
		self.empty
	}

	/// Style of an unfocused trigger, derived from the border colour.
	#[must_use]
	pub fn trigger_style(&self) -> Style {
		Style::new().fg(self.border.fg.unwrap_or(Color::Reset))
	}

	/// Style of the focused trigger.
	#[must_use]
	pub fn trigger_focused_style(&self) -> Style {
		self.highlight.add_modifier(Modifier::BOLD)
	}
}

/// A named theme plus the alternate names it answers to.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
	pub name: String,
	pub theme: Theme,
	pub aliases: Vec<String>,
}

impl ThemeRegistration {
	pub fn new(name: impl Into<String>, theme: Theme) -> Self {
		Self {
			name: name.into(),
			theme,
			aliases: Vec::new(),
		}
	}

	/// Adds a single alias to this theme registration.
	pub fn alias(mut self, alias: impl Into<String>) -> Self {
		self.aliases.push(alias.into());
		self
	}

	/// Whether `name` is this theme's name or one of its aliases, ignoring case.
	#[must_use]
	pub fn answers_to(&self, name: &str) -> bool {
		let name = name.trim();
		self.name.eq_ignore_ascii_case(name)
			|| self
				.aliases
				.iter()
				.any(|alias| alias.eq_ignore_ascii_case(name))
	}
}
