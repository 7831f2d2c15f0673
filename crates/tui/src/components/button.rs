//! The trigger button and the content composed for it.

use country_picker_data::{CountryCode, CountryService, Flag, FlagStyle, Translation};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

use super::flag::flag_span;
use crate::style::{ButtonStyle, Theme};

/// Which decorations the trigger shows next to the flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonToggles {
	pub name: bool,
	pub currency: bool,
	pub calling_code: bool,
}

impl ButtonToggles {
	#[must_use]
	pub const fn any(self) -> bool {
		self.name || self.currency || self.calling_code
	}
}

/// A labelled piece of the trigger next to the flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoration {
	Name,
	Currency,
	CallingCode,
}

/// What the trigger displays for the current country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerContent {
	code: CountryCode,
	flag: Option<Flag>,
	decorations: Vec<(Decoration, String)>,
}

impl TriggerContent {
	/// Build the trigger content for `code`.
	///
	/// Decorations are emitted in the fixed order name, currency, calling
	/// code, each only when its toggle is set and the value exists. Codes
	/// missing from the dataset produce empty content.
	#[must_use]
	pub fn compose(
		service: &CountryService,
		code: CountryCode,
		toggles: ButtonToggles,
		translation: Translation,
		style: FlagStyle,
	) -> Self {
		let Some(record) = service.country_by_code(code) else {
			log::warn!("no country data for trigger code {code}");
			return Self {
				code,
				flag: None,
				decorations: Vec::new(),
			};
		};

		let mut decorations = Vec::new();
		if toggles.name {
			decorations.push((Decoration::Name, format!("{} ", record.name(translation))));
		}
		if toggles.currency
			&& let Some(currency) = record.currency()
		{
			decorations.push((Decoration::Currency, format!("({currency}) ")));
		}
		if toggles.calling_code
			&& let Some(calling_code) = record.calling_code()
		{
			decorations.push((Decoration::CallingCode, format!("+{calling_code}")));
		}

		Self {
			code,
			flag: Some(Flag::for_code(code, style)),
			decorations,
		}
	}

	#[must_use]
	pub fn code(&self) -> CountryCode {
		self.code
	}

	#[must_use]
	pub fn flag(&self) -> Option<&Flag> {
		self.flag.as_ref()
	}

	#[must_use]
	pub fn decorations(&self) -> &[(Decoration, String)] {
		&self.decorations
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.flag.is_none() && self.decorations.is_empty()
	}

	/// Plain text of the trigger, e.g. `🇫🇷 France (EUR) +33`.
	#[must_use]
	pub fn label(&self) -> String {
		let mut label = self
			.flag
			.as_ref()
			.map(super::flag::flag_symbol)
			.unwrap_or_default();
		if !self.decorations.is_empty() {
			label.push(' ');
			for (_, text) in &self.decorations {
				label.push_str(text);
			}
		}
		label.trim_end().to_string()
	}

	/// Styled line of the trigger.
	#[must_use]
	pub fn line(&self, theme: &Theme, button: &ButtonStyle) -> Line<'static> {
		let text_style = button.apply(theme.header);
		let mut spans = Vec::with_capacity(self.decorations.len() + 2);
		if let Some(flag) = &self.flag {
			spans.push(flag_span(flag, text_style));
		}
		if !self.decorations.is_empty() {
			spans.push(Span::raw(" "));
		}
		for (decoration, text) in &self.decorations {
			let style = match decoration {
				Decoration::Name => text_style,
				Decoration::Currency | Decoration::CallingCode => button.apply(theme.muted_style()),
			};
			spans.push(Span::styled(text.clone(), style));
		}
		Line::from(spans)
	}
}

/// Everything a trigger renderer needs to draw the button.
pub struct TriggerProps<'a> {
	pub content: Option<&'a TriggerContent>,
	pub focused: bool,
	pub theme: &'a Theme,
	pub style: &'a ButtonStyle,
}

/// Draws the trigger. Implementations fully replace the default button.
pub trait TriggerRenderer {
	fn render(&self, props: &TriggerProps<'_>, area: Rect, buf: &mut Buffer);

	/// Rows the trigger occupies.
	fn height(&self) -> u16 {
		3
	}
}

/// Default trigger: the flag and its decorations inside a rounded border.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlagButton;

impl TriggerRenderer for FlagButton {
	fn render(&self, props: &TriggerProps<'_>, area: Rect, buf: &mut Buffer) {
		let border_style = if props.focused {
			props.theme.trigger_focused_style()
		} else {
			props.theme.trigger_style()
		};
		let block = Block::default()
			.borders(Borders::ALL)
			.border_type(BorderType::Rounded)
			.border_style(border_style);
		let line = props
			.content
			.map(|content| content.line(props.theme, props.style))
			.unwrap_or_default();
		Paragraph::new(line).block(block).render(area, buf);
	}
}
