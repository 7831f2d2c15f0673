//! Country rows and the alphabet strip.

use country_picker_data::{AlphabetIndex, Country};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
	HighlightSpacing, List, ListItem, ListState, Paragraph, StatefulWidget, Widget,
};
use unicode_width::UnicodeWidthStr;

use super::flag::flag_span;
use super::point_in_rect;
use crate::style::{ListStyle, Theme};

/// Width of the alphabet strip, including its left gutter.
const ALPHABET_STRIP_WIDTH: u16 = 2;
const COLUMN_GAP: &str = "  ";

/// Optional columns of a country row. The name is always shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListColumns {
	pub flag: bool,
	pub currency: bool,
	pub calling_code: bool,
}

pub struct ListProps<'a> {
	pub countries: &'a [&'a Country],
	pub columns: ListColumns,
	/// Jump index; `None` hides the alphabet strip.
	pub alphabet: Option<&'a AlphabetIndex>,
	/// Letter highlighted in the strip.
	pub active_letter: Option<char>,
	pub empty_message: &'a str,
	pub theme: &'a Theme,
	pub style: &'a ListStyle,
}

/// Where the list and the alphabet strip were drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListAreas {
	pub rows: Rect,
	pub alphabet: Option<Rect>,
}

/// Draw the country rows, or the empty message, plus the alphabet strip.
pub fn render_country_list(
	props: &ListProps<'_>,
	area: Rect,
	buf: &mut Buffer,
	state: &mut ListState,
) -> ListAreas {
	let alphabet = props.alphabet.filter(|index| !index.is_empty());
	let (rows_area, strip_area) = if alphabet.is_some() {
		let [rows, strip] = Layout::horizontal([
			Constraint::Fill(1),
			Constraint::Length(ALPHABET_STRIP_WIDTH),
		])
		.areas(area);
		(rows, Some(strip))
	} else {
		(area, None)
	};

	if props.countries.is_empty() {
		Paragraph::new(Line::styled(props.empty_message, props.theme.empty))
			.centered()
			.render(rows_area, buf);
	} else {
		let name_width = props
			.countries
			.iter()
			.map(|country| country.name().width())
			.max()
			.unwrap_or_default();
		let items: Vec<ListItem> = props
			.countries
			.iter()
			.map(|country| ListItem::new(country_row(country, props.columns, name_width, props.theme)))
			.collect();
		let list = List::new(items)
			.highlight_style(props.theme.row_highlight)
			.highlight_symbol(props.style.highlight_symbol.as_str())
			.highlight_spacing(HighlightSpacing::Always);
		StatefulWidget::render(list, rows_area, buf, state);
	}

	if let (Some(index), Some(strip)) = (alphabet, strip_area) {
		render_alphabet_strip(index, props.active_letter, props.theme, strip, buf);
	}

	ListAreas {
		rows: rows_area,
		alphabet: strip_area,
	}
}

/// One row: flag, name padded to `name_width`, currency, calling code.
#[must_use]
pub fn country_row(
	country: &Country,
	columns: ListColumns,
	name_width: usize,
	theme: &Theme,
) -> Line<'static> {
	let mut spans = Vec::with_capacity(6);
	if columns.flag {
		spans.push(flag_span(country.flag(), Style::default()));
		spans.push(Span::raw(" "));
	}
	let name = country.name();
	let padding = name_width.saturating_sub(name.width());
	spans.push(Span::raw(format!("{name}{}", " ".repeat(padding))));
	if columns.currency {
		let currency = country.currency().unwrap_or_default();
		spans.push(Span::styled(
			format!("{COLUMN_GAP}{currency:<3}"),
			theme.muted_style(),
		));
	}
	if columns.calling_code
		&& let Some(calling_code) = country.calling_code()
	{
		spans.push(Span::styled(
			format!("{COLUMN_GAP}+{calling_code}"),
			theme.muted_style(),
		));
	}
	Line::from(spans)
}

fn render_alphabet_strip(
	index: &AlphabetIndex,
	active: Option<char>,
	theme: &Theme,
	area: Rect,
	buf: &mut Buffer,
) {
	let column = area.right().saturating_sub(1);
	for (row, letter) in index.letters().take(usize::from(area.height)).enumerate() {
		let style = if Some(letter) == active {
			theme.highlight
		} else {
			theme.muted_style()
		};
		buf.set_string(column, area.y + row as u16, letter.to_string(), style);
	}
}

/// Index of the country drawn at terminal row `row`.
#[must_use]
pub fn row_at(state: &ListState, rows: Rect, column: u16, row: u16, len: usize) -> Option<usize> {
	if !point_in_rect(column, row, rows) {
		return None;
	}
	let index = state.offset() + usize::from(row - rows.y);
	(index < len).then_some(index)
}

/// Letter drawn in the alphabet strip at terminal row `row`.
#[must_use]
pub fn letter_at(index: &AlphabetIndex, strip: Rect, column: u16, row: u16) -> Option<char> {
	if !point_in_rect(column, row, strip) {
		return None;
	}
	index
		.entries()
		.get(usize::from(row - strip.y))
		.map(|entry| entry.letter)
}

#[cfg(test)]
mod tests {
	use country_picker_data::{CountryService, FlagStyle, Translation};
	use insta::assert_snapshot;

	use super::*;

	fn countries() -> Vec<Country> {
		CountryService::default().list_countries(FlagStyle::Asset, Translation::Common)
	}

	fn line_text(line: &Line<'_>) -> String {
		line.spans.iter().map(|span| span.content.as_ref()).collect()
	}

	#[test]
	fn row_columns_follow_fixed_order() {
		let all = countries();
		let france = all.iter().find(|c| c.name() == "France").unwrap();
		let columns = ListColumns {
			flag: true,
			currency: true,
			calling_code: true,
		};
		let row = country_row(france, columns, 8, &Theme::default());
		assert_snapshot!(line_text(&row), @"[FR] France    EUR  +33");

		let bare = country_row(france, ListColumns::default(), 0, &Theme::default());
		assert_eq!(line_text(&bare), "France");
	}

	#[test]
	fn clicks_map_to_rows_and_letters() {
		let all = countries();
		let index = AlphabetIndex::build(&all, 1);
		let strip = Rect::new(30, 2, 2, 10);
		assert_eq!(letter_at(&index, strip, 31, 2), Some('A'));
		assert_eq!(letter_at(&index, strip, 31, 3), Some('B'));
		assert_eq!(letter_at(&index, strip, 10, 3), None);

		let rows = Rect::new(0, 2, 30, 10);
		let mut state = ListState::default();
		assert_eq!(row_at(&state, rows, 5, 4, all.len()), Some(2));
		*state.offset_mut() = 5;
		assert_eq!(row_at(&state, rows, 5, 4, all.len()), Some(7));
		assert_eq!(row_at(&state, rows, 5, 4, 3), None);
	}
}
