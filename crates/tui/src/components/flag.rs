//! Terminal presentation of [`Flag`] values.

use std::path::Path;

use country_picker_data::Flag;
use ratatui::style::Style;
use ratatui::text::Span;

/// Text drawn for a flag.
///
/// Emoji flags render as their glyph. Asset flags cannot be drawn in a
/// terminal, so the asset's file stem stands in, e.g. `[FR]` for
/// `flags/fr.png`.
#[must_use]
pub fn flag_symbol(flag: &Flag) -> String {
	match flag {
		Flag::Emoji(glyph) => glyph.clone(),
		Flag::Asset(path) => {
			let stem = Path::new(path)
				.file_stem()
				.and_then(|stem| stem.to_str())
				.unwrap_or(path);
			format!("[{}]", stem.to_ascii_uppercase())
		}
	}
}

#[must_use]
pub fn flag_span(flag: &Flag, style: Style) -> Span<'static> {
	Span::styled(flag_symbol(flag), style)
}
