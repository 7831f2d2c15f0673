//! Mapping from country codes to flag representations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dataset::builtin_dataset;
use crate::types::CountryCode;

/// Offset between an ASCII uppercase letter and its regional indicator symbol.
const REGIONAL_INDICATOR_OFFSET: u32 = 0x1F1E6 - 'A' as u32;

/// Directory prefix of the flag image assets.
pub const FLAG_ASSET_DIR: &str = "flags";

/// How a flag is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagStyle {
	/// Unicode regional indicator pair, e.g. 🇫🇷.
	#[default]
	Emoji,
	/// Reference to a bundled image asset.
	#[serde(alias = "flat")]
	Asset,
}

impl FlagStyle {
	#[must_use]
	pub const fn from_emoji(with_emoji: bool) -> Self {
		if with_emoji {
			FlagStyle::Emoji
		} else {
			FlagStyle::Asset
		}
	}

	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			FlagStyle::Emoji => "emoji",
			FlagStyle::Asset => "asset",
		}
	}
}

impl fmt::Display for FlagStyle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A rendered flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Flag {
	/// Emoji glyph built from regional indicator symbols.
	Emoji(String),
	/// Relative path of the flag image, e.g. `flags/fr.png`.
	Asset(String),
}

impl Flag {
	/// Build the flag for a code without consulting the dataset.
	#[must_use]
	pub fn for_code(code: CountryCode, style: FlagStyle) -> Self {
		match style {
			FlagStyle::Emoji => Flag::Emoji(emoji_glyph(code)),
			FlagStyle::Asset => Flag::Asset(asset_path(code)),
		}
	}

	#[must_use]
	pub fn style(&self) -> FlagStyle {
		match self {
			Flag::Emoji(_) => FlagStyle::Emoji,
			Flag::Asset(_) => FlagStyle::Asset,
		}
	}

	#[must_use]
	pub fn as_str(&self) -> &str {
		match self {
			Flag::Emoji(glyph) => glyph,
			Flag::Asset(path) => path,
		}
	}
}

/// Flag for a dataset country; codes missing from the dataset yield `None`.
#[must_use]
pub fn flag_for(code: CountryCode, style: FlagStyle) -> Option<Flag> {
	builtin_dataset()
		.get(code)
		.map(|record| Flag::for_code(record.code, style))
}

fn emoji_glyph(code: CountryCode) -> String {
	code.letters()
		.iter()
		.filter_map(|letter| char::from_u32(REGIONAL_INDICATOR_OFFSET + u32::from(*letter)))
		.collect()
}

fn asset_path(code: CountryCode) -> String {
	format!("{FLAG_ASSET_DIR}/{}.png", code.as_str().to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn code(value: &str) -> CountryCode {
		CountryCode::parse(value).unwrap()
	}

	#[test]
	fn emoji_flags_use_regional_indicators() {
		let flag = Flag::for_code(code("FR"), FlagStyle::Emoji);
		assert_eq!(flag, Flag::Emoji("🇫🇷".to_string()));
		assert_eq!(flag.style(), FlagStyle::Emoji);
	}

	#[test]
	fn asset_flags_point_at_lowercase_png() {
		let flag = Flag::for_code(code("DE"), FlagStyle::Asset);
		assert_eq!(flag, Flag::Asset("flags/de.png".to_string()));
		assert_eq!(flag.style(), FlagStyle::Asset);
	}

	#[test]
	fn unknown_codes_have_no_flag() {
		assert!(flag_for(code("QQ"), FlagStyle::Emoji).is_none());
		assert!(flag_for(code("JP"), FlagStyle::Emoji).is_some());
	}
}
