//! Text filtering and the alphabet jump index for country lists.

use std::collections::HashSet;

use crate::text::first_letter;
use crate::types::Country;

/// Switches controlling what a filter string is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterOptions {
	/// Also match the filter against calling codes (a leading `+` is ignored).
	/// Digits match from the start of a code, so `44` does not find `244`.
	pub calling_codes: bool,
}

impl FilterOptions {
	#[must_use]
	pub const fn with_calling_codes(calling_codes: bool) -> Self {
		Self { calling_codes }
	}
}

/// Keep the countries matching `filter`, preserving input order.
///
/// An empty (or whitespace only) filter keeps everything.
#[must_use]
pub fn filter_countries<'a>(
	countries: &'a [Country],
	filter: &str,
	options: FilterOptions,
) -> Vec<&'a Country> {
	let Some(needle) = Needle::new(filter) else {
		return countries.iter().collect();
	};
	countries
		.iter()
		.filter(|country| needle.matches(country, options))
		.collect()
}

struct Needle {
	name: String,
	digits: Option<String>,
}

impl Needle {
	fn new(filter: &str) -> Option<Self> {
		let trimmed = filter.trim();
		if trimmed.is_empty() {
			return None;
		}
		let stripped = trimmed.trim_start_matches('+').trim_start();
		let digits = (!stripped.is_empty() && stripped.bytes().all(|byte| byte.is_ascii_digit()))
			.then(|| stripped.to_string());
		Some(Self {
			name: trimmed.to_lowercase(),
			digits,
		})
	}

	fn matches(&self, country: &Country, options: FilterOptions) -> bool {
		if country.name().to_lowercase().contains(&self.name) {
			return true;
		}
		match (&self.digits, options.calling_codes) {
			(Some(digits), true) => country
				.calling_codes()
				.iter()
				.any(|code| code.starts_with(digits.as_str())),
			_ => false,
		}
	}
}

/// First list entry for a given letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterOffset {
	pub letter: char,
	/// Index of the first entry starting with `letter`.
	pub position: usize,
	/// `position` multiplied by the row height.
	pub offset: usize,
}

/// Letter to scroll-offset mapping for a rendered list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlphabetIndex {
	entries: Vec<LetterOffset>,
}

impl AlphabetIndex {
	/// Index `countries` by the first letter of their display name.
	///
	/// Only the first occurrence of each letter is recorded, so the input
	/// should already be sorted by name.
	pub fn build<'a, I>(countries: I, row_height: usize) -> Self
	where
		I: IntoIterator<Item = &'a Country>,
	{
		let mut seen = HashSet::new();
		let mut entries = Vec::new();
		for (position, country) in countries.into_iter().enumerate() {
			let Some(letter) = first_letter(country.name()) else {
				continue;
			};
			if seen.insert(letter) {
				entries.push(LetterOffset {
					letter,
					position,
					offset: position * row_height,
				});
			}
		}
		Self { entries }
	}

	#[must_use]
	pub fn entries(&self) -> &[LetterOffset] {
		&self.entries
	}

	pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
		self.entries.iter().map(|entry| entry.letter)
	}

	/// Entry for `letter`, ignoring case.
	#[must_use]
	pub fn get(&self, letter: char) -> Option<&LetterOffset> {
		let wanted = letter.to_uppercase().next()?;
		self.entries.iter().find(|entry| entry.letter == wanted)
	}

	#[must_use]
	pub fn offset_for(&self, letter: char) -> Option<usize> {
		self.get(letter).map(|entry| entry.offset)
	}

	#[must_use]
	pub fn position_for(&self, letter: char) -> Option<usize> {
		self.get(letter).map(|entry| entry.position)
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}
}
