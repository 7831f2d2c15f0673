use std::collections::HashSet;

use anyhow::Result;
use country_picker::CountryCode;

/// Trim `value` and drop it when nothing is left.
pub(super) fn non_empty(value: Option<String>) -> Option<String> {
	value
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty())
}

/// Parse user supplied country codes, skipping blanks and duplicates.
pub(super) fn parse_codes(values: Vec<String>) -> Result<Vec<CountryCode>> {
	let mut seen = HashSet::new();
	let mut codes = Vec::new();
	for value in values {
		let trimmed = value.trim();
		if trimmed.is_empty() {
			continue;
		}
		let code = CountryCode::parse(trimmed)?;
		if seen.insert(code) {
			codes.push(code);
		}
	}
	Ok(codes)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn codes_are_cleaned_and_deduplicated() {
		let codes =
			parse_codes(vec![" fr ".into(), "FR".into(), "".into(), "de".into()]).unwrap();
		let codes: Vec<_> = codes.iter().map(CountryCode::to_string).collect();
		assert_eq!(codes, vec!["FR", "DE"]);
	}

	#[test]
	fn malformed_codes_are_rejected() {
		assert!(parse_codes(vec!["FRA".into()]).is_err());
	}

	#[test]
	fn blank_values_are_dropped() {
		assert_eq!(non_empty(Some("  ".into())), None);
		assert_eq!(non_empty(Some(" slate ".into())).as_deref(), Some("slate"));
		assert_eq!(non_empty(None), None);
	}
}
