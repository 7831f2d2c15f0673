//! Lookup and listing operations over a [`Dataset`].

use std::collections::HashSet;
use std::sync::Arc;

use crate::dataset::{Dataset, builtin_dataset};
use crate::flag::{Flag, FlagStyle};
use crate::text::fold_key;
use crate::types::{Country, CountryCode, CountryRecord, Region, Translation};

/// Optional restriction of the countries a picker offers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryScope {
	pub region: Option<Region>,
	/// Matched case-insensitively against the record's subregion.
	pub subregion: Option<String>,
	/// When non-empty, only these codes are listed.
	pub only: Vec<CountryCode>,
	pub exclude: Vec<CountryCode>,
}

impl CountryScope {
	#[must_use]
	pub fn is_unrestricted(&self) -> bool {
		self.region.is_none()
			&& self.subregion.is_none()
			&& self.only.is_empty()
			&& self.exclude.is_empty()
	}

	fn admits(&self, record: &CountryRecord) -> bool {
		if let Some(region) = self.region
			&& record.region != Some(region)
		{
			return false;
		}
		if let Some(subregion) = &self.subregion {
			let matches = record
				.subregion
				.as_deref()
				.is_some_and(|value| value.eq_ignore_ascii_case(subregion.trim()));
			if !matches {
				return false;
			}
		}
		if !self.only.is_empty() && !self.only.contains(&record.code) {
			return false;
		}
		!self.exclude.contains(&record.code)
	}
}

/// Read-only access to country records.
///
/// Cloning is cheap; all clones share the same dataset.
#[derive(Debug, Clone)]
pub struct CountryService {
	dataset: Arc<Dataset>,
}

impl Default for CountryService {
	fn default() -> Self {
		Self::new(Arc::clone(builtin_dataset()))
	}
}

impl CountryService {
	#[must_use]
	pub fn new(dataset: Arc<Dataset>) -> Self {
		Self { dataset }
	}

	#[must_use]
	pub fn dataset(&self) -> &Dataset {
		&self.dataset
	}

	/// Every country resolved for `flag_style` and `translation`, ordered by
	/// display name.
	#[must_use]
	pub fn list_countries(&self, flag_style: FlagStyle, translation: Translation) -> Vec<Country> {
		self.list_countries_in(&CountryScope::default(), flag_style, translation)
	}

	/// Like [`list_countries`](Self::list_countries) but limited to `scope`.
	#[must_use]
	pub fn list_countries_in(
		&self,
		scope: &CountryScope,
		flag_style: FlagStyle,
		translation: Translation,
	) -> Vec<Country> {
		let mut keyed: Vec<(String, Country)> = self
			.dataset
			.iter()
			.filter(|record| scope.admits(record))
			.map(|record| {
				let country = Country::new(Arc::clone(record), translation, flag_style);
				(fold_key(country.name()), country)
			})
			.collect();
		keyed.sort_by(|(left_key, left), (right_key, right)| {
			left_key
				.cmp(right_key)
				.then_with(|| left.code().cmp(&right.code()))
		});
		keyed.into_iter().map(|(_, country)| country).collect()
	}

	#[must_use]
	pub fn country_by_code(&self, code: CountryCode) -> Option<&CountryRecord> {
		self.dataset.get(code).map(Arc::as_ref)
	}

	/// Resolve a single country, or `None` when the code is unknown.
	#[must_use]
	pub fn country(
		&self,
		code: CountryCode,
		flag_style: FlagStyle,
		translation: Translation,
	) -> Option<Country> {
		self.dataset
			.get(code)
			.map(|record| Country::new(Arc::clone(record), translation, flag_style))
	}

	#[must_use]
	pub fn country_name(&self, code: CountryCode, translation: Translation) -> Option<&str> {
		self.country_by_code(code)
			.map(|record| record.name(translation))
	}

	#[must_use]
	pub fn calling_code(&self, code: CountryCode) -> Option<&str> {
		self.country_by_code(code)?.calling_code()
	}

	#[must_use]
	pub fn currency(&self, code: CountryCode) -> Option<&str> {
		self.country_by_code(code)?.currency()
	}

	#[must_use]
	pub fn flag(&self, code: CountryCode, style: FlagStyle) -> Option<Flag> {
		self.country_by_code(code)
			.map(|record| Flag::for_code(record.code, style))
	}

	/// Sorted, deduplicated subregion names present in the dataset.
	#[must_use]
	pub fn subregions(&self) -> Vec<&str> {
		let mut seen = HashSet::new();
		let mut names: Vec<&str> = self
			.dataset
			.iter()
			.filter_map(|record| record.subregion.as_deref())
			.filter(|name| seen.insert(*name))
			.collect();
		names.sort_unstable();
		names
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::text::fold_key;

	fn code(value: &str) -> CountryCode {
		CountryCode::parse(value).unwrap()
	}

	fn assert_sorted(countries: &[Country]) {
		for pair in countries.windows(2) {
			assert!(
				fold_key(pair[0].name()) <= fold_key(pair[1].name()),
				"{} should sort before {}",
				pair[0].name(),
				pair[1].name()
			);
		}
	}

	#[test]
	fn lists_are_sorted_for_every_translation() {
		let service = CountryService::default();
		for translation in Translation::ALL {
			let countries = service.list_countries(FlagStyle::Emoji, translation);
			assert_eq!(countries.len(), service.dataset().len());
			assert_sorted(&countries);
		}
	}

	#[test]
	fn translation_changes_names_and_order() {
		let service = CountryService::default();
		let german = service.list_countries(FlagStyle::Emoji, Translation::Deu);
		let germany = german
			.iter()
			.position(|country| country.code() == code("DE"))
			.unwrap();
		assert_eq!(german[germany].name(), "Deutschland");

		let common = service.list_countries(FlagStyle::Emoji, Translation::Common);
		let common_germany = common
			.iter()
			.position(|country| country.code() == code("DE"))
			.unwrap();
		assert_ne!(germany, common_germany);
	}

	#[test]
	fn lookups_degrade_silently_for_unknown_codes() {
		let service = CountryService::default();
		let unknown = code("ZZ");
		assert!(service.country_by_code(unknown).is_none());
		assert!(service.country_name(unknown, Translation::Common).is_none());
		assert!(service.calling_code(unknown).is_none());
		assert!(service.currency(unknown).is_none());
		assert!(service.flag(unknown, FlagStyle::Asset).is_none());
	}

	#[test]
	fn derives_labels_for_known_codes() {
		let service = CountryService::default();
		assert_eq!(service.country_name(code("fr"), Translation::Ita), Some("Francia"));
		assert_eq!(service.calling_code(code("US")), Some("1"));
		assert_eq!(service.currency(code("JP")), Some("JPY"));
		assert_eq!(
			service.flag(code("JP"), FlagStyle::Asset),
			Some(Flag::Asset("flags/jp.png".into()))
		);
	}

	#[test]
	fn scope_restricts_listing() {
		let service = CountryService::default();
		let scope = CountryScope {
			region: Some(Region::Europe),
			exclude: vec![code("FR")],
			..CountryScope::default()
		};
		let countries = service.list_countries_in(&scope, FlagStyle::Emoji, Translation::Common);
		assert!(!countries.is_empty());
		assert!(countries.iter().all(|c| c.region() == Some(Region::Europe)));
		assert!(countries.iter().all(|c| c.code() != code("FR")));
		assert_sorted(&countries);

		let only = CountryScope {
			only: vec![code("DE"), code("AT"), code("CH")],
			..CountryScope::default()
		};
		let names: Vec<_> = service
			.list_countries_in(&only, FlagStyle::Emoji, Translation::Common)
			.iter()
			.map(|country| country.name().to_string())
			.collect();
		assert_eq!(names, ["Austria", "Germany", "Switzerland"]);
	}

	#[test]
	fn subregion_scope_is_case_insensitive() {
		let service = CountryService::default();
		let scope = CountryScope {
			subregion: Some("western europe".into()),
			..CountryScope::default()
		};
		let countries = service.list_countries_in(&scope, FlagStyle::Emoji, Translation::Common);
		assert!(countries.iter().any(|c| c.code() == code("FR")));
		assert!(countries.iter().all(|c| c.subregion() == Some("Western Europe")));
		assert!(service.subregions().contains(&"Western Europe"));
	}
}
