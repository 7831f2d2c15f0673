use std::sync::{Arc, OnceLock};

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::error::{DataError, Result};
use crate::types::{CountryCode, CountryRecord};

const BUILTIN_DATASET: &str = include_str!("../data/countries.json");

/// Read-only collection of country records in dataset order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
	records: IndexMap<CountryCode, Arc<CountryRecord>>,
}

impl Dataset {
	/// Decode a JSON array of country records.
	pub fn from_json(json: &str) -> Result<Self> {
		let records: Vec<CountryRecord> = serde_json::from_str(json)?;
		Self::from_records(records)
	}

	/// Build a dataset from already decoded records, rejecting duplicate codes.
	pub fn from_records<I>(records: I) -> Result<Self>
	where
		I: IntoIterator<Item = CountryRecord>,
	{
		let mut map = IndexMap::new();
		for record in records {
			match map.entry(record.code) {
				Entry::Occupied(entry) => {
					return Err(DataError::DuplicateCode { code: *entry.key() });
				}
				Entry::Vacant(entry) => {
					entry.insert(Arc::new(record));
				}
			}
		}
		Ok(Self { records: map })
	}

	#[must_use]
	pub fn get(&self, code: CountryCode) -> Option<&Arc<CountryRecord>> {
		self.records.get(&code)
	}

	pub fn iter(&self) -> impl Iterator<Item = &Arc<CountryRecord>> {
		self.records.values()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.records.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}
}

/// The dataset bundled with the crate, decoded on first use.
pub fn builtin_dataset() -> &'static Arc<Dataset> {
	static BUILTIN: OnceLock<Arc<Dataset>> = OnceLock::new();
	BUILTIN.get_or_init(|| {
		let dataset = Dataset::from_json(BUILTIN_DATASET)
			.unwrap_or_else(|error| panic!("failed to load built-in country dataset: {error}"));
		log::debug!("loaded {} countries", dataset.len());
		Arc::new(dataset)
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::{Region, Translation};

	#[test]
	fn builtin_dataset_decodes() {
		let dataset = builtin_dataset();
		assert!(dataset.len() >= 245);

		let france = dataset.get(CountryCode::parse("FR").unwrap()).unwrap();
		assert_eq!(france.name(Translation::Common), "France");
		assert_eq!(france.name(Translation::Deu), "Frankreich");
		assert_eq!(france.calling_code(), Some("33"));
		assert_eq!(france.currency(), Some("EUR"));
		assert_eq!(france.region, Some(Region::Europe));
	}

	#[test]
	fn every_builtin_record_has_a_name_and_calling_code() {
		for record in builtin_dataset().iter() {
			assert!(!record.name.common.is_empty(), "{} has no name", record.code);
			assert!(
				record.calling_code().is_some(),
				"{} has no calling code",
				record.code
			);
		}
	}

	#[test]
	fn every_translation_is_carried_by_every_builtin_record() {
		let dataset = builtin_dataset();
		for translation in Translation::ALL {
			let missing: Vec<_> = dataset
				.iter()
				.filter(|record| record.name.localized(translation).is_none())
				.map(|record| record.code.to_string())
				.collect();
			assert!(missing.is_empty(), "{translation} missing for {missing:?}");
		}

		let germany = dataset.get(CountryCode::parse("DE").unwrap()).unwrap();
		assert_eq!(germany.name(Translation::Jpn), "ドイツ");
		assert_eq!(germany.name(Translation::Ita), "Germania");
	}

	#[test]
	fn duplicate_codes_are_rejected() {
		let json = r#"[
			{"code": "FR", "name": {"common": "France"}},
			{"code": "fr", "name": {"common": "France again"}}
		]"#;
		let error = Dataset::from_json(json).unwrap_err();
		assert!(matches!(error, DataError::DuplicateCode { .. }));
	}

	#[test]
	fn malformed_codes_fail_to_decode() {
		let json = r#"[{"code": "FRA", "name": {"common": "France"}}]"#;
		assert!(matches!(
			Dataset::from_json(json).unwrap_err(),
			DataError::Decode(_)
		));
	}
}
