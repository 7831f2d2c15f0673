use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DataError, Result};
use crate::flag::{Flag, FlagStyle};

/// ISO 3166-1 alpha-2 code, stored uppercase.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CountryCode([u8; 2]);

impl CountryCode {
	/// Parse a two-letter code, ignoring case and surrounding whitespace.
	///
	/// Codes that are well formed but absent from the dataset still parse;
	/// lookups for them simply come back empty.
	pub fn parse(value: &str) -> Result<Self> {
		let trimmed = value.trim();
		let bytes = trimmed.as_bytes();
		if bytes.len() != 2 || !bytes.iter().all(u8::is_ascii_alphabetic) {
			return Err(DataError::InvalidCode {
				value: value.to_string(),
			});
		}
		Ok(Self([
			bytes[0].to_ascii_uppercase(),
			bytes[1].to_ascii_uppercase(),
		]))
	}

	/// Return the uppercase code.
	#[must_use]
	pub fn as_str(&self) -> &str {
		// Only ASCII letters are ever stored.
		std::str::from_utf8(&self.0).unwrap_or_default()
	}

	/// Return the two code letters.
	#[must_use]
	pub const fn letters(&self) -> [u8; 2] {
		self.0
	}
}

impl fmt::Debug for CountryCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("CountryCode").field(&self.as_str()).finish()
	}
}

impl fmt::Display for CountryCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for CountryCode {
	type Err = DataError;

	fn from_str(value: &str) -> Result<Self> {
		Self::parse(value)
	}
}

impl Serialize for CountryCode {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		serializer.serialize_str(self.as_str())
	}
}

impl<'de> Deserialize<'de> for CountryCode {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		let raw = String::deserialize(deserializer)?;
		Self::parse(&raw).map_err(serde::de::Error::custom)
	}
}

/// Locale used to pick the localized country name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Translation {
	#[default]
	Common,
	Deu,
	Fra,
	Ita,
	Jpn,
	Nld,
	Por,
	Rus,
	Spa,
	Zho,
}

impl Translation {
	/// Every supported translation, `Common` first.
	pub const ALL: [Translation; 10] = [
		Translation::Common,
		Translation::Deu,
		Translation::Fra,
		Translation::Ita,
		Translation::Jpn,
		Translation::Nld,
		Translation::Por,
		Translation::Rus,
		Translation::Spa,
		Translation::Zho,
	];

	/// Return the identifier used in the dataset and in configuration files.
	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			Translation::Common => "common",
			Translation::Deu => "deu",
			Translation::Fra => "fra",
			Translation::Ita => "ita",
			Translation::Jpn => "jpn",
			Translation::Nld => "nld",
			Translation::Por => "por",
			Translation::Rus => "rus",
			Translation::Spa => "spa",
			Translation::Zho => "zho",
		}
	}
}

impl fmt::Display for Translation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Translation {
	type Err = DataError;

	fn from_str(value: &str) -> Result<Self> {
		let normalized = value.trim().to_ascii_lowercase();
		Translation::ALL
			.into_iter()
			.find(|translation| translation.as_str() == normalized)
			.ok_or_else(|| DataError::UnknownTranslation {
				value: value.to_string(),
			})
	}
}

/// Broad geographic region a country belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
	Africa,
	Americas,
	Antarctic,
	Asia,
	Europe,
	Oceania,
}

impl Region {
	pub const ALL: [Region; 6] = [
		Region::Africa,
		Region::Americas,
		Region::Antarctic,
		Region::Asia,
		Region::Europe,
		Region::Oceania,
	];

	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			Region::Africa => "Africa",
			Region::Americas => "Americas",
			Region::Antarctic => "Antarctic",
			Region::Asia => "Asia",
			Region::Europe => "Europe",
			Region::Oceania => "Oceania",
		}
	}
}

impl fmt::Display for Region {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Region {
	type Err = DataError;

	fn from_str(value: &str) -> Result<Self> {
		let trimmed = value.trim();
		Region::ALL
			.into_iter()
			.find(|region| region.as_str().eq_ignore_ascii_case(trimmed))
			.ok_or_else(|| DataError::UnknownRegion {
				value: value.to_string(),
			})
	}
}

/// Country names keyed by translation identifier.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CountryNames {
	pub common: String,
	#[serde(flatten)]
	localized: BTreeMap<String, String>,
}

impl CountryNames {
	#[must_use]
	pub fn new(common: impl Into<String>) -> Self {
		Self {
			common: common.into(),
			localized: BTreeMap::new(),
		}
	}

	/// Attach a localized name.
	#[must_use]
	pub fn with(mut self, translation: Translation, name: impl Into<String>) -> Self {
		self.localized
			.insert(translation.as_str().to_string(), name.into());
		self
	}

	/// Name for `translation`, falling back to the common name.
	#[must_use]
	pub fn get(&self, translation: Translation) -> &str {
		match translation {
			Translation::Common => &self.common,
			other => self
				.localized
				.get(other.as_str())
				.map(String::as_str)
				.unwrap_or(&self.common),
		}
	}

	/// Explicit localized name for `translation`, without falling back.
	#[must_use]
	pub fn localized(&self, translation: Translation) -> Option<&str> {
		match translation {
			Translation::Common => Some(&self.common),
			other => self.localized.get(other.as_str()).map(String::as_str),
		}
	}
}

/// Immutable dataset entry for a single country.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CountryRecord {
	pub code: CountryCode,
	pub name: CountryNames,
	#[serde(rename = "callingCode", default)]
	pub calling_codes: Vec<String>,
	#[serde(rename = "currency", default)]
	pub currencies: Vec<String>,
	#[serde(default)]
	pub region: Option<Region>,
	#[serde(default)]
	pub subregion: Option<String>,
}

impl CountryRecord {
	#[must_use]
	pub fn name(&self, translation: Translation) -> &str {
		self.name.get(translation)
	}

	/// Primary calling code without the leading `+`.
	#[must_use]
	pub fn calling_code(&self) -> Option<&str> {
		self.calling_codes.first().map(String::as_str)
	}

	/// Primary currency code.
	#[must_use]
	pub fn currency(&self) -> Option<&str> {
		self.currencies.first().map(String::as_str)
	}
}

/// A dataset record resolved for one translation and flag style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
	record: Arc<CountryRecord>,
	translation: Translation,
	flag: Flag,
}

impl Country {
	#[must_use]
	pub fn new(record: Arc<CountryRecord>, translation: Translation, style: FlagStyle) -> Self {
		let flag = Flag::for_code(record.code, style);
		Self {
			record,
			translation,
			flag,
		}
	}

	#[must_use]
	pub fn code(&self) -> CountryCode {
		self.record.code
	}

	/// Display name under the translation this country was resolved with.
	#[must_use]
	pub fn name(&self) -> &str {
		self.record.name(self.translation)
	}

	#[must_use]
	pub fn flag(&self) -> &Flag {
		&self.flag
	}

	#[must_use]
	pub fn translation(&self) -> Translation {
		self.translation
	}

	#[must_use]
	pub fn calling_codes(&self) -> &[String] {
		&self.record.calling_codes
	}

	#[must_use]
	pub fn calling_code(&self) -> Option<&str> {
		self.record.calling_code()
	}

	#[must_use]
	pub fn currencies(&self) -> &[String] {
		&self.record.currencies
	}

	#[must_use]
	pub fn currency(&self) -> Option<&str> {
		self.record.currency()
	}

	#[must_use]
	pub fn region(&self) -> Option<Region> {
		self.record.region
	}

	#[must_use]
	pub fn subregion(&self) -> Option<&str> {
		self.record.subregion.as_deref()
	}

	#[must_use]
	pub fn record(&self) -> &CountryRecord {
		&self.record
	}
}
