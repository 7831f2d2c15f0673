use thiserror::Error;

use crate::types::CountryCode;

/// Errors raised while parsing country data or user supplied identifiers.
#[derive(Debug, Error)]
pub enum DataError {
	/// A country code was not made of exactly two ASCII letters.
	#[error("invalid country code '{value}': expected two ASCII letters")]
	InvalidCode { value: String },

	/// A translation identifier did not name a supported locale.
	#[error("unknown translation '{value}'")]
	UnknownTranslation { value: String },

	/// A region name did not match any known region.
	#[error("unknown region '{value}'")]
	UnknownRegion { value: String },

	/// The dataset JSON could not be decoded.
	#[error("failed to decode country dataset: {0}")]
	Decode(#[from] serde_json::Error),

	/// The dataset listed the same country twice.
	#[error("country {code} appears more than once in the dataset")]
	DuplicateCode { code: CountryCode },
}

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, DataError>;
