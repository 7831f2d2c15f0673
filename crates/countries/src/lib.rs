//! Country records, flag mapping and list filtering for `country-picker`.
//!
//! The dataset is embedded in the crate and parsed once per process. Every
//! [`CountryService`] shares the same read-only records; pickers resolve them
//! into [`Country`] values for a chosen [`Translation`] and [`FlagStyle`].

pub mod dataset;
pub mod error;
pub mod filter;
pub mod flag;
pub mod service;
pub mod text;
pub mod types;

pub use dataset::{Dataset, builtin_dataset};
pub use error::{DataError, Result};
pub use filter::{AlphabetIndex, FilterOptions, LetterOffset, filter_countries};
pub use flag::{Flag, FlagStyle, flag_for};
pub use service::{CountryScope, CountryService};
pub use types::{Country, CountryCode, CountryNames, CountryRecord, Region, Translation};
