//! Resolve the configuration and data directories for `country-picker`.
//!
//! Environment overrides win over the platform locations reported by the
//! `directories` crate.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "albo";
const APPLICATION: &str = "country-picker";

const CONFIG_DIR_ENV: &str = "COUNTRY_PICKER_CONFIG_DIR";
const DATA_DIR_ENV: &str = "COUNTRY_PICKER_DATA_DIR";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for country-picker"))
}

/// Resolve an override directory from an environment variable.
///
/// An empty value counts as unset.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Directory for persistent application data such as custom flag assets.
pub fn get_data_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(DATA_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.data_local_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unset_override_is_ignored() {
		assert_eq!(dir_from_env("COUNTRY_PICKER_TEST_UNSET_DIR"), None);
	}

	#[test]
	fn config_dir_is_named_after_the_application() {
		if env::var_os(CONFIG_DIR_ENV).is_none()
			&& let Ok(dir) = get_config_dir()
		{
			assert!(dir.to_string_lossy().contains(APPLICATION));
		}
	}
}
