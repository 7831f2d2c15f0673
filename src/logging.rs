//! Log sink for the interactive session.
//!
//! Records go to `tui-logger`, which buffers them for the in-UI log pane
//! (toggled with F2) instead of writing over the alternate screen.

use std::str::FromStr;

use anyhow::{Result, anyhow};
use log::LevelFilter;

/// Level used when neither the command line nor a config file sets one.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

/// Install `tui-logger` as the global logger at `level`.
pub fn initialize(level: LevelFilter) -> Result<()> {
	tui_logger::init_logger(level).map_err(|err| anyhow!("failed to install logger: {err}"))?;
	tui_logger::set_default_level(level);
	log::debug!("logging initialised at {level}");
	Ok(())
}

/// Parse a level name such as `warn` or `TRACE`.
pub fn parse_level(value: &str) -> Result<LevelFilter> {
	LevelFilter::from_str(value.trim()).map_err(|_| {
		anyhow!("unknown log level '{value}' (expected off, error, warn, info, debug or trace)")
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn level_names_are_case_insensitive() {
		assert_eq!(parse_level("WARN").unwrap(), LevelFilter::Warn);
		assert_eq!(parse_level(" off ").unwrap(), LevelFilter::Off);
		assert!(parse_level("verbose").is_err());
	}
}
