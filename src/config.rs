use std::{fs, num::NonZero, path::Path};

use serde::{Deserialize, Serialize};
use tapecore_spec::TAPE_SIZE;
use tracing::{debug, info};

use super::ConfigError;

/// What `input` stores into the current cell once the input stream is exhausted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EofPolicy {
	/// Store `0`.
	#[default]
	Zero,
	/// Store `0xFF`, the masked `EOF` of C's `getchar`.
	Max,
	/// Leave the cell untouched.
	Unchanged,
}

impl EofPolicy {
	/// The value the cell holds after end-of-stream, given what it held before.
	#[must_use]
	pub const fn apply(self, previous: u8) -> u8 {
		match self {
			Self::Zero => 0,
			Self::Max => u8::MAX,
			Self::Unchanged => previous,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TapeConfig {
	pub capacity: NonZero<usize>,
	pub eof: EofPolicy,
}

impl TapeConfig {
	#[must_use]
	pub const fn new(capacity: NonZero<usize>) -> Self {
		Self {
			capacity,
			eof: EofPolicy::Zero,
		}
	}

	#[must_use]
	pub const fn with_eof(mut self, eof: EofPolicy) -> Self {
		self.eof = eof;
		self
	}

	pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
		let config = toml::from_str::<Self>(s)?;

		debug!(capacity = config.capacity.get(), eof = ?config.eof, "parsed tape config");

		Ok(config)
	}

	#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		info!("loading tape config");

		let raw = fs::read_to_string(path.as_ref())?;

		Self::from_toml_str(&raw)
	}
}

impl Default for TapeConfig {
	fn default() -> Self {
		Self::new(NonZero::new(TAPE_SIZE).unwrap_or(NonZero::<usize>::MIN))
	}
}

#[cfg(test)]
mod tests {
	use std::num::NonZero;

	use super::{EofPolicy, TapeConfig};
	use crate::ConfigError;

	#[test]
	fn empty_config_is_canonical() -> Result<(), ConfigError> {
		let config = TapeConfig::from_toml_str("")?;

		assert_eq!(config.capacity.get(), 1024);
		assert_eq!(config.eof, EofPolicy::Zero);
		assert_eq!(config, TapeConfig::default());

		Ok(())
	}

	#[test]
	fn reads_capacity_and_policy() -> Result<(), ConfigError> {
		let config = TapeConfig::from_toml_str("capacity = 16\neof = \"max\"\n")?;

		assert_eq!(
			config,
			TapeConfig::new(NonZero::new(16).unwrap()).with_eof(EofPolicy::Max)
		);

		Ok(())
	}

	#[test]
	fn rejects_zero_capacity() {
		assert!(matches!(
			TapeConfig::from_toml_str("capacity = 0"),
			Err(ConfigError::Toml(..))
		));
	}

	#[test]
	fn rejects_unknown_keys() {
		assert!(TapeConfig::from_toml_str("tapes = 2").is_err());
	}

	#[test]
	fn missing_file_is_io_error() {
		assert!(matches!(
			TapeConfig::load("./does/not/exist.toml"),
			Err(ConfigError::Io(..))
		));
	}

	#[test]
	fn policies_map_end_of_stream() {
		assert_eq!(EofPolicy::Zero.apply(7), 0);
		assert_eq!(EofPolicy::Max.apply(7), 0xFF);
		assert_eq!(EofPolicy::Unchanged.apply(7), 7);
	}
}
