use std::{
	error::Error as StdError,
	fmt::{Display, Formatter, Result as FmtResult},
	io::Error as IoError,
};

/// Failure of one of the byte streams behind a [`TapeStore`](crate::TapeStore).
#[derive(Debug)]
pub enum TapeError {
	Io(IoError),
}

impl Display for TapeError {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		match self {
			Self::Io(..) => f.write_str("an IO error has occurred"),
		}
	}
}

impl StdError for TapeError {
	fn source(&self) -> Option<&(dyn StdError + 'static)> {
		match self {
			Self::Io(e) => Some(e),
		}
	}
}

impl From<IoError> for TapeError {
	fn from(value: IoError) -> Self {
		Self::Io(value)
	}
}

#[derive(Debug)]
pub enum ConfigError {
	Io(IoError),
	Toml(toml::de::Error),
}

impl Display for ConfigError {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		match self {
			Self::Io(..) => f.write_str("unable to read tape configuration"),
			Self::Toml(..) => f.write_str("tape configuration is not valid TOML"),
		}
	}
}

impl StdError for ConfigError {
	fn source(&self) -> Option<&(dyn StdError + 'static)> {
		match self {
			Self::Io(e) => Some(e),
			Self::Toml(e) => Some(e),
		}
	}
}

impl From<IoError> for ConfigError {
	fn from(value: IoError) -> Self {
		Self::Io(value)
	}
}

impl From<toml::de::Error> for ConfigError {
	fn from(value: toml::de::Error) -> Self {
		Self::Toml(value)
	}
}
