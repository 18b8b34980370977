use std::io::{self, prelude::*};

use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
	_ = tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_test_writer()
		.try_init();
}

/// A sink whose every write and flush fails.
pub struct BrokenPipe;

impl Write for BrokenPipe {
	fn write(&mut self, _: &[u8]) -> io::Result<usize> {
		Err(io::ErrorKind::BrokenPipe.into())
	}

	fn flush(&mut self) -> io::Result<()> {
		Err(io::ErrorKind::BrokenPipe.into())
	}
}
