#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]

mod config;
mod error;
mod impls;
#[cfg(test)]
mod test_utils;

use std::{
	fmt::{Debug, Formatter, Result as FmtResult},
	io::{BufWriter, Stdin, Stdout, prelude::*},
};

use tapecore_spec::wrap_cursor;
use tracing::debug;

pub use self::{
	config::{EofPolicy, TapeConfig},
	error::{ConfigError, TapeError},
	impls::InputEvent,
};
pub use tapecore_spec::{CELL_MASK, TAPE_SIZE};

/// A fixed-size circular byte tape, the cursor into it, and the byte streams it
/// reads from and writes to.
///
/// The cursor is owned jointly with whoever drives the tape: it may be moved
/// freely (including below zero) through [`cursor_mut`](Self::cursor_mut), every
/// access addresses `cursor mod capacity`, and only [`normalize`](Self::normalize)
/// rewrites the stored cursor into range.
pub struct TapeStore<R, W> {
	cells: Box<[u8]>,
	cursor: isize,
	eof: EofPolicy,
	reader: R,
	writer: W,
}

impl<R, W> TapeStore<R, W>
where
	R: Read,
	W: Write,
{
	/// A zeroed tape of [`TAPE_SIZE`] cells.
	pub fn new(reader: R, writer: W) -> Self {
		Self::with_config(TapeConfig::default(), reader, writer)
	}

	pub fn with_config(config: TapeConfig, reader: R, writer: W) -> Self {
		debug!(capacity = config.capacity.get(), eof = ?config.eof, "creating tape");

		Self {
			cells: vec![0; config.capacity.get()].into_boxed_slice(),
			cursor: 0,
			eof: config.eof,
			reader,
			writer,
		}
	}

	/// Gives back the streams, dropping the tape.
	pub fn into_parts(self) -> (R, W) {
		(self.reader, self.writer)
	}
}

impl TapeStore<Stdin, BufWriter<Stdout>> {
	/// A tape bound to the process standard streams.
	#[must_use]
	pub fn stdio(config: TapeConfig) -> Self {
		Self::with_config(config, tapecore_interop::stdin(), tapecore_interop::stdout())
	}
}

impl<R, W> TapeStore<R, W> {
	#[must_use]
	pub fn capacity(&self) -> usize {
		self.cells.len()
	}

	#[must_use]
	pub const fn eof_policy(&self) -> EofPolicy {
		self.eof
	}

	#[must_use]
	pub const fn cursor(&self) -> isize {
		self.cursor
	}

	pub const fn set_cursor(&mut self, cursor: isize) {
		self.cursor = cursor;
	}

	/// Raw access to the cursor. It is not reduced until the next
	/// [`normalize`](Self::normalize).
	pub const fn cursor_mut(&mut self) -> &mut isize {
		&mut self.cursor
	}

	/// The cell index the cursor currently addresses.
	#[must_use]
	pub fn address(&self) -> usize {
		wrap_cursor(self.cursor, self.capacity())
	}

	#[must_use]
	pub fn cells(&self) -> &[u8] {
		&self.cells
	}

	pub const fn reader_mut(&mut self) -> &mut R {
		&mut self.reader
	}

	pub const fn writer_mut(&mut self) -> &mut W {
		&mut self.writer
	}
}

impl<R, W> Debug for TapeStore<R, W> {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		f.debug_struct("TapeStore")
			.field("capacity", &self.capacity())
			.field("cursor", &self.cursor)
			.field("address", &self.address())
			.field("eof", &self.eof)
			.finish_non_exhaustive()
	}
}
