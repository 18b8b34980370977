use std::io::prelude::*;

use tapecore_interop::{flush, read_byte, write_byte};
use tracing::trace;

use super::InputEvent;
use crate::{TapeError, TapeStore};

impl<R, W> TapeStore<R, W>
where
	R: Read,
	W: Write,
{
	/// Queues the byte under the cursor on the output stream.
	///
	/// The byte is not guaranteed to be visible until [`flush`](Self::flush).
	pub fn output(&mut self) -> Result<(), TapeError> {
		let value = self.cell();

		trace!(address = self.address(), value, "output");

		write_byte(&mut self.writer, value)?;

		Ok(())
	}

	/// Reads one byte into the cell under the cursor.
	///
	/// At end-of-stream the cell is set according to the configured
	/// [`EofPolicy`](crate::EofPolicy) and [`InputEvent::EndOfStream`] is returned.
	pub fn input(&mut self) -> Result<InputEvent, TapeError> {
		let event = match read_byte(&mut self.reader)? {
			Some(value) => {
				*self.cell_mut() = value;
				InputEvent::Byte(value)
			}
			None => {
				let eof = self.eof;
				let cell = self.cell_mut();
				*cell = eof.apply(*cell);
				InputEvent::EndOfStream
			}
		};

		trace!(address = self.address(), ?event, "input");

		Ok(event)
	}

	/// Delivers everything queued by [`output`](Self::output).
	pub fn flush(&mut self) -> Result<(), TapeError> {
		trace!("flush");

		flush(&mut self.writer)?;

		Ok(())
	}
}
