mod cell;
mod io;
mod ptr;

/// What [`input`](crate::TapeStore::input) found on the input stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
	/// A byte was read and stored into the current cell.
	Byte(u8),
	/// The stream is exhausted; the current cell was set by the [`EofPolicy`](crate::EofPolicy).
	EndOfStream,
}

impl InputEvent {
	#[must_use]
	pub const fn is_end_of_stream(self) -> bool {
		matches!(self, Self::EndOfStream)
	}
}
