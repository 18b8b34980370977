#![cfg_attr(docsrs, feature(doc_cfg))]

use std::{
	io::{self, BufWriter, ErrorKind, Stdin, Stdout, prelude::*},
	slice,
};

/// Reads a single byte, returning [`None`] once the stream is exhausted.
#[tracing::instrument(level = tracing::Level::TRACE, skip(reader), ret)]
pub fn read_byte<R>(reader: &mut R) -> io::Result<Option<u8>>
where
	R: Read + ?Sized,
{
	let mut value = 0;

	loop {
		match reader.read(slice::from_mut(&mut value)) {
			Ok(0) => return Ok(None),
			Ok(_) => return Ok(Some(value)),
			Err(e) if matches!(e.kind(), ErrorKind::Interrupted) => {}
			Err(e) => return Err(e),
		}
	}
}

/// Queues a single byte. Nothing is flushed.
#[tracing::instrument(level = tracing::Level::TRACE, skip(writer))]
pub fn write_byte<W>(writer: &mut W, value: u8) -> io::Result<()>
where
	W: Write + ?Sized,
{
	writer.write_all(slice::from_ref(&value))
}

#[tracing::instrument(level = tracing::Level::TRACE, skip(writer))]
pub fn flush<W>(writer: &mut W) -> io::Result<()>
where
	W: Write + ?Sized,
{
	writer.flush()
}

/// The process standard input.
#[must_use]
pub fn stdin() -> Stdin {
	io::stdin()
}

/// The process standard output, block buffered so bytes only leave on [`flush`].
#[must_use]
pub fn stdout() -> BufWriter<Stdout> {
	BufWriter::new(io::stdout())
}
