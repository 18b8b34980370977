use tapecore_spec::mask_cell;

use crate::TapeStore;

impl<R, W> TapeStore<R, W> {
	/// The value under the cursor.
	#[must_use]
	pub fn cell(&self) -> u8 {
		self.cells[self.address()]
	}

	pub fn cell_mut(&mut self) -> &mut u8 {
		let address = self.address();

		&mut self.cells[address]
	}

	/// Stores `value` under the cursor, keeping only its low 8 bits.
	pub fn set_cell(&mut self, value: u32) {
		*self.cell_mut() = mask_cell(value);
	}
}

#[cfg(test)]
mod tests {
	use std::io;

	use crate::TapeStore;

	#[test]
	fn set_cell_masks_high_bits() {
		let mut tape = TapeStore::new(io::empty(), io::sink());

		tape.set_cell(300);
		assert_eq!(tape.cell(), 44);

		tape.set_cell(256);
		assert_eq!(tape.cell(), 0);

		tape.set_cell(u32::MAX);
		assert_eq!(tape.cell(), 0xFF);
	}

	#[test]
	fn cell_follows_wrapped_address() {
		let mut tape = TapeStore::new(io::empty(), io::sink());

		tape.set_cursor(-1);
		*tape.cell_mut() = 9;

		assert_eq!(tape.cells()[1023], 9);

		tape.set_cursor(2047);
		assert_eq!(tape.cell(), 9);
	}

	#[test]
	fn cell_mut_wraps_arithmetic() {
		let mut tape = TapeStore::new(io::empty(), io::sink());

		let cell = tape.cell_mut();
		*cell = cell.wrapping_sub(1);

		assert_eq!(tape.cell(), 0xFF);
	}
}
