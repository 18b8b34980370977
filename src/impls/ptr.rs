use tapecore_spec::mask_cell;
use tracing::{debug, trace};

use crate::TapeStore;

impl<R, W> TapeStore<R, W> {
	/// Collapses the cursor into `0..capacity` and re-masks the cell it now addresses.
	///
	/// Afterwards [`cursor`](Self::cursor) and [`address`](Self::address) agree.
	pub fn normalize(&mut self) {
		let address = self.address();

		if self.cursor != address as isize {
			debug!(from = self.cursor, to = address, "wrapping cursor");
		}

		self.cursor = address as isize;

		let cell = self.cell_mut();
		*cell = mask_cell(u32::from(*cell));

		trace!(address, value = self.cell(), "normalize");
	}
}
