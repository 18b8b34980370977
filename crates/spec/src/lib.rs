#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

/// Canonical number of cells on a tape.
pub const TAPE_SIZE: usize = 1024;

/// Mask applied to every value written into a cell.
pub const CELL_MASK: u32 = 0xFF;

const _: () = const { assert!(TAPE_SIZE > 0) };
const _: () = const { assert!(CELL_MASK == u8::MAX as u32) };

/// Truncates `value` to the 8 bits a cell can hold.
#[must_use]
pub const fn mask_cell(value: u32) -> u8 {
	(value & CELL_MASK) as u8
}

/// Reduces a signed cursor into `0..capacity`.
///
/// Uses the Euclidean remainder, so stepping below zero wraps to the end of the tape.
#[must_use]
pub const fn wrap_cursor(cursor: isize, capacity: usize) -> usize {
	cursor.rem_euclid(capacity as isize) as usize
}
