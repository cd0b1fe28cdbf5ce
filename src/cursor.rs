/*! Reader and writer positions.

A `Cursor` is a `(byte index, bit offset)` pair. It marks the next bit that a
reader or writer will touch. Cursors compare lexicographically, first by byte
index and then by bit offset, which makes `reader <= writer` a plain `<=`.
!*/

use crate::{
	error::Error,
	index::{
		BitIdx,
		BITS,
	},
};

use core::fmt::{
	self,
	Debug,
	Display,
	Formatter,
};

/** A bit-precise position in a byte buffer.

# Validity

The bit component is always in `0 .. 8`. Cursors carry no reference to any
buffer, so a cursor may describe a position past the end of some storage; the
buffer’s bounds checks decide whether it is usable.
**/
#[derive(Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Cursor {
	/// Byte index. Declared first so that the derived ordering is
	/// lexicographic.
	index: usize,
	/// Number of high-order bits of `index` already consumed.
	bit: BitIdx,
}

impl Cursor {
	/// The origin of every buffer.
	pub const ZERO: Self = Self {
		index: 0,
		bit: BitIdx::ZERO,
	};

	/// Constructs a cursor from its components.
	#[inline]
	pub fn new(index: usize, bit: BitIdx) -> Self {
		Self { index, bit }
	}

	/// The byte index of the cursor.
	#[inline]
	pub fn index(self) -> usize {
		self.index
	}

	/// The bit offset within the byte at `self.index()`.
	#[inline]
	pub fn bit(self) -> BitIdx {
		self.bit
	}

	/// Returns a copy of the cursor with a different byte index.
	#[inline]
	pub fn with_index(self, index: usize) -> Self {
		Self { index, ..self }
	}

	/// Returns a copy of the cursor with a different bit offset.
	#[inline]
	pub fn with_bit(self, bit: BitIdx) -> Self {
		Self { bit, ..self }
	}

	/// Computes the number of bytes of storage that must exist for a region
	/// ending at `self` to be addressable.
	///
	/// A partial trailing byte counts as a whole byte.
	///
	/// # Returns
	///
	/// `index + ceil(bit / 8)`, or `None` on overflow.
	#[inline]
	pub fn bytes_needed(self) -> Option<usize> {
		self.index.checked_add(!self.bit.is_aligned() as usize)
	}

	/// Moves the cursor forward by some number of bits.
	///
	/// # Parameters
	///
	/// - `self`: The starting position.
	/// - `bits`: The number of bits to advance.
	///
	/// # Returns
	///
	/// The position `bits` bits after `self`. If that position cannot be
	/// represented, this returns `Error::InvalidLength`.
	pub fn advance(self, bits: usize) -> Result<Self, Error> {
		let overflow = || Error::InvalidLength {
			len: bits,
			width: 1,
		};
		let far = bits
			.checked_add(self.bit.value() as usize)
			.ok_or_else(overflow)?;
		let index = self
			.index
			.checked_add(far / BITS as usize)
			.ok_or_else(overflow)?;
		Ok(Self {
			index,
			bit: BitIdx::wrap(far),
		})
	}

	/// Moves the cursor forward by one bit.
	///
	/// Callers use this only after a bounds check has proven the destination
	/// is addressable.
	#[inline]
	pub(crate) fn step(self) -> Self {
		let (bit, carry) = self.bit.incr();
		Self {
			index: self.index + carry as usize,
			bit,
		}
	}

	/// Moves the cursor forward by whole bytes, keeping its bit offset.
	///
	/// Callers use this only after a bounds check has proven the destination
	/// is addressable.
	#[inline]
	pub(crate) fn skip_bytes(self, bytes: usize) -> Self {
		Self {
			index: self.index + bytes,
			..self
		}
	}

	/// Counts whole bytes between `self` and a later cursor `end`.
	///
	/// When the bit offset of `end` is lower than that of `self`, one byte is
	/// borrowed from the index; a remaining partial byte is not counted.
	/// `end` positions that precede `self` count as zero.
	pub fn bytes_until(self, end: Self) -> usize {
		let (end_index, end_bit) = if end.bit < self.bit {
			(
				end.index.wrapping_sub(1),
				end.bit.value() + BITS - self.bit.value(),
			)
		}
		else {
			(end.index, end.bit.value() - self.bit.value())
		};
		if end < self {
			return 0;
		}
		end_index
			.saturating_sub(self.index)
			.saturating_sub((end_bit != 0) as usize)
	}

	/// Counts the bits between `self` and a later cursor `end`.
	///
	/// `end` positions that precede `self` count as zero.
	pub fn bits_until(self, end: Self) -> usize {
		if end <= self {
			return 0;
		}
		(end.index - self.index)
			.saturating_mul(BITS as usize)
			.saturating_add(end.bit.value() as usize)
			.saturating_sub(self.bit.value() as usize)
	}
}

#[cfg(not(tarpaulin_include))]
impl Debug for Cursor {
	#[inline]
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		write!(fmt, "Cursor({}.{})", self.index, self.bit)
	}
}

#[cfg(not(tarpaulin_include))]
impl Display for Cursor {
	#[inline]
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		write!(fmt, "{}.{}", self.index, self.bit)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn at(index: usize, bit: u8) -> Cursor {
		Cursor::new(index, BitIdx::new(bit).unwrap())
	}

	#[test]
	fn ordering_is_lexicographic() {
		assert!(at(0, 7) < at(1, 0));
		assert!(at(1, 3) < at(1, 4));
		assert!(at(2, 0) > at(1, 7));
		assert_eq!(at(3, 3), at(3, 3));
	}

	#[test]
	fn advance() {
		assert_eq!(at(0, 0).advance(1).unwrap(), at(0, 1));
		assert_eq!(at(0, 7).advance(1).unwrap(), at(1, 0));
		assert_eq!(at(0, 4).advance(8).unwrap(), at(1, 4));
		assert_eq!(at(2, 5).advance(64).unwrap(), at(10, 5));
		assert_eq!(at(1, 6).advance(0).unwrap(), at(1, 6));
		assert!(at(usize::MAX, 0).advance(8).is_err());
		assert!(at(0, 1).advance(usize::MAX).is_err());
	}

	#[test]
	fn step_matches_advance() {
		let mut cur = Cursor::ZERO;
		for n in 1 ..= 40 {
			cur = cur.step();
			assert_eq!(cur, Cursor::ZERO.advance(n).unwrap());
		}
	}

	#[test]
	fn bytes_needed() {
		assert_eq!(at(4, 0).bytes_needed(), Some(4));
		assert_eq!(at(4, 1).bytes_needed(), Some(5));
		assert_eq!(at(usize::MAX, 1).bytes_needed(), None);
	}

	#[test]
	fn bytes_until() {
		assert_eq!(at(0, 0).bytes_until(at(4, 0)), 4);
		//  A partial trailing byte is not counted.
		assert_eq!(at(0, 0).bytes_until(at(4, 3)), 3);
		//  Borrowing across the byte boundary.
		assert_eq!(at(0, 5).bytes_until(at(4, 2)), 2);
		assert_eq!(at(0, 5).bytes_until(at(4, 5)), 4);
		assert_eq!(at(3, 0).bytes_until(at(3, 0)), 0);
		assert_eq!(at(5, 0).bytes_until(at(3, 0)), 0);
	}

	#[test]
	fn bits_until() {
		assert_eq!(at(0, 0).bits_until(at(4, 0)), 32);
		assert_eq!(at(1, 4).bits_until(at(3, 0)), 12);
		assert_eq!(at(0, 5).bits_until(at(4, 2)), 29);
		assert_eq!(at(2, 3).bits_until(at(2, 6)), 3);
		assert_eq!(at(2, 3).bits_until(at(2, 3)), 0);
		assert_eq!(at(5, 0).bits_until(at(3, 7)), 0);
		//  The borrow formula undercounts a misaligned span; this does not.
		assert_eq!(at(1, 4).bytes_until(at(3, 0)), 0);
		assert_eq!(at(1, 4).bits_until(at(3, 0)) / 8, 1);
	}
}
