/*! Typed bit offsets within a byte.

This module provides the type that every cursor uses to describe how far into a
byte it has progressed. The type guarantees that its value is always in the
range `0 .. 8`, so the codec can compute shift amounts and masks from it without
re-validating.

# Bit Order

`bitbuf` uses a single, fixed ordering: bits are counted from the most
significant bit of a byte to the least. Index `0` selects `0b1000_0000`, and
index `7` selects `0b0000_0001`. This means that the bits you would write down
on paper match up with the bits as they are stored in memory.
!*/

use core::{
	convert::TryFrom,
	fmt::{
		self,
		Binary,
		Debug,
		Display,
		Formatter,
	},
};

/// The number of bits in one storage element.
pub const BITS: u8 = 8;

/// A mask over all bits that can be used as an index within a byte.
const MASK: u8 = BITS - 1;

/** A semantic index of a single bit within a byte.

This type is a counter in the range `0 .. 8`. As a cursor component, it counts
how many of the high-order bits of the current byte have already been
committed; `0` means that the cursor is byte-aligned.

# Validity

Values of this type are required to be in the range `0 .. 8`. The only
constructors are checked, so the library never produces an invalid value.
**/
#[repr(transparent)]
#[derive(Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct BitIdx {
	/// Semantic index counter within a byte, constrained to `0 .. 8`.
	idx: u8,
}

impl BitIdx {
	/// The inclusive-maximum index.
	pub const LAST: Self = Self { idx: MASK };
	/// The zero index.
	pub const ZERO: Self = Self { idx: 0 };

	/// Wraps a counter value as a known-good index into a byte.
	///
	/// # Parameters
	///
	/// - `idx`: A semantic index of a bit within a byte.
	///
	/// # Returns
	///
	/// If `idx` is outside the valid range `0 .. 8`, this returns an error;
	/// otherwise, it returns a `BitIdx` wrapping the `idx` value.
	#[inline]
	pub fn new(idx: u8) -> Result<Self, BitIdxError> {
		if idx >= BITS {
			return Err(BitIdxError { idx });
		}
		Ok(Self { idx })
	}

	/// Wraps the low three bits of a counter. Used by cursor arithmetic after
	/// the byte count has been split off.
	#[inline]
	pub(crate) fn wrap(idx: usize) -> Self {
		Self {
			idx: (idx & MASK as usize) as u8,
		}
	}

	/// Views the internal index value.
	#[inline]
	pub fn value(self) -> u8 {
		self.idx
	}

	/// Tests whether the index sits on a byte boundary.
	#[inline]
	pub fn is_aligned(self) -> bool {
		self.idx == 0
	}

	/// Increments an index counter, wrapping at the back edge of the byte.
	///
	/// # Returns
	///
	/// - `.0`: The next index after `self`.
	/// - `.1`: Indicates that the new index is in the next byte.
	#[inline]
	pub(crate) fn incr(self) -> (Self, bool) {
		let next = self.idx + 1;
		(Self { idx: next & MASK }, next == BITS)
	}

	/// Computes the one-hot selector for this bit, most significant first.
	#[inline]
	pub fn select(self) -> u8 {
		0x80 >> self.idx
	}

	/// Computes the head mask: the low `8 - self` bits of a byte.
	///
	/// In the shifted codec path, these are the bits of the *next* byte that
	/// belong to data not yet written, and must be preserved when the final
	/// fragment of a value is spliced in. For the zero index this is the full
	/// byte.
	#[inline]
	pub fn head_mask(self) -> u8 {
		!0u8 >> self.idx
	}

	/// Computes the tail mask: the high `self` bits of a byte, which a cursor
	/// has already committed.
	#[inline]
	pub fn tail_mask(self) -> u8 {
		!self.head_mask()
	}
}

#[cfg(not(tarpaulin_include))]
impl Binary for BitIdx {
	#[inline]
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		write!(fmt, "{:0>3b}", self.idx)
	}
}

#[cfg(not(tarpaulin_include))]
impl Debug for BitIdx {
	#[inline]
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		write!(fmt, "BitIdx({})", self.idx)
	}
}

#[cfg(not(tarpaulin_include))]
impl Display for BitIdx {
	#[inline]
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		Display::fmt(&self.idx, fmt)
	}
}

impl TryFrom<u8> for BitIdx {
	type Error = BitIdxError;

	#[inline]
	fn try_from(idx: u8) -> Result<Self, Self::Error> {
		Self::new(idx)
	}
}

impl From<BitIdx> for u8 {
	#[inline]
	fn from(idx: BitIdx) -> Self {
		idx.value()
	}
}

/// An index was out of range for a byte.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct BitIdxError {
	/// The value that could not be used as a bit index.
	idx: u8,
}

impl BitIdxError {
	/// Views the rejected value.
	#[inline]
	pub fn value(self) -> u8 {
		self.idx
	}
}

#[cfg(not(tarpaulin_include))]
impl Display for BitIdxError {
	#[inline]
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		write!(
			fmt,
			"the value {} is too large to index into a byte ({} bits)",
			self.idx, BITS,
		)
	}
}

#[cfg(feature = "std")]
impl std::error::Error for BitIdxError {
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn construction() {
		assert_eq!(BitIdx::new(0), Ok(BitIdx::ZERO));
		assert_eq!(BitIdx::new(7), Ok(BitIdx::LAST));
		assert_eq!(BitIdx::new(8).unwrap_err().value(), 8);
		assert!(BitIdx::try_from(200u8).is_err());
	}

	#[test]
	fn incr_wraps() {
		let (next, carry) = BitIdx::ZERO.incr();
		assert_eq!(next.value(), 1);
		assert!(!carry);

		let (next, carry) = BitIdx::LAST.incr();
		assert_eq!(next, BitIdx::ZERO);
		assert!(carry);
	}

	#[test]
	fn masks() {
		let four = BitIdx::new(4).unwrap();
		assert_eq!(four.select(), 0b0000_1000);
		assert_eq!(four.head_mask(), 0x0F);
		assert_eq!(four.tail_mask(), 0xF0);

		assert_eq!(BitIdx::ZERO.select(), 0x80);
		assert_eq!(BitIdx::ZERO.head_mask(), 0xFF);
		assert_eq!(BitIdx::ZERO.tail_mask(), 0x00);

		for idx in 1 .. BITS {
			let idx = BitIdx::new(idx).unwrap();
			//  (1 << (8 - offset)) - 1
			let expected = ((1u16 << (8 - idx.value())) - 1) as u8;
			assert_eq!(idx.head_mask(), expected);
			assert_eq!(idx.head_mask() ^ idx.tail_mask(), !0);
		}
	}

	#[test]
	fn wrap_keeps_low_bits() {
		assert_eq!(BitIdx::wrap(13).value(), 5);
		assert_eq!(BitIdx::wrap(8), BitIdx::ZERO);
	}
}
