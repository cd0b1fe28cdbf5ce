/*! Governs access to underlying memory.

`BitBuf::duplicate` deliberately produces two handles to one allocation, and
both handles may write to it. Aliased `&mut [u8]` references to that memory
would be undefined behavior, so the crate never produces them. Instead, storage
is a slice of shared-mutable cells, and every read or write of a byte goes
through this module.

The trait here is expressed over `radium::Radium`, so the same operations serve
any shared-mutable byte type. The buffer itself stores `Cell<u8>`, which makes
it neither `Send` nor `Sync`: aliased handles can never be observed from more
than one thread.
!*/

use crate::index::BitIdx;

use core::sync::atomic::Ordering;

use radium::Radium;

/** Access interface for shared/mutable bytes.

This trait extends the `Radium` element-wise shared mutable access with the
masked and single-bit operations used by the codec.
**/
pub trait ByteAccess: Radium<Item = u8> {
	/// Reads the current value of the byte.
	#[inline]
	fn load_value(&self) -> u8 {
		Radium::load(self, Ordering::Relaxed)
	}

	/// Overwrites the whole byte.
	#[inline]
	fn store_value(&self, value: u8) {
		Radium::store(self, value, Ordering::Relaxed);
	}

	/// Clears every bit that is *not* set in `mask`.
	///
	/// # Parameters
	///
	/// - `&self`
	/// - `mask`: The bits of `*self` to preserve.
	#[inline]
	fn keep_bits(&self, mask: u8) {
		self.fetch_and(mask, Ordering::Relaxed);
	}

	/// Sets every bit that is set in `mask`.
	#[inline]
	fn set_bits(&self, mask: u8) {
		self.fetch_or(mask, Ordering::Relaxed);
	}

	/// Replaces the bits outside `keep` with the matching bits of `bits`.
	///
	/// # Parameters
	///
	/// - `&self`
	/// - `keep`: The bits of `*self` that survive.
	/// - `bits`: The incoming fragment. Bits of `bits` inside `keep` must be
	///   zero.
	#[inline]
	fn splice(&self, keep: u8, bits: u8) {
		self.keep_bits(keep);
		self.set_bits(bits);
	}

	/// Retrieves a single bit, most significant first.
	#[inline]
	fn read_bit(&self, place: BitIdx) -> bool {
		self.load_value() & place.select() != 0
	}

	/// Sets a single bit, most significant first, to some value.
	#[inline]
	fn write_bit(&self, place: BitIdx, value: bool) {
		let sel = place.select();
		if value {
			self.set_bits(sel);
		}
		else {
			self.keep_bits(!sel);
		}
	}
}

impl<R> ByteAccess for R where R: Radium<Item = u8>
{
}
