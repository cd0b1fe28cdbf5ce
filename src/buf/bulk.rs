/*! Bulk and buffer-to-buffer transfer.

Every transfer here checks its entire footprint first: the source and
destination ranges, the bit span of all elements, and (for writes) every
element’s encodability. Only then does it loop over the scalar codec. A failed
transfer therefore moves no cursor and writes no byte.

Buffer-to-buffer transfers copy raw wire bits, one element-width at a time, so
they never decode the elements they move.
!*/

use super::BitBuf;

use crate::{
	codec,
	cursor::Cursor,
	error::Result,
	index::BITS,
	scalar::Scalar,
};

use alloc::vec::Vec;

/// Widest element that a buffer-to-buffer transfer moves at once.
const WIDEST: usize = 8;

/// Slice transfer
impl BitBuf {
	/// Writes every element of `values` at the writer.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitbuf::prelude::*;
	///
	/// let mut buf = BitBuf::with_capacity(1);
	/// buf.write_slice(&[true, true, true]).unwrap();
	/// assert_eq!(buf.to_vec(), [0xE0]);
	/// ```
	#[inline]
	pub fn write_slice<T>(&mut self, values: &[T]) -> Result<&mut Self>
	where T: Scalar {
		self.write_slice_range(values, 0, values.len())
	}

	/// Writes `len` elements of `values`, starting at `values[pos]`.
	///
	/// # Errors
	///
	/// - `OutOfRange` if `pos + len` exceeds `values.len()`.
	/// - `InvalidLength` if the bit span of `len` elements overflows.
	/// - `CapacityExceeded` if the elements do not all fit.
	/// - `CharOutOfRange` if any `char` needs more than 16 bits.
	pub fn write_slice_range<T>(
		&mut self,
		values: &[T],
		pos: usize,
		len: usize,
	) -> Result<&mut Self>
	where
		T: Scalar,
	{
		Self::check_array(values.len(), pos, len)?;
		let values = &values[pos .. pos + len];
		let end = Self::span_end::<T>(self.writer, len)?;
		self.check_writer(end)?;
		values.iter().copied().try_for_each(Scalar::check)?;

		let mut at = self.writer;
		for value in values.iter().copied() {
			value.store(self.slots(), at);
			at = next::<T>(at);
		}
		self.writer = end;
		Ok(self)
	}

	/// Reads `len` elements into a new vector.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitbuf::prelude::*;
	///
	/// let mut buf = BitBuf::with_capacity(4);
	/// buf.write_slice(&[1i16, -2]).unwrap();
	/// assert_eq!(buf.read_vec::<i16>(2).unwrap(), [1, -2]);
	/// ```
	pub fn read_vec<T>(&mut self, len: usize) -> Result<Vec<T>>
	where T: Scalar {
		let end = Self::span_end::<T>(self.reader, len)?;
		self.check_reader(end)?;

		let mut out = Vec::with_capacity(len);
		let mut at = self.reader;
		for _ in 0 .. len {
			out.push(T::load(self.slots(), at)?);
			at = next::<T>(at);
		}
		self.reader = end;
		Ok(out)
	}

	/// Fills `target` with elements from the reader.
	#[inline]
	pub fn read_slice<T>(&mut self, target: &mut [T]) -> Result<&mut Self>
	where T: Scalar {
		let len = target.len();
		self.read_slice_range(target, 0, len)
	}

	/// Reads `len` elements into `target`, starting at `target[pos]`.
	///
	/// # Errors
	///
	/// - `OutOfRange` if `pos + len` exceeds `target.len()`.
	/// - `InvalidLength` if the bit span of `len` elements overflows.
	/// - `ReadPastWriter` if the elements have not all been written.
	/// - `InvalidChar` if a `char` code unit is a lone surrogate. The reader
	///   does not move, but a prefix of `target` may have been filled.
	pub fn read_slice_range<T>(
		&mut self,
		target: &mut [T],
		pos: usize,
		len: usize,
	) -> Result<&mut Self>
	where
		T: Scalar,
	{
		Self::check_array(target.len(), pos, len)?;
		let end = Self::span_end::<T>(self.reader, len)?;
		self.check_reader(end)?;

		let mut at = self.reader;
		for slot in &mut target[pos .. pos + len] {
			*slot = T::load(self.slots(), at)?;
			at = next::<T>(at);
		}
		self.reader = end;
		Ok(self)
	}
}

/// Buffer-to-buffer transfer
impl BitBuf {
	/// Drains `len` elements of `T` from `src`’s reader into this writer.
	///
	/// Both cursors advance. `src` may be a [`duplicate`] of `self`.
	///
	/// # Errors
	///
	/// - `InvalidLength` if the bit span of `len` elements overflows.
	/// - `ReadPastWriter` if `src` has not written that many elements.
	/// - `CapacityExceeded` if they do not fit in `self`.
	///
	/// [`duplicate`]: Self::duplicate
	pub fn write_buf<T>(&mut self, src: &mut Self, len: usize) -> Result<&mut Self>
	where T: Scalar {
		Self::transfer::<T>(src, self, len)?;
		Ok(self)
	}

	/// Drains as many elements of `T` as `src` has readable bytes for.
	///
	/// The element count is `src.available_read() * 8 / T::BITS`.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitbuf::prelude::*;
	///
	/// let mut src = BitBuf::with_capacity(4);
	/// src.write_i32(1).unwrap();
	/// let mut dst = BitBuf::with_capacity(4);
	/// dst.write_buf_all::<u8>(&mut src).unwrap();
	/// assert_eq!(src.available_read(), 0);
	/// assert_eq!(dst.read_i32().unwrap(), 1);
	/// ```
	#[inline]
	pub fn write_buf_all<T>(&mut self, src: &mut Self) -> Result<&mut Self>
	where T: Scalar {
		let len = elements::<T>(src.available_read());
		self.write_buf::<T>(src, len)
	}

	/// Drains `len` elements of `T` from this reader into `dst`’s writer.
	///
	/// Both cursors advance. `dst` may be a [`duplicate`] of `self`.
	///
	/// # Errors
	///
	/// - `InvalidLength` if the bit span of `len` elements overflows.
	/// - `CapacityExceeded` if they do not fit in `dst`.
	/// - `ReadPastWriter` if `self` has not written that many elements.
	///
	/// [`duplicate`]: Self::duplicate
	pub fn read_buf<T>(&mut self, dst: &mut Self, len: usize) -> Result<&mut Self>
	where T: Scalar {
		Self::transfer::<T>(self, dst, len)?;
		Ok(self)
	}

	/// Drains as many elements of `T` as `dst` has writable bytes for.
	///
	/// The element count is `dst.available_write() * 8 / T::BITS`; `self` must
	/// have at least that much to read.
	#[inline]
	pub fn read_buf_all<T>(&mut self, dst: &mut Self) -> Result<&mut Self>
	where T: Scalar {
		let len = elements::<T>(dst.available_write());
		self.read_buf::<T>(dst, len)
	}

	/// Moves `len` raw elements of `T::BITS` bits from `src` to `dst`.
	fn transfer<T>(src: &mut Self, dst: &mut Self, len: usize) -> Result<()>
	where T: Scalar {
		let src_end = Self::span_end::<T>(src.reader, len)?;
		let dst_end = Self::span_end::<T>(dst.writer, len)?;
		let span = len * T::BITS;
		src.check_reader(src_end)?;
		dst.check_writer(dst_end)?;

		let mut from = src.reader;
		let mut into = dst.writer;
		if T::BITS % BITS as usize == 0 {
			let mut scratch = [0u8; WIDEST];
			let scratch = &mut scratch[.. T::BITS / BITS as usize];
			for _ in 0 .. len {
				codec::load_be(src.slots(), from, scratch);
				codec::store_be(dst.slots(), into, scratch);
				from = next::<T>(from);
				into = next::<T>(into);
			}
		}
		else {
			for _ in 0 .. span {
				let bit = codec::load_bit(src.slots(), from);
				codec::store_bit(dst.slots(), into, bit);
				from = from.step();
				into = into.step();
			}
		}

		src.reader = src_end;
		dst.writer = dst_end;
		Ok(())
	}
}

/// Advances a pre-checked cursor past one element of `T`.
#[inline]
fn next<T>(at: Cursor) -> Cursor
where T: Scalar {
	if T::BITS == 1 {
		at.step()
	}
	else {
		at.skip_bytes(T::BITS / BITS as usize)
	}
}

/// Counts the elements of `T` that fit in `bytes` whole bytes.
#[inline]
fn elements<T>(bytes: usize) -> usize
where T: Scalar {
	bytes.saturating_mul(BITS as usize) / T::BITS
}
