/*! Random access.

These reads address storage by byte index and ignore both cursors. They neither
check nor move the reader, so they can inspect bytes that have not been
"written" in the cursor sense.
!*/

use super::BitBuf;

use crate::{
	access::ByteAccess,
	error::{
		Error,
		Result,
	},
};

impl BitBuf {
	/// Reads the byte at `index` as a signed value.
	///
	/// # Errors
	///
	/// `OutOfRange` if `index` is not less than the capacity.
	#[inline]
	pub fn get_byte(&self, index: usize) -> Result<i8> {
		self.get_unsigned_byte(index).map(|byte| byte as i8)
	}

	/// Reads the byte at `index` as an unsigned value.
	///
	/// # Errors
	///
	/// `OutOfRange` if `index` is not less than the capacity.
	pub fn get_unsigned_byte(&self, index: usize) -> Result<u8> {
		self.slots()
			.get(index)
			.map(ByteAccess::load_value)
			.ok_or(Error::OutOfRange {
				pos: index,
				len: 1,
				size: self.capacity(),
			})
	}

	/// Copies `target.len()` bytes, starting at storage byte `index`, into
	/// `target`.
	#[inline]
	pub fn get_bytes(&self, index: usize, target: &mut [u8]) -> Result<&Self> {
		let len = target.len();
		self.get_bytes_range(index, target, 0, len)
	}

	/// Copies `len` bytes, starting at storage byte `index`, into
	/// `target[pos ..]`.
	///
	/// # Errors
	///
	/// `OutOfRange` if either `pos + len` exceeds `target.len()` or
	/// `index + len` exceeds the capacity.
	pub fn get_bytes_range(
		&self,
		index: usize,
		target: &mut [u8],
		pos: usize,
		len: usize,
	) -> Result<&Self> {
		Self::check_array(target.len(), pos, len)?;
		Self::check_array(self.capacity(), index, len)?;
		for (byte, slot) in target[pos .. pos + len]
			.iter_mut()
			.zip(&self.slots()[index .. index + len])
		{
			*byte = slot.load_value();
		}
		Ok(self)
	}

	/// Copies `len` bytes, starting at storage byte `index`, directly into
	/// `dst`’s storage at byte `pos`.
	///
	/// Neither buffer’s cursors move. `dst` may be a [`duplicate`] of `self`;
	/// bytes are copied in ascending order.
	///
	/// `dst` is borrowed mutably because its storage is written. Shared cells
	/// would permit the store through `&Self`, but the exclusive borrow keeps
	/// this in line with every other operation that changes a buffer’s
	/// contents.
	///
	/// # Errors
	///
	/// `OutOfRange` if either region exceeds its buffer’s capacity.
	///
	/// [`duplicate`]: Self::duplicate
	pub fn get_bytes_buf(
		&self,
		index: usize,
		dst: &mut Self,
		pos: usize,
		len: usize,
	) -> Result<&Self> {
		Self::check_array(dst.capacity(), pos, len)?;
		Self::check_array(self.capacity(), index, len)?;
		for (into, from) in dst.slots()[pos .. pos + len]
			.iter()
			.zip(&self.slots()[index .. index + len])
		{
			into.store_value(from.load_value());
		}
		Ok(self)
	}

	/// Copies bytes starting at storage byte `index` into the start of
	/// `dst`’s storage, one for each byte `dst` has available to write.
	///
	/// `dst` is borrowed mutably for the same reason as in
	/// [`get_bytes_buf`](Self::get_bytes_buf).
	#[inline]
	pub fn get_bytes_buf_all(&self, index: usize, dst: &mut Self) -> Result<&Self> {
		let len = dst.available_write();
		self.get_bytes_buf(index, dst, 0, len)
	}
}

#[cfg(test)]
mod tests {
	use crate::prelude::*;

	#[test]
	fn signed_and_unsigned() {
		let buf = bitbuf![0xFF, 0x7F];
		assert_eq!(buf.get_byte(0), Ok(-1));
		assert_eq!(buf.get_unsigned_byte(0), Ok(255));
		assert_eq!(buf.get_byte(1), Ok(127));
		assert_eq!(
			buf.get_byte(2),
			Err(Error::OutOfRange {
				pos: 2,
				len: 1,
				size: 2,
			}),
		);
	}

	#[test]
	fn ranges_ignore_cursors() {
		let mut buf = BitBuf::with_capacity(4);
		buf.write_u16(0xBEEF).unwrap();

		let mut out = [0u8; 5];
		buf.get_bytes_range(1, &mut out, 2, 3).unwrap();
		assert_eq!(out, [0, 0, 0xEF, 0, 0]);
		assert_eq!(buf.reader_index(), 0);

		assert!(buf.get_bytes_range(2, &mut out, 0, 3).is_err());
		assert!(buf.get_bytes_range(0, &mut out, 4, 2).is_err());
	}

	#[test]
	fn into_another_buffer() {
		let src = bitbuf![1, 2, 3, 4];
		let mut dst = BitBuf::with_capacity(3);
		src.get_bytes_buf_all(1, &mut dst).unwrap();
		assert_eq!(dst.to_vec(), [2, 3, 4]);
		assert_eq!(dst.writer_index(), 0);

		assert!(src.get_bytes_buf(2, &mut dst, 0, 3).is_err());
	}

	#[test]
	fn into_a_duplicate() {
		let src = bitbuf![1, 2, 3, 4];
		let mut dup = src.duplicate();
		src.get_bytes_buf(0, &mut dup, 2, 2).unwrap();
		assert_eq!(src.to_vec(), [1, 2, 1, 2]);
		assert_eq!(dup.writer_index(), 4);

		//  Overlapping regions are copied front to back.
		src.get_bytes_buf(0, &mut dup, 1, 3).unwrap();
		assert_eq!(dup.to_vec(), [1, 1, 1, 1]);
	}
}
