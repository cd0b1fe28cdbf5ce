/*! I/O trait implementations.

The standard library defines byte-based I/O protocols that form the basis of
exchanging memory buffers with I/O controllers. `BitBuf` is one such buffer, so
it implements them in terms of its cursors:

- `Read` drains every whole byte that lies between the reader and the writer.
  This can be one more than `available_read()` reports when the reader is not
  byte-aligned.
- `Write` appends bytes at the writer, up to `available_write()` of them.

Both work at any bit offset; the bytes are shifted exactly as `write_u8` and
`read_u8` would shift them.
!*/

#![cfg(feature = "std")]

use super::BitBuf;
use crate::{
	cursor::Cursor,
	index::BITS,
};

use std::io::{
	self,
	Read,
	Write,
};

/** Mirrors the implementation on `&[u8]` (found [here]).

The implementation reads bytes from the reader cursor until either `buf` is
full or no whole byte remains before the writer.

[here]: https://doc.rust-lang.org/std/primitive.slice.html#impl-Read
**/
impl Read for BitBuf {
	#[inline]
	fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
		let end = self.writer().min(Cursor::ZERO.with_index(self.capacity()));
		let whole = self.reader().bits_until(end) / BITS as usize;
		let len = buf.len().min(whole);
		self.read_slice_range(buf, 0, len)?;
		Ok(len)
	}
}

/** Mirrors the implementation on `&mut [u8]` (found [here]).

The implementation writes bytes at the writer cursor until either `buf` is
exhausted or storage is full. A full buffer accepts zero bytes, which
`write_all` reports as `WriteZero`.

[here]: https://doc.rust-lang.org/std/primitive.slice.html#impl-Write
**/
impl Write for BitBuf {
	#[inline]
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		let len = buf.len().min(self.available_write());
		self.write_slice_range(buf, 0, len)?;
		Ok(len)
	}

	#[inline(always)]
	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}
