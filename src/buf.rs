/*! A byte buffer with bit-precise reader and writer cursors.

`BitBuf` owns (or shares, see [`BitBuf::duplicate`]) a fixed-length run of
bytes, and keeps two independent cursors into it. Writes advance the writer;
reads advance the reader; the reader can never pass the writer. Either cursor
may sit in the middle of a byte, and every scalar type is encoded at whatever
bit the cursor points to.

The storage length only changes when [`BitBuf::resize`] is called. Running out
of room is an error, never an implicit reallocation.
!*/

use crate::{
	access::ByteAccess,
	cursor::Cursor,
	error::{
		Error,
		Result,
	},
	index::BitIdx,
	scalar::Scalar,
};

use alloc::{
	rc::Rc,
	vec::Vec,
};

use core::{
	cell::Cell,
	iter,
	ops::Range,
};

use tap::{
	Pipe,
	Tap,
};

mod api;
mod bulk;
mod random;
mod traits;

#[cfg(feature = "std")]
mod io;


/// The storage element. All access goes through `ByteAccess`.
pub(crate) type Slot = Cell<u8>;

/** A growable byte store with independent bit-level reader and writer cursors.

# Wire format

All multi-byte scalars are big-endian. Within a byte, bits are filled from the
most significant to the least significant. There are no length prefixes or
type tags; the caller must know the sequence of fields to decode them.

# Cursors

Both cursors are [`Cursor`] values: a byte index plus a bit offset in
`0 .. 8`. The writer may not move past the end of storage, and the reader may
not move past the writer.

# Aliasing

[`duplicate`] returns a second `BitBuf` that shares this buffer’s storage but
has its own cursors. Writes through either handle are visible through the
other. Because storage is built from `Cell<u8>`, `BitBuf` is neither `Send` nor
`Sync`, and shared storage cannot be touched from two threads.

# Errors

Every operation validates its entire footprint before it modifies storage or
moves a cursor. A failed call leaves the buffer unchanged.

[`duplicate`]: Self::duplicate
**/
pub struct BitBuf {
	/// Shared-mutable storage. Its length is the capacity.
	mem: Rc<[Slot]>,
	/// The next bit to be written.
	writer: Cursor,
	/// The next bit to be read.
	reader: Cursor,
}

/// Storage & Capacity
impl BitBuf {
	/// Constructs a new, empty, `BitBuf`.
	///
	/// The buffer has capacity zero, and every write fails until it is
	/// resized.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitbuf::prelude::*;
	///
	/// let buf = BitBuf::new();
	/// assert_eq!(buf.capacity(), 0);
	/// assert_eq!(buf.available_write(), 0);
	/// ```
	#[inline]
	pub fn new() -> Self {
		Self::with_capacity(0)
	}

	/// Constructs a zero-filled `BitBuf` of `capacity` bytes.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitbuf::prelude::*;
	///
	/// let buf = BitBuf::with_capacity(4);
	/// assert_eq!(buf.capacity(), 4);
	/// assert_eq!(buf.to_vec(), [0; 4]);
	/// ```
	pub fn with_capacity(capacity: usize) -> Self {
		iter::repeat_with(Slot::default)
			.take(capacity)
			.collect::<Rc<[Slot]>>()
			.pipe(Self::from_storage)
	}

	/// Wraps storage with both cursors at the origin.
	#[inline]
	pub(crate) fn from_storage(mem: Rc<[Slot]>) -> Self {
		Self {
			mem,
			writer: Cursor::ZERO,
			reader: Cursor::ZERO,
		}
	}

	/// Wraps a byte vector. The writer is placed after the last byte, so all
	/// of `bytes` is readable.
	pub(crate) fn from_vec(bytes: Vec<u8>) -> Self {
		let len = bytes.len();
		bytes
			.into_iter()
			.map(Slot::new)
			.collect::<Rc<[Slot]>>()
			.pipe(Self::from_storage)
			.tap_mut(|buf| buf.writer = Cursor::ZERO.with_index(len))
	}

	/// Reassembles a buffer from its storage bytes and cursors.
	///
	/// # Errors
	///
	/// - `CapacityExceeded` if `writer` does not fit in `bytes`.
	/// - `ReadPastWriter` if `reader` is after `writer`.
	pub fn from_parts(
		bytes: Vec<u8>,
		writer: Cursor,
		reader: Cursor,
	) -> Result<Self> {
		let mut buf = Self::from_vec(bytes);
		buf.check_writer(writer)?;
		buf.writer = writer;
		buf.check_reader(reader)?;
		buf.reader = reader;
		Ok(buf)
	}

	/// Splits a buffer into a copy of its storage bytes and its cursors.
	#[inline]
	pub fn into_parts(self) -> (Vec<u8>, Cursor, Cursor) {
		(self.to_vec(), self.writer, self.reader)
	}

	/// The number of bytes of storage.
	#[inline]
	pub fn capacity(&self) -> usize {
		self.mem.len()
	}

	/// Reallocates storage to `capacity` bytes.
	///
	/// The first `min(capacity, self.capacity())` bytes are copied; bytes
	/// beyond the old end are zero. Cursors are not moved, so a cursor past a
	/// shrunken end causes the next operation on it to fail.
	///
	/// The new storage is a fresh allocation: any handle produced by
	/// [`duplicate`] before the call keeps the old storage.
	///
	/// [`duplicate`]: Self::duplicate
	pub fn resize(&mut self, capacity: usize) -> &mut Self {
		let old = self.capacity();
		if capacity != old {
			log::trace!("resizing bit buffer from {} to {} bytes", old, capacity);
			self.mem = self
				.mem
				.iter()
				.map(|slot| Slot::new(slot.load_value()))
				.chain(iter::repeat_with(Slot::default))
				.take(capacity)
				.collect();
		}
		self
	}

	/// Copies the storage out into a vector. Cursors are ignored.
	pub fn to_vec(&self) -> Vec<u8> {
		self.mem.iter().map(ByteAccess::load_value).collect()
	}

	/// Views storage for the codec and the other `buf` submodules.
	#[inline]
	pub(crate) fn slots(&self) -> &[Slot] {
		&self.mem
	}

	/// Tests whether `self` and `other` share one allocation.
	#[inline]
	pub fn is_alias_of(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.mem, &other.mem)
	}
}

/// Cursor Arithmetic
impl BitBuf {
	/// The writer position.
	#[inline]
	pub fn writer(&self) -> Cursor {
		self.writer
	}

	/// The reader position.
	#[inline]
	pub fn reader(&self) -> Cursor {
		self.reader
	}

	/// The byte index of the writer.
	#[inline]
	pub fn writer_index(&self) -> usize {
		self.writer.index()
	}

	/// The bit offset of the writer within its byte.
	#[inline]
	pub fn writer_bit_offset(&self) -> u8 {
		self.writer.bit().value()
	}

	/// The byte index of the reader.
	#[inline]
	pub fn reader_index(&self) -> usize {
		self.reader.index()
	}

	/// The bit offset of the reader within its byte.
	#[inline]
	pub fn reader_bit_offset(&self) -> u8 {
		self.reader.bit().value()
	}

	/// Moves the writer to byte `index`, keeping its bit offset.
	///
	/// # Errors
	///
	/// `CapacityExceeded` if the new position does not fit in storage.
	pub fn set_writer_index(&mut self, index: usize) -> Result<&mut Self> {
		let at = self.writer.with_index(index);
		self.check_writer(at)?;
		self.writer = at;
		Ok(self)
	}

	/// Moves the writer to bit `offset` of its current byte.
	///
	/// # Errors
	///
	/// - `InvalidBitOffset` if `offset` is not in `0 .. 8`.
	/// - `CapacityExceeded` if the new position does not fit in storage.
	pub fn set_writer_bit_offset(&mut self, offset: u8) -> Result<&mut Self> {
		let at = self.writer.with_bit(BitIdx::new(offset)?);
		self.check_writer(at)?;
		self.writer = at;
		Ok(self)
	}

	/// Moves the reader to byte `index`, keeping its bit offset.
	///
	/// # Errors
	///
	/// `ReadPastWriter` if the new position is after the writer.
	pub fn set_reader_index(&mut self, index: usize) -> Result<&mut Self> {
		let at = self.reader.with_index(index);
		self.check_reader(at)?;
		self.reader = at;
		Ok(self)
	}

	/// Moves the reader to bit `offset` of its current byte.
	///
	/// # Errors
	///
	/// - `InvalidBitOffset` if `offset` is not in `0 .. 8`.
	/// - `ReadPastWriter` if the new position is after the writer.
	pub fn set_reader_bit_offset(&mut self, offset: u8) -> Result<&mut Self> {
		let at = self.reader.with_bit(BitIdx::new(offset)?);
		self.check_reader(at)?;
		self.reader = at;
		Ok(self)
	}

	/// Counts the whole bytes that can still be written.
	///
	/// A partially written byte under the writer does not count.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitbuf::prelude::*;
	///
	/// let mut buf = BitBuf::with_capacity(3);
	/// buf.write_bool(true).unwrap();
	/// assert_eq!(buf.available_write(), 2);
	/// ```
	#[inline]
	pub fn available_write(&self) -> usize {
		self.capacity()
			.saturating_sub(self.writer.index())
			.saturating_sub(!self.writer.bit().is_aligned() as usize)
	}

	/// Counts the whole bytes between the reader and the writer.
	///
	/// When the writer’s bit offset is below the reader’s, one byte is
	/// borrowed; a trailing partial byte is not counted.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitbuf::prelude::*;
	///
	/// let mut buf = BitBuf::with_capacity(4);
	/// buf.write_i32(0x0102_0304).unwrap();
	/// assert_eq!(buf.available_read(), 4);
	/// assert_eq!(buf.read_i32().unwrap(), 0x0102_0304);
	/// assert_eq!(buf.available_read(), 0);
	/// ```
	#[inline]
	pub fn available_read(&self) -> usize {
		self.reader.bytes_until(self.writer)
	}

	/// Requires that a region ending at `at` fits in storage.
	pub(crate) fn check_writer(&self, at: Cursor) -> Result<()> {
		let capacity = self.capacity();
		match at.bytes_needed() {
			Some(needed) if needed <= capacity => Ok(()),
			_ => Err(Error::CapacityExceeded { at, capacity }),
		}
	}

	/// Requires that a region ending at `at` has been written.
	pub(crate) fn check_reader(&self, at: Cursor) -> Result<()> {
		if at > self.writer {
			return Err(Error::ReadPastWriter {
				at,
				writer: self.writer,
			});
		}
		//  The writer itself may lie past a shrunken storage.
		self.check_writer(at)
	}

	/// Requires that `pos .. pos + len` fits in a container of `size`
	/// elements.
	pub(crate) fn check_array(size: usize, pos: usize, len: usize) -> Result<()> {
		match pos.checked_add(len) {
			Some(end) if end <= size => Ok(()),
			_ => Err(Error::OutOfRange { pos, len, size }),
		}
	}

	/// Finds the end of `len` elements of `T` laid out from `at`.
	///
	/// An overflow is reported as `len` elements of `T::BITS` bits, whether
	/// it happens in the bit span or in the cursor.
	pub(crate) fn span_end<T>(at: Cursor, len: usize) -> Result<Cursor>
	where T: Scalar {
		len.checked_mul(T::BITS)
			.and_then(|bits| at.advance(bits).ok())
			.ok_or(Error::InvalidLength {
				len,
				width: T::BITS,
			})
	}
}

/// Derivation
impl BitBuf {
	/// Creates an independent copy of all storage.
	///
	/// The copy has both cursors at zero.
	#[inline]
	pub fn copy(&self) -> Self {
		Self::from_storage(self.copy_slots(0 .. self.capacity()))
	}

	/// Creates an independent buffer holding `len` bytes starting at `pos`.
	///
	/// The copy has both cursors at zero, and capacity `len`.
	///
	/// # Errors
	///
	/// `OutOfRange` if `pos + len` exceeds the capacity.
	pub fn copy_range(&self, pos: usize, len: usize) -> Result<Self> {
		Self::check_array(self.capacity(), pos, len)?;
		log::trace!("copying {} bytes from offset {} into a new buffer", len, pos);
		self.copy_slots(pos .. pos + len)
			.pipe(Self::from_storage)
			.pipe(Ok)
	}

	fn copy_slots(&self, range: Range<usize>) -> Rc<[Slot]> {
		self.mem[range]
			.iter()
			.map(|slot| Slot::new(slot.load_value()))
			.collect()
	}

	/// Creates a second handle to this buffer’s storage.
	///
	/// The handle starts with both cursors at zero, and moves them
	/// independently. Writes through either handle are visible through both,
	/// until one of them is [`resize`]d.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitbuf::prelude::*;
	///
	/// let mut a = BitBuf::with_capacity(1);
	/// let b = a.duplicate();
	/// a.write_u8(0x5A).unwrap();
	/// assert_eq!(b.get_unsigned_byte(0).unwrap(), 0x5A);
	/// ```
	///
	/// [`resize`]: Self::resize
	pub fn duplicate(&self) -> Self {
		log::trace!(
			"duplicating a bit buffer of {} bytes ({} handles)",
			self.capacity(),
			Rc::strong_count(&self.mem) + 1,
		);
		Self::from_storage(self.mem.clone())
	}

	/// Resets both cursors to zero and zero-fills storage in place.
	///
	/// The capacity is unchanged. Handles that share this storage observe
	/// the zeroed bytes, but keep their own cursors.
	pub fn clear(&mut self) -> &mut Self {
		log::trace!("clearing a bit buffer of {} bytes", self.capacity());
		self.writer = Cursor::ZERO;
		self.reader = Cursor::ZERO;
		for slot in self.mem.iter() {
			slot.store_value(0);
		}
		self
	}

	/// Folds storage into a 32-bit content hash.
	///
	/// Storage is read as big-endian 32-bit words and XORed together. A final
	/// group of one to three bytes is placed in the high end of a word. The
	/// hash depends only on the bytes, never on the cursors, and is computed
	/// fresh on every call.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitbuf::prelude::*;
	///
	/// let buf = bitbuf![0x01, 0x02, 0x03, 0x04, 0xAA];
	/// assert_eq!(buf.content_hash(), 0x0102_0304 ^ 0xAA00_0000);
	/// ```
	pub fn content_hash(&self) -> u32 {
		self.mem.chunks(4).fold(0, |hash, word| {
			let mut bytes = [0u8; 4];
			for (byte, slot) in bytes.iter_mut().zip(word) {
				*byte = slot.load_value();
			}
			hash ^ u32::from_be_bytes(bytes)
		})
	}
}
