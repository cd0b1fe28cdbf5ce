/*! Bit-precise byte codec.

These functions move big-endian byte strings and single bits between registers
and storage at an arbitrary cursor. They perform no bounds checking: the buffer
validates the whole span of an operation before calling in, so that a failure
never leaves storage half-written.

# Aligned and shifted paths

When the cursor is byte-aligned, bytes move directly. Otherwise each incoming
byte straddles two storage bytes. With an offset `o` in `1 .. 8`:

- the first storage byte keeps its high `o` bits (the tail mask) and receives
  the top `8 - o` bits of the first value byte;
- each interior storage byte is wholly overwritten by the low `o` bits of one
  value byte joined with the high `8 - o` bits of the next;
- the last storage byte keeps its low `8 - o` bits (the head mask) and receives
  the bottom `o` bits of the last value byte.

Loads are the mirror image, and never write.
!*/

use crate::{
	access::ByteAccess,
	cursor::Cursor,
	index::BITS,
};

/// Writes one bit at `at`.
#[inline]
pub(crate) fn store_bit<R>(mem: &[R], at: Cursor, value: bool)
where R: ByteAccess {
	mem[at.index()].write_bit(at.bit(), value);
}

/// Reads one bit at `at`.
#[inline]
pub(crate) fn load_bit<R>(mem: &[R], at: Cursor) -> bool
where R: ByteAccess {
	mem[at.index()].read_bit(at.bit())
}

/// Writes a big-endian byte string starting at `at`.
///
/// # Parameters
///
/// - `mem`: Storage. It must contain every byte touched by the region
///   `at .. at + 8 * bytes.len()`.
/// - `at`: The first bit to write.
/// - `bytes`: The value, most significant byte first.
pub(crate) fn store_be<R>(mem: &[R], at: Cursor, bytes: &[u8])
where R: ByteAccess {
	let base = at.index();
	let head = at.bit();

	if head.is_aligned() {
		for (slot, byte) in mem[base ..].iter().zip(bytes.iter().copied()) {
			slot.store_value(byte);
		}
		return;
	}

	let (first, last) = match (bytes.first(), bytes.last()) {
		(Some(&first), Some(&last)) => (first, last),
		_ => return,
	};
	let shl = head.value() as u32;
	let shr = BITS as u32 - shl;

	mem[base].splice(head.tail_mask(), first >> shl);
	for (slot, pair) in mem[base + 1 ..].iter().zip(bytes.windows(2)) {
		slot.store_value((pair[0] << shr) | (pair[1] >> shl));
	}
	mem[base + bytes.len()].splice(head.head_mask(), last << shr);
}

/// Reads a big-endian byte string starting at `at` into `out`.
///
/// # Parameters
///
/// - `mem`: Storage. It must contain every byte touched by the region
///   `at .. at + 8 * out.len()`.
/// - `at`: The first bit to read.
/// - `out`: Destination for the value, most significant byte first.
pub(crate) fn load_be<R>(mem: &[R], at: Cursor, out: &mut [u8])
where R: ByteAccess {
	let base = at.index();
	let head = at.bit();

	if head.is_aligned() {
		for (slot, byte) in mem[base ..].iter().zip(out.iter_mut()) {
			*byte = slot.load_value();
		}
		return;
	}
	if out.is_empty() {
		return;
	}

	let shl = head.value() as u32;
	let shr = BITS as u32 - shl;
	let mut next = mem[base].load_value();
	for (slots, byte) in mem[base + 1 ..].iter().zip(out.iter_mut()) {
		let this = next;
		next = slots.load_value();
		*byte = (this << shl) | (next >> shr);
	}
}
