/*! General trait implementations for `BitBuf`.

Equality and hashing consider only the bytes of storage. Two buffers with the
same bytes are equal no matter where their cursors are, and whether or not they
share an allocation.
!*/

use super::BitBuf;

use crate::access::ByteAccess;

use alloc::vec::Vec;

use core::{
	fmt::{
		self,
		Debug,
		Formatter,
	},
	hash::{
		Hash,
		Hasher,
	},
};

use wyz::fmt::FmtForward;

impl Default for BitBuf {
	#[inline]
	fn default() -> Self {
		Self::new()
	}
}

impl Eq for BitBuf {
}

impl PartialEq for BitBuf {
	fn eq(&self, other: &Self) -> bool {
		if self.is_alias_of(other) {
			return true;
		}
		self.capacity() == other.capacity()
			&& self
				.slots()
				.iter()
				.zip(other.slots())
				.all(|(a, b)| a.load_value() == b.load_value())
	}
}

impl PartialEq<[u8]> for BitBuf {
	fn eq(&self, other: &[u8]) -> bool {
		self.capacity() == other.len()
			&& self
				.slots()
				.iter()
				.zip(other)
				.all(|(a, &b)| a.load_value() == b)
	}
}

impl PartialEq<BitBuf> for [u8] {
	#[inline]
	fn eq(&self, other: &BitBuf) -> bool {
		other == self
	}
}

/// Feeds the content hash, so that `Hash` agrees with `Eq`.
impl Hash for BitBuf {
	#[inline]
	fn hash<H>(&self, hasher: &mut H)
	where H: Hasher {
		hasher.write_u32(self.content_hash());
	}
}

#[cfg(not(tarpaulin_include))]
impl Debug for BitBuf {
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		fmt.debug_struct("BitBuf")
			.field("capacity", &self.capacity())
			.field("writer", &self.writer)
			.field("reader", &self.reader)
			.field(
				"data",
				&self
					.slots()
					.iter()
					.map(|slot| slot.load_value().fmt_upper_hex())
					.collect::<Vec<_>>(),
			)
			.finish()
	}
}

impl From<Vec<u8>> for BitBuf {
	/// Takes the bytes as storage. The writer is placed after the last byte.
	#[inline]
	fn from(bytes: Vec<u8>) -> Self {
		Self::from_vec(bytes)
	}
}

impl From<&[u8]> for BitBuf {
	/// Copies the bytes into storage. The writer is placed after the last
	/// byte.
	#[inline]
	fn from(bytes: &[u8]) -> Self {
		Self::from_vec(bytes.to_vec())
	}
}

impl From<BitBuf> for Vec<u8> {
	#[inline]
	fn from(buf: BitBuf) -> Self {
		buf.to_vec()
	}
}
