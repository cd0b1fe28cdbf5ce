/*! Primitive values with a fixed wire representation.

The `Scalar` trait describes every value that `BitBuf` can write and read as a
unit. Each implementor has a fixed bit width and a fixed big-endian encoding:

| type           | bits | encoding                                 |
|----------------|-----:|------------------------------------------|
| `bool`         |    1 | one bit, set for `true`                  |
| `u8`, `i8`     |    8 | two’s complement                         |
| `u16`, `i16`   |   16 | big-endian two’s complement              |
| `char`         |   16 | one UTF-16 code unit, as `u16`           |
| `u32`, `i32`   |   32 | big-endian two’s complement              |
| `f32`          |   32 | raw IEEE-754 bits, as `u32`              |
| `u64`, `i64`   |   64 | big-endian two’s complement              |
| `f64`          |   64 | raw IEEE-754 bits, as `u64`              |

Floating-point values are never canonicalized; every NaN payload survives a
write and a read.

This trait is sealed, and cannot be implemented outside this crate.
!*/

use crate::{
	access::ByteAccess,
	codec,
	cursor::Cursor,
	error::{
		Error,
		Result,
	},
};

use core::{
	convert::TryFrom,
	mem::size_of,
};

use funty::Fundamental;

/** A primitive that `BitBuf` can encode at any bit position.

The storage methods are implementation details of the buffer: they assume the
buffer has already validated the whole region they touch.
**/
pub trait Scalar: Fundamental + seal::Sealed {
	/// Width of the wire representation, in bits.
	const BITS: usize;

	/// Rejects values that have no wire representation.
	///
	/// Bulk writes call this on every element before storing any of them.
	#[doc(hidden)]
	#[inline]
	fn check(self) -> Result<()> {
		Ok(())
	}

	/// Encodes `self` into storage at `at`.
	#[doc(hidden)]
	fn store<R>(self, mem: &[R], at: Cursor)
	where R: ByteAccess;

	/// Decodes a value from storage at `at`.
	#[doc(hidden)]
	fn load<R>(mem: &[R], at: Cursor) -> Result<Self>
	where R: ByteAccess;
}

impl Scalar for bool {
	const BITS: usize = 1;

	#[inline]
	fn store<R>(self, mem: &[R], at: Cursor)
	where R: ByteAccess {
		codec::store_bit(mem, at, self);
	}

	#[inline]
	fn load<R>(mem: &[R], at: Cursor) -> Result<Self>
	where R: ByteAccess {
		Ok(codec::load_bit(mem, at))
	}
}

macro_rules! integer {
	($($t:ty),+ $(,)?) => { $(
		impl Scalar for $t {
			const BITS: usize = size_of::<$t>() * 8;

			#[inline]
			fn store<R>(self, mem: &[R], at: Cursor)
			where R: ByteAccess {
				codec::store_be(mem, at, &self.to_be_bytes());
			}

			#[inline]
			fn load<R>(mem: &[R], at: Cursor) -> Result<Self>
			where R: ByteAccess {
				let mut bytes = [0u8; size_of::<$t>()];
				codec::load_be(mem, at, &mut bytes);
				Ok(<$t>::from_be_bytes(bytes))
			}
		}
	)+ };
}

integer!(u8, i8, u16, i16, u32, i32, u64, i64);

macro_rules! float {
	($($t:ty => $bits:ty),+ $(,)?) => { $(
		impl Scalar for $t {
			const BITS: usize = <$bits as Scalar>::BITS;

			#[inline]
			fn store<R>(self, mem: &[R], at: Cursor)
			where R: ByteAccess {
				self.to_bits().store(mem, at);
			}

			#[inline]
			fn load<R>(mem: &[R], at: Cursor) -> Result<Self>
			where R: ByteAccess {
				<$bits>::load(mem, at).map(<$t>::from_bits)
			}
		}
	)+ };
}

float!(f32 => u32, f64 => u64);

impl Scalar for char {
	const BITS: usize = <u16 as Scalar>::BITS;

	#[inline]
	fn check(self) -> Result<()> {
		u16::try_from(self as u32)
			.map(drop)
			.map_err(|_| Error::CharOutOfRange(self))
	}

	#[inline]
	fn store<R>(self, mem: &[R], at: Cursor)
	where R: ByteAccess {
		(self as u32 as u16).store(mem, at);
	}

	#[inline]
	fn load<R>(mem: &[R], at: Cursor) -> Result<Self>
	where R: ByteAccess {
		let unit = u16::load(mem, at)?;
		char::from_u32(unit as u32).ok_or(Error::InvalidChar(unit))
	}
}

#[doc(hidden)]
mod seal {
	#[doc(hidden)]
	pub trait Sealed {}

	macro_rules! seal {
		($($t:ty),+ $(,)?) => { $(
			impl Sealed for $t {}
		)+ };
	}

	seal!(bool, u8, i8, u16, i16, char, u32, i32, f32, u64, i64, f64);
}
