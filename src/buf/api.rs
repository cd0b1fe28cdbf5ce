//! Scalar read and write.

use super::BitBuf;

use crate::{
	error::Result,
	scalar::Scalar,
};

impl BitBuf {
	/// Writes one scalar at the writer, and advances the writer by its width.
	///
	/// # Errors
	///
	/// - `CapacityExceeded` if the value does not fit before the end of
	///   storage.
	/// - `CharOutOfRange` for a `char` above U+FFFF.
	///
	/// On error, neither storage nor the writer changes.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitbuf::prelude::*;
	///
	/// let mut buf = BitBuf::with_capacity(2);
	/// buf.set_writer_bit_offset(4).unwrap();
	/// buf.write(0xFFu8).unwrap();
	/// assert_eq!(buf.to_vec(), [0x0F, 0xF0]);
	/// ```
	pub fn write<T>(&mut self, value: T) -> Result<&mut Self>
	where T: Scalar {
		let end = Self::span_end::<T>(self.writer, 1)?;
		self.check_writer(end)?;
		value.check()?;
		value.store(self.slots(), self.writer);
		self.writer = end;
		Ok(self)
	}

	/// Reads one scalar at the reader, and advances the reader by its width.
	///
	/// # Errors
	///
	/// - `ReadPastWriter` if the value extends past the writer.
	/// - `InvalidChar` for a `char` whose code unit is a lone surrogate.
	///
	/// On error, the reader does not move.
	pub fn read<T>(&mut self) -> Result<T>
	where T: Scalar {
		let end = Self::span_end::<T>(self.reader, 1)?;
		self.check_reader(end)?;
		let value = T::load(self.slots(), self.reader)?;
		self.reader = end;
		Ok(value)
	}
}

macro_rules! scalars {
	($($t:ty => $write:ident, $read:ident;)+) => {
		impl BitBuf { $(
			#[doc = concat!("Writes one `", stringify!($t), "` at the writer.")]
			///
			/// See [`write`](Self::write).
			#[inline]
			pub fn $write(&mut self, value: $t) -> Result<&mut Self> {
				self.write(value)
			}

			#[doc = concat!("Reads one `", stringify!($t), "` at the reader.")]
			///
			/// See [`read`](Self::read).
			#[inline]
			pub fn $read(&mut self) -> Result<$t> {
				self.read()
			}
		)+ }
	};
}

scalars! {
	bool => write_bool, read_bool;
	u8 => write_u8, read_u8;
	i8 => write_i8, read_i8;
	u16 => write_u16, read_u16;
	i16 => write_i16, read_i16;
	char => write_char, read_char;
	u32 => write_u32, read_u32;
	i32 => write_i32, read_i32;
	u64 => write_u64, read_u64;
	i64 => write_i64, read_i64;
	f32 => write_f32, read_f32;
	f64 => write_f64, read_f64;
}
