/*! Error reporting.

Every fallible operation in the crate reports one of the conditions below. All
of them are detected before storage or cursors are modified, so a caller that
receives an error can grow the buffer, reposition a cursor, or give up, and the
buffer is exactly as it was before the call.
!*/

use crate::{
	cursor::Cursor,
	index::BitIdxError,
};

use core::fmt::{
	self,
	Display,
	Formatter,
};

/// The crate’s result type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors produced by `BitBuf` operations.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Error {
	/// A writer position would pass the end of storage.
	CapacityExceeded {
		/// The rejected end position.
		at: Cursor,
		/// The storage length, in bytes.
		capacity: usize,
	},
	/// A reader position would pass the writer.
	ReadPastWriter {
		/// The rejected end position.
		at: Cursor,
		/// The writer position at the time of the call.
		writer: Cursor,
	},
	/// A `pos .. pos + len` region does not fit in a container of `size`
	/// elements.
	OutOfRange {
		/// Start of the region.
		pos: usize,
		/// Length of the region.
		len: usize,
		/// Length of the container.
		size: usize,
	},
	/// A span of `len` elements, each `width` bits wide, cannot be
	/// addressed from its starting cursor.
	InvalidLength {
		/// Number of elements requested.
		len: usize,
		/// Width of each element, in bits.
		width: usize,
	},
	/// A bit offset was outside `0 .. 8`.
	InvalidBitOffset(BitIdxError),
	/// A character does not fit in one UTF-16 code unit.
	CharOutOfRange(char),
	/// A UTF-16 code unit is a lone surrogate and cannot be a `char`.
	InvalidChar(u16),
}

impl From<BitIdxError> for Error {
	#[inline]
	fn from(err: BitIdxError) -> Self {
		Self::InvalidBitOffset(err)
	}
}

#[cfg(not(tarpaulin_include))]
impl Display for Error {
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		match *self {
			Self::CapacityExceeded { at, capacity } => write!(
				fmt,
				"position {} is out of capacity: {} bytes",
				at, capacity,
			),
			Self::ReadPastWriter { at, writer } => write!(
				fmt,
				"reader position {} is past the writer position {}",
				at, writer,
			),
			Self::OutOfRange { pos, len, size } => write!(
				fmt,
				"range {} + {} exceeds the container length {}",
				pos, len, size,
			),
			Self::InvalidLength { len, width } => write!(
				fmt,
				"length {} of {}-bit elements overflows the address space",
				len, width,
			),
			Self::InvalidBitOffset(err) => Display::fmt(&err, fmt),
			Self::CharOutOfRange(ch) => write!(
				fmt,
				"character {:?} (U+{:04X}) needs more than 16 bits",
				ch, ch as u32,
			),
			Self::InvalidChar(unit) => write!(
				fmt,
				"code unit 0x{:04X} is a surrogate, not a character",
				unit,
			),
		}
	}
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::InvalidBitOffset(err) => Some(err),
			_ => None,
		}
	}
}

#[cfg(feature = "std")]
impl From<Error> for std::io::Error {
	fn from(err: Error) -> Self {
		use std::io::ErrorKind;

		let kind = match err {
			Error::CapacityExceeded { .. } => ErrorKind::WriteZero,
			Error::ReadPastWriter { .. } => ErrorKind::UnexpectedEof,
			_ => ErrorKind::InvalidInput,
		};
		Self::new(kind, err)
	}
}
