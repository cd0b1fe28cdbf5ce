/*! `bitbuf` – a byte buffer with bit-precise cursors.

This crate provides [`BitBuf`], a fixed-capacity byte store that is written and
read as a bit stream. It keeps two independent cursors: a writer, which marks
how far the buffer has been filled, and a reader, which marks how far it has
been consumed. Both cursors address individual bits, so a one-bit flag may be
followed directly by a 32-bit integer that straddles five bytes.

Values are encoded in network order: multi-byte scalars are big-endian, and
within each byte the most significant bit comes first. A `bool` occupies one
bit; `u8` and `i8` occupy eight; `char` occupies sixteen (one UTF-16 code
unit); and so on up to `u64`, `i64`, and `f64`. There are no tags or length
prefixes, so the reader must know the sequence of fields it expects.

```rust
use bitbuf::prelude::*;

let mut buf = BitBuf::with_capacity(5);
buf.write_bool(true).unwrap();
buf.write_i32(-2).unwrap();
assert_eq!(buf.writer_index(), 4);
assert_eq!(buf.writer_bit_offset(), 1);

assert!(buf.read_bool().unwrap());
assert_eq!(buf.read_i32().unwrap(), -2);
```

Storage never grows on its own. A write that would run past the end, or a read
that would run past the writer, is refused with an [`Error`] and leaves the
buffer untouched; call [`BitBuf::resize`] to make room.

Buffers can share storage through [`BitBuf::duplicate`]. The handles see each
other’s writes, but keep separate cursors. Shared storage is built from
`Cell<u8>`, so `BitBuf` is restricted to a single thread.

# Features

- `std` (default): implements `std::io::Read` and `std::io::Write` for
  `BitBuf`, and `std::error::Error` for the error types. Without it, the crate
  is `#![no_std]` and requires only `alloc`.
- `serde`: implements `Serialize` and `Deserialize` for `BitBuf`.

[`BitBuf`]: crate::buf::BitBuf
[`BitBuf::duplicate`]: crate::buf::BitBuf::duplicate
[`BitBuf::resize`]: crate::buf::BitBuf::resize
[`Error`]: crate::error::Error
!*/

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(debug_assertions, warn(missing_docs))]
#![cfg_attr(not(debug_assertions), deny(missing_docs))]

extern crate alloc;

#[macro_use]
mod macros;

pub mod access;
pub mod buf;
mod codec;
pub mod cursor;
pub mod error;
pub mod index;
pub mod prelude;
pub mod scalar;

#[cfg(feature = "serde")]
mod serdes;

#[doc(hidden)]
pub mod __private {
	pub use alloc::vec;
}

pub use self::{
	buf::BitBuf,
	error::{
		Error,
		Result,
	},
};
