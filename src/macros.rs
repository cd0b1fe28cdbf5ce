//! Constructor macros for the crate’s buffer type.

/** Constructs a new [`BitBuf`] from a byte-pattern description.

This macro takes the [`vec!`] argument syntax: it may be invoked with either a
sequence of byte expressions, or a single byte expression and a repetition
counter. The bytes become the buffer’s storage, and the writer is placed after
the last of them, so every byte is immediately readable.

Invoked with `cap = n`, it instead allocates `n` zeroed bytes with both cursors
at the origin, like [`BitBuf::with_capacity`].

# Examples

```rust
use bitbuf::prelude::*;

let a = bitbuf![0x01, 0x02, 0x03, 0x04];
assert_eq!(a.available_read(), 4);

let b = bitbuf![0xFF; 3];
assert_eq!(b.to_vec(), [0xFF; 3]);

let c = bitbuf![cap = 8];
assert_eq!(c.capacity(), 8);
assert_eq!(c.available_read(), 0);

let d = bitbuf![];
assert_eq!(d.capacity(), 0);
```

[`BitBuf`]: crate::buf::BitBuf
[`BitBuf::with_capacity`]: crate::buf::BitBuf::with_capacity
[`vec!`]: macro@alloc::vec
**/
#[macro_export]
macro_rules! bitbuf {
	() => {
		$crate::buf::BitBuf::new()
	};

	(cap = $cap:expr) => {
		$crate::buf::BitBuf::with_capacity($cap)
	};

	($byte:expr; $rep:expr) => {
		$crate::buf::BitBuf::from(
			$crate::__private::vec![$byte as u8; $rep]
		)
	};

	($($byte:expr),+ $(,)?) => {
		$crate::buf::BitBuf::from(
			$crate::__private::vec![$($byte as u8),+]
		)
	};
}
