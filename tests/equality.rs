/*! Equality, hashing, and aliasing are defined by storage contents alone.

Cursor positions never take part in a comparison, and two handles on one
allocation are always equal to each other.
!*/

use bitbuf::prelude::*;

use static_assertions::{
	assert_impl_all,
	assert_not_impl_any,
};

use std::collections::HashSet;

assert_not_impl_any!(BitBuf: Send, Sync, Clone);
assert_impl_all!(BitBuf: Default, Eq, std::hash::Hash, std::io::Read, std::io::Write);

#[test]
fn cursors_do_not_matter() {
	let mut a = bitbuf![0x10, 0x20];
	let mut b = BitBuf::with_capacity(2);
	b.write_u16(0x1020).unwrap();
	assert_eq!(a, b);

	a.read_u8().unwrap();
	b.set_writer_index(1).unwrap();
	assert_eq!(a, b);
	assert_eq!(a.content_hash(), b.content_hash());
}

#[test]
fn aliases_are_equal() {
	let mut a = BitBuf::with_capacity(3);
	let b = a.duplicate();
	a.write_char('é').unwrap();
	assert_eq!(a, b);
	assert_eq!(b.to_vec(), [0x00, 0xE9, 0x00]);

	let c = a.copy();
	a.write_u8(1).unwrap();
	assert_eq!(a, b);
	assert_ne!(a, c);
}

#[test]
fn hash_set_membership() {
	let mut set = HashSet::new();
	assert!(set.insert(bitbuf![1, 2, 3, 4, 5]));
	assert!(!set.insert(BitBuf::from(&[1u8, 2, 3, 4, 5][..])));
	assert!(set.insert(bitbuf![1, 2, 3, 4, 6]));
	assert_eq!(set.len(), 2);
}

#[test]
fn hash_is_fresh_after_mutation() {
	let mut buf = bitbuf![0; 8];
	let empty = buf.content_hash();
	buf.set_writer_index(0).unwrap().write_u64(0x0000_0001_0000_0001).unwrap();
	assert_eq!(empty, 0);
	//  The two words cancel out.
	assert_eq!(buf.content_hash(), 0);

	buf.set_writer_index(7).unwrap().write_u8(0xFF).unwrap();
	assert_eq!(buf.content_hash(), 0x0000_00FE);
}

#[test]
fn vec_conversions() {
	let buf = BitBuf::from(vec![9, 8, 7]);
	assert_eq!(buf.writer_index(), 3);
	assert_eq!(buf.available_read(), 3);
	let bytes: Vec<u8> = buf.into();
	assert_eq!(bytes, [9, 8, 7]);
}
