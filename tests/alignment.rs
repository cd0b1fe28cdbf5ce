/*! Every scalar must survive a trip through storage at every bit offset.

The values are random, but the surrounding bits are fixed, so that a codec
which clobbers its neighbors is caught as well as one that garbles the value.
!*/

use bitbuf::prelude::*;

use rand::{
	rngs::StdRng,
	Rng,
	SeedableRng,
};

fn at_every_offset<T>(rng: &mut StdRng, mut next: impl FnMut(&mut StdRng) -> T)
where T: Scalar + PartialEq + core::fmt::Debug {
	for offset in 0 .. 8 {
		let value = next(rng);
		let mut buf = BitBuf::with_capacity(10);
		buf.set_writer_bit_offset(offset).unwrap();
		buf.set_reader_bit_offset(offset).unwrap();
		buf.write(value).unwrap();
		buf.write_bool(true).unwrap();

		assert_eq!(buf.read::<T>().unwrap(), value, "offset {}", offset);
		assert!(buf.read_bool().unwrap(), "offset {}", offset);
		assert_eq!(buf.reader(), buf.writer());
		//  Bits before the start offset were never touched.
		assert_eq!(
			buf.get_unsigned_byte(0).unwrap() & !(!0u8 >> offset),
			0,
			"offset {}",
			offset,
		);
	}
}

#[test]
fn integers() {
	let mut rng = StdRng::seed_from_u64(0x5EED);
	for _ in 0 .. 64 {
		at_every_offset(&mut rng, |r| r.gen::<u8>());
		at_every_offset(&mut rng, |r| r.gen::<i8>());
		at_every_offset(&mut rng, |r| r.gen::<u16>());
		at_every_offset(&mut rng, |r| r.gen::<i16>());
		at_every_offset(&mut rng, |r| r.gen::<u32>());
		at_every_offset(&mut rng, |r| r.gen::<i32>());
		at_every_offset(&mut rng, |r| r.gen::<u64>());
		at_every_offset(&mut rng, |r| r.gen::<i64>());
		at_every_offset(&mut rng, |r| r.gen::<bool>());
	}
}

#[test]
fn floats_keep_their_bits() {
	let mut rng = StdRng::seed_from_u64(0xF10A7);
	for _ in 0 .. 64 {
		for offset in 0 .. 8 {
			let single = rng.gen::<u32>();
			let double = rng.gen::<u64>();
			let mut buf = BitBuf::with_capacity(13);
			buf.set_writer_bit_offset(offset).unwrap();
			buf.set_reader_bit_offset(offset).unwrap();
			buf.write_f32(f32::from_bits(single))
				.unwrap()
				.write_f64(f64::from_bits(double))
				.unwrap();
			//  Random patterns include NaNs, so compare the raw bits.
			assert_eq!(buf.read_f32().unwrap().to_bits(), single);
			assert_eq!(buf.read_f64().unwrap().to_bits(), double);
		}
	}
}

#[test]
fn basic_plane_chars() {
	let mut rng = StdRng::seed_from_u64(0xC4A2);
	for _ in 0 .. 64 {
		at_every_offset(&mut rng, |r| loop {
			if let Some(ch) = char::from_u32(r.gen_range(0 .. 0x1_0000)) {
				break ch;
			}
		});
	}
}

#[test]
fn bulk_at_every_offset() {
	let mut rng = StdRng::seed_from_u64(0xB01C);
	for offset in 0 .. 8 {
		let values = (0 .. 16).map(|_| rng.gen::<i16>()).collect::<Vec<_>>();
		let mut buf = BitBuf::with_capacity(33);
		buf.set_writer_bit_offset(offset).unwrap();
		buf.set_reader_bit_offset(offset).unwrap();
		buf.write_slice(&values).unwrap();

		let mut copy = BitBuf::with_capacity(33);
		copy.set_writer_bit_offset(7 - offset).unwrap();
		copy.set_reader_bit_offset(7 - offset).unwrap();
		copy.write_buf::<i16>(&mut buf, values.len()).unwrap();
		assert_eq!(copy.read_vec::<i16>(values.len()).unwrap(), values);
	}
}
