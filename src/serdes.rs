/*! `serde`-powered de/serialization

`BitBuf` serializes as a struct named `BitBuf`, holding its storage bytes and
both cursors:

| field          | type   |
|----------------|--------|
| `data`         | `[u8]` |
| `writer_index` | `u64`  |
| `writer_bit`   | `u8`   |
| `reader_index` | `u64`  |
| `reader_bit`   | `u8`   |

Deserialization rebuilds the buffer in fresh storage, and rejects cursors that
a live buffer could never hold.
!*/

#![cfg(feature = "serde")]

use crate::{
	access::ByteAccess,
	buf::{
		BitBuf,
		Slot,
	},
	cursor::Cursor,
	index::BitIdx,
};

use alloc::{
	borrow::Cow,
	vec::Vec,
};

use core::{
	convert::TryFrom,
	fmt::{
		self,
		Formatter,
	},
};

use serde::{
	de::{
		self,
		Deserializer,
		MapAccess,
		SeqAccess,
		Unexpected,
		Visitor,
	},
	ser::{
		SerializeStruct,
		Serializer,
	},
	Deserialize,
	Serialize,
};

const FIELDS: &[&str] = &[
	"data",
	"writer_index",
	"writer_bit",
	"reader_index",
	"reader_bit",
];

/// Serializes shared storage as a plain byte sequence.
struct Bytes<'a>(&'a [Slot]);

impl Serialize for Bytes<'_> {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where S: Serializer {
		serializer.collect_seq(self.0.iter().map(ByteAccess::load_value))
	}
}

impl Serialize for BitBuf {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where S: Serializer {
		let writer = self.writer();
		let reader = self.reader();
		let mut state = serializer.serialize_struct("BitBuf", FIELDS.len())?;

		state.serialize_field("data", &Bytes(self.slots()))?;
		state.serialize_field("writer_index", &(writer.index() as u64))?;
		state.serialize_field("writer_bit", &writer.bit().value())?;
		state.serialize_field("reader_index", &(reader.index() as u64))?;
		state.serialize_field("reader_bit", &reader.bit().value())?;

		state.end()
	}
}

impl<'de> Deserialize<'de> for BitBuf {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where D: Deserializer<'de> {
		deserializer.deserialize_struct("BitBuf", FIELDS, BitBufVisitor)
	}
}

/// A Serde visitor to pull `BitBuf` data out of a serialized stream.
#[derive(Clone, Copy, Debug, Default)]
struct BitBufVisitor;

impl BitBufVisitor {
	/// Rebuilds a cursor from its serialized halves.
	fn cursor<E>(self, index: u64, bit: u8) -> Result<Cursor, E>
	where E: de::Error {
		let index = usize::try_from(index).map_err(|_| {
			E::invalid_value(Unexpected::Unsigned(index), &"a byte index")
		})?;
		let bit = BitIdx::new(bit).map_err(|_| {
			E::invalid_value(
				Unexpected::Unsigned(bit as u64),
				&"a bit offset in 0 .. 8",
			)
		})?;
		Ok(Cursor::new(index, bit))
	}

	fn assemble<E>(
		self,
		data: Vec<u8>,
		writer: (u64, u8),
		reader: (u64, u8),
	) -> Result<BitBuf, E>
	where
		E: de::Error,
	{
		let writer = self.cursor(writer.0, writer.1)?;
		let reader = self.cursor(reader.0, reader.1)?;
		BitBuf::from_parts(data, writer, reader).map_err(E::custom)
	}
}

impl<'de> Visitor<'de> for BitBufVisitor {
	type Value = BitBuf;

	fn expecting(&self, fmt: &mut Formatter) -> fmt::Result {
		fmt.write_str("a BitBuf data series")
	}

	/// Visit a sequence of anonymous data elements. These must be in the order
	/// `[u8]`, `u64`, `u8`, `u64`, `u8`.
	fn visit_seq<V>(self, mut seq: V) -> Result<Self::Value, V::Error>
	where V: SeqAccess<'de> {
		let data: Vec<u8> = seq
			.next_element()?
			.ok_or_else(|| de::Error::invalid_length(0, &self))?;
		let writer_index: u64 = seq
			.next_element()?
			.ok_or_else(|| de::Error::invalid_length(1, &self))?;
		let writer_bit: u8 = seq
			.next_element()?
			.ok_or_else(|| de::Error::invalid_length(2, &self))?;
		let reader_index: u64 = seq
			.next_element()?
			.ok_or_else(|| de::Error::invalid_length(3, &self))?;
		let reader_bit: u8 = seq
			.next_element()?
			.ok_or_else(|| de::Error::invalid_length(4, &self))?;

		self.assemble(data, (writer_index, writer_bit), (reader_index, reader_bit))
	}

	/// Visit a map of named data elements. These may be in any order.
	fn visit_map<V>(self, mut map: V) -> Result<Self::Value, V::Error>
	where V: MapAccess<'de> {
		let mut data: Option<Vec<u8>> = None;
		let mut writer_index: Option<u64> = None;
		let mut writer_bit: Option<u8> = None;
		let mut reader_index: Option<u64> = None;
		let mut reader_bit: Option<u8> = None;

		while let Some(key) = map.next_key::<Cow<str>>()? {
			match &*key {
				"data" => {
					if data.replace(map.next_value()?).is_some() {
						return Err(de::Error::duplicate_field("data"));
					}
				},
				"writer_index" => {
					if writer_index.replace(map.next_value()?).is_some() {
						return Err(de::Error::duplicate_field("writer_index"));
					}
				},
				"writer_bit" => {
					if writer_bit.replace(map.next_value()?).is_some() {
						return Err(de::Error::duplicate_field("writer_bit"));
					}
				},
				"reader_index" => {
					if reader_index.replace(map.next_value()?).is_some() {
						return Err(de::Error::duplicate_field("reader_index"));
					}
				},
				"reader_bit" => {
					if reader_bit.replace(map.next_value()?).is_some() {
						return Err(de::Error::duplicate_field("reader_bit"));
					}
				},
				f => return Err(de::Error::unknown_field(f, FIELDS)),
			}
		}

		let data = data.ok_or_else(|| de::Error::missing_field("data"))?;
		let writer_index = writer_index
			.ok_or_else(|| de::Error::missing_field("writer_index"))?;
		let writer_bit =
			writer_bit.ok_or_else(|| de::Error::missing_field("writer_bit"))?;
		let reader_index = reader_index
			.ok_or_else(|| de::Error::missing_field("reader_index"))?;
		let reader_bit =
			reader_bit.ok_or_else(|| de::Error::missing_field("reader_bit"))?;

		self.assemble(data, (writer_index, writer_bit), (reader_index, reader_bit))
	}
}
