/* src/value/ser.rs */

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use super::{AttributeSet, AttributeValue};

impl Serialize for AttributeValue {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Self::Null => serializer.serialize_unit(),
			Self::Bool(v) => serializer.serialize_bool(*v),
			Self::Byte(v) => serializer.serialize_i8(*v),
			Self::Short(v) => serializer.serialize_i16(*v),
			Self::Int(v) => serializer.serialize_i32(*v),
			Self::Long(v) => serializer.serialize_i64(*v),
			Self::Float(v) => serializer.serialize_f32(*v),
			Self::Double(v) => serializer.serialize_f64(*v),
			Self::Char(v) => serializer.serialize_char(*v),
			Self::String(v) => serializer.serialize_str(v),
			Self::List(items) | Self::Array(items) => {
				let mut seq = serializer.serialize_seq(Some(items.len()))?;
				for item in items {
					seq.serialize_element(item)?;
				}
				seq.end()
			}
			Self::Set(set) => set.serialize(serializer),
			Self::Map(map) => {
				let mut out = serializer.serialize_map(Some(map.len()))?;
				for (key, value) in map {
					out.serialize_entry(key, value)?;
				}
				out.end()
			}
			// Opaque objects cross boundaries as their textual form.
			Self::Opaque(v) => serializer.collect_str(v),
		}
	}
}

impl Serialize for AttributeSet {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut seq = serializer.serialize_seq(Some(self.len()))?;
		for item in self {
			seq.serialize_element(item)?;
		}
		seq.end()
	}
}
