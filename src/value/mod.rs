/* src/value/mod.rs */

//!
//! The closed set of value kinds an attribute can hold.

mod list;
mod opaque;
#[cfg(feature = "serde")]
mod ser;
mod set;

pub use list::ListView;
pub use opaque::{Opaque, OpaqueValue};
pub use set::AttributeSet;

use std::collections::BTreeMap;
use std::fmt;

/// A dynamically-typed attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
	Null,
	Bool(bool),
	Byte(i8),
	Short(i16),
	Int(i32),
	Long(i64),
	Float(f32),
	Double(f64),
	Char(char),
	String(String),
	/// An ordered sequence.
	List(Vec<AttributeValue>),
	/// A fixed array. Read back through [`ListView`] it is presented as a list.
	Array(Vec<AttributeValue>),
	Map(BTreeMap<String, AttributeValue>),
	Set(AttributeSet),
	/// Any other object, kept by reference.
	Opaque(OpaqueValue),
}

impl AttributeValue {
	/// Builds an array value from anything convertible to values.
	pub fn array<I, V>(items: I) -> Self
	where
		I: IntoIterator<Item = V>,
		V: Into<AttributeValue>,
	{
		Self::Array(items.into_iter().map(Into::into).collect())
	}

	/// Builds a list value from anything convertible to values.
	pub fn list<I, V>(items: I) -> Self
	where
		I: IntoIterator<Item = V>,
		V: Into<AttributeValue>,
	{
		Self::List(items.into_iter().map(Into::into).collect())
	}

	/// Wraps an arbitrary object.
	pub fn opaque<T: Opaque>(value: T) -> Self {
		Self::Opaque(OpaqueValue::new(value))
	}

	/// Returns true for [`AttributeValue::Null`].
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Returns true for the integer and floating point kinds.
	pub fn is_number(&self) -> bool {
		matches!(
			self,
			Self::Byte(_) | Self::Short(_) | Self::Int(_) | Self::Long(_) | Self::Float(_) | Self::Double(_)
		)
	}

	/// Name of the value's kind, as used in coercion errors.
	pub fn type_name(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool(_) => "boolean",
			Self::Byte(_) => "byte",
			Self::Short(_) => "short",
			Self::Int(_) => "int",
			Self::Long(_) => "long",
			Self::Float(_) => "float",
			Self::Double(_) => "double",
			Self::Char(_) => "char",
			Self::String(_) => "String",
			Self::List(_) => "List",
			Self::Array(_) => "Array",
			Self::Map(_) => "Map",
			Self::Set(_) => "Set",
			Self::Opaque(_) => "Object",
		}
	}
}

impl fmt::Display for AttributeValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Null => f.write_str("null"),
			Self::Bool(v) => write!(f, "{v}"),
			Self::Byte(v) => write!(f, "{v}"),
			Self::Short(v) => write!(f, "{v}"),
			Self::Int(v) => write!(f, "{v}"),
			Self::Long(v) => write!(f, "{v}"),
			// Debug keeps the fractional part, so 1.0 renders as "1.0" rather than "1".
			Self::Float(v) => write!(f, "{v:?}"),
			Self::Double(v) => write!(f, "{v:?}"),
			Self::Char(v) => write!(f, "{v}"),
			Self::String(v) => f.write_str(v),
			Self::List(items) | Self::Array(items) => write_seq(f, items.iter()),
			Self::Set(set) => write_seq(f, set.iter()),
			Self::Map(map) => {
				f.write_str("{")?;
				for (i, (key, value)) in map.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{key}={value}")?;
				}
				f.write_str("}")
			}
			Self::Opaque(v) => write!(f, "{v}"),
		}
	}
}

fn write_seq<'a>(f: &mut fmt::Formatter<'_>, items: impl Iterator<Item = &'a AttributeValue>) -> fmt::Result {
	f.write_str("[")?;
	for (i, item) in items.enumerate() {
		if i > 0 {
			f.write_str(", ")?;
		}
		write!(f, "{item}")?;
	}
	f.write_str("]")
}

macro_rules! impl_from {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl From<$ty> for AttributeValue {
				fn from(value: $ty) -> Self {
					Self::$variant(value)
				}
			}
		)*
	};
}

impl_from! {
	bool => Bool,
	i8 => Byte,
	i16 => Short,
	i32 => Int,
	i64 => Long,
	f32 => Float,
	f64 => Double,
	char => Char,
	String => String,
	Vec<AttributeValue> => List,
	BTreeMap<String, AttributeValue> => Map,
	AttributeSet => Set,
	OpaqueValue => Opaque,
}

impl From<&str> for AttributeValue {
	fn from(value: &str) -> Self {
		Self::String(value.to_string())
	}
}

impl<T: Into<AttributeValue>> From<Option<T>> for AttributeValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display_matches_canonical_text() {
		assert_eq!(AttributeValue::from(1).to_string(), "1");
		assert_eq!(AttributeValue::from(1.0f64).to_string(), "1.0");
		assert_eq!(AttributeValue::from(2.5f32).to_string(), "2.5");
		assert_eq!(AttributeValue::from(true).to_string(), "true");
		assert_eq!(AttributeValue::from('x').to_string(), "x");
		assert_eq!(AttributeValue::Null.to_string(), "null");
		assert_eq!(AttributeValue::list([1, 2]).to_string(), "[1, 2]");

		let mut map = BTreeMap::new();
		map.insert("a".to_string(), AttributeValue::from("b"));
		assert_eq!(AttributeValue::from(map).to_string(), "{a=b}");
	}

	#[test]
	fn none_becomes_null() {
		let value: AttributeValue = Option::<i32>::None.into();
		assert!(value.is_null());
	}
}
