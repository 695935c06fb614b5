/* src/coerce.rs */

//!
//! Conversion rules from a stored [`AttributeValue`] to a requested primitive.
//!
//! Each target type first accepts values of its own kind, then falls back to
//! parsing the value's textual form.
//!
//! All numeric kinds count as one family. Integers convert with a wrapping
//! cast. Floats saturate into `i32`/`i64`; `i8`/`i16` targets go through `i32`
//! first and then wrap, so `300.0` reads as byte `44`.
//!
//! Text parsing is strict for integers (no whitespace, range-checked). Float
//! text may be padded with whitespace, may carry one `f`/`F`/`d`/`D` suffix,
//! and accepts `Infinity` and `NaN` (optionally signed) spelled exactly so.
//! Other spellings such as `inf` or `nan` are rejected, as are hexadecimal
//! float literals.

use crate::AttributeValue;

/// A primitive type an attribute can be read back as.
pub trait Coerce: Sized {
	/// Type name reported in [`AttributeError::CantCoerce`](crate::AttributeError::CantCoerce).
	const TYPE_NAME: &'static str;

	/// Converts a non-null value, or returns `None` if it cannot be coerced.
	fn coerce(value: &AttributeValue) -> Option<Self>;
}

impl Coerce for bool {
	const TYPE_NAME: &'static str = "boolean";

	fn coerce(value: &AttributeValue) -> Option<Self> {
		if let AttributeValue::Bool(v) = value {
			return Some(*v);
		}
		let text = value.to_string();
		if text.eq_ignore_ascii_case("true") {
			Some(true)
		} else if text.eq_ignore_ascii_case("false") {
			Some(false)
		} else {
			None
		}
	}
}

impl Coerce for char {
	const TYPE_NAME: &'static str = "char";

	fn coerce(value: &AttributeValue) -> Option<Self> {
		match value {
			AttributeValue::Char(c) => Some(*c),
			AttributeValue::String(s) => {
				let mut chars = s.chars();
				match (chars.next(), chars.next()) {
					(Some(c), None) => Some(c),
					_ => None,
				}
			}
			_ => None,
		}
	}
}

macro_rules! coerce_number {
	($($ty:ty => $name:literal, $parse:ident, $from_float:expr;)*) => {
		$(
			impl Coerce for $ty {
				const TYPE_NAME: &'static str = $name;

				fn coerce(value: &AttributeValue) -> Option<Self> {
					match value {
						AttributeValue::Byte(v) => Some(*v as $ty),
						AttributeValue::Short(v) => Some(*v as $ty),
						AttributeValue::Int(v) => Some(*v as $ty),
						AttributeValue::Long(v) => Some(*v as $ty),
						AttributeValue::Float(v) => Some(($from_float)(f64::from(*v))),
						AttributeValue::Double(v) => Some(($from_float)(*v)),
						other => $parse(&other.to_string()),
					}
				}
			}
		)*
	};
}

fn parse_integer<T: std::str::FromStr>(text: &str) -> Option<T> {
	text.parse().ok()
}

fn parse_float<T: std::str::FromStr>(text: &str) -> Option<T> {
	let text = text.trim();
	let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
	if unsigned == "Infinity" || unsigned == "NaN" {
		return text.parse().ok();
	}
	let number = text.strip_suffix(['f', 'F', 'd', 'D']).unwrap_or(text);
	if !number
		.chars()
		.all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
	{
		return None;
	}
	number.parse().ok()
}

coerce_number! {
	i8 => "byte", parse_integer, |v: f64| (v as i32) as i8;
	i16 => "short", parse_integer, |v: f64| (v as i32) as i16;
	i32 => "int", parse_integer, |v: f64| v as i32;
	i64 => "long", parse_integer, |v: f64| v as i64;
	f32 => "float", parse_float, |v: f64| v as f32;
	f64 => "double", parse_float, |v: f64| v;
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn numbers_cast_across_the_family() {
		assert_eq!(i32::coerce(&AttributeValue::Long(7)), Some(7));
		assert_eq!(f64::coerce(&AttributeValue::Int(3)), Some(3.0));
		assert_eq!(i64::coerce(&AttributeValue::Double(2.9)), Some(2));
		assert_eq!(i8::coerce(&AttributeValue::Int(300)), Some(44));
	}

	#[test]
	fn floats_narrow_through_int() {
		assert_eq!(i8::coerce(&AttributeValue::Double(300.0)), Some(44));
		assert_eq!(i16::coerce(&AttributeValue::Double(70000.0)), Some(4464));
		assert_eq!(i8::coerce(&AttributeValue::Float(-129.5)), Some(127));
		assert_eq!(i32::coerce(&AttributeValue::Double(1e12)), Some(i32::MAX));
		assert_eq!(f32::coerce(&AttributeValue::Float(0.1)), Some(0.1));
	}

	#[test]
	fn float_text_grammar() {
		assert_eq!(f64::coerce(&AttributeValue::from("1.5f")), Some(1.5));
		assert_eq!(f64::coerce(&AttributeValue::from("1d")), Some(1.0));
		assert_eq!(f32::coerce(&AttributeValue::from("-2.5e1F")), Some(-25.0));
		assert_eq!(f64::coerce(&AttributeValue::from("-Infinity")), Some(f64::NEG_INFINITY));
		assert!(f64::coerce(&AttributeValue::from("NaN")).is_some_and(f64::is_nan));
		assert_eq!(f64::coerce(&AttributeValue::from("inf")), None);
		assert_eq!(f64::coerce(&AttributeValue::from("nan")), None);
		assert_eq!(f64::coerce(&AttributeValue::from("f")), None);
		assert_eq!(f64::coerce(&AttributeValue::from("0x1p3")), None);
	}

	#[test]
	fn strings_are_parsed() {
		assert_eq!(i16::coerce(&AttributeValue::from("-12")), Some(-12));
		assert_eq!(f32::coerce(&AttributeValue::from(" 1.5 ")), Some(1.5));
		assert_eq!(i32::coerce(&AttributeValue::from(" 1")), None);
		assert_eq!(i8::coerce(&AttributeValue::from("128")), None);
	}

	#[test]
	fn chars_parse_as_digits_only_through_text() {
		assert_eq!(i32::coerce(&AttributeValue::Char('5')), Some(5));
		assert_eq!(i32::coerce(&AttributeValue::Char('x')), None);
	}

	#[test]
	fn bool_is_case_insensitive() {
		assert_eq!(bool::coerce(&AttributeValue::from("TrUe")), Some(true));
		assert_eq!(bool::coerce(&AttributeValue::from("FALSE")), Some(false));
		assert_eq!(bool::coerce(&AttributeValue::from("yes")), None);
		assert_eq!(bool::coerce(&AttributeValue::Int(1)), None);
	}

	#[test]
	fn char_needs_exactly_one_character() {
		assert_eq!(char::coerce(&AttributeValue::from("é")), Some('é'));
		assert_eq!(char::coerce(&AttributeValue::from("ab")), None);
		assert_eq!(char::coerce(&AttributeValue::from("")), None);
		assert_eq!(char::coerce(&AttributeValue::Int(5)), None);
	}
}
