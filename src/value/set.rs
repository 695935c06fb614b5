/* src/value/set.rs */

use super::AttributeValue;

/// An unordered collection of distinct values.
///
/// Values have no total order (floats, opaque objects), so membership is
/// checked by equality. Attribute sets are expected to stay small.
#[derive(Debug, Clone, Default)]
pub struct AttributeSet {
	items: Vec<AttributeValue>,
}

impl AttributeSet {
	/// Creates an empty set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a value. Returns false if an equal value was already present.
	pub fn insert(&mut self, value: impl Into<AttributeValue>) -> bool {
		let value = value.into();
		if self.items.contains(&value) {
			return false;
		}
		self.items.push(value);
		true
	}

	/// Returns true if an equal value is present.
	pub fn contains(&self, value: &AttributeValue) -> bool {
		self.items.contains(value)
	}

	/// Iterates over the values in insertion order.
	pub fn iter(&self) -> std::slice::Iter<'_, AttributeValue> {
		self.items.iter()
	}

	/// Returns the number of values.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Returns true if the set has no values.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}
}

impl PartialEq for AttributeSet {
	fn eq(&self, other: &Self) -> bool {
		self.len() == other.len() && self.items.iter().all(|item| other.contains(item))
	}
}

impl<V: Into<AttributeValue>> FromIterator<V> for AttributeSet {
	fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
		let mut set = Self::new();
		for value in iter {
			set.insert(value);
		}
		set
	}
}

impl<'a> IntoIterator for &'a AttributeSet {
	type Item = &'a AttributeValue;
	type IntoIter = std::slice::Iter<'a, AttributeValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
