/* src/value/list.rs */

use std::borrow::Cow;
use std::sync::Arc;

use super::AttributeValue;

/// A read-only list view over a stored list or array value.
///
/// A stored list is presented as-is. A stored array is presented as a list
/// whose nested arrays are converted to lists as they are read. The view
/// holds no converted state, so every iteration applies the conversion again.
#[derive(Debug, Clone)]
pub struct ListView {
	source: Arc<AttributeValue>,
}

impl ListView {
	/// Returns `None` unless `source` is a list or an array.
	pub(crate) fn new(source: Arc<AttributeValue>) -> Option<Self> {
		match *source {
			AttributeValue::List(_) | AttributeValue::Array(_) => Some(Self { source }),
			_ => None,
		}
	}

	fn items(&self) -> &[AttributeValue] {
		match &*self.source {
			AttributeValue::List(items) | AttributeValue::Array(items) => items,
			_ => &[],
		}
	}

	/// Returns true if the view was built over an array.
	pub fn is_converted(&self) -> bool {
		matches!(*self.source, AttributeValue::Array(_))
	}

	/// Returns the number of elements.
	pub fn len(&self) -> usize {
		self.items().len()
	}

	/// Returns true if the list has no elements.
	pub fn is_empty(&self) -> bool {
		self.items().is_empty()
	}

	/// Gets the element at `index`, with nested arrays presented as lists.
	pub fn get(&self, index: usize) -> Option<Cow<'_, AttributeValue>> {
		self.items().get(index).map(|item| self.present(item))
	}

	/// Iterates over the elements, converting nested arrays on the way.
	pub fn iter(&self) -> impl Iterator<Item = Cow<'_, AttributeValue>> + '_ {
		self.items().iter().map(|item| self.present(item))
	}

	/// Collects the view into owned values.
	pub fn to_vec(&self) -> Vec<AttributeValue> {
		self.iter().map(Cow::into_owned).collect()
	}

	/// The stored value the view reads from.
	pub fn source(&self) -> &Arc<AttributeValue> {
		&self.source
	}

	fn present<'a>(&self, item: &'a AttributeValue) -> Cow<'a, AttributeValue> {
		match item {
			AttributeValue::Array(_) if self.is_converted() => Cow::Owned(arrays_to_lists(item)),
			other => Cow::Borrowed(other),
		}
	}
}

fn arrays_to_lists(value: &AttributeValue) -> AttributeValue {
	match value {
		AttributeValue::Array(items) => AttributeValue::List(items.iter().map(arrays_to_lists).collect()),
		other => other.clone(),
	}
}

impl PartialEq<Vec<AttributeValue>> for ListView {
	fn eq(&self, other: &Vec<AttributeValue>) -> bool {
		self.len() == other.len() && self.iter().zip(other).all(|(left, right)| *left == *right)
	}
}
