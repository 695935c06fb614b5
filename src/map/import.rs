/* src/map/import.rs */

use std::sync::Arc;

#[cfg(feature = "events")]
use crate::AttributeEvent;
use crate::{AttributeHolder, AttributeValue, Result};

use super::AttributeMap;

/// One entry of a bulk import: either a plain value or a holder to copy.
#[derive(Debug, Clone)]
pub enum Attribute {
	Value(AttributeValue),
	Holder(Arc<AttributeHolder>),
}

impl Attribute {
	/// Wraps a plain value for import.
	pub fn value(value: impl Into<AttributeValue>) -> Self {
		Self::Value(value.into())
	}

	fn is_null(&self) -> bool {
		matches!(self, Self::Value(AttributeValue::Null))
	}
}

impl From<AttributeValue> for Attribute {
	fn from(value: AttributeValue) -> Self {
		Self::Value(value)
	}
}

impl From<AttributeHolder> for Attribute {
	fn from(holder: AttributeHolder) -> Self {
		Self::Holder(Arc::new(holder))
	}
}

impl From<Arc<AttributeHolder>> for Attribute {
	fn from(holder: Arc<AttributeHolder>) -> Self {
		Self::Holder(holder)
	}
}

impl AttributeMap {
	/// Imports values and holders.
	///
	/// - Null values are skipped; they neither insert nor remove anything.
	/// - Plain values go through [`set`](Self::set). The first failure stops
	///   the import; entries applied before it stay applied.
	/// - Holders are cloned and the clone is stored directly. This path
	///   skips name validation and ignores any lock on the holder it replaces.
	pub fn set_all_attribute_holders<I, K>(&self, entries: I) -> Result<()>
	where
		I: IntoIterator<Item = (K, Attribute)>,
		K: Into<String>,
	{
		for (key, entry) in entries {
			if entry.is_null() {
				continue;
			}
			let key = key.into();
			match entry {
				Attribute::Holder(original) => self.insert_copy(key, &original),
				Attribute::Value(value) => {
					self.set(&key, value)?;
				}
			}
		}
		Ok(())
	}

	/// Imports plain values through [`set`](Self::set). Null values are skipped.
	pub fn set_all<I, K, V>(&self, values: I) -> Result<()>
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<AttributeValue>,
	{
		self.set_all_attribute_holders(
			values
				.into_iter()
				.map(|(key, value)| (key, Attribute::Value(value.into()))),
		)
	}

	fn insert_copy(&self, key: String, original: &AttributeHolder) {
		let copy = Arc::new(original.clone());

		self.inner.rcu(|map| {
			let mut new_map = (**map).clone();
			new_map.insert(key.clone(), Arc::clone(&copy));
			new_map
		});

		#[cfg(feature = "events")]
		{
			let _ = self.events.send(AttributeEvent::Imported { key, holder: copy });
		}
	}
}
