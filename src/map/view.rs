/* src/map/view.rs */

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use crate::AttributeValue;

use super::AttributeMap;

/// A live view of every value in a map.
///
/// Each call reads the map's current state, so the view reflects writes made
/// after it was created. Use [`to_map`](Self::to_map) to take a snapshot.
#[derive(Clone, Copy)]
pub struct AllValues<'a> {
	map: &'a AttributeMap,
}

impl AllValues<'_> {
	/// Gets the current value under `key`.
	pub fn get(&self, key: &str) -> Option<Arc<AttributeValue>> {
		self.map.inner.load().get(key).map(|holder| Arc::clone(holder.value()))
	}

	/// Returns true if the map currently holds `key`.
	pub fn contains_key(&self, key: &str) -> bool {
		self.map.has_attribute(key)
	}

	/// Returns the current number of values.
	pub fn len(&self) -> usize {
		self.map.len()
	}

	/// Returns true if the map is currently empty.
	pub fn is_empty(&self) -> bool {
		self.map.is_empty()
	}

	/// Iterates over the map's state at the time of the call.
	pub fn iter(&self) -> impl Iterator<Item = (String, Arc<AttributeValue>)> {
		self.to_map().into_iter()
	}

	/// Copies the current values out of the map.
	pub fn to_map(&self) -> HashMap<String, Arc<AttributeValue>> {
		let snapshot = self.map.inner.load();
		snapshot
			.iter()
			.map(|(key, holder)| (key.clone(), Arc::clone(holder.value())))
			.collect()
	}
}

impl fmt::Debug for AllValues<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_map().entries(self.to_map()).finish()
	}
}

impl fmt::Display for AllValues<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let sorted: BTreeMap<_, _> = self.to_map().into_iter().collect();
		f.write_str("{")?;
		for (i, (key, value)) in sorted.iter().enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{key}={value}")?;
		}
		f.write_str("}")
	}
}

impl AttributeMap {
	/// Returns a live view of all values.
	pub fn get_all(&self) -> AllValues<'_> {
		AllValues { map: self }
	}
}

impl fmt::Display for AttributeMap {
	/// Renders the values in key order, e.g. `{count=1, name=svc}`.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.get_all(), f)
	}
}
