/* src/map/read.rs */

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

#[cfg(feature = "events")]
use crate::AttributeEvent;
use crate::{AttributeError, AttributeHolder, AttributeSet, AttributeValue, Coerce, ListView, Result};

use super::AttributeMap;

macro_rules! typed_getters {
	($($ty:ty => $get:ident, $get_or:ident;)*) => {
		$(
			#[doc = concat!("Gets an attribute as `", stringify!($ty), "`. See [`get_as`](Self::get_as).")]
			pub fn $get(&self, key: &str) -> Result<$ty> {
				self.get_as(key)
			}

			#[doc = concat!("Gets an attribute as `", stringify!($ty), "`, or `default` if it is absent.")]
			pub fn $get_or(&self, key: &str, default: $ty) -> Result<$ty> {
				self.get_as_or(key, default)
			}
		)*
	};
}

impl AttributeMap {
	/// Returns true if an attribute exists under `key`, even one holding null.
	pub fn has_attribute(&self, key: &str) -> bool {
		self.inner.load().contains_key(key)
	}

	/// Gets the holder stored under `key`.
	pub fn get_holder(&self, key: &str) -> Option<Arc<AttributeHolder>> {
		self.inner.load().get(key).cloned()
	}

	/// Gets the raw value of an attribute. A stored null is returned as
	/// [`AttributeValue::Null`], not as an error.
	pub fn get(&self, key: &str) -> Result<Arc<AttributeValue>> {
		let snapshot = self.inner.load();
		snapshot
			.get(key)
			.map(|holder| Arc::clone(holder.value()))
			.ok_or_else(|| AttributeError::undefined(key))
	}

	/// Gets an attribute converted to `T`.
	///
	/// Fails with [`AttributeError::Undefined`] if the attribute is absent or
	/// null, and with [`AttributeError::CantCoerce`] if the value cannot be
	/// converted.
	pub fn get_as<T: Coerce>(&self, key: &str) -> Result<T> {
		let value = self.get(key)?;
		if value.is_null() {
			return Err(AttributeError::undefined(key));
		}
		T::coerce(&value).ok_or_else(|| AttributeError::cant_coerce(key, &value, T::TYPE_NAME))
	}

	/// Like [`get_as`](Self::get_as), but returns `default` when the attribute
	/// is absent. A present value that cannot be converted is still an error.
	pub fn get_as_or<T: Coerce>(&self, key: &str, default: T) -> Result<T> {
		if !self.has_attribute(key) {
			return Ok(default);
		}
		self.get_as(key)
	}

	typed_getters! {
		bool => get_as_bool, get_as_bool_or;
		i8 => get_as_byte, get_as_byte_or;
		char => get_as_char, get_as_char_or;
		f64 => get_as_double, get_as_double_or;
		f32 => get_as_float, get_as_float_or;
		i32 => get_as_int, get_as_int_or;
		i64 => get_as_long, get_as_long_or;
		i16 => get_as_short, get_as_short_or;
	}

	/// Gets the textual form of an attribute, or `None` if it holds null.
	pub fn get_as_string(&self, key: &str) -> Result<Option<String>> {
		let value = self.get(key)?;
		Ok((!value.is_null()).then(|| value.to_string()))
	}

	/// Gets a list or array attribute as a list view.
	///
	/// Returns `None` for a stored null. Arrays, including nested ones, are
	/// presented as lists.
	pub fn get_as_list(&self, key: &str) -> Result<Option<ListView>> {
		let value = self.get(key)?;
		if value.is_null() {
			return Ok(None);
		}
		match ListView::new(Arc::clone(&value)) {
			Some(view) => Ok(Some(view)),
			None => Err(AttributeError::cant_coerce(key, &value, "List")),
		}
	}

	/// Gets a copy of a map attribute. No conversion is attempted.
	pub fn get_as_map(&self, key: &str) -> Result<BTreeMap<String, AttributeValue>> {
		let value = self.get(key)?;
		match &*value {
			AttributeValue::Map(map) => Ok(map.clone()),
			other => Err(AttributeError::cant_coerce(key, other, "Map")),
		}
	}

	/// Gets a copy of a set attribute, or `None` if it holds null. No
	/// conversion is attempted.
	pub fn get_as_set(&self, key: &str) -> Result<Option<AttributeSet>> {
		let value = self.get(key)?;
		match &*value {
			AttributeValue::Null => Ok(None),
			AttributeValue::Set(set) => Ok(Some(set.clone())),
			other => Err(AttributeError::cant_coerce(key, other, "Set")),
		}
	}

	/// Returns a copy of every holder.
	pub fn get_all_attribute_holders(&self) -> HashMap<String, Arc<AttributeHolder>> {
		(**self.inner.load()).clone()
	}

	/// Returns a copy of the values whose holders are marked persistable.
	pub fn get_all_serializable(&self) -> HashMap<String, Arc<AttributeValue>> {
		let snapshot = self.inner.load();
		snapshot
			.iter()
			.filter(|(_, holder)| holder.is_persistable())
			.map(|(key, holder)| (key.clone(), Arc::clone(holder.value())))
			.collect()
	}

	/// Returns a copy of every composite holder, i.e. every holder created by
	/// this map's set path rather than copied in by a bulk import.
	pub fn find_composite_attributes(&self) -> HashMap<String, Arc<AttributeHolder>> {
		let snapshot = self.inner.load();
		snapshot
			.iter()
			.filter(|(_, holder)| holder.is_composite())
			.map(|(key, holder)| (key.clone(), Arc::clone(holder)))
			.collect()
	}

	/// Persistable values in key order, ready to hand to a serializer.
	#[cfg(feature = "serde")]
	pub fn serializable_snapshot(&self) -> BTreeMap<String, AttributeValue> {
		let snapshot = self.inner.load();
		snapshot
			.iter()
			.filter(|(_, holder)| holder.is_persistable())
			.map(|(key, holder)| (key.clone(), (**holder.value()).clone()))
			.collect()
	}

	/// Returns all keys in the map.
	pub fn keys(&self) -> Vec<String> {
		self.inner.load().keys().cloned().collect()
	}

	/// Returns the number of attributes.
	pub fn len(&self) -> usize {
		self.inner.load().len()
	}

	/// Returns true if the map is empty.
	pub fn is_empty(&self) -> bool {
		self.inner.load().is_empty()
	}

	/// Subscribes to attribute change events.
	#[cfg(feature = "events")]
	pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<AttributeEvent> {
		self.events.subscribe()
	}
}
