/* src/holder/entry.rs */

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::HolderKind;
use crate::AttributeValue;

/// Owns one attribute value plus its locked and persistable flags.
///
/// The value never changes after construction. The flags only ever go from
/// `false` to `true`, so a holder shared between the map and a caller can be
/// locked or marked persistable without replacing it.
#[derive(Debug)]
pub struct AttributeHolder {
	value: Arc<AttributeValue>,
	locked: AtomicBool,
	persistable: AtomicBool,
	kind: HolderKind,
}

impl AttributeHolder {
	/// Creates an unlocked, non-persistable basic holder.
	pub fn new(value: impl Into<AttributeValue>) -> Self {
		Self::with_kind(Arc::new(value.into()), HolderKind::Basic)
	}

	/// Creates an unlocked, non-persistable composite holder.
	pub fn composite(value: impl Into<AttributeValue>) -> Self {
		Self::with_kind(Arc::new(value.into()), HolderKind::Composite)
	}

	/// Creates the composite holder the set path stores, superseding `old` if present.
	///
	/// Only the persistable flag carries over. The new holder is never locked.
	pub(crate) fn superseding(old: Option<&AttributeHolder>, value: Arc<AttributeValue>) -> Self {
		let holder = Self::with_kind(value, HolderKind::Composite);
		if old.is_some_and(AttributeHolder::is_persistable) {
			holder.mark_persistable();
		}
		holder
	}

	fn with_kind(value: Arc<AttributeValue>, kind: HolderKind) -> Self {
		Self {
			value,
			locked: AtomicBool::new(false),
			persistable: AtomicBool::new(false),
			kind,
		}
	}

	/// Returns the held value.
	pub fn value(&self) -> &Arc<AttributeValue> {
		&self.value
	}

	/// Returns whether the holder is basic or composite.
	pub fn kind(&self) -> HolderKind {
		self.kind
	}

	/// Returns true if the holder was created by a map's set path.
	pub fn is_composite(&self) -> bool {
		self.kind == HolderKind::Composite
	}

	/// Returns true once [`lock`](Self::lock) has been called.
	pub fn is_locked(&self) -> bool {
		self.locked.load(Ordering::Acquire)
	}

	/// Freezes the value against overwrites through [`AttributeMap::set`](crate::AttributeMap::set).
	///
	/// There is no way to unlock. Removal is still allowed.
	pub fn lock(&self) -> &Self {
		self.locked.store(true, Ordering::Release);
		self
	}

	/// Returns true if the value may be exported outside the process.
	pub fn is_persistable(&self) -> bool {
		self.persistable.load(Ordering::Acquire)
	}

	/// Marks the value as eligible for external persistence.
	pub fn mark_persistable(&self) -> &Self {
		self.persistable.store(true, Ordering::Release);
		self
	}
}

impl Clone for AttributeHolder {
	/// Creates an independent holder with the same value, flags and kind.
	fn clone(&self) -> Self {
		Self {
			value: Arc::clone(&self.value),
			locked: AtomicBool::new(self.is_locked()),
			persistable: AtomicBool::new(self.is_persistable()),
			kind: self.kind,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn clone_is_independent() {
		let original = AttributeHolder::new(1);
		original.mark_persistable();
		let copy = original.clone();

		original.lock();

		assert!(copy.is_persistable());
		assert!(!copy.is_locked());
		assert_eq!(copy.kind(), HolderKind::Basic);
	}

	#[test]
	fn replacement_keeps_persistable_only() {
		let old = AttributeHolder::composite("a");
		old.mark_persistable().lock();

		let new = AttributeHolder::superseding(Some(&old), Arc::new(AttributeValue::from("b")));

		assert!(new.is_persistable());
		assert!(!new.is_locked());
		assert!(new.is_composite());
	}

	#[test]
	fn flags_are_idempotent() {
		let holder = AttributeHolder::new(true);
		holder.lock().lock();
		holder.mark_persistable().mark_persistable();
		assert!(holder.is_locked());
		assert!(holder.is_persistable());
	}
}
