/* src/value/opaque.rs */

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Objects that can be stored as opaque attribute values.
///
/// `Display` supplies the textual form used by string coercion.
pub trait Opaque: Any + fmt::Debug + fmt::Display + Send + Sync {}

impl<T> Opaque for T where T: Any + fmt::Debug + fmt::Display + Send + Sync {}

/// A shared handle to an opaque object. Clones share the same object.
#[derive(Clone)]
pub struct OpaqueValue(Arc<dyn Opaque>);

impl OpaqueValue {
	/// Wraps `value` in a shared handle.
	pub fn new<T: Opaque>(value: T) -> Self {
		Self(Arc::new(value))
	}

	/// Returns the object if it is of type `T`.
	pub fn downcast_ref<T: Opaque>(&self) -> Option<&T> {
		let any: &dyn Any = &*self.0;
		any.downcast_ref::<T>()
	}

	/// Returns true if both handles point at the same object.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.0, &other.0)
	}
}

impl PartialEq for OpaqueValue {
	fn eq(&self, other: &Self) -> bool {
		self.ptr_eq(other)
	}
}

impl fmt::Debug for OpaqueValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("OpaqueValue").field(&self.0).finish()
	}
}

impl fmt::Display for OpaqueValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&*self.0, f)
	}
}
