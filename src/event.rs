/* src/event.rs */

use std::sync::Arc;

use crate::AttributeHolder;

/// Events emitted by the map on attribute changes.
#[derive(Debug, Clone)]
pub enum AttributeEvent {
	/// A value was stored through the validated set path.
	Set {
		key: String,
		holder: Arc<AttributeHolder>,
		/// The unlocked holder that was superseded, if any.
		replaced: Option<Arc<AttributeHolder>>,
	},
	/// A write was ignored because the existing holder is locked.
	Ignored { key: String },
	/// A holder clone was inserted by a bulk import.
	Imported { key: String, holder: Arc<AttributeHolder> },
	/// An attribute was removed.
	Removed { key: String, holder: Arc<AttributeHolder> },
	/// All attributes were removed.
	Cleared,
}
