/* src/holder/kind.rs */

/// How a holder came to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HolderKind {
	/// Built directly by a caller with [`AttributeHolder::new`](super::AttributeHolder::new).
	#[default]
	Basic,
	/// Created by the map's own set path. Only these are reported by
	/// [`AttributeMap::find_composite_attributes`](crate::AttributeMap::find_composite_attributes).
	Composite,
}
