/* src/lib.rs */

//!
//! A typed, concurrency-safe attribute store for monitoring events.
//!
//! - **map**: [`AttributeMap`], a lock-free name → holder map with typed
//!   setters, coercing getters and bulk import/export.
//! - **holder**: [`AttributeHolder`], one value plus its locked and
//!   persistable flags.
//! - **value**: [`AttributeValue`], the closed set of storable kinds.
//! - **coerce**: the rules used by the `get_as_*` accessors.
//!
//! ## Feature Flags
//!
//! - `logging` (default): Locked-overwrite diagnostics through the `log` facade
//!   or an injected `log::Log`.
//! - `events`: Broadcasts [`AttributeEvent`]s on every change.
//! - `serde`: `Serialize` for values and [`AttributeMap::serializable_snapshot`].
//! - `full`: Enables all features.
//!
//! ## Basic Usage
//!
//! ```
//! use attrmap::AttributeMap;
//!
//! let attributes = AttributeMap::new();
//! attributes.set("count", 1)?;
//! attributes.set("flag", "TRUE")?;
//!
//! assert_eq!(attributes.get_as_int("count")?, 1);
//! assert_eq!(attributes.get_as_string("count")?.as_deref(), Some("1"));
//! assert!(attributes.get_as_bool("flag")?);
//! # Ok::<(), attrmap::AttributeError>(())
//! ```

pub mod coerce;
mod error;
#[cfg(feature = "events")]
mod event;
pub mod holder;
mod map;
pub mod value;

pub use coerce::Coerce;
pub use error::{AttributeError, Result};
#[cfg(feature = "events")]
pub use event::AttributeEvent;
pub use holder::{AttributeHolder, HolderKind};
#[cfg(feature = "events")]
pub use map::DEFAULT_EVENT_CAPACITY;
#[cfg(feature = "logging")]
pub use map::LOG_TARGET;
pub use map::{AllValues, Attribute, AttributeMap, AttributeMapBuilder, is_valid_name};
pub use value::{AttributeSet, AttributeValue, ListView, Opaque, OpaqueValue};
