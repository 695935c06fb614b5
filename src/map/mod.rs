/* src/map/mod.rs */

mod import;
mod read;
mod view;
mod write;

pub use import::Attribute;
pub use view::AllValues;

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;
use fancy_regex::Regex;

#[cfg(feature = "events")]
use crate::AttributeEvent;
use crate::{AttributeError, AttributeHolder, AttributeValue, Result};

/// Default event channel capacity.
#[cfg(feature = "events")]
pub const DEFAULT_EVENT_CAPACITY: usize = 100;

/// Log target for diagnostics emitted by the map.
#[cfg(feature = "logging")]
pub const LOG_TARGET: &str = "attrmap::map";

static NAME_PATTERN: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z_0-9]*$").expect("attribute name pattern is valid"));

/// Returns true if `name` is a legal attribute name: a letter or underscore
/// followed by letters, digits or underscores.
pub fn is_valid_name(name: &str) -> bool {
	NAME_PATTERN.is_match(name).unwrap_or(false)
}

pub(crate) fn validate_name(name: &str) -> Result<()> {
	if is_valid_name(name) {
		Ok(())
	} else {
		Err(AttributeError::invalid_name(name))
	}
}

/// Thread-safe map of named attributes attached to a monitoring event.
///
/// Uses the RCU (Read-Copy-Update) pattern: reads are lock-free snapshots,
/// writes copy the current map, apply the change and swap it in, retrying if
/// another writer got there first. Holders are never modified by a write;
/// an overwrite stores a fresh holder.
pub struct AttributeMap {
	pub(crate) inner: ArcSwap<HashMap<String, Arc<AttributeHolder>>>,
	#[cfg(feature = "logging")]
	pub(crate) logger: Arc<dyn log::Log>,
	#[cfg(feature = "events")]
	pub(crate) events: tokio::sync::broadcast::Sender<AttributeEvent>,
}

impl AttributeMap {
	/// Creates an empty map that logs through the global `log` facade.
	pub fn new() -> Self {
		Self {
			inner: ArcSwap::from_pointee(HashMap::new()),
			#[cfg(feature = "logging")]
			logger: Arc::new(GlobalLogger),
			#[cfg(feature = "events")]
			events: tokio::sync::broadcast::channel(DEFAULT_EVENT_CAPACITY).0,
		}
	}

	/// Returns a builder for a map with custom logging, events or initial values.
	pub fn builder() -> AttributeMapBuilder {
		AttributeMapBuilder::new()
	}

	/// Creates a map pre-filled from plain values. Each value goes through
	/// [`set`](Self::set), so names are validated. Null values are skipped.
	pub fn from_values<I, K, V>(values: I) -> Result<Self>
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<AttributeValue>,
	{
		let map = Self::new();
		map.set_all(values)?;
		Ok(map)
	}
}

impl Default for AttributeMap {
	fn default() -> Self {
		Self::new()
	}
}

impl TryFrom<HashMap<String, AttributeValue>> for AttributeMap {
	type Error = AttributeError;

	fn try_from(values: HashMap<String, AttributeValue>) -> Result<Self> {
		Self::from_values(values)
	}
}

impl fmt::Debug for AttributeMap {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_map().entries(self.inner.load().iter()).finish()
	}
}

/// Builder for [`AttributeMap`].
pub struct AttributeMapBuilder {
	values: Vec<(String, AttributeValue)>,
	#[cfg(feature = "logging")]
	logger: Option<Arc<dyn log::Log>>,
	#[cfg(feature = "events")]
	event_capacity: usize,
}

impl AttributeMapBuilder {
	/// Creates a builder with no initial values and default settings.
	pub fn new() -> Self {
		Self {
			values: Vec::new(),
			#[cfg(feature = "logging")]
			logger: None,
			#[cfg(feature = "events")]
			event_capacity: DEFAULT_EVENT_CAPACITY,
		}
	}

	/// Adds one initial value.
	pub fn value(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
		self.values.push((key.into(), value.into()));
		self
	}

	/// Adds several initial values.
	pub fn values<I, K, V>(mut self, values: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<AttributeValue>,
	{
		self.values
			.extend(values.into_iter().map(|(key, value)| (key.into(), value.into())));
		self
	}

	/// Routes the map's diagnostics to `logger` instead of the global facade.
	#[cfg(feature = "logging")]
	pub fn logger(mut self, logger: Arc<dyn log::Log>) -> Self {
		self.logger = Some(logger);
		self
	}

	/// Sets the event channel capacity. A capacity of zero is raised to one.
	///
	/// Note: Events may be dropped if subscribers process slower than
	/// the write rate and the channel fills up.
	#[cfg(feature = "events")]
	pub fn event_capacity(mut self, capacity: usize) -> Self {
		self.event_capacity = capacity.max(1);
		self
	}

	/// Builds the map, applying initial values in the order they were added.
	pub fn build(self) -> Result<AttributeMap> {
		let map = AttributeMap {
			inner: ArcSwap::from_pointee(HashMap::new()),
			#[cfg(feature = "logging")]
			logger: self.logger.unwrap_or_else(|| Arc::new(GlobalLogger)),
			#[cfg(feature = "events")]
			events: tokio::sync::broadcast::channel(self.event_capacity).0,
		};
		map.set_all(self.values)?;
		Ok(map)
	}
}

impl Default for AttributeMapBuilder {
	fn default() -> Self {
		Self::new()
	}
}

/// Forwards to whatever logger is installed globally at the time of the call.
#[cfg(feature = "logging")]
struct GlobalLogger;

#[cfg(feature = "logging")]
impl log::Log for GlobalLogger {
	fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
		metadata.level() <= log::max_level() && log::logger().enabled(metadata)
	}

	fn log(&self, record: &log::Record<'_>) {
		log::logger().log(record);
	}

	fn flush(&self) {
		log::logger().flush();
	}
}
