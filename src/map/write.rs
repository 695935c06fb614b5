/* src/map/write.rs */

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

#[cfg(feature = "events")]
use crate::AttributeEvent;
use crate::{AttributeHolder, AttributeValue, Result};

use super::{AttributeMap, validate_name};

enum SetOutcome {
	Stored {
		holder: Arc<AttributeHolder>,
		replaced: Option<Arc<AttributeHolder>>,
	},
	Ignored(Arc<AttributeHolder>),
}

impl AttributeMap {
	/// Sets an attribute and returns the holder now stored under `key`.
	///
	/// - A new key gets a fresh composite holder.
	/// - An unlocked key gets a fresh composite holder that keeps the old
	///   holder's persistable flag.
	/// - A locked key is left untouched and its existing holder is returned.
	///   This is not an error; it is logged at debug level.
	///
	/// The lock check and the write happen inside one RCU update, so
	/// concurrent writers to the same key cannot lose each other's updates.
	pub fn set(&self, key: &str, value: impl Into<AttributeValue>) -> Result<Arc<AttributeHolder>> {
		validate_name(key)?;
		let value = Arc::new(value.into());

		let outcome: RefCell<Option<SetOutcome>> = RefCell::new(None);

		self.inner.rcu(|map| {
			match map.get(key) {
				Some(existing) if existing.is_locked() => {
					*outcome.borrow_mut() = Some(SetOutcome::Ignored(Arc::clone(existing)));
					Arc::clone(map)
				}
				existing => {
					let holder = Arc::new(AttributeHolder::superseding(
						existing.map(|old| &**old),
						Arc::clone(&value),
					));
					let mut new_map = (**map).clone();
					new_map.insert(key.to_string(), Arc::clone(&holder));
					*outcome.borrow_mut() = Some(SetOutcome::Stored {
						holder,
						replaced: existing.cloned(),
					});
					Arc::new(new_map)
				}
			}
		});

		match outcome.into_inner() {
			Some(SetOutcome::Stored { holder, replaced }) => {
				#[cfg(feature = "events")]
				{
					let _ = self.events.send(AttributeEvent::Set {
						key: key.to_string(),
						holder: Arc::clone(&holder),
						replaced,
					});
				}
				#[cfg(not(feature = "events"))]
				{
					let _ = replaced;
				}
				Ok(holder)
			}
			Some(SetOutcome::Ignored(holder)) => {
				self.log_locked_overwrite(key);
				#[cfg(feature = "events")]
				{
					let _ = self.events.send(AttributeEvent::Ignored {
						key: key.to_string(),
					});
				}
				Ok(holder)
			}
			None => unreachable!("rcu runs its update at least once"),
		}
	}

	/// Sets an arbitrary object as an opaque value.
	pub fn set_opaque<T: crate::Opaque>(&self, key: &str, value: T) -> Result<Arc<AttributeHolder>> {
		self.set(key, AttributeValue::opaque(value))
	}

	/// Removes an attribute regardless of its lock, returning the removed holder.
	pub fn unset(&self, key: &str) -> Option<Arc<AttributeHolder>> {
		// Pre-check to avoid an unnecessary clone in rcu.
		if !self.inner.load().contains_key(key) {
			return None;
		}

		let removed: RefCell<Option<Arc<AttributeHolder>>> = RefCell::new(None);

		self.inner.rcu(|map| {
			let mut new_map = (**map).clone();
			*removed.borrow_mut() = new_map.remove(key);
			new_map
		});

		let removed = removed.into_inner();

		#[cfg(feature = "events")]
		if let Some(holder) = &removed {
			let _ = self.events.send(AttributeEvent::Removed {
				key: key.to_string(),
				holder: Arc::clone(holder),
			});
		}

		removed
	}

	/// Removes all attributes, locked or not.
	pub fn clear(&self) {
		self.inner.store(Arc::new(HashMap::new()));

		#[cfg(feature = "events")]
		{
			let _ = self.events.send(AttributeEvent::Cleared);
		}
	}

	#[cfg(feature = "logging")]
	fn log_locked_overwrite(&self, key: &str) {
		let metadata = log::Metadata::builder()
			.level(log::Level::Debug)
			.target(super::LOG_TARGET)
			.build();
		if !self.logger.enabled(&metadata) {
			return;
		}
		self.logger.log(
			&log::Record::builder()
				.metadata(metadata)
				.module_path_static(Some(module_path!()))
				.file_static(Some(file!()))
				.line(Some(line!()))
				.args(format_args!("Attempt to overwrite locked attribute with key '{key}'"))
				.build(),
		);
	}

	#[cfg(not(feature = "logging"))]
	fn log_locked_overwrite(&self, _key: &str) {}
}
