/* src/error.rs */

/// Errors raised by attribute map operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttributeError {
	/// The attribute does not exist, or holds null where a primitive was requested.
	#[error("attribute undefined: {key}")]
	Undefined { key: String },
	/// The stored value could not be converted to the requested type.
	#[error("cannot coerce attribute {key} with value {value} to {target}")]
	CantCoerce {
		key: String,
		/// Textual rendering of the offending value.
		value: String,
		target: &'static str,
	},
	/// The key violates the attribute name restriction.
	#[error("attribute [{key}] violates attribute name restriction, attribute not added")]
	InvalidName { key: String },
}

impl AttributeError {
	pub(crate) fn undefined(key: &str) -> Self {
		Self::Undefined {
			key: key.to_string(),
		}
	}

	pub(crate) fn cant_coerce(key: &str, value: &crate::AttributeValue, target: &'static str) -> Self {
		Self::CantCoerce {
			key: key.to_string(),
			value: value.to_string(),
			target,
		}
	}

	pub(crate) fn invalid_name(key: &str) -> Self {
		Self::InvalidName {
			key: key.to_string(),
		}
	}

	/// Returns the key the error refers to.
	pub fn key(&self) -> &str {
		match self {
			Self::Undefined { key } | Self::CantCoerce { key, .. } | Self::InvalidName { key } => key,
		}
	}
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, AttributeError>;
