//! Error types for bundle construction and scene resolution.

/// Errors produced when resolving a scene reference against a bundle.
///
/// Every failure mode of the underlying pattern is recoverable here; nothing
/// in this crate aborts the process.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InstantiateError {
	/// No storyboard with the requested name exists in the bundle.
	#[error("unknown storyboard {name:?}")]
	MissingStoryboard {
		name: String,
		/// Closest registered name, when one is within edit distance.
		suggestion: Option<String>,
	},

	/// The storyboard exists but has no scene registered under the id.
	#[error("unknown scene {id:?} in storyboard {storyboard:?}")]
	MissingScene {
		storyboard: String,
		id: String,
		/// Closest registered scene id, when one is within edit distance.
		suggestion: Option<String>,
	},

	/// The storyboard declares no entry scene.
	#[error("storyboard {storyboard:?} has no initial scene")]
	MissingInitialScene { storyboard: String },

	/// The registered constructor produced a different controller type than
	/// the reference declared.
	#[error("scene {id:?} in storyboard {storyboard:?} constructs {actual}, expected {expected}")]
	ControllerTypeMismatch {
		storyboard: String,
		id: String,
		expected: &'static str,
		actual: &'static str,
	},
}

impl InstantiateError {
	/// Returns the nearest-key hint attached to a missing-name error.
	pub fn suggestion(&self) -> Option<&str> {
		match self {
			Self::MissingStoryboard { suggestion, .. } | Self::MissingScene { suggestion, .. } => {
				suggestion.as_deref()
			}
			_ => None,
		}
	}
}

/// Fatal bundle construction errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	/// Two storyboard definitions share a name under
	/// [`DuplicatePolicy::Reject`](crate::bundle::DuplicatePolicy::Reject).
	#[error("duplicate storyboard {name:?}")]
	DuplicateStoryboard { name: &'static str },

	/// Two scene definitions share an id under
	/// [`DuplicatePolicy::Reject`](crate::bundle::DuplicatePolicy::Reject).
	#[error("duplicate scene {id:?} in storyboard {storyboard:?}")]
	DuplicateScene {
		storyboard: &'static str,
		id: &'static str,
	},

	/// A scene names a storyboard that was never registered.
	#[error("scene {id:?} references unregistered storyboard {storyboard:?}")]
	UnknownStoryboard {
		storyboard: &'static str,
		id: &'static str,
	},
}
