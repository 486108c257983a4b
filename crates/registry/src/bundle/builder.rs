//! Bundle construction and duplicate-key handling.

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap as HashMap;

use super::{Bundle, StoryboardArchive};
use crate::error::RegistryError;
use crate::meta::Origin;
use crate::scene::SceneDef;
use crate::storyboard::StoryboardDef;

/// Policy applied when two definitions claim the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
	/// Keep the first registered definition and record a collision.
	#[default]
	FirstWins,
	/// Keep the last registered definition and record a collision.
	LastWins,
	/// Fail the build.
	Reject,
}

/// What a collision resolution decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
	/// Key existed; kept the existing definition.
	KeptExisting,
	/// Key existed; replaced with the new definition.
	ReplacedExisting,
}

/// Which key space a collision occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
	/// Two storyboards share a name.
	Storyboard,
	/// Two scenes within one storyboard share an id.
	Scene,
}

/// Record of a duplicate-key conflict resolved by policy.
#[derive(Debug, Clone, Copy)]
pub struct Collision {
	pub kind: CollisionKind,
	/// Conflicting key: the storyboard name or the scene id.
	pub key: &'static str,
	/// Owning storyboard name, for scene collisions.
	pub storyboard: Option<&'static str>,
	pub kept: Origin,
	pub dropped: Origin,
	pub resolution: Resolution,
}

/// Builder accumulating static definitions into a [`Bundle`].
///
/// Definitions may be registered in any order; scenes are bound to their
/// storyboards at [`build`](Self::build) time.
pub struct BundleBuilder {
	policy: DuplicatePolicy,
	storyboards: Vec<&'static StoryboardDef>,
	scenes: Vec<&'static SceneDef>,
}

impl BundleBuilder {
	/// Creates a builder with the default policy ([`DuplicatePolicy::FirstWins`]).
	pub fn new() -> Self {
		Self::with_policy(DuplicatePolicy::default())
	}

	/// Creates a builder with an explicit duplicate policy.
	pub fn with_policy(policy: DuplicatePolicy) -> Self {
		Self {
			policy,
			storyboards: Vec::new(),
			scenes: Vec::new(),
		}
	}

	/// Registers a storyboard definition.
	pub fn register_storyboard(&mut self, def: &'static StoryboardDef) {
		self.storyboards.push(def);
	}

	/// Registers a scene definition.
	pub fn register_scene(&mut self, def: &'static SceneDef) {
		self.scenes.push(def);
	}

	/// Resolves all registered definitions into an immutable bundle.
	///
	/// # Errors
	///
	/// Under [`DuplicatePolicy::Reject`], duplicate storyboard names and
	/// duplicate scene ids fail the build. A scene naming an unregistered
	/// storyboard fails the build under every policy.
	pub fn build(self) -> Result<Bundle, RegistryError> {
		let mut collisions = Vec::new();
		let mut storyboards: HashMap<&'static str, StoryboardArchive> = HashMap::default();

		for def in self.storyboards {
			match storyboards.entry(def.name) {
				Entry::Vacant(slot) => {
					slot.insert(StoryboardArchive {
						def,
						scenes: HashMap::default(),
					});
				}
				Entry::Occupied(mut slot) => {
					let existing = slot.get().def;
					match self.policy {
						DuplicatePolicy::Reject => {
							return Err(RegistryError::DuplicateStoryboard { name: def.name });
						}
						DuplicatePolicy::FirstWins => collisions.push(Collision {
							kind: CollisionKind::Storyboard,
							key: def.name,
							storyboard: None,
							kept: existing.origin,
							dropped: def.origin,
							resolution: Resolution::KeptExisting,
						}),
						DuplicatePolicy::LastWins => {
							collisions.push(Collision {
								kind: CollisionKind::Storyboard,
								key: def.name,
								storyboard: None,
								kept: def.origin,
								dropped: existing.origin,
								resolution: Resolution::ReplacedExisting,
							});
							slot.insert(StoryboardArchive {
								def,
								scenes: HashMap::default(),
							});
						}
					}
				}
			}
		}

		let mut scene_count = 0usize;
		for def in self.scenes {
			let Some(archive) = storyboards.get_mut(def.storyboard) else {
				return Err(RegistryError::UnknownStoryboard {
					storyboard: def.storyboard,
					id: def.id,
				});
			};
			match archive.scenes.entry(def.id) {
				Entry::Vacant(slot) => {
					slot.insert(def);
					scene_count += 1;
				}
				Entry::Occupied(mut slot) => {
					let existing = *slot.get();
					match self.policy {
						DuplicatePolicy::Reject => {
							return Err(RegistryError::DuplicateScene {
								storyboard: def.storyboard,
								id: def.id,
							});
						}
						DuplicatePolicy::FirstWins => collisions.push(Collision {
							kind: CollisionKind::Scene,
							key: def.id,
							storyboard: Some(def.storyboard),
							kept: existing.origin,
							dropped: def.origin,
							resolution: Resolution::KeptExisting,
						}),
						DuplicatePolicy::LastWins => {
							collisions.push(Collision {
								kind: CollisionKind::Scene,
								key: def.id,
								storyboard: Some(def.storyboard),
								kept: def.origin,
								dropped: existing.origin,
								resolution: Resolution::ReplacedExisting,
							});
							slot.insert(def);
						}
					}
				}
			}
		}

		for collision in &collisions {
			tracing::warn!(
				kind = ?collision.kind,
				key = collision.key,
				kept = %collision.kept,
				dropped = %collision.dropped,
				"duplicate registration"
			);
		}
		tracing::debug!(
			storyboards = storyboards.len(),
			scenes = scene_count,
			collisions = collisions.len(),
			"bundle built"
		);

		Ok(Bundle {
			storyboards,
			collisions,
		})
	}
}

impl Default for BundleBuilder {
	fn default() -> Self {
		Self::new()
	}
}
