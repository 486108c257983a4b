//! The scene bundle: a registry of storyboard archives keyed by name.
//!
//! A [`Bundle`] is immutable once built. Hosts either build one explicitly
//! through [`BundleBuilder`] or rely on the global bundle assembled from
//! macro declarations (`db` feature, see [`crate::db`]).

mod builder;

pub use builder::{BundleBuilder, Collision, CollisionKind, DuplicatePolicy, Resolution};

use std::any::Any;

use rustc_hash::FxHashMap as HashMap;

use crate::error::InstantiateError;
use crate::scene::SceneDef;
use crate::storyboard::StoryboardDef;

/// One resolved storyboard resource: its definition plus the scene table.
#[derive(Debug, Clone)]
pub struct StoryboardArchive {
	def: &'static StoryboardDef,
	scenes: HashMap<&'static str, &'static SceneDef>,
}

impl StoryboardArchive {
	/// Returns the storyboard name.
	pub fn name(&self) -> &'static str {
		self.def.name
	}

	/// Returns the id of the designated entry scene, if declared.
	pub fn initial_id(&self) -> Option<&'static str> {
		self.def.initial
	}

	/// Looks up the scene definition registered under `id`.
	pub fn scene(&self, id: &str) -> Result<&'static SceneDef, InstantiateError> {
		self.scenes
			.get(id)
			.copied()
			.ok_or_else(|| InstantiateError::MissingScene {
				storyboard: self.def.name.to_string(),
				id: id.to_string(),
				suggestion: suggest(self.scenes.keys().copied(), id),
			})
	}

	/// Looks up the designated entry scene.
	pub fn initial_scene(&self) -> Result<&'static SceneDef, InstantiateError> {
		let id = self
			.def
			.initial
			.ok_or_else(|| InstantiateError::MissingInitialScene {
				storyboard: self.def.name.to_string(),
			})?;
		self.scene(id)
	}

	/// Constructs the controller registered under `id` as an opaque box.
	///
	/// Typed call sites go through [`SceneRef`](crate::SceneRef) instead; this
	/// is the untyped surface for hosts that dispatch on runtime identifiers.
	pub fn construct(&self, id: &str) -> Result<Box<dyn Any + Send>, InstantiateError> {
		self.scene(id).map(|def| (def.construct)())
	}

	/// Iterates the scene ids registered in this archive.
	pub fn scene_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.scenes.keys().copied()
	}
}

/// Immutable registry of storyboard archives.
#[derive(Debug, Clone, Default)]
pub struct Bundle {
	storyboards: HashMap<&'static str, StoryboardArchive>,
	collisions: Vec<Collision>,
}

impl Bundle {
	/// Looks up the storyboard archive registered under `name`.
	pub fn storyboard(&self, name: &str) -> Result<&StoryboardArchive, InstantiateError> {
		self.storyboards
			.get(name)
			.ok_or_else(|| InstantiateError::MissingStoryboard {
				name: name.to_string(),
				suggestion: suggest(self.storyboards.keys().copied(), name),
			})
	}

	/// Returns true when a storyboard named `name` is registered.
	pub fn contains(&self, name: &str) -> bool {
		self.storyboards.contains_key(name)
	}

	/// Iterates the registered storyboard names.
	pub fn storyboard_names(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.storyboards.keys().copied()
	}

	/// Duplicate-key collisions recorded while this bundle was built.
	pub fn collisions(&self) -> &[Collision] {
		&self.collisions
	}
}

/// Suggests the nearest registered key within edit distance 3.
#[cfg(feature = "suggest")]
fn suggest<'a>(keys: impl Iterator<Item = &'a str>, key: &str) -> Option<String> {
	keys.map(str::to_string)
		.min_by_key(|k| strsim::levenshtein(key, k))
		.filter(|k| strsim::levenshtein(key, k) <= 3)
}

#[cfg(not(feature = "suggest"))]
fn suggest<'a>(_keys: impl Iterator<Item = &'a str>, _key: &str) -> Option<String> {
	None
}
