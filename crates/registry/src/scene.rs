//! Typed scene references.
//!
//! A [`SceneRef`] is the typed replacement for the raw
//! "storyboard name + identifier string + cast" triple: the identifier lives
//! in the value, while the controller type and the owning storyboard ride
//! along as phantom parameters with no runtime payload.

use std::any::{self, Any};
use std::marker::PhantomData;

use crate::bundle::Bundle;
use crate::error::InstantiateError;
use crate::meta::Origin;
use crate::storyboard::Storyboard;

/// Constructor registered for a scene. Produces the controller as an opaque
/// box; the reference downcasts it to the declared type.
pub type SceneConstructor = fn() -> Box<dyn Any + Send>;

/// Static definition registered for one scene within a storyboard.
#[derive(Clone, Copy)]
pub struct SceneDef {
	/// Name of the owning storyboard resource.
	pub storyboard: &'static str,
	/// Scene identifier, unique within the storyboard.
	pub id: &'static str,
	/// Type name of the controller the constructor produces.
	pub controller: &'static str,
	/// Constructor invoked on every instantiation.
	pub construct: SceneConstructor,
	/// Where this definition was declared.
	pub origin: Origin,
}

impl core::fmt::Debug for SceneDef {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("SceneDef")
			.field("storyboard", &self.storyboard)
			.field("id", &self.id)
			.field("controller", &self.controller)
			.finish()
	}
}

/// Typed reference to a scene inside storyboard `S`.
///
/// Pairs a scene identifier with two compile-time associations: the
/// controller type `C` the scene is declared to produce and the owning
/// storyboard `S`. Defined once, statically, immutable; many references may
/// point into one storyboard.
///
/// Neither the identifier nor the controller type is checked against a bundle
/// until [`instantiate_in`](Self::instantiate_in) runs.
pub struct SceneRef<C: Any, S: Storyboard> {
	id: &'static str,
	_marker: PhantomData<fn() -> (C, S)>,
}

impl<C: Any, S: Storyboard> Clone for SceneRef<C, S> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<C: Any, S: Storyboard> Copy for SceneRef<C, S> {}

impl<C: Any, S: Storyboard> SceneRef<C, S> {
	/// Creates a reference to the scene registered under `id`.
	pub const fn new(id: &'static str) -> Self {
		Self {
			id,
			_marker: PhantomData,
		}
	}

	/// Returns the scene identifier.
	pub fn id(&self) -> &'static str {
		self.id
	}

	/// Resolves this reference against `bundle` and constructs the controller.
	///
	/// Every call runs the registered constructor, so resolving twice yields
	/// two independent instances.
	///
	/// # Errors
	///
	/// - [`InstantiateError::MissingStoryboard`] when `S::NAME` is not in the
	///   bundle.
	/// - [`InstantiateError::MissingScene`] when the storyboard has no scene
	///   under this id.
	/// - [`InstantiateError::ControllerTypeMismatch`] when the registered
	///   constructor produces a type other than `C`.
	pub fn instantiate_in(&self, bundle: &Bundle) -> Result<C, InstantiateError> {
		let archive = bundle.storyboard(S::NAME)?;
		let def = archive.scene(self.id)?;
		tracing::trace!(storyboard = S::NAME, id = self.id, "instantiating scene");
		downcast::<C>(def)
	}

	/// Resolves this reference against the global bundle.
	///
	/// Hosts conventionally call this from the thread that owns their UI
	/// resources; the bundle itself is immutable after first access and safe
	/// to resolve from any thread.
	#[cfg(feature = "db")]
	pub fn instantiate(&self) -> Result<C, InstantiateError> {
		self.instantiate_in(crate::db::global())
	}
}

impl<C: Any, S: Storyboard> core::fmt::Debug for SceneRef<C, S> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("SceneRef")
			.field("storyboard", &S::NAME)
			.field("id", &self.id)
			.field("controller", &any::type_name::<C>())
			.finish()
	}
}

/// Typed reference to the designated entry scene of storyboard `S`.
///
/// Carries no identifier; the storyboard definition names its entry scene.
pub struct InitialSceneRef<C: Any, S: Storyboard> {
	_marker: PhantomData<fn() -> (C, S)>,
}

impl<C: Any, S: Storyboard> Clone for InitialSceneRef<C, S> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<C: Any, S: Storyboard> Copy for InitialSceneRef<C, S> {}

impl<C: Any, S: Storyboard> Default for InitialSceneRef<C, S> {
	fn default() -> Self {
		Self::new()
	}
}

impl<C: Any, S: Storyboard> InitialSceneRef<C, S> {
	/// Creates a reference to the storyboard's entry scene.
	pub const fn new() -> Self {
		Self {
			_marker: PhantomData,
		}
	}

	/// Resolves the storyboard's entry scene and constructs the controller.
	///
	/// # Errors
	///
	/// Fails like [`SceneRef::instantiate_in`], plus
	/// [`InstantiateError::MissingInitialScene`] when the storyboard declares
	/// no entry scene.
	pub fn instantiate_in(&self, bundle: &Bundle) -> Result<C, InstantiateError> {
		let archive = bundle.storyboard(S::NAME)?;
		let def = archive.initial_scene()?;
		tracing::trace!(storyboard = S::NAME, id = def.id, "instantiating initial scene");
		downcast::<C>(def)
	}

	/// Resolves the entry scene against the global bundle.
	#[cfg(feature = "db")]
	pub fn instantiate(&self) -> Result<C, InstantiateError> {
		self.instantiate_in(crate::db::global())
	}
}

impl<C: Any, S: Storyboard> core::fmt::Debug for InitialSceneRef<C, S> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("InitialSceneRef")
			.field("storyboard", &S::NAME)
			.field("controller", &any::type_name::<C>())
			.finish()
	}
}

fn downcast<C: Any>(def: &SceneDef) -> Result<C, InstantiateError> {
	let controller = (def.construct)();
	match controller.downcast::<C>() {
		Ok(controller) => Ok(*controller),
		Err(_) => Err(InstantiateError::ControllerTypeMismatch {
			storyboard: def.storyboard.to_string(),
			id: def.id.to_string(),
			expected: any::type_name::<C>(),
			actual: def.controller,
		}),
	}
}
