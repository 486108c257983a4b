//! Typed, statically declared references to storyboard scenes.
//!
//! A *storyboard* is an external, named container of pre-defined controller
//! layouts. Host applications conventionally reach into one with a raw name
//! and a raw identifier string, then cast the result to the controller type
//! they expect. This crate replaces that triple of loose strings with one
//! statically declared value: a [`SceneRef`] pairs the identifier with the
//! controller type and the owning storyboard at the type level, so every call
//! site resolves through a single checked operation.
//!
//! Resolution goes through a [`Bundle`], the registry of loaded storyboard
//! archives. Lookups that would abort in the source ecosystem (unknown
//! storyboard, unknown scene, wrong controller class) surface here as
//! [`InstantiateError`] values instead.
//!
//! # Example
//!
//! ```
//! use playbill_registry::{
//! 	BundleBuilder, Origin, SceneDef, SceneRef, Storyboard, StoryboardDef,
//! };
//!
//! struct User;
//!
//! impl Storyboard for User {
//! 	const NAME: &'static str = "User";
//! }
//!
//! #[derive(Debug, PartialEq)]
//! struct ProfileController {
//! 	section: &'static str,
//! }
//!
//! static USER: StoryboardDef = StoryboardDef::new("User", Origin::Builtin);
//!
//! static PROFILE_DEF: SceneDef = SceneDef {
//! 	storyboard: "User",
//! 	id: "UserProfileViewControllerID",
//! 	controller: std::any::type_name::<ProfileController>(),
//! 	construct: || Box::new(ProfileController { section: "profile" }),
//! 	origin: Origin::Builtin,
//! };
//!
//! const PROFILE: SceneRef<ProfileController, User> =
//! 	SceneRef::new("UserProfileViewControllerID");
//!
//! let mut builder = BundleBuilder::new();
//! builder.register_storyboard(&USER);
//! builder.register_scene(&PROFILE_DEF);
//! let bundle = builder.build()?;
//!
//! let profile = PROFILE.instantiate_in(&bundle)?;
//! assert_eq!(profile, ProfileController { section: "profile" });
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! With the `db` feature (default), declarations made through the
//! [`storyboard!`] and [`scene!`] macros register themselves with `inventory`
//! and resolve through the process-wide bundle via
//! [`SceneRef::instantiate`], with no builder wiring at the call site.

pub mod bundle;
#[cfg(feature = "db")]
pub mod db;
pub mod error;
#[cfg(feature = "db")]
mod macros;
pub mod meta;
pub mod scene;
pub mod storyboard;

#[cfg(test)]
mod tests;

pub use bundle::{
	Bundle, BundleBuilder, Collision, CollisionKind, DuplicatePolicy, Resolution,
	StoryboardArchive,
};
pub use error::{InstantiateError, RegistryError};
pub use meta::Origin;
pub use scene::{InitialSceneRef, SceneConstructor, SceneDef, SceneRef};
pub use storyboard::{Storyboard, StoryboardDef};

// The declaration macros expand to paste/inventory invocations; re-export the
// crates so expansions resolve without callers naming them as dependencies.
#[cfg(feature = "db")]
#[doc(hidden)]
pub use {inventory, paste};
