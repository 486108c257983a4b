use std::any::type_name;

use pretty_assertions::assert_eq;

use crate::{
	Bundle, BundleBuilder, InitialSceneRef, InstantiateError, Origin, SceneDef, SceneRef,
	Storyboard, StoryboardDef,
};

struct User;

impl Storyboard for User {
	const NAME: &'static str = "User";
}

struct Onboarding;

impl Storyboard for Onboarding {
	const NAME: &'static str = "Onboarding";
}

// Near-miss of "User"; never registered.
struct Usr;

impl Storyboard for Usr {
	const NAME: &'static str = "Usr";
}

#[derive(Debug, PartialEq, Eq)]
struct ProfileController {
	section: &'static str,
}

impl ProfileController {
	fn new() -> Self {
		Self { section: "profile" }
	}
}

#[derive(Debug, PartialEq, Eq)]
struct SettingsController;

static USER: StoryboardDef =
	StoryboardDef::with_initial("User", "UserProfileViewControllerID", Origin::Builtin);
static ONBOARDING: StoryboardDef = StoryboardDef::new("Onboarding", Origin::Builtin);

static PROFILE_DEF: SceneDef = SceneDef {
	storyboard: "User",
	id: "UserProfileViewControllerID",
	controller: type_name::<ProfileController>(),
	construct: || Box::new(ProfileController::new()),
	origin: Origin::Builtin,
};
static SETTINGS_DEF: SceneDef = SceneDef {
	storyboard: "User",
	id: "UserSettingsViewControllerID",
	controller: type_name::<SettingsController>(),
	construct: || Box::new(SettingsController),
	origin: Origin::Builtin,
};

const PROFILE: SceneRef<ProfileController, User> =
	SceneRef::new("UserProfileViewControllerID");
const SETTINGS: SceneRef<SettingsController, User> =
	SceneRef::new("UserSettingsViewControllerID");

fn user_bundle() -> Bundle {
	let mut builder = BundleBuilder::new();
	builder.register_storyboard(&USER);
	builder.register_storyboard(&ONBOARDING);
	builder.register_scene(&PROFILE_DEF);
	builder.register_scene(&SETTINGS_DEF);
	builder.build().expect("bundle builds")
}

#[test]
fn instantiate_returns_declared_controller_type() {
	let bundle = user_bundle();

	let profile = PROFILE.instantiate_in(&bundle).expect("profile resolves");
	assert_eq!(profile, ProfileController { section: "profile" });

	let settings = SETTINGS.instantiate_in(&bundle).expect("settings resolves");
	assert_eq!(settings, SettingsController);
}

#[test]
fn instantiate_twice_yields_independent_instances() {
	let bundle = user_bundle();

	let first = PROFILE.instantiate_in(&bundle).expect("first resolves");
	let second = PROFILE.instantiate_in(&bundle).expect("second resolves");
	assert_eq!(first, second);
}

#[test]
fn unregistered_storyboard_is_missing_storyboard() {
	let bundle = user_bundle();
	const LOST: SceneRef<ProfileController, Usr> = SceneRef::new("UserProfileViewControllerID");

	match LOST.instantiate_in(&bundle) {
		Err(InstantiateError::MissingStoryboard { name, .. }) => assert_eq!(name, "Usr"),
		other => panic!("expected MissingStoryboard, got {other:?}"),
	}
}

#[test]
fn unregistered_id_is_missing_scene() {
	let bundle = user_bundle();
	const MISSING: SceneRef<ProfileController, User> = SceneRef::new("Missing");

	match MISSING.instantiate_in(&bundle) {
		Err(InstantiateError::MissingScene { storyboard, id, .. }) => {
			assert_eq!(storyboard, "User");
			assert_eq!(id, "Missing");
		}
		other => panic!("expected MissingScene, got {other:?}"),
	}
}

#[test]
fn wrong_controller_type_is_type_mismatch() {
	let bundle = user_bundle();
	const MISTYPED: SceneRef<SettingsController, User> =
		SceneRef::new("UserProfileViewControllerID");

	match MISTYPED.instantiate_in(&bundle) {
		Err(InstantiateError::ControllerTypeMismatch {
			expected, actual, ..
		}) => {
			assert_eq!(expected, type_name::<SettingsController>());
			assert_eq!(actual, type_name::<ProfileController>());
		}
		other => panic!("expected ControllerTypeMismatch, got {other:?}"),
	}
}

#[test]
fn initial_scene_resolves_declared_entry() {
	let bundle = user_bundle();
	const ENTRY: InitialSceneRef<ProfileController, User> = InitialSceneRef::new();

	let entry = ENTRY.instantiate_in(&bundle).expect("entry resolves");
	assert_eq!(entry, ProfileController { section: "profile" });
}

#[test]
fn storyboard_without_entry_is_missing_initial_scene() {
	let bundle = user_bundle();
	const ENTRY: InitialSceneRef<ProfileController, Onboarding> = InitialSceneRef::new();

	match ENTRY.instantiate_in(&bundle) {
		Err(InstantiateError::MissingInitialScene { storyboard }) => {
			assert_eq!(storyboard, "Onboarding");
		}
		other => panic!("expected MissingInitialScene, got {other:?}"),
	}
}

#[test]
fn untyped_construct_surface_produces_boxed_controller() {
	let bundle = user_bundle();
	let archive = bundle.storyboard("User").expect("User registered");

	let opaque = archive
		.construct("UserProfileViewControllerID")
		.expect("construct resolves");
	let profile = opaque
		.downcast::<ProfileController>()
		.expect("constructed type matches registration");
	assert_eq!(*profile, ProfileController::new());
}

#[test]
fn archive_exposes_registered_scene_ids() {
	let bundle = user_bundle();
	let archive = bundle.storyboard("User").expect("User registered");

	let mut ids: Vec<_> = archive.scene_ids().collect();
	ids.sort_unstable();
	assert_eq!(
		ids,
		["UserProfileViewControllerID", "UserSettingsViewControllerID"]
	);
}

#[test]
fn error_display_names_the_missing_key() {
	let bundle = user_bundle();
	const LOST: SceneRef<ProfileController, Usr> = SceneRef::new("UserProfileViewControllerID");

	let err = LOST.instantiate_in(&bundle).unwrap_err();
	assert_eq!(err.to_string(), "unknown storyboard \"Usr\"");
}

#[cfg(feature = "suggest")]
#[test]
fn missing_storyboard_suggests_nearest_name() {
	let bundle = user_bundle();
	const LOST: SceneRef<ProfileController, Usr> = SceneRef::new("UserProfileViewControllerID");

	let err = LOST.instantiate_in(&bundle).unwrap_err();
	assert_eq!(err.suggestion(), Some("User"));
}

#[cfg(feature = "suggest")]
#[test]
fn missing_scene_suggests_nearest_id() {
	let bundle = user_bundle();
	const TYPO: SceneRef<ProfileController, User> =
		SceneRef::new("UserProfileViewControllerId");

	let err = TYPO.instantiate_in(&bundle).unwrap_err();
	assert_eq!(err.suggestion(), Some("UserProfileViewControllerID"));
}

#[cfg(feature = "suggest")]
#[test]
fn distant_keys_produce_no_suggestion() {
	let bundle = user_bundle();
	const FAR: SceneRef<ProfileController, User> = SceneRef::new("CheckoutSceneID");

	let err = FAR.instantiate_in(&bundle).unwrap_err();
	assert_eq!(err.suggestion(), None);
}
