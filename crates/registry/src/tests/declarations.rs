use pretty_assertions::assert_eq;

use crate::db;

#[derive(Debug, PartialEq, Eq)]
pub struct SplashController;

impl SplashController {
	fn new() -> Self {
		Self
	}
}

#[derive(Debug, PartialEq, Eq)]
pub struct CreditsController;

crate::storyboard!(pub Launch = "Launch", initial: "SplashSceneID");

crate::scene!(pub SPLASH, {
	storyboard: Launch,
	id: "SplashSceneID",
	controller: SplashController,
	construct: SplashController::new,
});

crate::scene!(pub CREDITS, {
	storyboard: Launch,
	id: "CreditsSceneID",
	controller: CreditsController,
	construct: || CreditsController,
});

crate::initial_scene!(pub LAUNCH_ENTRY, {
	storyboard: Launch,
	controller: SplashController,
});

#[test]
fn global_bundle_contains_declared_storyboard() {
	let bundle = db::global();
	assert!(bundle.contains("Launch"));

	let archive = bundle.storyboard("Launch").expect("Launch registered");
	assert_eq!(archive.initial_id(), Some("SplashSceneID"));
}

#[test]
fn declared_scenes_resolve_through_global_bundle() {
	assert_eq!(SPLASH.instantiate().expect("splash resolves"), SplashController);
	assert_eq!(CREDITS.instantiate().expect("credits resolves"), CreditsController);
}

#[test]
fn initial_scene_macro_resolves_declared_entry() {
	let entry = LAUNCH_ENTRY.instantiate().expect("entry resolves");
	assert_eq!(entry, SplashController);
}

#[test]
fn macro_declared_defs_carry_crate_origin() {
	assert_eq!(
		STORYBOARD_LAUNCH.origin,
		crate::Origin::Crate("playbill-registry")
	);
	assert_eq!(SCENE_SPLASH.storyboard, "Launch");
	assert_eq!(
		SCENE_SPLASH.controller,
		std::any::type_name::<SplashController>()
	);
}
