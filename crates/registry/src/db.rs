//! Global bundle assembled from inventory-registered declarations.
//!
//! The declaration macros submit their definitions here; the first call to
//! [`global`] collects everything submitted across all linked crates into one
//! read-only [`Bundle`]. Nothing can be registered after that point.

use std::sync::OnceLock;

use crate::bundle::{Bundle, BundleBuilder};
use crate::scene::SceneDef;
use crate::storyboard::StoryboardDef;

/// Inventory wrapper for storyboard definitions.
pub struct StoryboardReg(pub &'static StoryboardDef);

inventory::collect!(StoryboardReg);

/// Inventory wrapper for scene definitions.
pub struct SceneReg(pub &'static SceneDef);

inventory::collect!(SceneReg);

static BUNDLE: OnceLock<Bundle> = OnceLock::new();

/// Returns the process-wide bundle, building it on first access.
///
/// Duplicate declarations resolve first-wins; the registration order across
/// crates is link-dependent, so which duplicate wins is unspecified. A scene
/// declared against a storyboard that no linked crate declares is a fatal
/// declaration error: it is logged and the global bundle comes up empty.
pub fn global() -> &'static Bundle {
	BUNDLE.get_or_init(|| {
		let mut builder = BundleBuilder::new();
		for reg in inventory::iter::<StoryboardReg> {
			builder.register_storyboard(reg.0);
		}
		for reg in inventory::iter::<SceneReg> {
			builder.register_scene(reg.0);
		}
		builder.build().unwrap_or_else(|e| {
			tracing::error!("global bundle build failed: {e}");
			Bundle::default()
		})
	})
}
