//! Declaration macros for storyboards and scenes.

/// Selects a provided value or falls back to a default.
#[doc(hidden)]
#[macro_export]
macro_rules! __pb_opt {
	({$val:expr}, $default:expr) => {
		$val
	};
	(, $default:expr) => {
		$default
	};
}

/// Declares a storyboard marker type and registers its definition.
///
/// Expands to the marker type, its [`Storyboard`](crate::Storyboard) impl, a
/// `STORYBOARD_*` static, and the inventory submission that feeds
/// [`db::global`](crate::db::global).
///
/// ```ignore
/// storyboard!(pub User = "User", initial: "UserProfileViewControllerID");
/// ```
#[macro_export]
macro_rules! storyboard {
	($vis:vis $name:ident = $resource:literal $(, initial: $initial:literal)? $(,)?) => {
		$crate::paste::paste! {
			$vis struct $name;

			impl $crate::Storyboard for $name {
				const NAME: &'static str = $resource;
			}

			$vis static [<STORYBOARD_ $name:upper>]: $crate::StoryboardDef =
				$crate::StoryboardDef {
					name: $resource,
					initial: $crate::__pb_opt!($({Some($initial)})?, None),
					origin: $crate::Origin::Crate(env!("CARGO_PKG_NAME")),
				};

			$crate::inventory::submit!($crate::db::StoryboardReg(&[<STORYBOARD_ $name:upper>]));
		}
	};
}

/// Declares a typed scene reference and registers its definition.
///
/// The constructor expression is type-checked against the declared controller
/// type, so macro declarations cannot produce a
/// [`ControllerTypeMismatch`](crate::InstantiateError::ControllerTypeMismatch)
/// at resolution. References built manually with
/// [`SceneRef::new`](crate::SceneRef::new) carry no such guarantee.
///
/// ```ignore
/// scene!(pub PROFILE, {
/// 	storyboard: User,
/// 	id: "UserProfileViewControllerID",
/// 	controller: ProfileController,
/// 	construct: ProfileController::new,
/// });
/// ```
#[macro_export]
macro_rules! scene {
	($vis:vis $name:ident, {
		storyboard: $storyboard:ty,
		id: $id:literal,
		controller: $controller:ty,
		construct: $construct:expr $(,)?
	}) => {
		$crate::paste::paste! {
			fn [<__construct_ $name:lower>]() -> ::std::boxed::Box<dyn ::core::any::Any + Send> {
				let controller: $controller = ($construct)();
				::std::boxed::Box::new(controller)
			}

			$vis static [<SCENE_ $name:upper>]: $crate::SceneDef = $crate::SceneDef {
				storyboard: <$storyboard as $crate::Storyboard>::NAME,
				id: $id,
				controller: ::core::any::type_name::<$controller>(),
				construct: [<__construct_ $name:lower>],
				origin: $crate::Origin::Crate(env!("CARGO_PKG_NAME")),
			};

			#[doc = concat!("Typed reference to the `", $id, "` scene.")]
			$vis const $name: $crate::SceneRef<$controller, $storyboard> =
				$crate::SceneRef::new($id);

			$crate::inventory::submit!($crate::db::SceneReg(&[<SCENE_ $name:upper>]));
		}
	};
}

/// Declares a typed reference to a storyboard's designated entry scene.
///
/// ```ignore
/// initial_scene!(pub USER_ENTRY, {
/// 	storyboard: User,
/// 	controller: ProfileController,
/// });
/// ```
#[macro_export]
macro_rules! initial_scene {
	($vis:vis $name:ident, {
		storyboard: $storyboard:ty,
		controller: $controller:ty $(,)?
	}) => {
		#[doc = concat!("Typed reference to the initial scene of `", stringify!($storyboard), "`.")]
		$vis const $name: $crate::InitialSceneRef<$controller, $storyboard> =
			$crate::InitialSceneRef::new();
	};
}
