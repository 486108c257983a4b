//! Provenance metadata for static declarations.

/// Represents where a storyboard or scene definition was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
	/// Registered directly by the host application.
	Builtin,
	/// Declared in a library crate via the declaration macros.
	Crate(&'static str),
}

impl core::fmt::Display for Origin {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::Builtin => write!(f, "builtin"),
			Self::Crate(name) => write!(f, "crate:{name}"),
		}
	}
}
