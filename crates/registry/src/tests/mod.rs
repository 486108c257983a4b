//! Crate-level resolution and declaration tests.

#[cfg(feature = "db")]
mod declarations;
mod resolution;
