//! Configuration types
//!
//! Board-agnostic configuration structures, validated at build time.

pub mod types;

pub use types::*;
