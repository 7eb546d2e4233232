//! Utility modules.

pub mod fs;
mod plural;

pub use plural::{plural_count, plural_s};
