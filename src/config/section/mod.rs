//! Configuration section definitions.
//!
//! Each module corresponds to a section in `assetify.toml`:
//!
//! | Module     | TOML Section   | Purpose                               |
//! |------------|----------------|---------------------------------------|
//! | `bundle`   | `[[bundle]]`   | One group of sources and its output   |
//! | `defaults` | `[defaults]`   | Values applied to every bundle        |

mod bundle;
mod defaults;

pub use bundle::BundleConfig;
pub use defaults::DefaultsConfig;
