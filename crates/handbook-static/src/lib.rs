//! Static export builder for handbook documentation.
//!
//! Writes `llms.txt`, `llms-full.txt` and one plain-text file per exported page.

pub mod builder;

pub use builder::{BuildConfig, BuildError, BuildResult, StaticBuilder};
