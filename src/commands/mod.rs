//! Command implementations for the Bundlesmith CLI

pub mod completions;
pub mod generate;
pub mod reconstitute;
pub mod version;
