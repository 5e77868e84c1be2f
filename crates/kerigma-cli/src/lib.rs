//! CLI library components for the Kerigma Hub importer.

pub mod logging;
