//! Normalize React Native application generator options for monorepo workspaces.

pub mod cli;
pub mod config;
pub mod generator;

pub use cli::{run, Args};
pub use config::{WorkspaceConfig, WorkspaceLayout};
pub use generator::{
    class_name, file_name, names, normalize_options, property_name, NormalizeError,
    NormalizedOptions, Schema,
};
