//! Normalize React Native application generator options.

mod constants;
mod error;
mod models;
pub mod names;
mod normalize;

pub use constants::{ANDROID_DIR, DEFAULT_UNIT_TEST_RUNNER, ENTRY_FILE, IOS_DIR};
pub use error::{validate_apps_dir, validate_directory, validate_name, NormalizeError};
pub use models::{
    E2eTestRunner, Linter, NormalizedOptions, ProjectNameAndRootFormat, Schema, UnitTestRunner,
};
pub use names::{class_name, file_name, names, property_name, Names};
pub use normalize::{join_path_fragments, normalize_options, parse_tags};
