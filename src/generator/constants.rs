//! Defaults applied when optional schema fields are absent.

use super::models::UnitTestRunner;

pub const DEFAULT_UNIT_TEST_RUNNER: UnitTestRunner = UnitTestRunner::Jest;

/// Entry module of the generated app, relative to its project root.
pub const ENTRY_FILE: &str = "src/main.tsx";

pub const ANDROID_DIR: &str = "android";

pub const IOS_DIR: &str = "ios";
