//! Data models for generator input and normalized output.

use serde::{Deserialize, Serialize};

/// Lint tool wired into the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum Linter {
    #[serde(rename = "eslint")]
    #[value(name = "eslint")]
    EsLint,
    #[serde(rename = "none")]
    None,
}

/// End-to-end test runner for the generated app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum E2eTestRunner {
    Detox,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UnitTestRunner {
    Jest,
    None,
}

/// Always `derived` for this generator: project name and root are computed
/// from the name, directory and workspace layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectNameAndRootFormat {
    Derived,
}

/// Options as supplied to an application generator invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// App name; leading `/`-separated segments act as a directory (e.g. `mobile/my-app`).
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linter: Option<Linter>,
    pub e2e_test_runner: E2eTestRunner,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_test_runner: Option<UnitTestRunner>,
    pub install: bool,
    /// Comma-separated project tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

impl Schema {
    /// Schema with only the required fields set (`e2e_test_runner = none`, `install = false`).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            directory: None,
            display_name: None,
            linter: None,
            e2e_test_runner: E2eTestRunner::None,
            unit_test_runner: None,
            install: false,
            tags: None,
        }
    }
}

/// Fully populated options handed to the scaffolding pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedOptions {
    pub android_project_root: String,
    pub app_project_root: String,
    pub class_name: String,
    pub display_name: String,
    pub ios_project_root: String,
    pub lower_case_name: String,
    pub name: String,
    pub parsed_tags: Vec<String>,
    pub project_name: String,
    pub project_name_and_root_format: ProjectNameAndRootFormat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linter: Option<Linter>,
    pub entry_file: String,
    pub e2e_test_runner: E2eTestRunner,
    pub unit_test_runner: UnitTestRunner,
    pub install: bool,
    /// Explicit directory exactly as supplied; absent when only implied by the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
}
