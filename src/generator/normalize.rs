//! Derive the full application option set from a generator schema.

use super::constants::{ANDROID_DIR, DEFAULT_UNIT_TEST_RUNNER, ENTRY_FILE, IOS_DIR};
use super::error::{validate_apps_dir, validate_directory, validate_name, Result};
use super::models::{NormalizedOptions, ProjectNameAndRootFormat, Schema};
use super::names::{file_name, names};
use crate::config::WorkspaceLayout;

/// Normalize `schema` against the workspace layout.
///
/// The project directory is the explicit `directory` (if any) followed by the
/// kebab-cased name; a name such as `mobile/my-app` therefore carries its own
/// directory. Roots are placed under `layout.apps_dir`.
pub fn normalize_options(layout: &WorkspaceLayout, schema: &Schema) -> Result<NormalizedOptions> {
    validate_apps_dir(&layout.apps_dir)?;
    let raw_name = schema.name.replace('\\', "/");
    validate_name(&raw_name)?;
    let directory = match schema.directory.as_deref() {
        Some(dir) => {
            let dir = dir.replace('\\', "/");
            validate_directory(&dir)?;
            Some(dir)
        }
        None => None,
    };

    let forms = names(&raw_name);
    let name = forms.file_name;

    let project_directory = match directory
        .as_deref()
        .map(|d| strip_apps_dir(d.trim_end_matches('/'), &layout.apps_dir))
    {
        Some(d) if !d.is_empty() => format!("{}/{}", file_name(d), name),
        _ => name.clone(),
    };
    let project_name = project_directory.replace('/', "-");

    let app_project_root = join_path_fragments(&[layout.apps_dir.as_str(), project_directory.as_str()]);
    let android_project_root = join_path_fragments(&[app_project_root.as_str(), ANDROID_DIR]);
    let ios_project_root = join_path_fragments(&[app_project_root.as_str(), IOS_DIR]);

    let class_name = forms.class_name;
    let display_name = schema
        .display_name
        .clone()
        .unwrap_or_else(|| class_name.clone());
    let lower_case_name = class_name.to_lowercase();

    tracing::debug!(
        project = %project_name,
        root = %app_project_root,
        "normalized application options"
    );

    Ok(NormalizedOptions {
        android_project_root,
        app_project_root,
        class_name,
        display_name,
        ios_project_root,
        lower_case_name,
        name,
        parsed_tags: parse_tags(schema.tags.as_deref()),
        project_name,
        project_name_and_root_format: ProjectNameAndRootFormat::Derived,
        linter: schema.linter,
        entry_file: ENTRY_FILE.to_string(),
        e2e_test_runner: schema.e2e_test_runner,
        unit_test_runner: schema.unit_test_runner.unwrap_or(DEFAULT_UNIT_TEST_RUNNER),
        install: schema.install,
        directory: schema.directory.clone(),
    })
}

/// Split a comma-separated tag list; blank entries are dropped.
pub fn parse_tags(tags: Option<&str>) -> Vec<String> {
    tags.map(|t| {
        t.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// Join path fragments with `/`, skipping empty and `.` segments.
pub fn join_path_fragments(fragments: &[&str]) -> String {
    fragments
        .iter()
        .flat_map(|f| f.split('/'))
        .filter(|s| !s.is_empty() && *s != ".")
        .collect::<Vec<_>>()
        .join("/")
}

/// `apps/mobile` under apps dir `apps` -> `mobile`.
fn strip_apps_dir<'a>(directory: &'a str, apps_dir: &str) -> &'a str {
    let apps_dir = apps_dir.trim_matches('/');
    if apps_dir.is_empty() || apps_dir == "." {
        return directory;
    }
    if directory == apps_dir {
        return "";
    }
    directory
        .strip_prefix(apps_dir)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(directory)
}
