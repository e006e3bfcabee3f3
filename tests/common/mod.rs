//! Shared test helpers.

use std::path::PathBuf;

use rn_appgen::generator::{
    E2eTestRunner, NormalizedOptions, ProjectNameAndRootFormat, UnitTestRunner,
};

/// Create a temp dir and write files. Returns (guard, root). Paths are relative to root; parent dirs are created.
#[allow(dead_code)]
pub fn workspace(files: &[(&str, &str)]) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().to_path_buf();
    for (path, content) in files {
        let full = root.join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&full, content).unwrap();
    }
    (dir, root)
}

/// Expected output for a plain app under `apps/` with every default applied.
#[allow(dead_code)]
pub fn expected(
    root: &str,
    name: &str,
    project_name: &str,
    class_name: &str,
) -> NormalizedOptions {
    NormalizedOptions {
        android_project_root: format!("{}/android", root),
        app_project_root: root.to_string(),
        class_name: class_name.to_string(),
        display_name: class_name.to_string(),
        ios_project_root: format!("{}/ios", root),
        lower_case_name: class_name.to_lowercase(),
        name: name.to_string(),
        parsed_tags: vec![],
        project_name: project_name.to_string(),
        project_name_and_root_format: ProjectNameAndRootFormat::Derived,
        linter: None,
        entry_file: "src/main.tsx".to_string(),
        e2e_test_runner: E2eTestRunner::None,
        unit_test_runner: UnitTestRunner::Jest,
        install: false,
        directory: None,
    }
}
