//! Errors raised while normalizing generator options.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("Invalid name: name cannot be empty")]
    EmptyName,

    #[error("Invalid name '{0}': {1}")]
    InvalidName(String, &'static str),

    #[error("Invalid directory '{0}': {1}")]
    InvalidDirectory(String, &'static str),

    #[error("Invalid apps directory '{0}': {1}")]
    InvalidAppsDir(String, &'static str),
}

pub type Result<T> = std::result::Result<T, NormalizeError>;

/// Reject names the generator cannot turn into a project path.
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(NormalizeError::EmptyName);
    }
    if name.starts_with('/') || name.ends_with('/') {
        return Err(NormalizeError::InvalidName(
            name.to_string(),
            "name cannot start or end with '/'",
        ));
    }
    check_segments(name).map_err(|reason| NormalizeError::InvalidName(name.to_string(), reason))?;
    if !name.chars().any(|c| c.is_ascii_alphanumeric()) {
        return Err(NormalizeError::InvalidName(
            name.to_string(),
            "name must contain at least one letter or digit",
        ));
    }
    Ok(())
}

/// Explicit directories may carry a trailing `/` but no empty or parent segments.
pub fn validate_directory(directory: &str) -> Result<()> {
    let trimmed = directory.trim_end_matches('/');
    if trimmed.trim().is_empty() {
        return Err(NormalizeError::InvalidDirectory(
            directory.to_string(),
            "directory cannot be empty",
        ));
    }
    if trimmed.starts_with('/') {
        return Err(NormalizeError::InvalidDirectory(
            directory.to_string(),
            "directory must be relative to the apps root",
        ));
    }
    check_segments(trimmed)
        .map_err(|reason| NormalizeError::InvalidDirectory(directory.to_string(), reason))
}

/// The apps root is relative to the workspace root; `.` means the root itself.
pub fn validate_apps_dir(apps_dir: &str) -> Result<()> {
    let trimmed = apps_dir.trim_end_matches('/');
    if apps_dir.starts_with('/') {
        return Err(NormalizeError::InvalidAppsDir(
            apps_dir.to_string(),
            "apps directory must be relative to the workspace root",
        ));
    }
    if trimmed == "." {
        return Ok(());
    }
    if trimmed.trim().is_empty() {
        return Err(NormalizeError::InvalidAppsDir(
            apps_dir.to_string(),
            "apps directory cannot be empty",
        ));
    }
    check_segments(trimmed)
        .map_err(|reason| NormalizeError::InvalidAppsDir(apps_dir.to_string(), reason))
}

fn check_segments(path: &str) -> std::result::Result<(), &'static str> {
    for segment in path.split('/') {
        if segment.trim().is_empty() {
            return Err("path segments cannot be empty");
        }
        if segment == "." {
            return Err("path segments cannot be '.'");
        }
        if segment == ".." {
            return Err("path segments cannot be '..'");
        }
    }
    Ok(())
}
