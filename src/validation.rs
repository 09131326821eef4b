//! Input and output path validation.
//!
//! Both checks run before any database connection is opened. The input check
//! is an extension heuristic only: it confirms the path is an existing
//! regular file with a SQLite-style name, not that the file actually contains
//! a SQLite database.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::SQLITE_EXTENSIONS;
use crate::error_handling::ValidationError;

/// Validates the source database path.
///
/// The path must reference an existing regular file whose name ends in one of
/// the recognized SQLite extensions (see [`SQLITE_EXTENSIONS`]).
///
/// # Errors
///
/// Returns `ValidationError::InvalidInput` if the path is missing, not a
/// regular file, or carries an unrecognized extension.
pub fn validate_db_path(path: &Path) -> Result<PathBuf, ValidationError> {
    let is_file = path.is_file();
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let has_sqlite_ext = SQLITE_EXTENSIONS.iter().any(|ext| file_name.ends_with(ext));

    if !is_file || !has_sqlite_ext {
        return Err(ValidationError::InvalidInput(format!(
            "{} must be an existing SQLite database file ({})",
            path.display(),
            SQLITE_EXTENSIONS.join(", ")
        )));
    }

    Ok(path.to_path_buf())
}

/// Validates the output directory, creating it if absent.
///
/// Creation is single-level: a missing parent is an error, matching standard
/// directory-creation semantics. The resolved path must be a directory
/// writable by the current process; writability is verified with an unlinked
/// temporary-file probe rather than by inspecting permission bits.
///
/// # Errors
///
/// Returns `ValidationError::DirectoryCreation` if the directory cannot be
/// created, or `ValidationError::InvalidOutput` if the path is not a writable
/// directory.
pub fn validate_output_dir(path: &Path) -> Result<PathBuf, ValidationError> {
    if !path.exists() {
        fs::create_dir(path).map_err(|source| ValidationError::DirectoryCreation {
            path: path.to_path_buf(),
            source,
        })?;
    }

    if !path.is_dir() {
        return Err(ValidationError::InvalidOutput(format!(
            "{} exists but is not a directory",
            path.display()
        )));
    }

    if tempfile::tempfile_in(path).is_err() {
        return Err(ValidationError::InvalidOutput(format!(
            "{} is not writable by the current process",
            path.display()
        )));
    }

    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_db_path_must_exist() {
        let result = validate_db_path(Path::new("/nonexistent/app.db"));
        assert!(matches!(result, Err(ValidationError::InvalidInput(_))));
    }

    #[test]
    fn test_db_path_rejects_unrecognized_extension() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let notes = dir.path().join("notes.txt");
        fs::write(&notes, "not a database").expect("Failed to write file");

        let result = validate_db_path(&notes);
        assert!(matches!(result, Err(ValidationError::InvalidInput(_))));
    }

    #[test]
    fn test_db_path_accepts_all_recognized_extensions() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        for ext in SQLITE_EXTENSIONS {
            let path = dir.path().join(format!("fixture{ext}"));
            fs::write(&path, b"").expect("Failed to write file");
            validate_db_path(&path).expect("Recognized extension should validate");
        }
    }

    #[test]
    fn test_db_path_rejects_directory_with_sqlite_name() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let sub = dir.path().join("fake.db");
        fs::create_dir(&sub).expect("Failed to create dir");

        let result = validate_db_path(&sub);
        assert!(matches!(result, Err(ValidationError::InvalidInput(_))));
    }

    #[test]
    fn test_output_dir_is_created_when_absent() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let out = dir.path().join("results");

        let validated = validate_output_dir(&out).expect("Should create and validate");
        assert_eq!(validated, out);
        assert!(out.is_dir());
    }

    #[test]
    fn test_output_dir_creation_is_single_level() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let out = dir.path().join("missing_parent").join("results");

        let result = validate_output_dir(&out);
        assert!(matches!(
            result,
            Err(ValidationError::DirectoryCreation { .. })
        ));
    }

    #[test]
    fn test_output_dir_rejects_regular_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let file = dir.path().join("results");
        fs::write(&file, "occupied").expect("Failed to write file");

        let result = validate_output_dir(&file);
        assert!(matches!(result, Err(ValidationError::InvalidOutput(_))));
    }
}
