//! Tests for the validation failure paths of an export run.

use sqlite2json::{run_export, Config, ExportError, ValidationError};
use tempfile::TempDir;

#[path = "helpers.rs"]
mod helpers;

use helpers::create_fixture_pool;

#[tokio::test]
async fn test_plain_text_file_is_rejected_before_connecting() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let notes = dir.path().join("notes.txt");
    std::fs::write(&notes, "just some notes").expect("Failed to write file");
    let out = dir.path().join("out");

    let config = Config {
        db_path: notes,
        output: out.clone(),
        ..Default::default()
    };
    let err = run_export(config).await.expect_err("Should reject notes.txt");

    assert!(matches!(
        err,
        ExportError::Validation(ValidationError::InvalidInput(_))
    ));
    // Input is validated first, so the output directory is never created
    assert!(!out.exists());
}

#[tokio::test]
async fn test_missing_database_file_is_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = Config {
        db_path: dir.path().join("absent.db"),
        output: dir.path().join("out"),
        ..Default::default()
    };

    let err = run_export(config).await.expect_err("Should reject missing file");
    assert!(matches!(
        err,
        ExportError::Validation(ValidationError::InvalidInput(_))
    ));
}

#[tokio::test]
async fn test_output_path_that_is_a_file_is_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = dir.path().join("fixture.db");
    let out = dir.path().join("out");
    std::fs::write(&out, "occupied").expect("Failed to write file");

    let pool = create_fixture_pool(&db_path).await;
    pool.close().await;

    let config = Config {
        db_path,
        output: out,
        ..Default::default()
    };
    let err = run_export(config)
        .await
        .expect_err("Should reject file as output dir");

    assert!(matches!(
        err,
        ExportError::Validation(ValidationError::InvalidOutput(_))
    ));
}

#[tokio::test]
async fn test_output_dir_with_missing_parent_is_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = dir.path().join("fixture.db");

    let pool = create_fixture_pool(&db_path).await;
    pool.close().await;

    let config = Config {
        db_path,
        output: dir.path().join("missing").join("out"),
        ..Default::default()
    };
    let err = run_export(config)
        .await
        .expect_err("Should reject multi-level creation");

    assert!(matches!(
        err,
        ExportError::Validation(ValidationError::DirectoryCreation { .. })
    ));
}

#[tokio::test]
async fn test_non_database_with_sqlite_extension_fails_at_query_time() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let fake = dir.path().join("fake.db");
    // Long enough that SQLite cannot mistake it for an empty database
    std::fs::write(&fake, "this is definitely not a sqlite file, padded well past the header")
        .expect("Failed to write file");

    let config = Config {
        db_path: fake,
        output: dir.path().join("out"),
        ..Default::default()
    };
    let err = run_export(config)
        .await
        .expect_err("Should fail at connection/query time");

    // Extension heuristic passes; the failure is a query error, not validation
    assert!(matches!(err, ExportError::Query(_)));
}
