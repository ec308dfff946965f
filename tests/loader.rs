use sql_loader::error::{Phase, SqlLoaderError};
use sql_loader::load_script;
use tempfile::TempDir;

#[test]
fn test_reads_file_unchanged() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("valid.sql");
    let content = "  SELECT 1;\r\n-- trailing comment\n";
    std::fs::write(&path, content).unwrap();

    assert_eq!(load_script(&path).unwrap(), content);
}

#[test]
fn test_empty_path_is_configuration_error() {
    let err = load_script("").unwrap_err();
    assert!(matches!(err, SqlLoaderError::Configuration(_)));
    assert_eq!(err.phase(), Phase::Configure);
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.sql");

    let err = load_script(&path).unwrap_err();
    match &err {
        SqlLoaderError::Read { path: reported, source } => {
            assert_eq!(reported, &path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("missing.sql"));
    assert_eq!(err.phase(), Phase::Load);
}

#[test]
fn test_directory_is_read_error() {
    let dir = TempDir::new().unwrap();
    let err = load_script(dir.path()).unwrap_err();
    assert!(matches!(err, SqlLoaderError::Read { .. }));
}

#[test]
fn test_empty_file_loads_as_empty_script() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.sql");
    std::fs::write(&path, "").unwrap();

    assert_eq!(load_script(&path).unwrap(), "");
}

#[test]
fn test_invalid_utf8_is_read_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("latin1.sql");
    std::fs::write(
        &path,
        b"CREATE TABLE t(v TEXT); INSERT INTO t VALUES ('caf\xe9');",
    )
    .unwrap();

    let err = load_script(&path).unwrap_err();
    match &err {
        SqlLoaderError::Read { path: reported, source } => {
            assert_eq!(reported, &path);
            assert_eq!(source.kind(), std::io::ErrorKind::InvalidData);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("latin1.sql"));
}

#[test]
fn test_multibyte_utf8_is_kept() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("utf8.sql");
    let content = "INSERT INTO t VALUES ('café', '東京');";
    std::fs::write(&path, content).unwrap();

    assert_eq!(load_script(&path).unwrap().as_bytes(), content.as_bytes());
}
