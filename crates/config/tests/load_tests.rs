use ela_config::{CodecSettings, ConfigError};
use std::io::Write;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "max_attributes = 4").unwrap();
    writeln!(file, "max_programs = 2").unwrap();

    let settings = CodecSettings::load(file.path()).unwrap();
    assert_eq!(settings.max_attributes, 4);
    assert_eq!(settings.max_programs, 2);
    assert!(!settings.reject_trailing_bytes);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = CodecSettings::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_load_malformed_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "max_inputs = \"many\"").unwrap();
    let err = CodecSettings::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}
