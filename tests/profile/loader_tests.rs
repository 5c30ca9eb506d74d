use std::io::Write;

use knotwork::profile::{load_csv, ProfileError, Settings};
use tempfile::NamedTempFile;

fn temp_with(contents: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

#[test]
fn loads_two_column_csv() {
    let f = temp_with("0,100.0\n10,102.5\n20,101.0\n");
    let s = load_csv(f.path()).unwrap();
    assert_eq!(s.len(), 3);
    assert_eq!(s.x(), &[0.0, 10.0, 20.0]);
    assert_eq!(s.y(), &[100.0, 102.5, 101.0]);
}

#[test]
fn missing_file_is_io_error() {
    let err = load_csv("/nonexistent/profile.csv").unwrap_err();
    assert!(matches!(err, ProfileError::Io { .. }));
}

#[test]
fn bad_line_reports_line_number() {
    let f = temp_with("0,1\n1,2\n2,oops\n");
    let err = load_csv(f.path()).unwrap_err();
    assert!(matches!(err, ProfileError::Parse { line: 3, .. }));
}

#[test]
fn settings_from_yaml() {
    let f = temp_with("main_params:\n  filepath: data/profile.csv\n  step: 25\n");
    let s = Settings::from_file(f.path()).unwrap();
    assert_eq!(s.step, 25);
    assert_eq!(s.filepath.to_str(), Some("data/profile.csv"));
}

#[test]
fn settings_parse_in_memory() {
    let s = Settings::parse("main_params:\n  filepath: p.csv\n  step: 3\n").unwrap();
    assert_eq!(s.step, 3);
}

#[test]
fn settings_reject_zero_step() {
    let f = temp_with("main_params:\n  filepath: p.csv\n  step: 0\n");
    assert!(matches!(Settings::from_file(f.path()), Err(ProfileError::Settings(_))));
}

#[test]
fn settings_reject_missing_field() {
    let f = temp_with("main_params:\n  filepath: p.csv\n");
    assert!(matches!(Settings::from_file(f.path()), Err(ProfileError::Settings(_))));
}

#[test]
fn settings_reject_flat_layout() {
    let f = temp_with("filepath: p.csv\nstep: 4\n");
    assert!(matches!(Settings::from_file(f.path()), Err(ProfileError::Settings(_))));
}
