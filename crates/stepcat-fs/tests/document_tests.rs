use pretty_assertions::assert_eq;
use rstest::rstest;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fs;
use stepcat_fs::{DocumentStore, Error, NormalizedPath};
use tempfile::TempDir;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Settings {
    suffix: String,
    markers: Vec<String>,
}

#[rstest]
#[case("settings.toml", "suffix = \"cwl\"\nmarkers = [\"old\"]\n")]
#[case("settings.json", r#"{"suffix": "cwl", "markers": ["old"]}"#)]
#[case("settings.yaml", "suffix: cwl\nmarkers:\n  - old\n")]
fn test_load_detects_format(#[case] name: &str, #[case] content: &str) {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join(name);
    fs::write(&file_path, content).unwrap();

    let settings: Settings = DocumentStore::new()
        .load(&NormalizedPath::new(&file_path))
        .unwrap();

    assert_eq!(
        settings,
        Settings {
            suffix: "cwl".into(),
            markers: vec!["old".into()],
        }
    );
}

#[test]
fn test_load_cwl_as_generic_tree() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("align.cwl");
    fs::write(
        &file_path,
        "cwlVersion: v1.2\nclass: CommandLineTool\nbaseCommand: [bwa, mem]\nstdout: old.log\n",
    )
    .unwrap();

    let doc: Value = DocumentStore::new()
        .load(&NormalizedPath::new(&file_path))
        .unwrap();

    assert_eq!(
        doc,
        json!({
            "cwlVersion": "v1.2",
            "class": "CommandLineTool",
            "baseCommand": ["bwa", "mem"],
            "stdout": "old.log"
        })
    );
}

#[test]
fn test_load_reports_parse_error_with_path() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("broken.cwl");
    fs::write(&file_path, "class: [unterminated\n").unwrap();

    let err = DocumentStore::new()
        .load::<Value>(&NormalizedPath::new(&file_path))
        .unwrap_err();

    match err {
        Error::Parse { path, format, .. } => {
            assert_eq!(path, file_path);
            assert_eq!(format, "YAML");
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}
