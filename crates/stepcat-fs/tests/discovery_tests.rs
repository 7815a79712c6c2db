//! Tests for recursive suffix discovery

use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use stepcat_fs::{find_by_suffix, search_pattern};
use tempfile::TempDir;

fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "class: CommandLineTool\n").unwrap();
}

fn relative(root: &Path, found: Vec<PathBuf>) -> Vec<String> {
    found
        .into_iter()
        .map(|p| {
            p.strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

#[test]
fn finds_files_at_root_and_in_subdirectories() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "top.cwl");
    touch(temp.path(), "a/mid.cwl");
    touch(temp.path(), "a/b/c/deep.cwl");

    let found = relative(temp.path(), find_by_suffix(temp.path(), "cwl"));
    assert_eq!(found, vec!["a/b/c/deep.cwl", "a/mid.cwl", "top.cwl"]);
}

#[test]
fn ignores_other_suffixes() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "tool.cwl");
    touch(temp.path(), "workflow.yml");
    touch(temp.path(), "notes.cwl.bak");

    let found = relative(temp.path(), find_by_suffix(temp.path(), ".yml"));
    assert_eq!(found, vec!["workflow.yml"]);
}

#[test]
fn skips_hidden_files_and_directories() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), ".hidden.cwl");
    touch(temp.path(), ".cache/cached.cwl");
    touch(temp.path(), "visible.cwl");

    let found = relative(temp.path(), find_by_suffix(temp.path(), "cwl"));
    assert_eq!(found, vec!["visible.cwl"]);
}

#[test]
fn missing_root_yields_nothing() {
    let temp = TempDir::new().unwrap();
    let found = find_by_suffix(temp.path().join("does-not-exist"), "cwl");
    assert!(found.is_empty());
}

#[test]
fn directories_named_like_files_are_not_matched() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("looks_like.cwl")).unwrap();

    assert!(find_by_suffix(temp.path(), "cwl").is_empty());
}

#[test]
fn search_pattern_is_absolute_glob() {
    let temp = TempDir::new().unwrap();
    let pattern = search_pattern(temp.path(), "yml");

    assert!(pattern.ends_with("/**/*.yml"), "pattern was {pattern}");
    assert!(Path::new(&pattern.replace("/**/*.yml", "")).is_absolute());
}
