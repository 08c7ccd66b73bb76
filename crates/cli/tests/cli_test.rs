//! End-to-end tests of the mockif binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn mockif() -> Command {
    Command::cargo_bin("mockif").unwrap()
}

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

const STORE: &str = r#"package store

import (
	"context"
	"fmt"
)

// Store persists values by key
type Store interface {
	Get(ctx context.Context, key string) ([]byte, error)
	Put(ctx context.Context, key string, value []byte) error
}

func describe(s Store) string { return fmt.Sprint(s) }
"#;

#[test]
fn test_missing_input_dir_is_a_usage_error() {
    mockif()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_generates_mocks_file() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "store.go", STORE);

    mockif().arg(temp_dir.path()).assert().success();

    let generated = fs::read_to_string(temp_dir.path().join("mocks.go")).unwrap();
    assert!(generated.starts_with("package store\n"));
    assert!(generated.contains("import (\n\t\"context\"\n)\n"));
    assert!(!generated.contains("\"fmt\""));
    assert!(generated.contains("\tmGet func(ctx context.Context, key string) ([]byte, error)\n"));
    assert!(generated.contains("func (sm mockStore) Put(ctx context.Context, key string, value []byte) error {\n\treturn sm.mPut(ctx, key, value)\n}\n"));
}

#[cfg(unix)]
#[test]
fn test_generated_file_mode() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "store.go", STORE);

    mockif().arg(temp_dir.path()).assert().success();

    let mode = fs::metadata(temp_dir.path().join("mocks.go"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o644);
}

#[test]
fn test_custom_output_filename() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "store.go", STORE);

    mockif()
        .arg(temp_dir.path())
        .arg("store_mocks.go")
        .assert()
        .success();

    assert!(temp_dir.path().join("store_mocks.go").exists());
    assert!(!temp_dir.path().join("mocks.go").exists());
}

#[test]
fn test_no_interfaces_exits_successfully_without_writing() {
    let temp_dir = TempDir::new().unwrap();
    write(
        temp_dir.path(),
        "point.go",
        "package geo\n\ntype Point struct {\n\tX, Y float64\n}\n",
    );

    mockif()
        .arg(temp_dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("no interfaces found"));

    assert!(!temp_dir.path().join("mocks.go").exists());
}

#[test]
fn test_dry_run_prints_instead_of_writing() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "store.go", STORE);

    mockif()
        .arg(temp_dir.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("type mockStore struct {"));

    assert!(!temp_dir.path().join("mocks.go").exists());
}

#[test]
fn test_json_dumps_the_descriptor() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "store.go", STORE);

    let output = mockif()
        .arg(temp_dir.path())
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["name"], "store");
    assert_eq!(json["interfaces"][0]["name"], "Store");
    assert_eq!(json["interfaces"][0]["methods"][1]["name"], "Put");
    assert_eq!(json["imports"]["context"], "");
    assert!(!temp_dir.path().join("mocks.go").exists());
}

#[test]
fn test_syntax_error_fails_without_output() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "store.go", STORE);
    write(temp_dir.path(), "broken.go", "package store\n\nfunc broken( {\n");

    mockif()
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Syntax error"));

    assert!(!temp_dir.path().join("mocks.go").exists());
}

#[test]
fn test_unsupported_types_are_reported() {
    let temp_dir = TempDir::new().unwrap();
    write(
        temp_dir.path(),
        "odd.go",
        "package odd\n\ntype Odd interface {\n\tF(c chan int)\n\tG(s string)\n}\n",
    );

    mockif()
        .arg(temp_dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Odd.F uses an unsupported type"))
        .stderr(predicate::str::contains("Odd.G").not());

    let generated = fs::read_to_string(temp_dir.path().join("mocks.go")).unwrap();
    assert!(generated.contains("\tmF func(c <unrecognised>)\n"));
}

#[test]
fn test_file_without_package_clause_fails() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a.go", "");
    write(temp_dir.path(), "store.go", STORE);

    mockif()
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected 'package'"));

    assert!(!temp_dir.path().join("mocks.go").exists());
}

#[test]
fn test_missing_directory_fails() {
    mockif()
        .arg("/definitely/not/a/real/dir")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot read directory"));
}

#[test]
fn test_regenerating_ignores_previous_mocks() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "store.go", STORE);

    mockif().arg(temp_dir.path()).assert().success();
    let first = fs::read_to_string(temp_dir.path().join("mocks.go")).unwrap();

    mockif().arg(temp_dir.path()).assert().success();
    let second = fs::read_to_string(temp_dir.path().join("mocks.go")).unwrap();

    assert_eq!(first, second);
}
