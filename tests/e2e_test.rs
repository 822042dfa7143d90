//! End-to-end tests for the CLI

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("zrythm-sbom").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("zrythm-sbom")
            .arg("--version")
            .assert()
            .code(0);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("zrythm-sbom")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 1: Output path in a nonexistent directory
    #[test]
    fn test_exit_code_unwritable_output() {
        let temp_dir = TempDir::new().unwrap();
        let lock_path = temp_dir.path().join("package-lock.cmake");
        fs::write(&lock_path, "CPMDeclarePackage(NAME foo)").unwrap();

        cargo_bin_cmd!("zrythm-sbom")
            .args(["--lock", lock_path.to_str().unwrap()])
            .args(["--output", "/nonexistent/directory/sbom.spdx.json"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Parent directory does not exist"));
    }
}

#[test]
fn test_e2e_single_dependency() {
    let temp_dir = TempDir::new().unwrap();
    let lock_path = temp_dir.path().join("package-lock.cmake");
    let output_path = temp_dir.path().join("sbom.spdx.json");
    fs::write(
        &lock_path,
        "CPMDeclarePackage(\n  NAME foo\n  GITHUB_REPOSITORY bar/foo\n  VERSION 9.9.9\n)\n",
    )
    .unwrap();

    cargo_bin_cmd!("zrythm-sbom")
        .args(["--lock", lock_path.to_str().unwrap()])
        .args(["--output", output_path.to_str().unwrap()])
        .assert()
        .code(0)
        .stderr(predicate::str::contains("Found 1 CPM dependencies"))
        .stderr(predicate::str::contains("SBOM generated successfully"));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();

    // Two packages: Zrythm and foo
    let packages = json["packages"].as_array().unwrap();
    assert_eq!(packages.len(), 2);
    let names: Vec<&str> = packages
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"Zrythm"));
    assert!(names.contains(&"foo"));

    // One DESCRIBES edge and one DEPENDS_ON edge from Zrythm to foo
    let relationships = json["relationships"].as_array().unwrap();
    assert_eq!(relationships.len(), 2);
    assert_eq!(relationships[0]["relationshipType"], "DESCRIBES");
    assert_eq!(relationships[1]["relationshipType"], "DEPENDS_ON");
    assert_eq!(
        relationships[1]["spdxElementId"],
        "SPDXRef-Package-Zrythm"
    );
    assert_eq!(
        relationships[1]["relatedSpdxElement"],
        "SPDXRef-Package-foo-9.9.9"
    );
}

#[test]
fn test_e2e_no_dependencies_writes_no_output() {
    let temp_dir = TempDir::new().unwrap();
    let lock_path = temp_dir.path().join("package-lock.cmake");
    let output_path = temp_dir.path().join("sbom.spdx.json");
    fs::write(&lock_path, "# empty lock file\n").unwrap();

    cargo_bin_cmd!("zrythm-sbom")
        .args(["--lock", lock_path.to_str().unwrap()])
        .args(["--output", output_path.to_str().unwrap()])
        .assert()
        .code(0)
        .stderr(predicate::str::contains("No CPM dependencies found"));

    assert!(!output_path.exists());
}

#[test]
fn test_e2e_missing_lock_file_is_nonfatal() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("sbom.spdx.json");

    cargo_bin_cmd!("zrythm-sbom")
        .args(["--lock", "/nonexistent/package-lock.cmake"])
        .args(["--output", output_path.to_str().unwrap()])
        .assert()
        .code(0)
        .stderr(predicate::str::contains("No CPM dependencies found"));

    assert!(!output_path.exists());
}

#[test]
fn test_e2e_stdout_output() {
    let temp_dir = TempDir::new().unwrap();
    let lock_path = temp_dir.path().join("package-lock.cmake");
    fs::write(&lock_path, "CPMDeclarePackage(NAME foo)").unwrap();

    cargo_bin_cmd!("zrythm-sbom")
        .args(["--lock", lock_path.to_str().unwrap()])
        .args(["--output", "-"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"spdxVersion\": \"SPDX-2.3\""));
}

#[test]
fn test_e2e_qt_sbom_merge() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("sbom.spdx.json");

    cargo_bin_cmd!("zrythm-sbom")
        .args(["--lock", "tests/fixtures/package-lock.cmake"])
        .args(["--qt-sbom", "tests/fixtures/qt-sbom.spdx"])
        .args(["--output", output_path.to_str().unwrap()])
        .assert()
        .code(0)
        .stderr(predicate::str::contains(
            "Parsed 2 packages from tests/fixtures/qt-sbom.spdx",
        ));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();
    let ids: Vec<&str> = json["packages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["SPDXID"].as_str().unwrap())
        .collect();
    assert!(ids.contains(&"SPDXRef-Package-qtbase"));
    assert!(ids.contains(&"SPDXRef-Package-qtdeclarative"));
    assert!(!ids.contains(&"SPDXRef-qtbase-qt-tool-moc"));
    assert!(!ids.contains(&"SPDXRef-compiler"));
}

#[test]
fn test_e2e_missing_qt_sbom_warns_and_continues() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("sbom.spdx.json");

    cargo_bin_cmd!("zrythm-sbom")
        .args(["--lock", "tests/fixtures/package-lock.cmake"])
        .args(["--qt-sbom", "/nonexistent/qt.spdx"])
        .args(["--output", output_path.to_str().unwrap()])
        .assert()
        .code(0)
        .stderr(predicate::str::contains("Warning"));

    assert!(output_path.exists());
}

#[test]
fn test_e2e_skip_directive_diagnostic() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("sbom.spdx.json");

    cargo_bin_cmd!("zrythm-sbom")
        .args(["--lock", "tests/fixtures/package-lock.cmake"])
        .args(["--output", output_path.to_str().unwrap()])
        .assert()
        .code(0)
        .stderr(predicate::str::contains(
            "Skipping package test-helpers due to SBOM_SKIP YES",
        ));
}

#[test]
fn test_e2e_commit_embedded_in_self_purl() {
    let temp_dir = TempDir::new().unwrap();
    let lock_path = temp_dir.path().join("package-lock.cmake");
    let output_path = temp_dir.path().join("sbom.spdx.json");
    fs::write(&lock_path, "CPMDeclarePackage(NAME foo)").unwrap();

    cargo_bin_cmd!("zrythm-sbom")
        .args(["--lock", lock_path.to_str().unwrap()])
        .args(["--output", output_path.to_str().unwrap()])
        .args(["--commit", "deadbeef"])
        .assert()
        .code(0);

    let content = fs::read_to_string(&output_path).unwrap();
    assert!(content.contains("pkg:github/zrythm/zrythm@deadbeef"));
}
