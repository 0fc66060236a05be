use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn assembler() -> Command {
    let mut cmd = Command::cargo_bin("rpm-assembler").unwrap();
    for var in ["NAME", "VERSION", "RELEASE", "ARCH", "OUTPUT", "REQUIRES"] {
        cmd.env_remove(format!("RPM_ASSEMBLER_{var}"));
    }
    cmd
}

#[test]
fn test_name_is_required() {
    assembler()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--name"));
}

#[test]
fn test_rejects_malformed_file_spec() {
    let temp_dir = TempDir::new().unwrap();
    assembler()
        .args(["--name", "hello", "--output"])
        .arg(temp_dir.path())
        .arg("no-destination")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid input file: no-destination"));

    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_rejects_bad_mode() {
    let temp_dir = TempDir::new().unwrap();
    let src = temp_dir.path().join("hello.sh");
    fs::write(&src, "echo hello\n").unwrap();

    assembler()
        .args(["--name", "hello"])
        .arg(format!("{}:/usr/bin/hello:xyz", src.display()))
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid input file mode"));
}

#[test]
fn test_rejects_bad_relation() {
    assembler()
        .args(["--name", "hello", "--requires", "glibc >="])
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires relation"));
}

#[test]
fn test_writes_package_into_new_directory() {
    let temp_dir = TempDir::new().unwrap();
    let src = temp_dir.path().join("hello.sh");
    fs::write(&src, "#!/bin/sh\necho hello\n").unwrap();
    let out_dir = temp_dir.path().join("dist");

    assembler()
        .args(["--name", "hello", "--version", "1.0", "--release", "1"])
        .args(["--licence", "MIT", "--summary", "says hello"])
        .args(["--requires", "bash"])
        .arg("--output")
        .arg(format!("{}/", out_dir.display()))
        .arg(format!("{}:/usr/bin/hello:0755", src.display()))
        .assert()
        .success();

    let package = out_dir.join("hello-1.0-1.noarch.rpm");
    let bytes = fs::read(&package).unwrap();
    assert_eq!(&bytes[..4], &[0xed, 0xab, 0xee, 0xdb]);
}

#[test]
fn test_reads_options_from_environment() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("custom.rpm");

    assembler()
        .env("RPM_ASSEMBLER_NAME", "envpkg")
        .env("RPM_ASSEMBLER_ARCH", "x86_64")
        .env("RPM_ASSEMBLER_OUTPUT", &target)
        .assert()
        .success();

    assert!(target.is_file());
}
