use std::fs;

use assert_cmd::Command;
use tempfile::TempDir;

#[test]
fn compiles_files_into_output_dir() {
    let work = TempDir::new().expect("workdir");
    let input = work.path().join("test.js");
    fs::write(&input, "def add(a,b) add(a,b) end").expect("write input");
    let outputs = work.path().join("outputs");

    let mut cmd = Command::cargo_bin("defc").expect("binary");
    cmd.arg(&input).arg("--output-dir").arg(&outputs).arg("--tokens");
    let out = cmd.output().expect("run defc");

    assert!(out.status.success(), "defc failed: stderr={}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Identifier(add)"));
    assert!(stdout.contains("def add(a,b): return add(a,b)"));

    let generated = fs::read_to_string(outputs.join("test_result.py")).expect("generated file");
    assert_eq!(generated, "def add(a,b): return add(a,b)");
}

#[test]
fn bad_file_fails_without_stopping_others() {
    let work = TempDir::new().expect("workdir");
    let good = work.path().join("good.js");
    let bad = work.path().join("bad.js");
    fs::write(&good, "def id(x) x end").expect("write good");
    fs::write(&bad, "def f(x x end").expect("write bad");
    let outputs = work.path().join("outputs");

    let mut cmd = Command::cargo_bin("defc").expect("binary");
    cmd.arg(&bad).arg(&good).arg("-o").arg(&outputs);
    let out = cmd.output().expect("run defc");

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Error: UnexpectedToken"), "stderr={stderr}");

    assert!(outputs.join("good_result.py").exists());
    assert!(!outputs.join("bad_result.py").exists());
}

#[test]
fn no_write_only_prints() {
    let work = TempDir::new().expect("workdir");
    let input = work.path().join("one.js");
    fs::write(&input, "def one() 1 end").expect("write input");
    let outputs = work.path().join("outputs");

    let mut cmd = Command::cargo_bin("defc").expect("binary");
    cmd.arg(&input).arg("-o").arg(&outputs).arg("--no-write");
    let out = cmd.output().expect("run defc");

    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("def one(): return 1"));
    assert!(!outputs.exists());
}

#[test]
fn too_deep_file_fails_without_stopping_others() {
    let work = TempDir::new().expect("workdir");
    let deep = work.path().join("deep.js");
    let good = work.path().join("good.js");
    fs::write(&deep, format!("def f() {}1{} end", "g(".repeat(300), ")".repeat(300))).expect("write deep");
    fs::write(&good, "def one() 1 end").expect("write good");
    let outputs = work.path().join("outputs");

    let mut cmd = Command::cargo_bin("defc").expect("binary");
    cmd.arg(&deep).arg(&good).arg("-o").arg(&outputs);
    let out = cmd.output().expect("run defc");

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Error: NestingTooDeep"), "stderr={stderr}");

    assert!(outputs.join("good_result.py").exists());
    assert!(!outputs.join("deep_result.py").exists());
}

#[test]
fn max_depth_flag_raises_the_limit() {
    let work = TempDir::new().expect("workdir");
    let deep = work.path().join("deep.js");
    fs::write(&deep, format!("def f() {}1{} end", "g(".repeat(300), ")".repeat(300))).expect("write deep");
    let outputs = work.path().join("outputs");

    let mut cmd = Command::cargo_bin("defc").expect("binary");
    cmd.arg(&deep).arg("-o").arg(&outputs).arg("--max-depth").arg("512");
    let out = cmd.output().expect("run defc");

    assert!(out.status.success(), "stderr={}", String::from_utf8_lossy(&out.stderr));
    assert!(outputs.join("deep_result.py").exists());
}
