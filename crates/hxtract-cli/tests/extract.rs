//! End-to-end tests for the extract command.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

const SAMPLE_SHEET: &str = "技术数据表\n\
    压力 设计 0.8/FV 1.0/FV 焊接接头系数 0.85 0.85\n\
    MPa(G) 操作 0.5 0.02 无损检测方法 RT\n\
    温度 设计 220 220\n\
    风速 m/s 1.3 设备净重 kg 8102\n";

#[test]
fn extract_emits_json_record() {
    let mut dump = tempfile::NamedTempFile::new().unwrap();
    dump.write_all(SAMPLE_SHEET.as_bytes()).unwrap();

    Command::cargo_bin("hxtract")
        .unwrap()
        .arg("extract")
        .arg(dump.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("0.8/FV / 1.0/FV"))
        .stdout(predicate::str::contains("8102 kg"))
        .stdout(predicate::str::contains("220 / 220"));
}

#[test]
fn extract_text_format_lists_every_field() {
    let mut dump = tempfile::NamedTempFile::new().unwrap();
    dump.write_all(SAMPLE_SHEET.as_bytes()).unwrap();

    Command::cargo_bin("hxtract")
        .unwrap()
        .args(["extract", "--format", "text"])
        .arg(dump.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("设计压力/MPa: 0.8/FV / 1.0/FV"))
        .stdout(predicate::str::contains("台数: 1"));
}

#[test]
fn extract_rejects_missing_file() {
    Command::cargo_bin("hxtract")
        .unwrap()
        .args(["extract", "no-such-file.txt"])
        .assert()
        .failure();
}
