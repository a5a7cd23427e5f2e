//! E2E тесты для CLI инструмента `dns_check`.
//!
//! Сеть не используется: проверяются IP-литералы, которые системный
//! резолвер разбирает локально.

use assert_cmd::Command;
use predicates::prelude::*;

/// Создать команду для запуска dns_check.
#[expect(deprecated)]
fn dns_check() -> Command {
    Command::cargo_bin("dns_check").unwrap()
}

#[test]
fn test_ipv4_literal_text_output() {
    dns_check()
        .args(["127.0.0.1"])
        .assert()
        .success()
        .stdout("127.0.0.1  A: 127.0.0.1  AAAA: none\n");
}

#[test]
fn test_ipv6_literal_text_output() {
    dns_check().args(["::1"]).assert().success().stdout("::1  A: none  AAAA: ::1\n");
}

#[test]
fn test_json_output_keeps_order() {
    let output = dns_check()
        .args(["--json", "::1", "127.0.0.1"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value[0]["domain"], "::1");
    assert!(value[0]["ipv4"].is_null());
    assert_eq!(value[0]["ipv6"][0], "::1");
    assert_eq!(value[1]["domain"], "127.0.0.1");
    assert_eq!(value[1]["ipv4"][0], "127.0.0.1");
}

#[test]
fn test_missing_domains() {
    dns_check().assert().failure().stderr(predicate::str::contains("DOMAINS"));
}
