//! E2E тесты для CLI инструмента `parse_products`.
//!
//! Проверяем:
//! - разбор фикстуры в JSON и CSV
//! - чтение из stdin и запись в stdout
//! - диагностику нераспознанных строк и режим `--strict`

use std::fs;

use assert_cmd::Command;
use e2e_tests::fixture;
use predicates::prelude::*;
use tempfile::tempdir;

/// Создать команду для запуска parse_products.
///
/// `cargo_bin` deprecated из-за edge case с custom build directories,
/// но это единственный способ для кросс-крейтовых бинарников.
#[expect(deprecated)]
fn parse_products() -> Command {
    Command::cargo_bin("parse_products").unwrap()
}

fn fixture_path() -> String {
    fixture("products_raw_data.txt").to_str().unwrap().to_string()
}

// ============================================================================
// Тесты вывода
// ============================================================================

#[test]
fn test_fixture_to_json_file() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("products_structured_data.json");

    parse_products()
        .args(["--input", &fixture_path(), "--output", output.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Parsed 4 product(s), skipped 1 line(s)"));

    let content = fs::read_to_string(&output).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    let items = value.as_array().unwrap();

    assert_eq!(items.len(), 4);
    assert_eq!(items[0]["name"], "Набор наклеек «Rust»");
    assert_eq!(items[0]["price"], "150 RUB");
    assert_eq!(items[0]["quantity"], 3);
    assert_eq!(items[1]["quantity"], 1);
    assert_eq!(items[3]["name"], "Подписка на месяц");
}

#[test]
fn test_json_keeps_cyrillic_unescaped_and_indented() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.json");

    parse_products()
        .args(["-i", &fixture_path(), "-o", output.to_str().unwrap()])
        .assert()
        .success();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("Ключ Steam"));
    assert!(!content.contains("\\u"));
    assert!(content.starts_with("[\n    {\n        \"name\""));
}

#[test]
fn test_csv_inferred_from_extension() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("products.csv");

    parse_products()
        .args(["-i", &fixture_path(), "-o", output.to_str().unwrap()])
        .assert()
        .success();

    let content = fs::read_to_string(&output).unwrap();
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines[0], "name,price,quantity");
    assert_eq!(lines[2], "Ключ Steam,200 RUB,1");
    assert_eq!(lines.len(), 5);
}

#[test]
fn test_compact_json_to_stdout() {
    parse_products()
        .args(["--compact"])
        .write_stdin("150 RUB x3 Widget\n200 RUB Gadget\n")
        .assert()
        .success()
        .stdout(
            "[{\"name\":\"Widget\",\"price\":\"150 RUB\",\"quantity\":3},\
             {\"name\":\"Gadget\",\"price\":\"200 RUB\",\"quantity\":1}]\n",
        );
}

#[test]
fn test_empty_stdin_gives_empty_array() {
    parse_products()
        .write_stdin("")
        .assert()
        .success()
        .stdout("[]\n")
        .stderr(predicate::str::contains("Could not parse line").not());
}

// ============================================================================
// Тесты диагностики
// ============================================================================

#[test]
fn test_unparseable_line_is_reported() {
    parse_products()
        .write_stdin("Widget 150\n200 RUB Gadget\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Could not parse line: Widget 150"));
}

#[test]
fn test_strict_fails_on_skipped_lines() {
    parse_products()
        .args(["-i", &fixture_path(), "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 line(s) could not be parsed"));
}

#[test]
fn test_strict_passes_clean_input() {
    parse_products().args(["--strict"]).write_stdin("200 RUB Gadget\n").assert().success();
}

// ============================================================================
// Тесты обработки ошибок
// ============================================================================

#[test]
fn test_missing_input_file() {
    parse_products()
        .args(["--input", "/nonexistent/path/to/products.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open input file"));
}

#[test]
fn test_invalid_utf8_input() {
    parse_products()
        .write_stdin(vec![0xff, 0xfe, b'\n'])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read price list"));
}

#[test]
fn test_unknown_output_format() {
    parse_products()
        .args(["--output-format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output-format"));
}
