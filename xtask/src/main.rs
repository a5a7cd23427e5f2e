//! # xtask - Автоматизация сборки проекта
//!
//! Команды для проверки воркспейса и запуска инструментов на фикстурах.
//!
//! См. [`HELP_TEXT`] для полного списка команд.
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use xshell::{Shell, cmd};

/// Текст справки для команды xtask.
pub const HELP_TEXT: &str = r#"xtask

Использование:
  cargo run -p xtask -- <команда>

Команды:
  help         Показать это сообщение
  fmt          Запустить rustfmt
  fmt-check    Проверить форматирование (CI)
  clippy       Запустить clippy (воркспейс)
  test         Запустить тесты через nextest и doctest'ы (воркспейс)
  ci           Запустить fmt-check + clippy + build + test
  demo         Разобрать фикстуру прайс-листа через parse_products

Примечание:
  cargo-nextest устанавливается автоматически при первом запуске тестов
"#;

/// Фикстура прайс-листа относительно корня воркспейса.
const DEMO_FIXTURE: &str = "tests/e2e/fixtures/products_raw_data.txt";

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let cmd = args.next().unwrap_or_else(|| "help".to_string());

    let sh = Shell::new()?;
    sh.change_dir(project_root()?);

    match cmd.as_str() {
        "help" | "-h" | "--help" => help(),
        "fmt" => Ok(cmd!(sh, "cargo fmt --all").run()?),
        "fmt-check" => Ok(cmd!(sh, "cargo fmt --all -- --check").run()?),
        "clippy" => Ok(cmd!(sh, "cargo clippy --workspace -- -D warnings").run()?),
        "test" => test(&sh),
        "ci" => {
            cmd!(sh, "cargo fmt --all -- --check").run()?;
            cmd!(sh, "cargo clippy --workspace -- -D warnings").run()?;
            // e2e тесты запускают собранные бинарники воркспейса
            cmd!(sh, "cargo build --workspace").run()?;
            test(&sh)
        }
        "demo" => demo(&sh),
        other => bail!("Неизвестная команда: {other}\n\nЗапустите: cargo run -p xtask -- help"),
    }
}

/// Показать сообщение справки.
fn help() -> Result<()> {
    println!("{HELP_TEXT}");
    Ok(())
}

/// Юнит-, e2e- и doc-тесты.
fn test(sh: &Shell) -> Result<()> {
    ensure_nextest(sh)?;
    cmd!(sh, "cargo nextest run --workspace").run()?;
    // nextest не умеет doctest'ы
    cmd!(sh, "cargo test --workspace --doc").run()?;
    Ok(())
}

/// Разобрать фикстуру и вывести JSON в stdout.
fn demo(sh: &Shell) -> Result<()> {
    let fixture = DEMO_FIXTURE;
    cmd!(sh, "cargo run --quiet -p parse-products -- --input {fixture}")
        .run()
        .context("parse_products failed on the demo fixture")?;
    Ok(())
}

/// Корень воркспейса (родитель директории xtask).
fn project_root() -> Result<PathBuf> {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .map(PathBuf::from)
        .context("xtask manifest directory has no parent")
}

/// Проверить наличие cargo-nextest и установить при необходимости.
fn ensure_nextest(sh: &Shell) -> Result<()> {
    // Без ignore_status(): если команда завершится с ошибкой, run() вернёт Err
    if cmd!(sh, "cargo nextest --version").quiet().run().is_ok() {
        return Ok(());
    }

    eprintln!("cargo-nextest не найден, устанавливаю...");
    cmd!(sh, "cargo install cargo-nextest --locked").run()?;
    eprintln!("cargo-nextest успешно установлен");
    Ok(())
}
