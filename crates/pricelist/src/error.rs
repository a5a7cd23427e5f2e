//! Модуль ошибок библиотеки прайс-листов.
//!
//! Нераспознанная строка ошибкой не является: она попадает в отчёт
//! разбора. Здесь собраны только сбои ввода-вывода и сериализации.

use thiserror::Error;

/// Главная ошибка крейта.
#[derive(Debug, Error)]
pub enum PriceListError {
    // === I/O ошибки ===
    /// Ошибка ввода/вывода.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Входные данные не являются корректным UTF-8.
    #[error("Invalid UTF-8 in input: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    // === Ошибки значений ===
    /// Строка не является ценой вида `<число> RUB`.
    #[error("Invalid price '{0}': expected '<digits> RUB'")]
    InvalidPrice(String),

    // === Ошибки сериализации ===
    /// Ошибка записи JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Ошибка записи CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Удобный alias для Result с [`PriceListError`].
pub type Result<T> = std::result::Result<T, PriceListError>;
