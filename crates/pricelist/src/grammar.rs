//! Грамматика строки прайс-листа.
//!
//! Строка распознаётся одной из двух форм, которые проверяются строго
//! в порядке [`GrammarForm::PRECEDENCE`]. Решает первая сработавшая форма:
//! если её данные невалидны, следующие формы уже не пробуются.
//!
//! Форма [`GrammarForm::PriceOnly`] описывает подмножество строк
//! [`GrammarForm::WithQuantity`] и на практике не срабатывает. Она оставлена,
//! чтобы порядок разбора был записан явно.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use thiserror::Error;

use crate::product::{Price, ProductRecord};

/// `<число> RUB[ x<число>] <название>`
static WITH_QUANTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?<amount>[0-9]+) RUB(?: x(?<quantity>[0-9]+))? (?<name>.+)")
        .expect("valid WITH_QUANTITY regex")
});

/// `<число> RUB <название>`
static PRICE_ONLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?<amount>[0-9]+) RUB (?<name>.+)").expect("valid PRICE_ONLY regex")
});

/// Форма строки прайс-листа.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrammarForm {
    /// `150 RUB x3 Виджет`, маркер количества необязателен.
    WithQuantity,
    /// `200 RUB Гаджет`, количество всегда `1`.
    PriceOnly,
}

/// Почему строка не дала записи.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    /// Ни одна форма не подошла.
    #[error("line matches no known form")]
    NoMatch,
    /// После цены остались только пробелы.
    #[error("product name is empty")]
    EmptyName,
    /// Количество равно нулю или не помещается в `u32`.
    #[error("invalid quantity '{0}'")]
    InvalidQuantity(String),
}

/// Результат сопоставления строки с формой.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
    /// Сработавшая форма.
    pub form: GrammarForm,
    /// Извлечённая запись.
    pub record: ProductRecord,
}

impl GrammarForm {
    /// Порядок проверки форм. Первая сработавшая побеждает.
    pub const PRECEDENCE: [GrammarForm; 2] = [GrammarForm::WithQuantity, GrammarForm::PriceOnly];

    fn regex(self) -> &'static Regex {
        match self {
            Self::WithQuantity => &WITH_QUANTITY,
            Self::PriceOnly => &PRICE_ONLY,
        }
    }

    /// Пробует только эту форму.
    ///
    /// `None` означает, что строка синтаксически не подходит под форму.
    pub fn try_match(self, line: &str) -> Option<Result<LineMatch, SkipReason>> {
        let caps = self.regex().captures(line)?;
        Some(self.extract(&caps))
    }

    fn extract(self, caps: &Captures<'_>) -> Result<LineMatch, SkipReason> {
        // Группа состоит только из ASCII-цифр, ошибка невозможна.
        let price = Price::from_amount(&caps["amount"]).map_err(|_| SkipReason::NoMatch)?;

        let quantity = match caps.name("quantity") {
            Some(raw) => match raw.as_str().parse::<u32>() {
                Ok(q) if q > 0 => q,
                _ => return Err(SkipReason::InvalidQuantity(raw.as_str().to_string())),
            },
            None => 1,
        };

        let name = caps["name"].trim();
        if name.is_empty() {
            return Err(SkipReason::EmptyName);
        }

        let record = ProductRecord { name: name.to_string(), price, quantity };
        Ok(LineMatch { form: self, record })
    }
}

/// Сопоставляет строку с формами в порядке [`GrammarForm::PRECEDENCE`].
///
/// # Примеры
///
/// ```
/// use pricelist::grammar::{GrammarForm, SkipReason, match_line};
///
/// let m = match_line("150 RUB x3 Widget").unwrap();
/// assert_eq!(m.form, GrammarForm::WithQuantity);
/// assert_eq!(m.record.quantity, 3);
///
/// assert_eq!(match_line("Widget 150"), Err(SkipReason::NoMatch));
/// ```
pub fn match_line(line: &str) -> Result<LineMatch, SkipReason> {
    GrammarForm::PRECEDENCE
        .iter()
        .find_map(|form| form.try_match(line))
        .unwrap_or(Err(SkipReason::NoMatch))
}
