//! Основные типы позиции прайс-листа.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::PriceListError;

/// Валюта прайс-листа. Единственная поддерживаемая.
pub const CURRENCY: &str = "RUB";

/// Цена позиции в виде `<число> RUB`.
///
/// Число хранится как исходная строка цифр: цена не переводится
/// в числовой тип и выводится ровно так, как была записана.
///
/// # Пример
/// ```
/// use pricelist::product::Price;
///
/// let price: Price = "150 RUB".parse().unwrap();
/// assert_eq!(price.amount(), "150");
/// assert_eq!(price.to_string(), "150 RUB");
/// assert!("150 USD".parse::<Price>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Price {
    amount: String,
}

impl Price {
    /// Создаёт цену из строки цифр.
    ///
    /// Возвращает ошибку, если строка пуста или содержит не только цифры.
    pub fn from_amount(amount: &str) -> Result<Self, PriceListError> {
        if amount.is_empty() || !amount.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PriceListError::InvalidPrice(amount.to_string()));
        }
        Ok(Self { amount: amount.to_string() })
    }

    /// Сумма без валюты, в исходной записи.
    #[must_use]
    pub fn amount(&self) -> &str {
        &self.amount
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {CURRENCY}", self.amount)
    }
}

impl FromStr for Price {
    type Err = PriceListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(' ') {
            Some((amount, CURRENCY)) => Self::from_amount(amount),
            _ => Err(PriceListError::InvalidPrice(s.to_string())),
        }
    }
}

impl From<Price> for String {
    fn from(price: Price) -> Self {
        price.to_string()
    }
}

impl TryFrom<String> for Price {
    type Error = PriceListError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Одна позиция прайс-листа.
///
/// Каждая запись соответствует ровно одной распознанной строке входа.
/// Порядок полей совпадает с порядком ключей в выходном JSON.
///
/// # Пример
///
/// ```
/// use pricelist::product::{Price, ProductRecord};
///
/// let record = ProductRecord {
///     name: "Набор скинов".to_string(),
///     price: "150 RUB".parse().unwrap(),
///     quantity: 3,
/// };
///
/// let json = serde_json::to_string(&record).unwrap();
/// assert_eq!(json, r#"{"name":"Набор скинов","price":"150 RUB","quantity":3}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Название позиции без окружающих пробелов. Не пустое.
    pub name: String,
    /// Цена в виде `<число> RUB`.
    pub price: Price,
    /// Количество, не меньше `1`.
    pub quantity: u32,
}
