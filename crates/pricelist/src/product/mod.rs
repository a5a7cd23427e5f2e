//! Модель данных позиции прайс-листа.
//!
//! Определяет [`ProductRecord`] и цену [`Price`], общие для разбора
//! и для всех выходных форматов.

mod types;

pub use types::{CURRENCY, Price, ProductRecord};
