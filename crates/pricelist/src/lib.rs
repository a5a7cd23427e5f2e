//! Библиотека разбора прайс-листов магазина.
//!
//! Крейт превращает полуструктурированный текстовый прайс-лист
//! (по одной позиции на строку) в упорядоченный список записей
//! [`ProductRecord`](product::ProductRecord) и сериализует его в JSON или CSV.
//!
//! Поддерживаются две формы строки:
//!
//! - **С количеством** — `150 RUB x3 Виджет`
//! - **Только цена** — `200 RUB Гаджет` (количество по умолчанию `1`)
//!
//! Строки, не подходящие ни под одну форму, не прерывают разбор:
//! они попадают в [`ParseReport::skipped`](report::ParseReport::skipped)
//! и логируются через `tracing`.
//!
//! # Быстрый старт
//!
//! ```
//! use pricelist::prelude::*;
//!
//! let records = parse("150 RUB x3 Widget\n200 RUB Gadget\nWidget 150");
//!
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].name, "Widget");
//! assert_eq!(records[0].price.to_string(), "150 RUB");
//! assert_eq!(records[0].quantity, 3);
//! assert_eq!(records[1].quantity, 1);
//! ```

pub mod error;
pub mod format;
pub mod grammar;
pub mod product;
pub mod reader;
pub mod report;
pub mod writer;

pub use error::{PriceListError, Result};
pub use report::{parse, parse_report};

/// Часто используемые типы одним импортом.
pub mod prelude {
    pub use crate::{
        error::{PriceListError, Result},
        format::{CompactJson, Csv, Format, Json, OutputFormat},
        grammar::{GrammarForm, LineMatch},
        product::{CURRENCY, Price, ProductRecord},
        reader::read_report,
        report::{ParseReport, SkipReason, SkippedLine, parse, parse_report},
        writer::ProductWriter,
    };
}
