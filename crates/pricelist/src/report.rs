//! Разбор прайс-листа целиком.
//!
//! [`parse_report`] проходит по строкам входа, собирает записи в исходном
//! порядке и отдельно запоминает пропущенные строки. Разбор никогда
//! не завершается ошибкой.

use tracing::{debug, warn};

pub use crate::grammar::SkipReason;
use crate::{grammar::match_line, product::ProductRecord};

/// Строка, не давшая записи.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// Номер строки (1-based) после обрезки пробелов вокруг всего входа.
    pub line_number: usize,
    /// Строка в исходном виде.
    pub line: String,
    /// Причина пропуска.
    pub reason: SkipReason,
}

/// Итог разбора: записи и пропущенные строки.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Записи в порядке строк входа.
    pub records: Vec<ProductRecord>,
    /// Пропущенные строки в порядке входа.
    pub skipped: Vec<SkippedLine>,
}

impl ParseReport {
    /// Сколько строк было рассмотрено.
    #[must_use]
    pub fn lines_seen(&self) -> usize {
        self.records.len() + self.skipped.len()
    }

    /// `true`, если ни одна строка не пропущена.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Разбирает прайс-лист и возвращает полный отчёт.
///
/// Вход обрезается по краям и делится на строки. Каждая нераспознанная
/// строка логируется на уровне `warn` и попадает в
/// [`ParseReport::skipped`]. Пустой вход даёт пустой отчёт.
///
/// # Пример
///
/// ```
/// use pricelist::{grammar::SkipReason, parse_report};
///
/// let report = parse_report("150 RUB x3 Widget\nWidget 150\n");
///
/// assert_eq!(report.records.len(), 1);
/// assert_eq!(report.skipped.len(), 1);
/// assert_eq!(report.skipped[0].line_number, 2);
/// assert_eq!(report.skipped[0].line, "Widget 150");
/// assert_eq!(report.skipped[0].reason, SkipReason::NoMatch);
/// ```
pub fn parse_report(raw: &str) -> ParseReport {
    let mut report = ParseReport::default();
    let raw = raw.trim();

    if raw.is_empty() {
        return report;
    }

    for (idx, line) in raw.lines().enumerate() {
        let line_number = idx + 1;
        match match_line(line) {
            Ok(m) => {
                debug!(line_number, form = ?m.form, "parsed line");
                report.records.push(m.record);
            }
            Err(reason) => {
                warn!(line_number, %reason, "Could not parse line: {line}");
                report.skipped.push(SkippedLine { line_number, line: line.to_string(), reason });
            }
        }
    }

    report
}

/// Разбирает прайс-лист и возвращает только записи.
///
/// Пропущенные строки по-прежнему логируются, см. [`parse_report`].
pub fn parse(raw: &str) -> Vec<ProductRecord> {
    parse_report(raw).records
}
