//! Чтение прайс-листа из потока.

use std::io::Read;

use crate::{
    error::Result,
    report::{ParseReport, parse_report},
};

/// Метка порядка байтов UTF-8, которую добавляют некоторые редакторы.
const UTF8_BOM: char = '\u{feff}';

/// Читает весь поток как UTF-8 и разбирает его.
///
/// Начальная метка BOM отбрасывается. Невалидный UTF-8 и ошибки чтения
/// возвращаются как ошибки; нераспознанные строки ошибкой не являются.
///
/// # Пример
///
/// ```
/// use std::io::Cursor;
///
/// use pricelist::reader::read_report;
///
/// let report = read_report(Cursor::new("150 RUB x3 Widget\n")).unwrap();
/// assert_eq!(report.records.len(), 1);
/// ```
pub fn read_report<R: Read>(mut reader: R) -> Result<ParseReport> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let text = String::from_utf8(bytes)?;
    let text = text.strip_prefix(UTF8_BOM).unwrap_or(&text);
    Ok(parse_report(text))
}
