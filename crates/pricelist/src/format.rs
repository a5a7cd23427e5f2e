//! Выходные форматы списка записей.
//!
//! Каждый формат представлен маркерным типом, реализующим [`OutputFormat`].
//! Для выбора формата во время выполнения есть перечисление [`Format`].
//!
//! # Форматы
//!
//! - [`Json`] — массив объектов с отступом в 4 пробела
//! - [`CompactJson`] — тот же массив в одну строку
//! - [`Csv`] — заголовок `name,price,quantity` и по строке на запись
//!
//! Не-ASCII символы во всех форматах пишутся как есть, без экранирования.

use std::io::Write;

use serde::Serialize;

use crate::{error::Result, product::ProductRecord};

/// Заголовок CSV.
pub const CSV_HEADER: [&str; 3] = ["name", "price", "quantity"];

/// Отступ в JSON с форматированием.
const JSON_INDENT: &[u8] = b"    ";

/// Маркер форматированного JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

/// Маркер JSON в одну строку.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompactJson;

/// Маркер CSV.
#[derive(Debug, Clone, Copy, Default)]
pub struct Csv;

/// Сериализация всего списка записей в поток.
///
/// Список пишется целиком за один вызов: JSON-массив нельзя дописать
/// после закрывающей скобки.
pub trait OutputFormat {
    /// Записывает все записи как один документ.
    fn write_all<W: Write>(writer: &mut W, records: &[ProductRecord]) -> Result<()>;
}

impl OutputFormat for Json {
    fn write_all<W: Write>(writer: &mut W, records: &[ProductRecord]) -> Result<()> {
        let formatter = serde_json::ser::PrettyFormatter::with_indent(JSON_INDENT);
        let mut ser = serde_json::Serializer::with_formatter(&mut *writer, formatter);
        records.serialize(&mut ser)?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

impl OutputFormat for CompactJson {
    fn write_all<W: Write>(writer: &mut W, records: &[ProductRecord]) -> Result<()> {
        serde_json::to_writer(&mut *writer, records)?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

impl OutputFormat for Csv {
    fn write_all<W: Write>(writer: &mut W, records: &[ProductRecord]) -> Result<()> {
        let mut csv_writer = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
        csv_writer.write_record(CSV_HEADER)?;
        for record in records {
            csv_writer.serialize(record)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

/// Формат для выбора во время выполнения.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    /// JSON с отступами.
    #[default]
    Json,
    /// JSON в одну строку.
    CompactJson,
    /// CSV с заголовком.
    Csv,
}

impl Format {
    /// Определяет формат по расширению файла.
    ///
    /// # Примеры
    ///
    /// ```
    /// use pricelist::format::Format;
    ///
    /// assert_eq!(Format::from_extension("json"), Some(Format::Json));
    /// assert_eq!(Format::from_extension("CSV"), Some(Format::Csv));
    /// assert_eq!(Format::from_extension("txt"), None);
    /// ```
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}
