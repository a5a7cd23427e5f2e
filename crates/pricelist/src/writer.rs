//! Буферизованный writer для списка записей.
//!
//! Предоставляет [`ProductWriter`] для записи записей в любой тип,
//! реализующий [`Write`].

use std::{
    io::{BufWriter, Write},
    marker::PhantomData,
};

use crate::{error::Result, format::OutputFormat, product::ProductRecord};

/// Writer для списка записей.
///
/// # Type Parameters
///
/// - `W`: целевой поток (реализует [`Write`])
/// - `F`: формат (реализует [`OutputFormat`])
///
/// # Пример
///
/// ```
/// use pricelist::{format::Json, parse, writer::ProductWriter};
///
/// let records = parse("150 RUB x3 Widget");
///
/// let mut output = Vec::new();
/// let mut writer = ProductWriter::<_, Json>::new(&mut output);
/// writer.write_records(&records).unwrap();
/// writer.flush().unwrap();
/// assert_eq!(writer.records_written(), 1);
/// drop(writer);
///
/// assert!(String::from_utf8(output).unwrap().contains("\"quantity\": 3"));
/// ```
pub struct ProductWriter<W: Write, F: OutputFormat> {
    inner: BufWriter<W>,
    _format: PhantomData<F>,
    /// Счётчик записанных записей.
    records_written: usize,
}

impl<W: Write, F: OutputFormat> ProductWriter<W, F> {
    /// Создаёт новый writer.
    pub fn new(writer: W) -> Self {
        Self { inner: BufWriter::new(writer), _format: PhantomData, records_written: 0 }
    }

    /// Записывает список записей как один документ формата `F`.
    ///
    /// Каждый вызов пишет отдельный законченный документ.
    pub fn write_records(&mut self, records: &[ProductRecord]) -> Result<()> {
        F::write_all(&mut self.inner, records)?;
        self.records_written += records.len();
        Ok(())
    }

    /// Принудительно сбрасывает буфер.
    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Возвращает количество записанных записей.
    #[must_use]
    pub fn records_written(&self) -> usize {
        self.records_written
    }

    /// Извлекает внутренний writer (с предварительным flush).
    pub fn into_inner(self) -> std::result::Result<W, std::io::IntoInnerError<BufWriter<W>>> {
        self.inner.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        format::{Csv, Json},
        parse,
    };

    #[test]
    fn test_write_json() {
        let records = parse("150 RUB x3 Widget\n200 RUB Gadget");
        let mut writer = ProductWriter::<_, Json>::new(Vec::new());
        writer.write_records(&records).unwrap();

        let output = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["name"], "Widget");
        assert_eq!(value[0]["price"], "150 RUB");
        assert_eq!(value[0]["quantity"], 3);
        assert_eq!(value[1]["quantity"], 1);
    }

    #[test]
    fn test_write_csv() {
        let records = parse("150 RUB x3 Widget");
        let mut writer = ProductWriter::<_, Csv>::new(Vec::new());
        writer.write_records(&records).unwrap();

        let output = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(output, "name,price,quantity\nWidget,150 RUB,3\n");
    }

    #[test]
    fn test_records_written_counter() {
        let records = parse("1 RUB a\n2 RUB b");
        let mut writer = ProductWriter::<_, Json>::new(Vec::new());

        assert_eq!(writer.records_written(), 0);
        writer.write_records(&records).unwrap();
        assert_eq!(writer.records_written(), 2);
        writer.write_records(&[]).unwrap();
        assert_eq!(writer.records_written(), 2);
    }
}
