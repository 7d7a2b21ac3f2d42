//! Legacy delimited-text output format.
//!
//! Matches the conventions of the historical export: `;` field
//! separator, `,` decimal separator, and ISO-8859-1 bytes on disk.

use lotocsv_types::{FlatRecord, GAME_NUMBER_FIELD};
use serde_json::Value;
use std::collections::HashSet;
use std::io::Write;

use crate::{FormatError, Formatter};

/// Delimited-text formatter with legacy CSV conventions.
///
/// The column set is the union of flattened paths across all records,
/// with `numero` (the row key) first and the remaining columns in
/// first-seen order. Missing fields render as empty cells.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field separator (default: semicolon).
    delimiter: char,
    /// Decimal separator for fractional numbers (default: comma).
    decimal: char,
    /// Whether to include a header row.
    include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvFormatter {
    /// Creates a formatter with the legacy defaults.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ';',
            decimal: ',',
            include_header: true,
        }
    }

    /// Sets the field separator.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the decimal separator used for fractional numbers.
    #[must_use]
    pub const fn with_decimal(mut self, decimal: char) -> Self {
        self.decimal = decimal;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Renders a single cell value.
    fn render(&self, value: &Value) -> String {
        let raw = match value {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => {
                let s = n.to_string();
                if n.is_f64() {
                    s.replace('.', &self.decimal.to_string())
                } else {
                    s
                }
            }
            Value::String(s) => s.clone(),
            // Records hold scalar leaves only; fall back to compact JSON.
            other => other.to_string(),
        };
        self.quote(&raw)
    }

    /// Quotes a field when it contains the separator, quotes, or line breaks.
    fn quote(&self, field: &str) -> String {
        let needs_quoting = field
            .chars()
            .any(|c| c == self.delimiter || c == '"' || c == '\n' || c == '\r');
        if needs_quoting {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }
}

impl Formatter for CsvFormatter {
    fn write_records<W: Write + Send>(
        &self,
        records: &[FlatRecord],
        mut writer: W,
    ) -> Result<(), FormatError> {
        // No records means no columns, so there is no header to write.
        if records.is_empty() {
            return Ok(());
        }

        let columns = column_order(records);
        let separator = self.delimiter.to_string();

        if self.include_header {
            let header = columns
                .iter()
                .map(|c| self.quote(c))
                .collect::<Vec<_>>()
                .join(&separator);
            write_latin1_line(&mut writer, &header)?;
        }

        for record in records {
            let row = columns
                .iter()
                .map(|column| record.get(column).map_or_else(String::new, |v| self.render(v)))
                .collect::<Vec<_>>()
                .join(&separator);
            write_latin1_line(&mut writer, &row)?;
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        "csv"
    }
}

/// Computes the output column set: `numero` first, then the union of
/// the remaining paths in first-seen order.
fn column_order(records: &[FlatRecord]) -> Vec<String> {
    let mut columns = Vec::new();
    let mut seen = HashSet::new();

    if records.iter().any(|r| r.get(GAME_NUMBER_FIELD).is_some()) {
        columns.push(GAME_NUMBER_FIELD.to_string());
        seen.insert(GAME_NUMBER_FIELD.to_string());
    }

    for record in records {
        for path in record.paths() {
            if seen.insert(path.to_string()) {
                columns.push(path.to_string());
            }
        }
    }

    columns
}

/// Encodes one line as ISO-8859-1 and writes it with a trailing newline.
fn write_latin1_line<W: Write>(writer: &mut W, line: &str) -> Result<(), FormatError> {
    let mut bytes = Vec::with_capacity(line.len() + 1);
    for ch in line.chars() {
        let code = u32::from(ch);
        if code > 0xFF {
            return Err(FormatError::Encoding { ch });
        }
        bytes.push(code as u8);
    }
    bytes.push(b'\n');
    writer.write_all(&bytes)?;
    Ok(())
}
