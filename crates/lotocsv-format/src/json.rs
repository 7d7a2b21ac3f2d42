//! JSON output format.
//!
//! JSON output is always UTF-8; the legacy single-byte encoding applies
//! to the delimited format only.

use lotocsv_types::FlatRecord;
use std::io::Write;

use crate::{FormatError, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum JsonStyle {
    /// JSON array (standard JSON).
    #[default]
    Array,
    /// Newline-delimited JSON (NDJSON/JSONL).
    Ndjson,
}

/// JSON formatter.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    style: JsonStyle,
}

impl JsonFormatter {
    /// Creates a formatter that writes a single JSON array.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            style: JsonStyle::Array,
        }
    }

    /// Creates a formatter that writes one record per line.
    #[must_use]
    pub const fn ndjson() -> Self {
        Self {
            style: JsonStyle::Ndjson,
        }
    }
}

impl Formatter for JsonFormatter {
    fn write_records<W: Write + Send>(
        &self,
        records: &[FlatRecord],
        mut writer: W,
    ) -> Result<(), FormatError> {
        match self.style {
            JsonStyle::Array => {
                serde_json::to_writer(&mut writer, records)?;
                writeln!(writer)?;
            }
            JsonStyle::Ndjson => {
                for record in records {
                    serde_json::to_writer(&mut writer, record)?;
                    writeln!(writer)?;
                }
            }
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        match self.style {
            JsonStyle::Array => "json",
            JsonStyle::Ndjson => "ndjson",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Cursor;

    fn test_records() -> Vec<FlatRecord> {
        vec![
            [
                ("numero".to_string(), json!(1)),
                ("dezenas.0".to_string(), json!("01")),
            ]
            .into_iter()
            .collect(),
            [("numero".to_string(), json!(2))].into_iter().collect(),
        ]
    }

    #[test]
    fn test_json_array() {
        let mut output = Cursor::new(Vec::new());
        JsonFormatter::new()
            .write_records(&test_records(), &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert_eq!(
            result,
            "[{\"numero\":1,\"dezenas.0\":\"01\"},{\"numero\":2}]\n"
        );
    }

    #[test]
    fn test_ndjson() {
        let mut output = Cursor::new(Vec::new());
        JsonFormatter::ndjson()
            .write_records(&test_records(), &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        let lines: Vec<_> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "{\"numero\":2}");
    }
}
