//! Flattened draw result representation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name of the field carrying the game number in API results.
pub const GAME_NUMBER_FIELD: &str = "numero";

/// A single draw result flattened to dotted-path keys.
///
/// Keys preserve the order in which the API reported the underlying
/// fields, so columns line up across records in the output table.
/// Values are scalar JSON leaves (string, number, boolean, null).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlatRecord {
    fields: Map<String, Value>,
}

impl FlatRecord {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self { fields: Map::new() }
    }

    /// Stores a leaf value under the given path, returning any previous value.
    pub fn insert(&mut self, path: String, value: Value) -> Option<Value> {
        self.fields.insert(path, value)
    }

    /// Returns the leaf value stored under the given path.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Value> {
        self.fields.get(path)
    }

    /// Returns the game number this record was drawn for, if present.
    #[must_use]
    pub fn game_number(&self) -> Option<u64> {
        self.fields.get(GAME_NUMBER_FIELD)?.as_u64()
    }

    /// Returns the number of leaf values in the record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns an iterator over the path strings, in insertion order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Returns an iterator over path/value pairs, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }
}

impl From<Map<String, Value>> for FlatRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl FromIterator<(String, Value)> for FlatRecord {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_and_get() {
        let mut record = FlatRecord::new();
        record.insert("numero".into(), json!(100));
        record.insert("listaRateioPremio.0.faixa".into(), json!(1));

        assert_eq!(record.get("numero"), Some(&json!(100)));
        assert_eq!(record.get("listaRateioPremio.0.faixa"), Some(&json!(1)));
        assert_eq!(record.get("absent"), None);
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_game_number() {
        let record: FlatRecord = [("numero".to_string(), json!(2500))].into_iter().collect();
        assert_eq!(record.game_number(), Some(2500));

        let record: FlatRecord = [("numero".to_string(), json!("2500"))]
            .into_iter()
            .collect();
        assert_eq!(record.game_number(), None);

        assert_eq!(FlatRecord::new().game_number(), None);
    }

    #[test]
    fn test_paths_preserve_insertion_order() {
        let mut record = FlatRecord::new();
        record.insert("numero".into(), json!(1));
        record.insert("acumulado".into(), json!(true));
        record.insert("dezenas.0".into(), json!("01"));

        let paths: Vec<_> = record.paths().collect();
        assert_eq!(paths, vec!["numero", "acumulado", "dezenas.0"]);
    }

    #[test]
    fn test_serialize_transparent() {
        let mut record = FlatRecord::new();
        record.insert("numero".into(), json!(7));
        record.insert("acumulado".into(), json!(false));

        let serialized = serde_json::to_string(&record).unwrap();
        assert_eq!(serialized, r#"{"numero":7,"acumulado":false}"#);
    }
}
