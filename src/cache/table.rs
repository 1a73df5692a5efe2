//! Mapping Table Module
//!
//! The filename -> download-URL table parsed from the remote mapping document.

use std::collections::HashMap;

use serde::Deserialize;

// == Mapping Table ==
/// Filename to redirect-URL mapping.
///
/// Parsed directly from the upstream JSON object. Immutable once built;
/// refreshes replace the whole table, never merge into it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct MappingTable {
    entries: HashMap<String, String>,
}

impl MappingTable {
    // == Lookup ==
    /// Returns the redirect target for `filename`, if one is mapped.
    pub fn lookup(&self, filename: &str) -> Option<&str> {
        self.entries.get(filename).map(String::as_str)
    }

    // == Length ==
    /// Returns the number of mapped filenames.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if no filenames are mapped.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for MappingTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_deserialize() {
        let json = r#"{"app-v1.apk": "https://cdn.example.com/app-v1.apk"}"#;
        let table: MappingTable = serde_json::from_str(json).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(
            table.lookup("app-v1.apk"),
            Some("https://cdn.example.com/app-v1.apk")
        );
    }

    #[test]
    fn test_table_lookup_absent() {
        let json = r#"{"app-v1.apk": "https://cdn.example.com/app-v1.apk"}"#;
        let table: MappingTable = serde_json::from_str(json).unwrap();

        assert_eq!(table.lookup("app-v2.apk"), None);
    }

    #[test]
    fn test_table_empty_document() {
        let table: MappingTable = serde_json::from_str("{}").unwrap();

        assert!(table.is_empty());
        assert_eq!(table.lookup("anything.apk"), None);
    }

    #[test]
    fn test_table_rejects_non_object() {
        // The mapping document must be a JSON object of string pairs.
        assert!(serde_json::from_str::<MappingTable>("[1, 2, 3]").is_err());
        assert!(serde_json::from_str::<MappingTable>(r#"{"k": 42}"#).is_err());
    }

    #[test]
    fn test_table_from_iter() {
        let table: MappingTable = [(
            "app-v1.apk".to_string(),
            "https://cdn.example.com/app-v1.apk".to_string(),
        )]
        .into_iter()
        .collect();

        assert_eq!(table.len(), 1);
        assert!(table.lookup("app-v1.apk").is_some());
    }
}
