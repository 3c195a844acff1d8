use crate::model::FilterRecord;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The persisted settings document for one connection.
///
/// The filter list is the only section this crate models. Every other key of
/// the document is captured on load and rewritten untouched on save, so
/// editing filters never loses unrelated connection settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionConfig {
    #[serde(default)]
    pub object_filters: Vec<FilterRecord>,

    #[serde(flatten)]
    pub retained: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_loads_as_default() {
        let config: ConnectionConfig = serde_json::from_str("{}").unwrap();
        assert!(config.object_filters.is_empty());
        assert!(config.retained.is_empty());
    }

    #[test]
    fn filter_list_uses_camel_case_key() {
        let mut config = ConnectionConfig::default();
        config.object_filters.push(FilterRecord::template(0));

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"objectFilters\""));
    }

    #[test]
    fn unmodeled_keys_survive_a_round_trip() {
        let json = r#"{
            "host": "dev.example.com",
            "port": 22,
            "objectFilters": []
        }"#;
        let config: ConnectionConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.retained["host"], "dev.example.com");

        let rewritten: Value = serde_json::to_value(&config).unwrap();
        assert_eq!(rewritten["host"], "dev.example.com");
        assert_eq!(rewritten["port"], 22);
    }
}
