//! Resource trait defining what an exposable record looks like

use crate::core::fields::SerializeConfig;
use anyhow::Result;
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

/// A record that can be exposed through the list and detail endpoints.
///
/// The layer adds no persistence of its own; implementors describe how a
/// record appears over HTTP:
/// - resource names used in URLs
/// - the full set of exposable fields ([`SerializeConfig`])
/// - the default sparse fieldset and page size
pub trait Resource: Clone + serde::Serialize + Send + Sync + 'static {
    /// The plural resource name used in URLs (e.g., "people")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "person")
    fn resource_name_singular() -> &'static str;

    /// Primary key of this record
    fn id(&self) -> Uuid;

    /// Every field this resource may reveal, including nested relations
    fn serialize_config() -> Arc<SerializeConfig>;

    /// Field paths selected when a request names none
    fn default_fields() -> &'static [&'static str] {
        &[]
    }

    /// Page size for list responses
    fn per_page() -> usize {
        100
    }

    /// Serialize the full record to JSON, before field selection
    fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, Serialize, Deserialize)]
    struct Widget {
        id: Uuid,
        name: String,
        price: f64,
    }

    impl Resource for Widget {
        fn resource_name() -> &'static str {
            "widgets"
        }

        fn resource_name_singular() -> &'static str {
            "widget"
        }

        fn id(&self) -> Uuid {
            self.id
        }

        fn serialize_config() -> Arc<SerializeConfig> {
            Arc::new(SerializeConfig::new().leaf("id").leaf("name").leaf("price"))
        }

        fn default_fields() -> &'static [&'static str] {
            &["id", "name"]
        }
    }

    #[test]
    fn test_resource_metadata() {
        assert_eq!(Widget::resource_name(), "widgets");
        assert_eq!(Widget::resource_name_singular(), "widget");
        assert_eq!(Widget::per_page(), 100);
    }

    #[test]
    fn test_to_value_serializes_all_fields() {
        let widget = Widget {
            id: Uuid::new_v4(),
            name: "bolt".to_string(),
            price: 0.25,
        };

        let value = widget.to_value().unwrap();
        assert_eq!(value["name"], "bolt");
        assert_eq!(value["price"], 0.25);
    }

    #[test]
    fn test_default_fields_narrow_the_config() {
        let config = Widget::serialize_config();
        let selected = config.select(Widget::default_fields());
        assert_eq!(selected.fields.len(), 2);
        assert!(!selected.fields.contains_key("price"));
    }
}
