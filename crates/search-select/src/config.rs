//! Configuration for string-keyed records.
//!
//! When items are loose records rather than Rust structs, the widget is
//! configured with the names of the identifier, text and image fields. The
//! configuration can be written inline or loaded from TOML or JSON:
//!
//! ```toml
//! id_field = "id"
//! query_field = "name"
//! image_field = "avatar"
//! show_all_default = true
//! ```
//!
//! # Example
//!
//! ```
//! use search_select::{Accessors, SearchSelectConfig};
//! use serde_json::json;
//!
//! let config = SearchSelectConfig::from_toml_str(
//!     r#"
//!     id_field = "id"
//!     query_field = "name"
//!     image_field = "avatar"
//!     "#,
//! )?;
//!
//! let accessors = Accessors::from_config(&config)?;
//! let ann = json!({ "id": 1, "name": "Ann", "avatar": "ann.png" });
//! assert_eq!(accessors.name_of(&ann), Some("Ann"));
//! assert_eq!(accessors.id_of(&ann), Some(json!(1)));
//! # Ok::<(), search_select::Error>(())
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use search_select_core::logging::targets;

use crate::error::{Error, Result};
use crate::model::{Accessors, DuplicatePolicy, FieldRole};

/// A schema-less item: a JSON object addressed by field name.
pub type Record = Value;

/// The identifier of a [`Record`]: a string, number or boolean field value.
pub type RecordId = Value;

/// Field names and flags for a record-backed widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSelectConfig {
    /// Name of the identifier field.
    pub id_field: String,
    /// Name of the display-text field that queries are matched against.
    pub query_field: String,
    /// Name of the image field.
    pub image_field: String,
    /// Whether an empty query matches every item.
    #[serde(default)]
    pub show_all_default: bool,
    /// How repeated selections of one identifier are recorded.
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,
}

impl SearchSelectConfig {
    /// Creates a configuration with `show_all_default` off.
    pub fn new(
        id_field: impl Into<String>,
        query_field: impl Into<String>,
        image_field: impl Into<String>,
    ) -> Self {
        Self {
            id_field: id_field.into(),
            query_field: query_field.into(),
            image_field: image_field.into(),
            show_all_default: false,
            duplicate_policy: DuplicatePolicy::default(),
        }
    }

    /// Sets whether an empty query matches every item.
    pub fn with_show_all_default(mut self, show_all: bool) -> Self {
        self.show_all_default = show_all;
        self
    }

    /// Sets the duplicate policy.
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Parses and validates a TOML configuration.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        tracing::debug!(target: targets::CONFIG, ?config, "loaded TOML configuration");
        Ok(config)
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        tracing::debug!(target: targets::CONFIG, ?config, "loaded JSON configuration");
        Ok(config)
    }

    /// Rejects blank field names.
    pub fn validate(&self) -> Result<()> {
        for (role, name) in [
            (FieldRole::Id, &self.id_field),
            (FieldRole::Name, &self.query_field),
            (FieldRole::Image, &self.image_field),
        ] {
            if name.trim().is_empty() {
                return Err(Error::empty_field_name(role));
            }
        }
        Ok(())
    }
}

impl Accessors<Record, RecordId> {
    /// Builds record accessors from configured field names.
    ///
    /// A field that is missing, or holds a value of the wrong kind, reads as
    /// absent. Identifiers must be strings, numbers or booleans; text fields
    /// must be strings.
    pub fn from_config(config: &SearchSelectConfig) -> Result<Self> {
        config.validate()?;

        let id_field = config.id_field.clone();
        let query_field = config.query_field.clone();
        let image_field = config.image_field.clone();

        Ok(Self::new(
            move |record: &Record| record.get(id_field.as_str()).and_then(scalar_id),
            move |record: &Record| record.get(query_field.as_str()).and_then(Value::as_str),
            move |record: &Record| record.get(image_field.as_str()).and_then(Value::as_str),
        ))
    }
}

fn scalar_id(value: &Value) -> Option<RecordId> {
    match value {
        Value::String(_) | Value::Number(_) | Value::Bool(_) => Some(value.clone()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_toml_defaults() {
        let config = SearchSelectConfig::from_toml_str(
            r#"
            id_field = "id"
            query_field = "name"
            image_field = "image"
            "#,
        )
        .unwrap();

        assert_eq!(config, SearchSelectConfig::new("id", "name", "image"));
        assert!(!config.show_all_default);
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Unique);
    }

    #[test]
    fn test_toml_all_fields() {
        let config = SearchSelectConfig::from_toml_str(
            r#"
            id_field = "login"
            query_field = "display_name"
            image_field = "avatar_url"
            show_all_default = true
            duplicate_policy = "allow_duplicates"
            "#,
        )
        .unwrap();

        assert!(config.show_all_default);
        assert_eq!(config.duplicate_policy, DuplicatePolicy::AllowDuplicates);
        assert_eq!(config.query_field, "display_name");
    }

    #[test]
    fn test_json_config() {
        let config = SearchSelectConfig::from_json_str(
            r#"{"id_field":"id","query_field":"name","image_field":"img","show_all_default":true}"#,
        )
        .unwrap();
        assert!(config.show_all_default);
    }

    #[test]
    fn test_missing_field_name_is_parse_error() {
        let err = SearchSelectConfig::from_toml_str(r#"id_field = "id""#).unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_blank_field_name_rejected() {
        let err = SearchSelectConfig::from_json_str(
            r#"{"id_field":"id","query_field":"  ","image_field":"img"}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::EmptyFieldName {
                role: FieldRole::Name
            }
        ));
    }

    #[test]
    fn test_accessors_reject_invalid_config() {
        let config = SearchSelectConfig::new("", "name", "image");
        let err = Accessors::from_config(&config).unwrap_err();
        assert!(matches!(err, Error::EmptyFieldName { role: FieldRole::Id }));
    }

    #[test]
    fn test_record_accessors() {
        let accessors =
            Accessors::from_config(&SearchSelectConfig::new("id", "name", "image")).unwrap();
        let record = json!({ "id": "u-7", "name": "Ann", "image": "ann.png" });

        assert_eq!(accessors.id_of(&record), Some(json!("u-7")));
        assert_eq!(accessors.name_of(&record), Some("Ann"));
        assert_eq!(accessors.image_of(&record), Some("ann.png"));
    }

    #[test]
    fn test_malformed_record_reads_absent() {
        let accessors =
            Accessors::from_config(&SearchSelectConfig::new("id", "name", "image")).unwrap();
        let record = json!({ "id": [1, 2], "name": 12 });

        assert_eq!(accessors.id_of(&record), None);
        assert_eq!(accessors.name_of(&record), None);
        assert_eq!(accessors.image_of(&record), None);
        assert_eq!(accessors.name_of(&json!("not an object")), None);
    }
}
