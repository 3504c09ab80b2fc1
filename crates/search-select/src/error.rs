//! Error types for search-select widgets.

use crate::model::FieldRole;

/// Result type alias for search-select operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring a search-select widget.
///
/// Only construction can fail. Once built, every operation is total:
/// unmatched queries and unknown identifiers are absorbed as "no match" or
/// "no-op".
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The builder was finalized without a backing collection.
    #[error("No backing collection was supplied")]
    MissingSource,

    /// The builder was finalized without one of the item accessors.
    #[error("No {accessor} accessor was supplied")]
    MissingAccessor { accessor: FieldRole },

    /// A configured field name is empty.
    #[error("The {role} field name must not be empty")]
    EmptyFieldName { role: FieldRole },

    /// TOML configuration parsing error.
    #[error("Failed to parse TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON configuration parsing error.
    #[error("Failed to parse JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a missing accessor error.
    pub fn missing_accessor(accessor: FieldRole) -> Self {
        Self::MissingAccessor { accessor }
    }

    /// Create an empty field name error.
    pub fn empty_field_name(role: FieldRole) -> Self {
        Self::EmptyFieldName { role }
    }
}
