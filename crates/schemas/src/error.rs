//! Schema crate errors

use std::path::PathBuf;

use thiserror::Error;

use crate::xname::XnameKind;

/// Errors raised while reading or checking an xname
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum XnameError {
    /// Accessor called on a wrapper holding an empty string
    #[error("xname is empty")]
    EmptyIdentifier,

    /// Input does not match the anchored grammar of the requested form
    #[error("xname {value} does not match the {kind} pattern")]
    PatternMismatch {
        /// Form the input was checked against
        kind: XnameKind,
        /// Offending input
        value: String,
    },

    /// A matched digit group could not be read as an integer
    #[error("{field} is not a valid number: {value}")]
    InvalidNumericField {
        /// Name of the field (cabinet, chassis, slot, bmc, node)
        field: &'static str,
        /// Text captured for the field
        value: String,
    },

    /// Decoded record whose kind and node position disagree
    #[error("xname kind {kind:?} does not agree with node position {node_position:?}")]
    InconsistentComponents {
        /// Declared kind
        kind: Option<XnameKind>,
        /// Declared node position
        node_position: Option<u64>,
    },

    /// A numeric field exceeds its bound
    #[error("{field} {value} exceeds the maximum allowed value of {max}")]
    OutOfRange {
        /// Name of the field (cabinet, chassis, slot, bmc, node)
        field: &'static str,
        /// Parsed value
        value: u64,
        /// Largest accepted value
        max: u64,
    },
}

/// Errors raised by vocabulary parsing and schema generation
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Text is not one of the values of a vocabulary
    #[error("unknown {type_name} value: {value}")]
    UnknownVariant {
        /// Vocabulary name (e.g. "ComponentType")
        type_name: &'static str,
        /// Rejected text
        value: String,
    },

    /// Filesystem error while writing schema documents
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        /// Path being created or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// JSON rendering error
    #[error("JSON serialization error for {name}: {source}")]
    Json {
        /// Document being rendered
        name: String,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },

    /// YAML rendering error
    #[error("YAML serialization error for {name}: {source}")]
    Yaml {
        /// Document being rendered
        name: String,
        /// Underlying error
        #[source]
        source: serde_yaml::Error,
    },
}
