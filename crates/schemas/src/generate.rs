//! JSON Schema generation
//!
//! Reflects the record types into standalone schema documents on disk.

use std::fs;
use std::path::{Path, PathBuf};

use schemars::{schema_for, Schema};
use tracing::{debug, info};

use crate::cloudinit::Config;
use crate::csm::{Component, RedfishEndpoint};
use crate::error::SchemaError;
use crate::inventory::InventoryRequest;

/// Serialization used for written documents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON, two-space indent
    #[default]
    Json,
    /// YAML
    Yaml,
}

impl OutputFormat {
    /// File extension, without the dot
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

/// One generated schema and the name it is published under
#[derive(Debug, Clone)]
pub struct SchemaDocument {
    /// Document name, without extension
    pub name: &'static str,
    /// Reflected schema
    pub schema: Schema,
}

impl SchemaDocument {
    /// File name for `format`, e.g. `Component.json`
    pub fn file_name(&self, format: OutputFormat) -> String {
        format!("{}.{}", self.name, format.extension())
    }

    /// Render the schema as text
    pub fn render(&self, format: OutputFormat) -> Result<String, SchemaError> {
        match format {
            OutputFormat::Json => serde_json::to_string_pretty(&self.schema).map_err(|source| SchemaError::Json {
                name: self.name.to_string(),
                source,
            }),
            OutputFormat::Yaml => serde_yaml::to_string(&self.schema).map_err(|source| SchemaError::Yaml {
                name: self.name.to_string(),
                source,
            }),
        }
    }
}

/// Every published schema document
pub fn catalog() -> Vec<SchemaDocument> {
    vec![
        SchemaDocument {
            name: "Component",
            schema: schema_for!(Component),
        },
        SchemaDocument {
            name: "RedfishEndpoint",
            schema: schema_for!(RedfishEndpoint),
        },
        SchemaDocument {
            name: "InventoryDetailRequest",
            schema: schema_for!(InventoryRequest),
        },
        SchemaDocument {
            name: "CloudInitInstanceData",
            schema: schema_for!(Config),
        },
    ]
}

/// Write every catalog document into `dir`, creating it if needed.
///
/// Returns the written paths in catalog order.
pub fn write_schemas(dir: &Path, format: OutputFormat) -> Result<Vec<PathBuf>, SchemaError> {
    fs::create_dir_all(dir).map_err(|source| SchemaError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::new();
    for document in catalog() {
        let path = dir.join(document.file_name(format));
        let data = document.render(format)?;
        debug!(name = document.name, bytes = data.len(), "Rendered schema");
        fs::write(&path, data).map_err(|source| SchemaError::Io {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "Schema written");
        written.push(path);
    }
    Ok(written)
}
