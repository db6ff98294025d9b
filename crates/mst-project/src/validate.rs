//! Definition validation logic.
//!
//! Covers file-level concerns. Graph-level rules (symmetry, weights,
//! dangling neighbors) are enforced when the definition is built into a
//! `GraphModel`.

use std::collections::HashSet;

use crate::schema::GraphDef;

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_definition(def: &GraphDef) -> Result<(), ValidationError> {
    if def.version == 0 || def.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: def.version,
        });
    }

    if def.name.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "name".to_string(),
            value: format!("{:?}", def.name),
            reason: "must not be empty".to_string(),
        });
    }

    let mut node_ids = HashSet::new();
    for node in &def.nodes {
        if node.id.is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "nodes.id".to_string(),
                value: "\"\"".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if !node_ids.insert(node.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: node.id.clone(),
                context: format!("graph '{}' nodes", def.name),
            });
        }
    }

    if let Some(start) = &def.start {
        if !node_ids.contains(start.as_str()) {
            return Err(ValidationError::MissingReference {
                id: start.clone(),
                context: "start".to_string(),
            });
        }
    }

    Ok(())
}
