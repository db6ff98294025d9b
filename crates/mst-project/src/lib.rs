//! mst-project: graph definition file format and loading.

pub mod samples;
pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{LATEST_VERSION, ValidationError, validate_definition};

use std::path::Path;

use mst_graph::{GraphBuilder, GraphError, GraphModel};
use tracing::debug;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &Path) -> ProjectResult<GraphDef> {
    let content = std::fs::read_to_string(path)?;
    let def: GraphDef = serde_yaml::from_str(&content)?;
    validate_definition(&def)?;
    Ok(def)
}

pub fn save_yaml(path: &Path, def: &GraphDef) -> ProjectResult<()> {
    validate_definition(def)?;
    let content = serde_yaml::to_string(def)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<GraphDef> {
    let content = std::fs::read_to_string(path)?;
    let def: GraphDef = serde_json::from_str(&content)?;
    validate_definition(&def)?;
    Ok(def)
}

pub fn save_json(path: &Path, def: &GraphDef) -> ProjectResult<()> {
    validate_definition(def)?;
    let content = serde_json::to_string_pretty(def)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load by extension: `.json` is read as JSON, anything else as YAML.
pub fn load(path: &Path) -> ProjectResult<GraphDef> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    debug!(path = %path.display(), is_json, "loading graph definition");
    if is_json { load_json(path) } else { load_yaml(path) }
}

/// Build the immutable graph described by a definition.
pub fn build_graph(def: &GraphDef) -> ProjectResult<GraphModel> {
    validate_definition(def)?;
    let mut builder = GraphBuilder::new();
    for node in &def.nodes {
        builder.add_adjacency(
            node.id.as_str(),
            node.neighbors.iter().map(|n| (n.node.as_str(), n.weight)),
        )?;
    }
    Ok(builder.build()?)
}
