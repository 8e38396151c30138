//! Exporter configuration: environment settings and the code-name mapping.

pub mod env;
pub mod schema;

use std::fs;
use std::path::Path;

use fxgauge_core::error::{FxError, Result};

pub use env::Settings;
pub use schema::{CodeNameMapping, MappingFile};

pub fn load_from_file(path: &Path) -> Result<CodeNameMapping> {
    let s = fs::read_to_string(path).map_err(|e| {
        FxError::Config(format!("read mapping file {} failed: {e}", path.display()))
    })?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<CodeNameMapping> {
    if s.trim().is_empty() {
        return Ok(CodeNameMapping::default());
    }
    let file: MappingFile =
        serde_yaml::from_str(s).map_err(|e| FxError::Config(format!("invalid yaml: {e}")))?;
    Ok(file.into())
}

/// Load the mapping, degrading to an empty one on any problem.
///
/// A missing or broken file must not stop the exporter: unmapped codes are
/// still published, only with an empty `name` label.
pub fn load_mapping_or_empty(path: Option<&Path>) -> CodeNameMapping {
    let Some(path) = path else {
        tracing::info!("no mapping file configured");
        return CodeNameMapping::default();
    };

    match load_from_file(path) {
        Ok(mapping) => {
            tracing::info!(path = %path.display(), entries = mapping.len(), "mapping loaded");
            mapping
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "mapping unavailable, using empty mapping");
            CodeNameMapping::default()
        }
    }
}
