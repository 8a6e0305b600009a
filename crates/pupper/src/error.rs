//! Error types for the pupper host.

use std::path::PathBuf;

use pupper_armature::ParseError;
use pupper_glyph::RenderError;
use thiserror::Error;

/// Errors that can occur while transpiling a template
#[derive(Debug, Error)]
pub enum TranspileError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Render(#[from] RenderError),

    /// The rewritten tree could not be written as JSON
    #[error("failed to serialize template tree: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
