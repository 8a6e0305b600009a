//! Render options for pupper_glyph.

use serde::{Deserialize, Serialize};

/// Markup rendering options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOptions {
    /// HTML5 output: bare boolean attributes and `<br>` instead of `<br/>`.
    ///
    /// A `doctype html` in the document turns this on from that point.
    #[serde(default)]
    pub terse: bool,
}

impl RenderOptions {
    #[inline]
    pub fn terse() -> Self {
        Self { terse: true }
    }
}
