//! Configuration file loading for pupper.
//!
//! Reads `pupper.config.json` from the current working directory.
//! Also provides the JSON Schema for editor autocompletion.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::ModuleFormat;

/// File name looked up in the project directory.
pub const CONFIG_FILE_NAME: &str = "pupper.config.json";

/// Top-level pupper configuration.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PupperConfig {
    /// JSON Schema reference (for editor autocompletion).
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Module wrapper for `build --format module`.
    #[serde(default)]
    pub module: ModuleFormat,

    /// Render HTML5 markup (bare boolean attributes, `<br>`).
    #[serde(default)]
    pub terse: bool,

    /// Output directory for `build`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<PathBuf>,

    /// Glob patterns used when `build` is given none.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<String>,
}

/// Load `pupper.config.json` from the given directory (or CWD if None).
///
/// A missing file yields the defaults; an unreadable or invalid one is
/// reported and also yields the defaults.
pub fn load_config(dir: Option<&Path>) -> PupperConfig {
    let base = dir
        .map(|d| d.to_path_buf())
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());
    let config_path = base.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        return PupperConfig::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(config) => {
                tracing::debug!(path = %config_path.display(), "loaded config");
                config
            }
            Err(e) => {
                tracing::warn!("Failed to parse {}: {}", config_path.display(), e);
                PupperConfig::default()
            }
        },
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", config_path.display(), e);
            PupperConfig::default()
        }
    }
}

/// JSON Schema for `pupper.config.json`.
pub const PUPPER_CONFIG_SCHEMA: &str = r#"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "title": "pupper Configuration",
  "description": "Configuration file for pupper - Pug to Vue template transpiler",
  "type": "object",
  "properties": {
    "$schema": {
      "type": "string",
      "description": "JSON Schema reference for editor autocompletion"
    },
    "module": {
      "type": "string",
      "enum": ["commonjs", "esm"],
      "default": "commonjs",
      "description": "Module wrapper written around the rendered template"
    },
    "terse": {
      "type": "boolean",
      "default": false,
      "description": "Render HTML5 markup: bare boolean attributes and <br> instead of <br/>"
    },
    "outDir": {
      "type": "string",
      "description": "Output directory for the build command"
    },
    "include": {
      "type": "array",
      "description": "Glob patterns matching pug AST files, used when the build command is given none",
      "items": { "type": "string" },
      "examples": [["src/**/*.pug.json"]]
    }
  },
  "additionalProperties": false
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("pupper-config-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = temp_dir("missing");
        assert_eq!(load_config(Some(&dir)), PupperConfig::default());
    }

    #[test]
    fn test_load_config() {
        let dir = temp_dir("valid");
        std::fs::write(
            dir.join(CONFIG_FILE_NAME),
            r#"{ "module": "esm", "terse": true, "outDir": "build", "include": ["src/**/*.pug.json"] }"#,
        )
        .unwrap();

        let config = load_config(Some(&dir));
        assert_eq!(config.module, ModuleFormat::Esm);
        assert!(config.terse);
        assert_eq!(config.out_dir, Some(PathBuf::from("build")));
        assert_eq!(config.include, ["src/**/*.pug.json"]);
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let dir = temp_dir("invalid");
        std::fs::write(dir.join(CONFIG_FILE_NAME), r#"{ "module": "amd" }"#).unwrap();
        assert_eq!(load_config(Some(&dir)), PupperConfig::default());
    }

    #[test]
    fn test_schema_is_valid_json() {
        let schema: serde_json::Value = serde_json::from_str(PUPPER_CONFIG_SCHEMA).unwrap();
        assert_eq!(schema["properties"]["module"]["enum"][1], "esm");
        assert!(schema["properties"]["outDir"].is_object());
    }
}
