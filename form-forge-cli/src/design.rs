//! Form design files.
//!
//! A design is a list of components in the editor's wire format, stored as
//! JSON or TOML:
//!
//! ```json
//! { "components": [ { "type": "text", "label": "Full name" } ] }
//! ```
//!
//! Missing ids are assigned on load and missing field names are derived from
//! the label, so hand-written designs can stay short. Ids exported by the
//! browser editor are accepted as they are.

use crate::error::{CliResult, DesignError};
use form_forge::{FormComponent, FormSchema};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// On-disk shape of a design.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Design {
    #[serde(default)]
    pub components: Vec<FormComponent>,
}

/// Supported design encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesignFormat {
    Json,
    Toml,
}

impl DesignFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Some(Self::Json),
            Some("toml") => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Loads design files into a [`FormSchema`].
pub struct DesignLoader;

impl DesignLoader {
    /// Read and parse the design at `path`.
    pub fn load(path: &Path) -> CliResult<FormSchema> {
        if !path.exists() {
            return Err(DesignError::not_found(path.to_path_buf()).into());
        }

        let format = DesignFormat::from_path(path).ok_or_else(|| DesignError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;

        let content = std::fs::read_to_string(path).map_err(|e| DesignError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(path, &content, format)
    }

    /// Parse design text. `path` is only used for error messages.
    pub fn parse(path: &Path, content: &str, format: DesignFormat) -> CliResult<FormSchema> {
        let design: Design = match format {
            DesignFormat::Json => serde_json::from_str(content)
                .map_err(|e| DesignError::invalid(path.to_path_buf(), e.to_string()))?,
            DesignFormat::Toml => toml::from_str(content)
                .map_err(|e| DesignError::invalid(path.to_path_buf(), e.to_string()))?,
        };

        let schema =
            FormSchema::from_components(design.components).map_err(|e| DesignError::Schema {
                path: path.to_path_buf(),
                source: e,
            })?;

        debug!(
            path = %path.display(),
            components = schema.len(),
            "Loaded design"
        );

        Ok(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use form_forge::{ComponentId, FieldType, Width};
    use std::path::PathBuf;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            DesignFormat::from_path(Path::new("form.json")),
            Some(DesignFormat::Json)
        );
        assert_eq!(
            DesignFormat::from_path(Path::new("a/b/form.toml")),
            Some(DesignFormat::Toml)
        );
        assert_eq!(DesignFormat::from_path(Path::new("form.yaml")), None);
    }

    #[test]
    fn test_parse_json_fills_gaps() {
        let json = r#"{
            "components": [
                { "type": "text", "label": "Full name", "width": "6" },
                { "type": "dropdown", "label": "Color", "options": ["Red"] }
            ]
        }"#;

        let schema = DesignLoader::parse(Path::new("form.json"), json, DesignFormat::Json).unwrap();
        let components = schema.components();

        assert_eq!(components.len(), 2);
        assert_eq!(components[0].field_name, "fullName");
        assert_eq!(components[0].width, Width::new(6));
        assert_eq!(components[1].field_type, FieldType::Dropdown);
        assert_ne!(components[0].id, components[1].id);
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
[[components]]
type = "email"
label = "Work email"
required = true

[[components]]
type = "section-heading"
label = "Details"
width = 40
"#;

        let schema = DesignLoader::parse(Path::new("form.toml"), toml, DesignFormat::Toml).unwrap();
        let components = schema.components();

        assert_eq!(components[0].field_name, "workEmail");
        assert_eq!(components[0].required, Some(true));
        assert_eq!(components[1].width, Some(Width::FULL));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let json = r#"{
            "components": [
                { "id": "0190f5a0-0000-7000-8000-000000000001", "type": "text", "label": "A" },
                { "id": "0190f5a0-0000-7000-8000-000000000001", "type": "text", "label": "B" }
            ]
        }"#;

        let err = DesignLoader::parse(Path::new("form.json"), json, DesignFormat::Json).unwrap_err();
        assert!(matches!(err, CliError::Design(DesignError::Schema { .. })));
    }

    #[test]
    fn test_browser_export_ids_load() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures/browser_export.json");
        let schema = DesignLoader::load(&path).unwrap();
        let components = schema.components();

        assert_eq!(components.len(), 2);
        assert_eq!(
            components[0].id,
            ComponentId::from_key("V1StGXR8_Z5jdHi6B-myT").unwrap()
        );
        assert_eq!(schema.position(components[1].id), Some(1));
        assert_eq!(components[1].width, Width::new(6));
    }

    #[test]
    fn test_duplicate_foreign_ids_are_rejected() {
        let json = r#"{
            "components": [
                { "id": "V1StGXR8_Z5jdHi6B-myT", "type": "text", "label": "A" },
                { "id": "V1StGXR8_Z5jdHi6B-myT", "type": "text", "label": "B" }
            ]
        }"#;

        let err = DesignLoader::parse(Path::new("form.json"), json, DesignFormat::Json).unwrap_err();
        assert!(matches!(err, CliError::Design(DesignError::Schema { .. })));
    }

    #[test]
    fn test_invalid_json() {
        let err = DesignLoader::parse(Path::new("form.json"), "{", DesignFormat::Json).unwrap_err();
        assert!(matches!(err, CliError::Design(DesignError::Invalid { .. })));
    }

    #[test]
    fn test_missing_file() {
        let err = DesignLoader::load(&PathBuf::from("/nonexistent/form.json")).unwrap_err();
        assert!(matches!(err, CliError::Design(DesignError::NotFound { .. })));
    }
}
