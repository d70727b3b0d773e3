//! # Catalog Loading
//!
//! Reads a `Catalog` or `PrefillMap` from JSON or YAML files, dispatched
//! on file extension. Catalog providers supply these files; the loader
//! assumes question identifiers are unique across the tree (duplicate
//! detection is out of contract).

use std::path::Path;

use thiserror::Error;

use crate::prefill::PrefillMap;
use crate::question::Catalog;

/// Errors raised while loading catalog data from files.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Reading the file failed.
    #[error("io error reading catalog data: {0}")]
    Io(#[from] std::io::Error),

    /// The file contained invalid JSON.
    #[error("invalid JSON catalog data: {0}")]
    Json(#[from] serde_json::Error),

    /// The file contained invalid YAML.
    #[error("invalid YAML catalog data: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The file extension is neither JSON nor YAML.
    #[error("unsupported catalog file format: {path} (expected .json, .yaml, or .yml)")]
    UnsupportedFormat {
        /// The offending path.
        path: String,
    },
}

/// Parse a catalog from a JSON string.
pub fn catalog_from_json(s: &str) -> Result<Catalog, CatalogError> {
    Ok(serde_json::from_str(s)?)
}

/// Parse a catalog from a YAML string.
pub fn catalog_from_yaml(s: &str) -> Result<Catalog, CatalogError> {
    Ok(serde_yaml::from_str(s)?)
}

/// Load a catalog from a `.json`, `.yaml`, or `.yml` file.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let format = known_format(path)?;
    let raw = std::fs::read_to_string(path)?;
    match format {
        Format::Json => catalog_from_json(&raw),
        Format::Yaml => catalog_from_yaml(&raw),
    }
}

/// Load a prefill map from a `.json`, `.yaml`, or `.yml` file.
pub fn load_prefills(path: &Path) -> Result<PrefillMap, CatalogError> {
    let format = known_format(path)?;
    let raw = std::fs::read_to_string(path)?;
    match format {
        Format::Json => Ok(serde_json::from_str(&raw)?),
        Format::Yaml => Ok(serde_yaml::from_str(&raw)?),
    }
}

enum Format {
    Json,
    Yaml,
}

fn known_format(path: &Path) -> Result<Format, CatalogError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("yaml") | Some("yml") => Ok(Format::Yaml),
        _ => Err(CatalogError::UnsupportedFormat {
            path: path.display().to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tir_core::QuestionId;

    const CATALOG_JSON: &str = r#"{
        "sections": [
            {
                "title": "SECTION 1",
                "sub_sections": [
                    {
                        "title": "Legislation",
                        "questions": [
                            { "id": "R001", "text": "List the legislation." }
                        ]
                    }
                ]
            }
        ]
    }"#;

    const CATALOG_YAML: &str = r#"
sections:
  - title: "SECTION 1"
    sub_sections:
      - topic: "Cost-sharing"
        questions:
          - id: R011
            text: "Are patients required to share costs?"
            provisions: "Article 10 (2) C102 Guidance"
"#;

    #[test]
    fn test_catalog_from_json() {
        let catalog = catalog_from_json(CATALOG_JSON).unwrap();
        assert_eq!(catalog.question_count(), 1);
        assert!(catalog.contains(&QuestionId::new("R001")));
    }

    #[test]
    fn test_catalog_from_yaml() {
        let catalog = catalog_from_yaml(CATALOG_YAML).unwrap();
        let question = catalog.question(&QuestionId::new("R011")).unwrap();
        assert!(question.has_guidance());
        assert_eq!(catalog.sections[0].sub_sections[0].topic.as_deref(), Some("Cost-sharing"));
    }

    #[test]
    fn test_catalog_from_json_invalid() {
        assert!(catalog_from_json("{ not json").is_err());
        assert!(catalog_from_json(r#"{"sections": "nope"}"#).is_err());
    }

    #[test]
    fn test_load_catalog_unsupported_extension() {
        let err = load_catalog(Path::new("/tmp/catalog.toml")).unwrap_err();
        assert!(matches!(err, CatalogError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_prefills_from_json() {
        let prefills: PrefillMap =
            serde_json::from_str(r#"{"R005": "No temporary exceptions."}"#).unwrap();
        assert_eq!(prefills.get(&QuestionId::new("R005")), Some("No temporary exceptions."));
    }
}
