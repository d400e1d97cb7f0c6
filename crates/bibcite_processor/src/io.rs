/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Reading and writing reference files.

use std::fmt;
use std::fs;
use std::path::Path;

use bibcite_core::{BibJson, Content, NumOrStr};
use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use crate::ProcessorError;

/// Serializations a reference file can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceFormat {
    CslJson,
    Yaml,
    BibJson,
}

impl ReferenceFormat {
    /// Guess from the file name: `*.bibjson` and `*.bib.json` are BibJSON,
    /// other `*.json` files CSL-JSON, anything else YAML.
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        if name.ends_with(".bibjson") || name.ends_with(".bib.json") {
            ReferenceFormat::BibJson
        } else if name.ends_with(".json") {
            ReferenceFormat::CslJson
        } else {
            ReferenceFormat::Yaml
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ReferenceFormat::CslJson => "JSON",
            ReferenceFormat::Yaml => "YAML",
            ReferenceFormat::BibJson => "BibJSON",
        }
    }
}

/// Load references from a file, choosing the format from its name.
pub fn load_references(path: &Path) -> Result<Vec<Content>, ProcessorError> {
    let text = fs::read_to_string(path)?;
    let format = ReferenceFormat::from_path(path);
    debug!(path = %path.display(), ?format, "loading references");
    parse_references(&text, format)
}

/// Parse references held in memory.
///
/// CSL-JSON and YAML input may be an array of records, a single record, or
/// a map from id to record; map keys fill in missing ids and the map's order
/// is kept.
pub fn parse_references(text: &str, format: ReferenceFormat) -> Result<Vec<Content>, ProcessorError> {
    let references = match format {
        ReferenceFormat::CslJson => {
            let value: Value = serde_json::from_str(text).map_err(|e| parse_error(format, e))?;
            if is_keyed(&value) {
                let map: IndexMap<String, Value> =
                    serde_json::from_str(text).map_err(|e| parse_error(format, e))?;
                keyed(map).map_err(|e| parse_error(format, e))?
            } else {
                records(value).map_err(|e| parse_error(format, e))?
            }
        }
        ReferenceFormat::Yaml => {
            let value: Value = serde_yaml::from_str(text).map_err(|e| parse_error(format, e))?;
            if is_keyed(&value) {
                let map: IndexMap<String, Value> =
                    serde_yaml::from_str(text).map_err(|e| parse_error(format, e))?;
                keyed(map).map_err(|e| parse_error(format, e))?
            } else {
                records(value).map_err(|e| parse_error(format, e))?
            }
        }
        ReferenceFormat::BibJson => {
            let value: Value = serde_json::from_str(text).map_err(|e| parse_error(format, e))?;
            let entries: Vec<BibJson> = match value {
                Value::Array(_) => serde_json::from_value(value),
                other => serde_json::from_value(other).map(|entry| vec![entry]),
            }
            .map_err(|e| parse_error(format, e))?;
            entries.iter().map(Content::from).collect()
        }
    };
    debug!(count = references.len(), "parsed references");
    Ok(references)
}

/// Serialize references, pretty-printed.
pub fn write_references(
    references: &[Content],
    format: ReferenceFormat,
) -> Result<String, ProcessorError> {
    match format {
        ReferenceFormat::CslJson => serde_json::to_string_pretty(references).map_err(|e| parse_error(format, e)),
        ReferenceFormat::Yaml => serde_yaml::to_string(references).map_err(|e| parse_error(format, e)),
        ReferenceFormat::BibJson => {
            let entries: Vec<BibJson> = references.iter().map(BibJson::from).collect();
            serde_json::to_string_pretty(&entries).map_err(|e| parse_error(format, e))
        }
    }
}

fn parse_error(format: ReferenceFormat, error: impl fmt::Display) -> ProcessorError {
    ProcessorError::ParseError(format.label().to_string(), error.to_string())
}

/// An object whose every value is itself an object reads as id -> record.
fn is_keyed(value: &Value) -> bool {
    match value {
        Value::Object(map) => !map.is_empty() && map.values().all(Value::is_object),
        _ => false,
    }
}

fn records(value: Value) -> Result<Vec<Content>, serde_json::Error> {
    match value {
        Value::Array(_) => serde_json::from_value(value),
        other => serde_json::from_value(other).map(|content| vec![content]),
    }
}

fn keyed(map: IndexMap<String, Value>) -> Result<Vec<Content>, serde_json::Error> {
    map.into_iter()
        .map(|(key, value)| {
            let mut content: Content = serde_json::from_value(value)?;
            if content.id.is_none() {
                content.id = Some(NumOrStr::Str(key));
            }
            Ok(content)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ReferenceFormat::from_path(Path::new("refs.bib.json")),
            ReferenceFormat::BibJson
        );
        assert_eq!(
            ReferenceFormat::from_path(Path::new("REFS.JSON")),
            ReferenceFormat::CslJson
        );
        assert_eq!(
            ReferenceFormat::from_path(Path::new("refs.yml")),
            ReferenceFormat::Yaml
        );
    }

    #[test]
    fn test_keyed_map_keeps_order_and_fills_ids() {
        let json = r#"{
            "zeta": {"title": "Last"},
            "alpha": {"id": "kept", "title": "First"}
        }"#;
        let refs = parse_references(json, ReferenceFormat::CslJson).unwrap();
        assert_eq!(refs[0].id, Some(NumOrStr::Str("zeta".into())));
        assert_eq!(refs[1].id, Some(NumOrStr::Str("kept".into())));
    }

    #[test]
    fn test_single_record_and_yaml() {
        let refs = parse_references(r#"{"title": "Solo"}"#, ReferenceFormat::CslJson).unwrap();
        assert_eq!(refs.len(), 1);

        let yaml = "- title: One\n  type: book\n- title: Two\n";
        let refs = parse_references(yaml, ReferenceFormat::Yaml).unwrap();
        assert_eq!(refs[1].title(), Some("Two"));
    }

    #[test]
    fn test_syntax_error_names_format() {
        let err = parse_references("[{", ReferenceFormat::CslJson).unwrap_err();
        assert!(matches!(err, ProcessorError::ParseError(ref f, _) if f == "JSON"));
    }

    #[test]
    fn test_write_bibjson() {
        let refs = parse_references(r#"[{"type": "book", "title": "T"}]"#, ReferenceFormat::CslJson)
            .unwrap();
        let out = write_references(&refs, ReferenceFormat::BibJson).unwrap();
        assert!(out.contains("\"Book\""));
    }
}
