//! Config-file payloads.
//!
//! A config file pre-populates the aggregator with everything a CLI flag
//! could set. JSON and TOML are accepted, selected by file extension. Keys
//! use the camelCase names templates see.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{Error, Result};

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigPayload {
    pub language: Option<String>,
    pub input_spec: Option<String>,
    pub output_dir: Option<String>,
    pub template_dir: Option<String>,
    pub library: Option<String>,
    pub api_package: Option<String>,
    pub model_package: Option<String>,
    pub invoker_package: Option<String>,
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub artifact_version: Option<String>,
    pub model_name_prefix: Option<String>,
    pub model_name_suffix: Option<String>,
    pub git_user_id: Option<String>,
    pub git_repo_id: Option<String>,
    pub release_note: Option<String>,
    pub http_user_agent: Option<String>,
    pub type_mappings: IndexMap<String, String>,
    pub instantiation_types: IndexMap<String, String>,
    pub import_mappings: IndexMap<String, String>,
    pub language_specific_primitives: Vec<String>,
    pub additional_properties: IndexMap<String, serde_json::Value>,
}

impl ConfigPayload {
    /// Load a payload from a `.json` or `.toml` file.
    pub fn from_file(path: &Path) -> Result<ConfigPayload> {
        let content = fs::read_to_string(path).map_err(|source| {
            Box::new(Error::Io {
                path: path.to_owned(),
                source,
            })
        })?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content).map_err(|source| {
                Box::new(Error::ParseJson {
                    path: path.to_owned(),
                    source,
                })
            }),
            Some("toml") => toml::from_str(&content).map_err(|source| {
                Box::new(Error::ParseToml {
                    path: path.to_owned(),
                    source,
                })
            }),
            _ => Err(Box::new(Error::UnsupportedConfigFormat {
                path: path.to_owned(),
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_json_payload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{
                "language": "android",
                "apiPackage": "com.acme.api",
                "typeMappings": { "array": "Vec" },
                "additionalProperties": { "useRxJava": true }
            }"#,
        )
        .unwrap();

        let payload = ConfigPayload::from_file(&path).unwrap();
        assert_eq!(payload.language.as_deref(), Some("android"));
        assert_eq!(payload.api_package.as_deref(), Some("com.acme.api"));
        assert_eq!(payload.type_mappings["array"], "Vec");
        assert_eq!(
            payload.additional_properties["useRxJava"],
            serde_json::json!(true)
        );
    }

    #[test]
    fn test_toml_payload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "language = \"swift\"\nprojectVersion = \"2.0.0\"\n\n[instantiationTypes]\nmap = \"Dictionary\"\n",
        )
        .unwrap();

        let payload = ConfigPayload::from_file(&path).unwrap();
        assert_eq!(payload.language.as_deref(), Some("swift"));
        assert_eq!(payload.instantiation_types["map"], "Dictionary");
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "language: android").unwrap();

        let err = ConfigPayload::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("unsupported config file format"));
    }
}
