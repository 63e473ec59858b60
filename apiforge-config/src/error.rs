use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for configuration operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}' as JSON")]
    #[diagnostic(code(apiforge::config::parse_json))]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse config file '{path}' as TOML")]
    #[diagnostic(code(apiforge::config::parse_toml))]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unsupported config file format '{path}'")]
    #[diagnostic(help("config files must end in .json or .toml"))]
    UnsupportedConfigFormat { path: PathBuf },

    #[error("no target language selected")]
    #[diagnostic(
        code(apiforge::config::missing_language),
        help("pass --lang or set 'language' in the config file")
    )]
    MissingLanguage,

    #[error("no input schema document given")]
    #[diagnostic(
        code(apiforge::config::missing_input_spec),
        help("pass --input-spec or set 'inputSpec' in the config file")
    )]
    MissingInputSpec,

    #[error("unknown target language '{id}'")]
    #[diagnostic(help("available languages: {available}"))]
    UnknownLanguage { id: String, available: String },

    #[error("template directory '{path}' does not exist")]
    #[diagnostic(code(apiforge::config::missing_template_dir))]
    MissingTemplateDir { path: PathBuf },

    #[error("malformed key=value pair '{pair}'")]
    #[diagnostic(help("expected the form key=value, e.g. array=ArrayList"))]
    MalformedPair { pair: String },
}
