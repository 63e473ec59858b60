use std::path::{Path, PathBuf};

use apiforge_config::{GenerationConfig, LanguageRegistry, kvp};
use apiforge_document::Document;
use clap::Args;
use eyre::{Result, bail};

use super::UnwrapOrExit;
use crate::ops;
use crate::reports::{Report, TerminalOutput};

#[derive(Args)]
pub struct GenerateCommand {
    /// Target language id (e.g. android, javascript, swift)
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Path to the input schema document
    #[arg(short, long)]
    pub input_spec: Option<PathBuf>,

    /// Output directory (defaults to .)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to a JSON or TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory holding user-supplied templates
    #[arg(short, long)]
    pub template_dir: Option<PathBuf>,

    /// Per-invocation property, repeatable (-D key=value)
    #[arg(short = 'D', value_name = "KEY=VALUE")]
    pub properties: Vec<String>,

    /// Additional template property, repeatable (key=value)
    #[arg(long, value_name = "KEY=VALUE")]
    pub additional_properties: Vec<String>,

    /// Schema-type to language-type overrides (a=b,c=d)
    #[arg(long, value_name = "MAPPINGS")]
    pub type_mappings: Option<String>,

    /// Container instantiation-type overrides (a=b,c=d)
    #[arg(long, value_name = "MAPPINGS")]
    pub instantiation_types: Option<String>,

    /// Type import overrides (a=b,c=d)
    #[arg(long, value_name = "MAPPINGS")]
    pub import_mappings: Option<String>,

    /// Extra language-primitive type names (comma-separated)
    #[arg(long, value_name = "NAMES")]
    pub language_primitives: Option<String>,

    /// Package for generated api classes
    #[arg(long)]
    pub api_package: Option<String>,

    /// Package for generated model classes
    #[arg(long)]
    pub model_package: Option<String>,

    /// Root package for generated code
    #[arg(long)]
    pub invoker_package: Option<String>,

    #[arg(long)]
    pub group_id: Option<String>,

    #[arg(long)]
    pub artifact_id: Option<String>,

    #[arg(long)]
    pub artifact_version: Option<String>,

    #[arg(long)]
    pub model_name_prefix: Option<String>,

    #[arg(long)]
    pub model_name_suffix: Option<String>,

    /// Client library template to use
    #[arg(long)]
    pub library: Option<String>,

    #[arg(long)]
    pub git_user_id: Option<String>,

    #[arg(long)]
    pub git_repo_id: Option<String>,

    #[arg(long)]
    pub release_note: Option<String>,

    #[arg(long)]
    pub http_user_agent: Option<String>,

    /// Never overwrite files that already exist
    #[arg(short, long)]
    pub skip_overwrite: bool,

    #[arg(short, long)]
    pub verbose: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let mut config = GenerationConfig::new();
        if let Some(path) = &self.config {
            config.load_config_file(path).unwrap_or_exit();
        }

        self.apply_flags(&mut config)?;

        let options = config.resolve(&LanguageRegistry::builtin()).unwrap_or_exit();
        let document = Document::from_file(Path::new(&options.input_spec)).unwrap_or_exit();

        let report = ops::generate(&document, &options)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    fn apply_flags(&self, config: &mut GenerationConfig) -> Result<()> {
        if let Some(lang) = &self.lang {
            config.set_language(lang);
        }
        if let Some(input) = &self.input_spec {
            config.set_input_spec(input.display().to_string());
        }
        if let Some(output) = &self.output {
            config.set_output_dir(output);
        }
        if let Some(dir) = &self.template_dir {
            config.set_template_dir(dir);
        }
        if let Some(library) = &self.library {
            config.set_library(library);
        }
        if let Some(pkg) = &self.api_package {
            config.set_api_package(pkg);
        }
        if let Some(pkg) = &self.model_package {
            config.set_model_package(pkg);
        }
        if let Some(pkg) = &self.invoker_package {
            config.set_invoker_package(pkg);
        }
        if let Some(id) = &self.group_id {
            config.set_group_id(id);
        }
        if let Some(id) = &self.artifact_id {
            config.set_artifact_id(id);
        }
        if let Some(version) = &self.artifact_version {
            config.set_artifact_version(version);
        }
        if let Some(prefix) = &self.model_name_prefix {
            config.set_model_name_prefix(prefix);
        }
        if let Some(suffix) = &self.model_name_suffix {
            config.set_model_name_suffix(suffix);
        }
        if let Some(id) = &self.git_user_id {
            config.set_git_user_id(id);
        }
        if let Some(id) = &self.git_repo_id {
            config.set_git_repo_id(id);
        }
        if let Some(note) = &self.release_note {
            config.set_release_note(note);
        }
        if let Some(agent) = &self.http_user_agent {
            config.set_http_user_agent(agent);
        }
        config.set_skip_overwrite(self.skip_overwrite);
        config.set_verbose(self.verbose);

        for property in &self.properties {
            let Some((key, value)) = property.split_once('=') else {
                bail!("malformed -D property '{property}', expected key=value");
            };
            config.add_dynamic_property(key, value);
        }
        for property in &self.additional_properties {
            let Some((key, value)) = property.split_once('=') else {
                bail!("malformed additional property '{property}', expected key=value");
            };
            config.add_additional_property(key, serde_json::Value::String(value.to_owned()));
        }

        if let Some(mappings) = &self.type_mappings {
            for (from, to) in kvp::parse_pairs(mappings).unwrap_or_exit() {
                config.add_type_mapping(from, to);
            }
        }
        if let Some(mappings) = &self.instantiation_types {
            for (from, to) in kvp::parse_pairs(mappings).unwrap_or_exit() {
                config.add_instantiation_type(from, to);
            }
        }
        if let Some(mappings) = &self.import_mappings {
            for (from, to) in kvp::parse_pairs(mappings).unwrap_or_exit() {
                config.add_import_mapping(from, to);
            }
        }
        if let Some(names) = &self.language_primitives {
            for name in kvp::parse_list(names) {
                config.add_language_primitive(name);
            }
        }
        Ok(())
    }
}
