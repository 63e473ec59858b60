//! Configuration aggregation for the apiforge code generator.
//!
//! A generation run is described from four places, merged with a fixed
//! precedence, highest first:
//!
//! 1. explicit setter/flag values
//! 2. dynamic `-D key=value` properties whose key matches a CLI option
//!    declared by the selected target language, then system properties
//! 3. a loaded config-file payload
//! 4. the target language's built-in defaults
//!
//! Mapping tables merge per key; later sources never replace a whole table.
//! [`GenerationConfig`] is the mutable aggregate; [`GenerationConfig::resolve`]
//! freezes it into the [`ResolvedOptions`] consumed by emitters.

mod error;
pub mod kvp;
mod language;
mod payload;

use std::path::{Path, PathBuf};

use indexmap::{IndexMap, IndexSet};
use serde_json::Value;

pub use error::{Error, Result};
pub use language::{CliOption, LanguageRegistry, LanguageSpec};
pub use payload::ConfigPayload;

pub const DEFAULT_GIT_USER_ID: &str = "GIT_USER_ID";
pub const DEFAULT_GIT_REPO_ID: &str = "GIT_REPO_ID";
pub const DEFAULT_RELEASE_NOTE: &str = "Minor update";

/// Mutable aggregate describing one generation run.
///
/// Built incrementally by setters and an optional config-file merge, then
/// frozen by [`resolve`](GenerationConfig::resolve).
#[derive(Debug, Default)]
pub struct GenerationConfig {
    language: Option<String>,
    input_spec: Option<String>,
    output_dir: Option<PathBuf>,
    template_dir: Option<PathBuf>,
    library: Option<String>,
    api_package: Option<String>,
    model_package: Option<String>,
    invoker_package: Option<String>,
    group_id: Option<String>,
    artifact_id: Option<String>,
    artifact_version: Option<String>,
    model_name_prefix: Option<String>,
    model_name_suffix: Option<String>,
    git_user_id: Option<String>,
    git_repo_id: Option<String>,
    release_note: Option<String>,
    http_user_agent: Option<String>,
    verbose: bool,
    skip_overwrite: bool,
    type_mappings: IndexMap<String, String>,
    instantiation_types: IndexMap<String, String>,
    import_mappings: IndexMap<String, String>,
    language_primitives: IndexSet<String>,
    additional_properties: IndexMap<String, Value>,
    dynamic_properties: IndexMap<String, String>,
    system_properties: IndexMap<String, String>,
    payload: Option<ConfigPayload>,
}

impl GenerationConfig {
    pub fn new() -> GenerationConfig {
        GenerationConfig::default()
    }

    pub fn set_language(&mut self, id: impl Into<String>) -> &mut Self {
        self.language = Some(id.into());
        self
    }

    pub fn set_input_spec(&mut self, location: impl Into<String>) -> &mut Self {
        self.input_spec = Some(location.into());
        self
    }

    pub fn set_output_dir(&mut self, dir: impl Into<PathBuf>) -> &mut Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn set_template_dir(&mut self, dir: impl Into<PathBuf>) -> &mut Self {
        self.template_dir = Some(dir.into());
        self
    }

    pub fn set_library(&mut self, library: impl Into<String>) -> &mut Self {
        self.library = Some(library.into());
        self
    }

    pub fn set_api_package(&mut self, package: impl Into<String>) -> &mut Self {
        self.api_package = Some(package.into());
        self
    }

    pub fn set_model_package(&mut self, package: impl Into<String>) -> &mut Self {
        self.model_package = Some(package.into());
        self
    }

    pub fn set_invoker_package(&mut self, package: impl Into<String>) -> &mut Self {
        self.invoker_package = Some(package.into());
        self
    }

    pub fn set_group_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.group_id = Some(id.into());
        self
    }

    pub fn set_artifact_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.artifact_id = Some(id.into());
        self
    }

    pub fn set_artifact_version(&mut self, version: impl Into<String>) -> &mut Self {
        self.artifact_version = Some(version.into());
        self
    }

    pub fn set_model_name_prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
        self.model_name_prefix = Some(prefix.into());
        self
    }

    pub fn set_model_name_suffix(&mut self, suffix: impl Into<String>) -> &mut Self {
        self.model_name_suffix = Some(suffix.into());
        self
    }

    pub fn set_git_user_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.git_user_id = Some(id.into());
        self
    }

    pub fn set_git_repo_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.git_repo_id = Some(id.into());
        self
    }

    pub fn set_release_note(&mut self, note: impl Into<String>) -> &mut Self {
        self.release_note = Some(note.into());
        self
    }

    pub fn set_http_user_agent(&mut self, agent: impl Into<String>) -> &mut Self {
        self.http_user_agent = Some(agent.into());
        self
    }

    pub fn set_verbose(&mut self, verbose: bool) -> &mut Self {
        self.verbose = verbose;
        self
    }

    pub fn set_skip_overwrite(&mut self, skip: bool) -> &mut Self {
        self.skip_overwrite = skip;
        self
    }

    pub fn add_type_mapping(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> &mut Self {
        self.type_mappings.insert(from.into(), to.into());
        self
    }

    pub fn add_instantiation_type(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> &mut Self {
        self.instantiation_types.insert(from.into(), to.into());
        self
    }

    pub fn add_import_mapping(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> &mut Self {
        self.import_mappings.insert(from.into(), to.into());
        self
    }

    pub fn add_language_primitive(&mut self, name: impl Into<String>) -> &mut Self {
        self.language_primitives.insert(name.into());
        self
    }

    pub fn add_additional_property(
        &mut self,
        key: impl Into<String>,
        value: Value,
    ) -> &mut Self {
        self.additional_properties.insert(key.into(), value);
        self
    }

    /// Record a `-D key=value` per-invocation property.
    pub fn add_dynamic_property(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.dynamic_properties.insert(key.into(), value.into());
        self
    }

    /// Record a system property, consulted after dynamic properties.
    pub fn add_system_property(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.system_properties.insert(key.into(), value.into());
        self
    }

    /// Merge a config file into the aggregate.
    pub fn load_config_file(&mut self, path: &Path) -> Result<&mut Self> {
        self.payload = Some(ConfigPayload::from_file(path)?);
        Ok(self)
    }

    /// Merge an already-parsed payload into the aggregate.
    pub fn set_payload(&mut self, payload: ConfigPayload) -> &mut Self {
        self.payload = Some(payload);
        self
    }

    /// Freeze the aggregate into the options consumed by emitters.
    ///
    /// Fails before any resolution work if the target language or input
    /// schema location is missing, the language id is unknown, or a given
    /// template directory does not exist.
    pub fn resolve(&self, registry: &LanguageRegistry) -> Result<ResolvedOptions> {
        let payload = self.payload.clone().unwrap_or_default();

        let language = self
            .language
            .clone()
            .or_else(|| payload.language.clone())
            .ok_or_else(|| Box::new(Error::MissingLanguage))?;
        let spec = registry.get(&language).ok_or_else(|| {
            Box::new(Error::UnknownLanguage {
                id: language.clone(),
                available: registry.available_ids().join(", "),
            })
        })?;

        let input_spec = self
            .input_spec
            .clone()
            .or_else(|| payload.input_spec.clone())
            .filter(|loc| !loc.is_empty())
            .ok_or_else(|| Box::new(Error::MissingInputSpec))?;

        let template_dir = self
            .template_dir
            .clone()
            .or_else(|| payload.template_dir.clone().map(PathBuf::from));
        if let Some(dir) = &template_dir
            && !dir.is_dir()
        {
            return Err(Box::new(Error::MissingTemplateDir { path: dir.clone() }));
        }

        let output_dir = self
            .output_dir
            .clone()
            .or_else(|| payload.output_dir.clone().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("."));

        let pick = |explicit: &Option<String>, key: &str, file: &Option<String>| {
            self.pick(explicit, key, file, spec)
        };

        let library = pick(&self.library, "library", &payload.library);
        let api_package = pick(&self.api_package, "apiPackage", &payload.api_package);
        let model_package = pick(&self.model_package, "modelPackage", &payload.model_package);
        let invoker_package = pick(
            &self.invoker_package,
            "invokerPackage",
            &payload.invoker_package,
        );
        let group_id = pick(&self.group_id, "groupId", &payload.group_id);
        let artifact_id = pick(&self.artifact_id, "artifactId", &payload.artifact_id);
        let artifact_version = pick(
            &self.artifact_version,
            "artifactVersion",
            &payload.artifact_version,
        );
        let model_name_prefix = pick(
            &self.model_name_prefix,
            "modelNamePrefix",
            &payload.model_name_prefix,
        );
        let model_name_suffix = pick(
            &self.model_name_suffix,
            "modelNameSuffix",
            &payload.model_name_suffix,
        );

        let git_user_id = self
            .git_user_id
            .clone()
            .or_else(|| payload.git_user_id.clone())
            .unwrap_or_else(|| DEFAULT_GIT_USER_ID.to_owned());
        let git_repo_id = self
            .git_repo_id
            .clone()
            .or_else(|| payload.git_repo_id.clone())
            .unwrap_or_else(|| DEFAULT_GIT_REPO_ID.to_owned());
        let release_note = self
            .release_note
            .clone()
            .or_else(|| payload.release_note.clone())
            .unwrap_or_else(|| DEFAULT_RELEASE_NOTE.to_owned());
        let http_user_agent = self
            .http_user_agent
            .clone()
            .or_else(|| payload.http_user_agent.clone());

        // Tables merge per key: defaults, then the config file, then
        // explicit entries.
        let mut type_mappings = spec.type_mapping.clone();
        type_mappings.extend(payload.type_mappings.clone());
        type_mappings.extend(self.type_mappings.clone());

        let mut instantiation_types = spec.instantiation_types.clone();
        instantiation_types.extend(payload.instantiation_types.clone());
        instantiation_types.extend(self.instantiation_types.clone());

        let mut import_mappings = spec.import_mapping.clone();
        import_mappings.extend(payload.import_mappings.clone());
        import_mappings.extend(self.import_mappings.clone());

        let mut language_primitives = spec.language_primitives.clone();
        language_primitives.extend(payload.language_specific_primitives.iter().cloned());
        language_primitives.extend(self.language_primitives.iter().cloned());

        let mut additional_properties = payload.additional_properties.clone();
        // Declared options are satisfied from dynamic properties first,
        // then system properties.
        for option in &spec.options {
            if additional_properties.contains_key(option.name) {
                continue;
            }
            let value = self
                .dynamic_properties
                .get(option.name)
                .or_else(|| self.system_properties.get(option.name));
            if let Some(value) = value {
                additional_properties.insert(option.name.to_owned(), Value::String(value.clone()));
            }
        }
        additional_properties.extend(self.additional_properties.clone());

        let mut options = ResolvedOptions {
            language,
            input_spec,
            output_dir,
            template_dir,
            library,
            api_package,
            model_package,
            invoker_package,
            group_id,
            artifact_id,
            artifact_version,
            model_name_prefix,
            model_name_suffix,
            git_user_id,
            git_repo_id,
            release_note,
            http_user_agent,
            verbose: self.verbose,
            skip_overwrite: self.skip_overwrite,
            type_mappings,
            instantiation_types,
            import_mappings,
            language_primitives,
            additional_properties,
        };
        options.mirror_into_additional_properties();
        Ok(options)
    }

    fn pick(
        &self,
        explicit: &Option<String>,
        key: &str,
        file: &Option<String>,
        spec: &LanguageSpec,
    ) -> Option<String> {
        if let Some(value) = explicit {
            return Some(value.clone());
        }
        if spec.declares(key) {
            if let Some(value) = self.dynamic_properties.get(key) {
                return Some(value.clone());
            }
            if let Some(value) = self.system_properties.get(key) {
                return Some(value.clone());
            }
        }
        if let Some(value) = file {
            return Some(value.clone());
        }
        spec.option_default(key).map(str::to_owned)
    }
}

/// Immutable, fully merged description of one generation run.
///
/// Optional naming fields stay `None` when no source set them, so emitters
/// can distinguish "unset" from "explicitly empty".
#[derive(Debug, Clone)]
pub struct ResolvedOptions {
    pub language: String,
    pub input_spec: String,
    pub output_dir: PathBuf,
    pub template_dir: Option<PathBuf>,
    pub library: Option<String>,
    pub api_package: Option<String>,
    pub model_package: Option<String>,
    pub invoker_package: Option<String>,
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub artifact_version: Option<String>,
    pub model_name_prefix: Option<String>,
    pub model_name_suffix: Option<String>,
    pub git_user_id: String,
    pub git_repo_id: String,
    pub release_note: String,
    pub http_user_agent: Option<String>,
    pub verbose: bool,
    pub skip_overwrite: bool,
    pub type_mappings: IndexMap<String, String>,
    pub instantiation_types: IndexMap<String, String>,
    pub import_mappings: IndexMap<String, String>,
    pub language_primitives: IndexSet<String>,
    pub additional_properties: IndexMap<String, Value>,
}

impl ResolvedOptions {
    /// Every set naming option is visible to templates under its canonical
    /// camelCase key.
    fn mirror_into_additional_properties(&mut self) {
        let scalars = [
            ("library", self.library.as_deref()),
            ("apiPackage", self.api_package.as_deref()),
            ("modelPackage", self.model_package.as_deref()),
            ("invokerPackage", self.invoker_package.as_deref()),
            ("groupId", self.group_id.as_deref()),
            ("artifactId", self.artifact_id.as_deref()),
            ("artifactVersion", self.artifact_version.as_deref()),
            ("modelNamePrefix", self.model_name_prefix.as_deref()),
            ("modelNameSuffix", self.model_name_suffix.as_deref()),
            ("gitUserId", Some(self.git_user_id.as_str())),
            ("gitRepoId", Some(self.git_repo_id.as_str())),
            ("releaseNote", Some(self.release_note.as_str())),
            ("httpUserAgent", self.http_user_agent.as_deref()),
        ];
        for (key, value) in scalars {
            if let Some(value) = value {
                self.additional_properties
                    .insert(key.to_owned(), Value::String(value.to_owned()));
            }
        }
    }
}
