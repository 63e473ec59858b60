//! Target-language descriptions consumed by the aggregator.
//!
//! A language declares the CLI options it understands plus its default
//! type-mapping tables. The aggregator only consults these tables; emission
//! itself lives outside this crate.

use indexmap::{IndexMap, IndexSet};

/// One CLI option a target language declares.
#[derive(Debug, Clone)]
pub struct CliOption {
    pub name: &'static str,
    pub description: &'static str,
    pub default: Option<&'static str>,
}

impl CliOption {
    const fn new(name: &'static str, description: &'static str) -> CliOption {
        CliOption {
            name,
            description,
            default: None,
        }
    }

    const fn with_default(
        name: &'static str,
        description: &'static str,
        default: &'static str,
    ) -> CliOption {
        CliOption {
            name,
            description,
            default: Some(default),
        }
    }
}

/// Static description of one supported target language.
#[derive(Debug, Clone)]
pub struct LanguageSpec {
    pub id: &'static str,
    pub display_name: &'static str,
    pub options: Vec<CliOption>,
    pub type_mapping: IndexMap<String, String>,
    pub instantiation_types: IndexMap<String, String>,
    pub import_mapping: IndexMap<String, String>,
    pub language_primitives: IndexSet<String>,
}

impl LanguageSpec {
    /// Whether the language declares a CLI option with this name.
    pub fn declares(&self, name: &str) -> bool {
        self.options.iter().any(|opt| opt.name == name)
    }

    /// The declared default for an option, if any.
    pub fn option_default(&self, name: &str) -> Option<&'static str> {
        self.options
            .iter()
            .find(|opt| opt.name == name)
            .and_then(|opt| opt.default)
    }
}

/// The set of languages a generation run may target.
#[derive(Debug)]
pub struct LanguageRegistry {
    languages: Vec<LanguageSpec>,
}

impl LanguageRegistry {
    /// Registry holding the built-in targets.
    pub fn builtin() -> LanguageRegistry {
        LanguageRegistry {
            languages: vec![android(), javascript(), swift()],
        }
    }

    pub fn get(&self, id: &str) -> Option<&LanguageSpec> {
        self.languages.iter().find(|lang| lang.id == id)
    }

    pub fn available_ids(&self) -> Vec<&'static str> {
        self.languages.iter().map(|lang| lang.id).collect()
    }
}

fn table(entries: &[(&str, &str)]) -> IndexMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

fn set(entries: &[&str]) -> IndexSet<String> {
    entries.iter().map(|e| (*e).to_owned()).collect()
}

fn android() -> LanguageSpec {
    LanguageSpec {
        id: "android",
        display_name: "Android (Java)",
        options: vec![
            CliOption::new("apiPackage", "package for generated api classes"),
            CliOption::new("modelPackage", "package for generated model classes"),
            CliOption::new("invokerPackage", "root package for generated code"),
            CliOption::with_default("groupId", "groupId for the generated project", "io.apiforge"),
            CliOption::with_default(
                "artifactId",
                "artifactId for the generated project",
                "apiforge-android-client",
            ),
            CliOption::with_default("artifactVersion", "artifact version", "1.0.0"),
            CliOption::with_default("library", "client library template to use", "volley"),
        ],
        type_mapping: table(&[
            ("integer", "Integer"),
            ("long", "Long"),
            ("float", "Float"),
            ("double", "Double"),
            ("string", "String"),
            ("boolean", "Boolean"),
            ("date", "Date"),
            ("date-time", "Date"),
            ("uuid", "UUID"),
            ("array", "List"),
            ("map", "Map"),
            ("file", "File"),
        ]),
        instantiation_types: table(&[("array", "ArrayList"), ("map", "HashMap")]),
        import_mapping: table(&[
            ("Date", "java.util.Date"),
            ("UUID", "java.util.UUID"),
            ("List", "java.util.List"),
            ("Map", "java.util.Map"),
            ("File", "java.io.File"),
        ]),
        language_primitives: set(&[
            "String", "Boolean", "Integer", "Long", "Float", "Double", "Object", "byte[]",
        ]),
    }
}

fn javascript() -> LanguageSpec {
    LanguageSpec {
        id: "javascript",
        display_name: "JavaScript (ES6)",
        options: vec![
            CliOption::new("projectName", "name of the generated npm package"),
            CliOption::new("moduleName", "root module exported by the package"),
            CliOption::with_default("projectVersion", "version of the generated package", "1.0.0"),
            CliOption::with_default("usePromises", "return promises instead of callbacks", "false"),
        ],
        type_mapping: table(&[
            ("integer", "Number"),
            ("long", "Number"),
            ("float", "Number"),
            ("double", "Number"),
            ("string", "String"),
            ("boolean", "Boolean"),
            ("date", "Date"),
            ("date-time", "Date"),
            ("uuid", "String"),
            ("array", "Array"),
            ("map", "Object"),
            ("file", "File"),
        ]),
        instantiation_types: table(&[("array", "Array"), ("map", "Object")]),
        import_mapping: table(&[]),
        language_primitives: set(&[
            "String", "Boolean", "Number", "Array", "Object", "Date", "File", "Blob",
        ]),
    }
}

fn swift() -> LanguageSpec {
    LanguageSpec {
        id: "swift",
        display_name: "Swift",
        options: vec![
            CliOption::new("projectName", "name of the generated Swift package"),
            CliOption::with_default(
                "responseAs",
                "how responses are surfaced to callers",
                "PromiseKit",
            ),
            CliOption::with_default(
                "unwrapRequired",
                "treat required properties as non-optional",
                "false",
            ),
        ],
        type_mapping: table(&[
            ("integer", "Int32"),
            ("long", "Int64"),
            ("float", "Float"),
            ("double", "Double"),
            ("string", "String"),
            ("boolean", "Bool"),
            ("date", "Date"),
            ("date-time", "Date"),
            ("uuid", "UUID"),
            ("array", "Array"),
            ("map", "Dictionary"),
            ("file", "URL"),
        ]),
        instantiation_types: table(&[("array", "Array"), ("map", "Dictionary")]),
        import_mapping: table(&[]),
        language_primitives: set(&[
            "String", "Bool", "Int32", "Int64", "Float", "Double", "Date", "UUID", "Any",
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_lookup() {
        let registry = LanguageRegistry::builtin();
        assert!(registry.get("android").is_some());
        assert!(registry.get("cobol").is_none());
        assert_eq!(
            registry.available_ids(),
            vec!["android", "javascript", "swift"]
        );
    }

    #[test]
    fn test_declared_options_and_defaults() {
        let registry = LanguageRegistry::builtin();
        let android = registry.get("android").unwrap();
        assert!(android.declares("apiPackage"));
        assert_eq!(android.option_default("apiPackage"), None);
        assert_eq!(android.option_default("library"), Some("volley"));
        assert!(!android.declares("usePromises"));
    }

    #[test]
    fn test_type_mapping_tables_are_ordered() {
        let registry = LanguageRegistry::builtin();
        let js = registry.get("javascript").unwrap();
        assert_eq!(js.type_mapping["array"], "Array");
        assert!(js.language_primitives.contains("Blob"));
    }
}
