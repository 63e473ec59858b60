//! Compiled ignore rules.
//!
//! A tokenized line compiles into exactly one rule. Compilation failures
//! produce an invalid rule that never matches, carrying the reason; the rest
//! of the file keeps parsing.

use globset::{GlobBuilder, GlobMatcher};

use crate::parser::{Part, tokenize};

/// Result of evaluating one rule against a candidate path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// The rule does not apply to the path.
    Noop,
    /// The path is explicitly re-included.
    Include,
    /// The path is excluded from regeneration.
    Exclude,
    /// The path is excluded and no later rule may be consulted.
    ExcludeAndTerminate,
}

/// The matchable shape of a rule.
#[derive(Debug)]
enum Matcher {
    /// Glob match against the full relative path.
    File(GlobMatcher),
    /// Matches the directory itself or anything below it.
    Directory {
        directory: GlobMatcher,
        descendants: GlobMatcher,
    },
    /// Matches only siblings of the ignore file, by filename and extension.
    Rooted {
        filename: String,
        extension: Option<String>,
    },
    /// Unconditionally matches any path.
    Everything,
    /// Never matches; carries the failure reason.
    Invalid { reason: String },
}

/// One parsed line of a regeneration-ignore file.
#[derive(Debug)]
pub struct Rule {
    matcher: Matcher,
    negated: bool,
    definition: String,
    pattern: String,
}

impl Rule {
    /// Compile one line into a rule. Returns `None` for comments.
    pub fn create(line: &str) -> Option<Rule> {
        let parts = match tokenize(line) {
            Ok(parts) => parts,
            Err(error) => return Some(Rule::invalid(line, error.to_string())),
        };

        if matches!(parts.first(), Some(Part::Comment(_))) {
            return None;
        }
        if parts.is_empty() {
            return Some(Rule::invalid(line, "empty rule"));
        }

        let negated = matches!(parts.first(), Some(Part::Negate));
        let body: &[Part] = if negated { &parts[1..] } else { &parts };
        let pattern = reconstruct(body);

        let matcher = Rule::compile(body, &pattern);
        Some(Rule {
            matcher,
            negated,
            definition: line.to_owned(),
            pattern,
        })
    }

    fn compile(body: &[Part], pattern: &str) -> Matcher {
        if body.is_empty() || pattern.is_empty() {
            return Matcher::Invalid {
                reason: "empty rule".into(),
            };
        }
        if pattern == "." || pattern == ".." {
            return Matcher::Invalid {
                reason: format!("'{pattern}' is not a valid pattern"),
            };
        }
        if body == [Part::MatchAll] {
            return Matcher::Everything;
        }
        if body.contains(&Part::DirectoryMarker) {
            return Rule::compile_directory(pattern);
        }
        let rooted = body.first() == Some(&Part::RootedMarker)
            && !body.contains(&Part::PathDelim)
            && !body.contains(&Part::MatchAll);
        if rooted {
            return Rule::compile_rooted(pattern);
        }
        match glob(pattern) {
            Ok(matcher) => Matcher::File(matcher),
            Err(error) => Matcher::Invalid {
                reason: error.to_string(),
            },
        }
    }

    fn compile_directory(pattern: &str) -> Matcher {
        let base = pattern.trim_end_matches('/');
        match (glob(base), glob(&format!("{base}/**"))) {
            (Ok(directory), Ok(descendants)) => Matcher::Directory {
                directory,
                descendants,
            },
            (Err(error), _) | (_, Err(error)) => Matcher::Invalid {
                reason: error.to_string(),
            },
        }
    }

    fn compile_rooted(pattern: &str) -> Matcher {
        let (filename, extension) = match pattern.rsplit_once('.') {
            Some((stem, ext)) => (stem.to_owned(), Some(ext.to_owned())),
            None => (pattern.to_owned(), None),
        };
        Matcher::Rooted {
            filename,
            extension,
        }
    }

    fn invalid(line: &str, reason: impl Into<String>) -> Rule {
        Rule {
            matcher: Matcher::Invalid {
                reason: reason.into(),
            },
            negated: false,
            definition: line.to_owned(),
            pattern: String::new(),
        }
    }

    /// Whether this rule was parsed with a leading negation marker.
    pub fn negated(&self) -> bool {
        self.negated
    }

    /// The raw line this rule was compiled from.
    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// The portable glob string reconstructed from the token sequence.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn is_directory_rule(&self) -> bool {
        matches!(self.matcher, Matcher::Directory { .. })
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self.matcher, Matcher::Invalid { .. })
    }

    /// The failure reason for invalid rules.
    pub fn reason(&self) -> Option<&str> {
        match &self.matcher {
            Matcher::Invalid { reason } => Some(reason),
            _ => None,
        }
    }

    /// Whether the rule applies to the candidate path.
    pub fn matches(&self, path: &str) -> bool {
        match &self.matcher {
            Matcher::File(matcher) => matcher.is_match(path),
            Matcher::Directory {
                directory,
                descendants,
            } => descendants.is_match(path) || directory.is_match(path.trim_end_matches('/')),
            Matcher::Rooted {
                filename,
                extension,
            } => {
                if path.contains('/') {
                    return false;
                }
                let (path_stem, path_ext) = match path.rsplit_once('.') {
                    Some((stem, ext)) => (stem, Some(ext)),
                    None => (path, None),
                };
                let ext_matches = match (extension.as_deref(), path_ext) {
                    (Some("*"), Some(_)) => true,
                    (Some(expected), Some(actual)) => expected == actual,
                    (None, None) => true,
                    _ => false,
                };
                ext_matches && wildcard_name_matches(filename, path_stem)
            }
            Matcher::Everything => true,
            Matcher::Invalid { .. } => false,
        }
    }

    /// Evaluate the rule against a candidate path.
    pub fn evaluate(&self, path: &str) -> Operation {
        if !self.matches(path) {
            return Operation::Noop;
        }
        if self.negated {
            return Operation::Include;
        }
        match self.matcher {
            Matcher::Everything => Operation::ExcludeAndTerminate,
            _ => Operation::Exclude,
        }
    }
}

/// Filename equality, with single-`*` wildcard support.
fn wildcard_name_matches(pattern: &str, name: &str) -> bool {
    match pattern.split_once('*') {
        Some((prefix, suffix)) => {
            name.len() >= prefix.len() + suffix.len()
                && name.starts_with(prefix)
                && name.ends_with(suffix)
        }
        None => pattern == name,
    }
}

/// Reconstruct the portable glob string from a token sequence.
fn reconstruct(parts: &[Part]) -> String {
    parts.iter().filter_map(Part::pattern_fragment).collect()
}

fn glob(pattern: &str) -> Result<GlobMatcher, globset::Error> {
    Ok(GlobBuilder::new(pattern)
        .literal_separator(true)
        .backslash_escape(false)
        .build()?
        .compile_matcher())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(line: &str) -> Rule {
        Rule::create(line).expect("line should compile to a rule")
    }

    #[test]
    fn test_comment_produces_no_rule() {
        assert!(Rule::create("# nothing to see").is_none());
    }

    #[test]
    fn test_pattern_reconstruction_drops_markers() {
        insta::assert_snapshot!(rule("!docs/**/*.java").pattern(), @"docs/**/*.java");
        insta::assert_snapshot!(rule("/build.sh").pattern(), @"build.sh");
    }

    #[test]
    fn test_file_rule_exact_match_is_case_sensitive() {
        let rule = rule("build.sh");
        assert!(rule.matches("build.sh"));
        assert!(!rule.matches("Build.sh"));
    }

    #[test]
    fn test_directory_rule_matches_descendants_and_itself() {
        let rule = rule("docs/**/Users/");
        assert!(rule.is_directory_rule());
        assert!(rule.matches("docs/1/Users/a"));
        assert!(rule.matches("docs/1/Users"));
        assert!(!rule.matches("docs/1/Users1/a"));
    }

    #[test]
    fn test_rooted_rule_matches_siblings_only() {
        let rule = rule("/build.sh");
        assert!(rule.matches("build.sh"));
        assert!(!rule.matches("nested/build.sh"));
    }

    #[test]
    fn test_rooted_rule_wildcard_extension() {
        let rule = rule("/build.*");
        assert!(rule.matches("build.sh"));
        assert!(rule.matches("build.bat"));
        assert!(!rule.matches("built.sh"));
    }

    #[test]
    fn test_rooted_rule_wildcard_filename() {
        let rule = rule("/bu*ld.sh");
        assert!(rule.matches("build.sh"));
        assert!(rule.matches("buld.sh"));
        assert!(!rule.matches("build.bat"));
    }

    #[test]
    fn test_everything_rule_terminates() {
        let rule = rule("**");
        assert!(rule.matches("anything/at/all"));
        assert_eq!(rule.evaluate("x"), Operation::ExcludeAndTerminate);
    }

    #[test]
    fn test_invalid_rule_never_matches() {
        let rule = rule("***");
        assert!(rule.is_invalid());
        assert!(!rule.matches("anything"));
        assert_eq!(rule.evaluate("anything"), Operation::Noop);
        assert_eq!(rule.reason(), Some("the pattern *** is invalid"));
    }

    #[test]
    fn test_dot_rules_are_invalid() {
        assert!(rule(".").is_invalid());
        assert!(rule("..").is_invalid());
    }

    #[test]
    fn test_negated_rule_includes_on_match() {
        let rule = rule("!docs/UserApi.md");
        assert!(rule.negated());
        assert_eq!(rule.evaluate("docs/UserApi.md"), Operation::Include);
        assert_eq!(rule.evaluate("docs/Other.md"), Operation::Noop);
    }

    #[test]
    fn test_glob_classes_and_alternates() {
        assert!(rule("**/*[0-9]*").matches("docs/1/2/3/Some99File.md"));
        let grouped = rule("**/*.{java,md}");
        assert!(grouped.matches("docs/1/SomeFile.md"));
        assert!(grouped.matches("docs/1/SomeFile.java"));
        assert!(!grouped.matches("docs/1/SomeFile.txt"));
        let single = rule("**/*.?");
        assert!(single.matches("docs/foo.c"));
        assert!(!single.matches("docs/foo.cc"));
    }
}
