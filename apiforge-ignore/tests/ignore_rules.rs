//! Rule-matrix tests for the ignore processor, exercising each rule shape
//! end to end through file content.

use std::fs;

use apiforge_ignore::{IGNORE_FILE, IgnoreProcessor};

fn processor(content: &str) -> IgnoreProcessor {
    IgnoreProcessor::from_content(content)
}

#[test]
fn exact_filename_match() {
    let p = processor("build.sh");
    assert!(!p.allows_file("build.sh"));
    assert!(p.allows_file("build.bat"));
    assert!(p.allows_file("nested/build.sh"));
}

#[test]
fn single_segment_wildcard_does_not_cross_separators() {
    let p = processor("*.sh");
    assert!(!p.allows_file("build.sh"));
    assert!(p.allows_file("scripts/build.sh"));
}

#[test]
fn recursive_wildcard_crosses_separators() {
    let p = processor("**/build.sh");
    assert!(!p.allows_file("scripts/build.sh"));
    assert!(!p.allows_file("a/b/c/build.sh"));
    assert!(p.allows_file("build.txt"));
}

#[test]
fn rooted_rule_only_matches_top_level() {
    let p = processor("/build.sh");
    assert!(!p.allows_file("build.sh"));
    assert!(p.allows_file("nested/build.sh"));
}

#[test]
fn rooted_rule_with_wildcard_extension() {
    let p = processor("/build.*");
    assert!(!p.allows_file("build.sh"));
    assert!(!p.allows_file("build.bat"));
    assert!(p.allows_file("build"));
    assert!(p.allows_file("nested/build.sh"));
}

#[test]
fn directory_rule_excludes_subtree() {
    let p = processor("docs/");
    assert!(!p.allows_file("docs/UserApi.md"));
    assert!(!p.allows_file("docs/1/2/deep.md"));
    assert!(p.allows_file("src/UserApi.md"));
}

#[test]
fn character_class_and_alternates() {
    let p = processor("**/*[0-9]*\n**/*.{iml,asc}");
    assert!(!p.allows_file("docs/1/2/3/Some99File.md"));
    assert!(!p.allows_file("project.iml"));
    assert!(!p.allows_file("keys/release.asc"));
    assert!(p.allows_file("docs/SomeFile.md"));
}

#[test]
fn question_mark_matches_exactly_one_character() {
    let p = processor("**/*.?");
    assert!(!p.allows_file("src/main.c"));
    assert!(p.allows_file("src/main.cc"));
}

#[test]
fn escaped_space_requires_the_escape_in_the_path() {
    let p = processor("properly\\ escaped.txt");
    assert!(!p.allows_file("properly\\ escaped.txt"));
    assert!(p.allows_file("properly escaped.txt"));
}

#[test]
fn escaped_exclamation_is_literal() {
    let p = processor("\\!important.txt");
    assert!(!p.allows_file("!important.txt"));
    assert!(p.allows_file("important.txt"));
}

#[test]
fn escaped_hash_is_not_a_comment() {
    let p = processor("\\#pinned.md");
    assert!(!p.allows_file("#pinned.md"));
}

#[test]
fn negation_restores_a_file_excluded_by_a_file_rule() {
    let p = processor("docs/**\n!docs/UserApi.md");
    assert!(p.allows_file("docs/UserApi.md"));
    assert!(!p.allows_file("docs/PetApi.md"));
}

#[test]
fn negation_cannot_restore_inside_an_excluded_directory() {
    let p = processor("docs/**/Users/\n!docs/1/Users/UserApi.md");
    assert!(!p.allows_file("docs/1/Users/UserApi.md"));
}

#[test]
fn directory_negation_restores_inside_an_excluded_directory() {
    let p = processor("docs/**/Users/\n!docs/1/Users/");
    assert!(p.allows_file("docs/1/Users/UserApi.md"));
    assert!(!p.allows_file("docs/2/Users/UserApi.md"));
}

#[test]
fn later_exclude_overrides_earlier_negation() {
    let p = processor("!docs/UserApi.md\ndocs/**");
    assert!(!p.allows_file("docs/UserApi.md"));
}

#[test]
fn everything_rule_ignores_later_negations() {
    let p = processor("**\n!README.md");
    assert!(!p.allows_file("README.md"));
    assert!(!p.allows_file("src/lib.rs"));
}

#[test]
fn invalid_lines_do_not_poison_the_file() {
    let p = processor("***\n.\n..\nbuild.sh");
    assert!(!p.allows_file("build.sh"));
    assert!(p.allows_file("docs/api.md"));
}

#[test]
fn loads_rules_from_output_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join(IGNORE_FILE), "# keep the docs\ndocs/**\n").expect("write");

    let p = IgnoreProcessor::from_output_dir(dir.path()).expect("load");
    assert!(!p.allows_file("docs/UserApi.md"));
    assert!(p.allows_file("src/UserApi.md"));
}

#[test]
fn missing_ignore_file_allows_everything() {
    let dir = tempfile::tempdir().expect("tempdir");
    let p = IgnoreProcessor::from_output_dir(dir.path()).expect("load");
    assert!(p.is_empty());
    assert!(p.allows_file("anything/at/all.txt"));
}
