//! Helpers for comma-separated CLI values.
//!
//! Mapping flags arrive as `key=value` tuples (`--type-mappings
//! array=List,map=Map`); set flags arrive as bare comma-separated names.

use indexmap::{IndexMap, IndexSet};

use crate::error::{Error, Result};

/// Parse a comma-separated list of `key=value` pairs into the target map.
///
/// Later pairs override earlier ones for the same key. Empty segments are
/// skipped, so a trailing comma is harmless.
pub fn apply_pairs(input: &str, target: &mut IndexMap<String, String>) -> Result<()> {
    for segment in input.split(',') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        let Some((key, value)) = segment.split_once('=') else {
            return Err(Box::new(Error::MalformedPair {
                pair: segment.to_owned(),
            }));
        };
        target.insert(key.trim().to_owned(), value.trim().to_owned());
    }
    Ok(())
}

/// Parse a comma-separated list of `key=value` pairs into a fresh map.
pub fn parse_pairs(input: &str) -> Result<IndexMap<String, String>> {
    let mut map = IndexMap::new();
    apply_pairs(input, &mut map)?;
    Ok(map)
}

/// Parse a comma-separated list of names, deduplicated in first-seen order.
pub fn parse_list(input: &str) -> Vec<String> {
    let mut set = IndexSet::new();
    apply_list(input, &mut set);
    set.into_iter().collect()
}

/// Parse a comma-separated list of names into the target set.
pub fn apply_list(input: &str, target: &mut IndexSet<String>) {
    for segment in input.split(',') {
        let segment = segment.trim();
        if !segment.is_empty() {
            target.insert(segment.to_owned());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_pairs() {
        let mut map = IndexMap::new();
        apply_pairs("array=List, map=Map,", &mut map).unwrap();
        assert_eq!(map["array"], "List");
        assert_eq!(map["map"], "Map");
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_apply_pairs_later_wins() {
        let mut map = IndexMap::new();
        apply_pairs("array=List,array=Vec", &mut map).unwrap();
        assert_eq!(map["array"], "Vec");
    }

    #[test]
    fn test_apply_pairs_rejects_bare_key() {
        let mut map = IndexMap::new();
        let err = apply_pairs("array", &mut map).unwrap_err();
        assert!(err.to_string().contains("array"));
    }

    #[test]
    fn test_apply_list() {
        let mut set = IndexSet::new();
        apply_list("String, Boolean,String", &mut set);
        assert_eq!(set.len(), 2);
        assert!(set.contains("Boolean"));
    }
}
