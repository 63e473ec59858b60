//! Line tokenizer for regeneration-ignore files.
//!
//! One line tokenizes into a sequence of [`Part`]s; rule compilation decides
//! what the sequence means. Tokenization errors are reported per line and
//! never abort the surrounding file.

use thiserror::Error;

/// One syntactic part of an ignore-rule line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    /// A run of literal characters.
    Text(String),
    /// `*` — single-segment wildcard.
    MatchAny,
    /// `**` — recursive wildcard.
    MatchAll,
    /// `/` between segments.
    PathDelim,
    /// Leading `!`.
    Negate,
    /// Whole-line `#` comment; carries the raw line.
    Comment(String),
    /// Trailing `/`.
    DirectoryMarker,
    /// Leading `/`, anchoring the rule to the ignore file's own directory.
    RootedMarker,
    /// `\ `
    EscapedSpace,
    /// `\!`
    EscapedExclamation,
}

impl Part {
    /// The glob fragment this part contributes to a reconstructed pattern.
    ///
    /// Negation, rooting, and comments shape rule semantics but are not part
    /// of the pattern itself.
    pub fn pattern_fragment(&self) -> Option<String> {
        match self {
            Part::Text(text) => Some(text.clone()),
            Part::MatchAny => Some("*".into()),
            Part::MatchAll => Some("**".into()),
            Part::PathDelim | Part::DirectoryMarker => Some("/".into()),
            // The backslash survives; a rule escaping a space matches the
            // two-character sequence, not a bare space.
            Part::EscapedSpace => Some("\\ ".into()),
            Part::EscapedExclamation => Some("!".into()),
            Part::Negate | Part::Comment(_) | Part::RootedMarker => None,
        }
    }
}

/// Tokenization failures for a single line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("negation with no negated pattern")]
    BareNegation,
    #[error("the pattern *** is invalid")]
    TripleStar,
}

/// Tokenize one line of an ignore file.
pub fn tokenize(line: &str) -> Result<Vec<Part>, ParseError> {
    let chars: Vec<char> = line.chars().collect();
    let mut parts = Vec::new();
    let mut buffer = String::new();
    let mut i = 0;

    while i < chars.len() {
        let mut current = chars[i];
        let mut next = chars.get(i + 1).copied();

        if i == 0 {
            match current {
                '#' => {
                    parts.push(Part::Comment(line.to_owned()));
                    return Ok(parts);
                }
                '!' => {
                    if chars.len() == 1 {
                        return Err(ParseError::BareNegation);
                    }
                    parts.push(Part::Negate);
                    i += 1;
                    continue;
                }
                '\\' if next == Some('#') => {
                    // Escaped hash: the line is a pattern, not a comment.
                    current = '#';
                    next = None;
                    i += 1;
                }
                _ => {}
            }
        }

        match current {
            '*' => {
                if next == Some('*') {
                    if chars.get(i + 2) == Some(&'*') {
                        return Err(ParseError::TripleStar);
                    }
                    flush(&mut buffer, &mut parts);
                    parts.push(Part::MatchAll);
                    i += 2;
                } else {
                    flush(&mut buffer, &mut parts);
                    parts.push(Part::MatchAny);
                    i += 1;
                }
            }
            '/' if i == 0 => {
                parts.push(Part::RootedMarker);
                i += 1;
            }
            '\\' if next == Some(' ') => {
                parts.push(Part::EscapedSpace);
                i += 2;
            }
            '\\' if next == Some('!') => {
                parts.push(Part::EscapedExclamation);
                i += 2;
            }
            '/' => {
                if i == chars.len() - 1 {
                    flush(&mut buffer, &mut parts);
                    parts.push(Part::DirectoryMarker);
                    i += 1;
                } else {
                    flush(&mut buffer, &mut parts);
                    parts.push(Part::PathDelim);
                    // Collapse doubled separators.
                    if next == Some('/') {
                        i += 1;
                    }
                    i += 1;
                }
            }
            _ => {
                buffer.push(current);
                i += 1;
            }
        }
    }

    if !buffer.is_empty() {
        let trimmed = buffer.trim();
        if !trimmed.is_empty() {
            parts.push(Part::Text(trimmed.to_owned()));
        }
    }
    Ok(parts)
}

fn flush(buffer: &mut String, parts: &mut Vec<Part>) {
    if !buffer.is_empty() {
        parts.push(Part::Text(std::mem::take(buffer)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_line() {
        let parts = tokenize("# a comment").unwrap();
        assert_eq!(parts, vec![Part::Comment("# a comment".into())]);
    }

    #[test]
    fn test_escaped_hash_is_text() {
        let parts = tokenize("\\#notacomment").unwrap();
        assert_eq!(parts, vec![Part::Text("#notacomment".into())]);
    }

    #[test]
    fn test_negated_pattern() {
        let parts = tokenize("!docs/UserApi.md").unwrap();
        assert_eq!(
            parts,
            vec![
                Part::Negate,
                Part::Text("docs".into()),
                Part::PathDelim,
                Part::Text("UserApi.md".into()),
            ]
        );
    }

    #[test]
    fn test_bare_negation_is_an_error() {
        assert_eq!(tokenize("!"), Err(ParseError::BareNegation));
    }

    #[test]
    fn test_recursive_wildcard() {
        let parts = tokenize("docs/**").unwrap();
        assert_eq!(
            parts,
            vec![Part::Text("docs".into()), Part::PathDelim, Part::MatchAll]
        );
    }

    #[test]
    fn test_triple_star_is_an_error() {
        assert_eq!(tokenize("***"), Err(ParseError::TripleStar));
        assert_eq!(tokenize("docs/***"), Err(ParseError::TripleStar));
    }

    #[test]
    fn test_single_wildcard_splits_text() {
        let parts = tokenize("bu*ld.sh").unwrap();
        assert_eq!(
            parts,
            vec![
                Part::Text("bu".into()),
                Part::MatchAny,
                Part::Text("ld.sh".into()),
            ]
        );
    }

    #[test]
    fn test_rooted_marker() {
        let parts = tokenize("/build.sh").unwrap();
        assert_eq!(
            parts,
            vec![Part::RootedMarker, Part::Text("build.sh".into())]
        );
    }

    #[test]
    fn test_trailing_slash_is_directory_marker() {
        let parts = tokenize("docs/**/Users/").unwrap();
        assert_eq!(
            parts,
            vec![
                Part::Text("docs".into()),
                Part::PathDelim,
                Part::MatchAll,
                Part::PathDelim,
                Part::Text("Users".into()),
                Part::DirectoryMarker,
            ]
        );
    }

    #[test]
    fn test_escaped_space() {
        let parts = tokenize("properly\\ escaped.txt").unwrap();
        assert_eq!(
            parts,
            vec![
                Part::Text("properly".into()),
                Part::EscapedSpace,
                Part::Text("escaped.txt".into()),
            ]
        );
    }

    #[test]
    fn test_doubled_separator_collapses() {
        let parts = tokenize("docs//api.md").unwrap();
        assert_eq!(
            parts,
            vec![
                Part::Text("docs".into()),
                Part::PathDelim,
                Part::Text("api.md".into()),
            ]
        );
    }

    #[test]
    fn test_trailing_whitespace_trimmed() {
        let parts = tokenize("build.sh   ").unwrap();
        assert_eq!(parts, vec![Part::Text("build.sh".into())]);
    }
}
