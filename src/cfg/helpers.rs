// cfg/helpers.rs

//! # Level String Parsing
//!
//! Turns a string such as `"a=debug,b=warn,trace"` into a `LevelAssignment`.
//!
//! The format is a comma separated list of `name=level` or bare `level`
//! entries. A bare level, an empty name or the name `*` sets the default
//! level. Level keywords are case-insensitive and whitespace around names
//! and levels is ignored. Parsing never fails: an unknown keyword resolves
//! to `info` and a later entry for the same name replaces an earlier one.
//!
//! ## Example Usage
//! ```rust
//! use logspec::cfg::helpers::parse;
//! use logspec::level::Level;
//!
//! let assignment = parse("net=debug, db = WARN ,error");
//! assert_eq!(assignment.level_of("net"), Some(Level::Debug));
//! assert_eq!(assignment.level_of("db"), Some(Level::Warn));
//! assert_eq!(assignment.default_level, Some(Level::Error));
//! ```

use std::collections::BTreeMap;

use serde::Serialize;

use crate::app::{DEFAULT_LOGGER_MARKER, ENTRY_SEPARATOR, KV_SEPARATOR};
use crate::level::Level;

/// Level resolved for any keyword missing from the level table.
pub const FALLBACK_LEVEL: Level = Level::Info;

const TRIM_CHARS: &[char] = &[' ', '\t', '\n', '\r'];

/// Parsed level configuration, ready to hand to a `LevelSink`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LevelAssignment {
    /// Explicit level per logger name
    pub levels: BTreeMap<String, Level>,

    /// Level for every logger not named in `levels`; `None` leaves the
    /// receiver's current default untouched
    pub default_level: Option<Level>,
}

impl LevelAssignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Explicit level for `name`, ignoring the default.
    pub fn level_of(&self, name: &str) -> Option<Level> {
        self.levels.get(name).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty() && self.default_level.is_none()
    }

    fn assign(&mut self, name: &str, level: Level) {
        if name.is_empty() || name == DEFAULT_LOGGER_MARKER {
            self.default_level = Some(level);
        } else {
            self.levels.insert(name.to_string(), level);
        }
    }
}

/// A level keyword that was not in the level table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnrecognizedLevel {
    /// Logger name as written (empty for the default entry)
    pub name: String,

    /// Keyword as written, after trimming
    pub value: String,

    /// Level that was used instead
    pub resolved: Level,
}

/// Splits `input` on commas, skipping empty pieces.
pub fn tokenize(input: &str) -> impl Iterator<Item = &str> {
    input
        .split(ENTRY_SEPARATOR)
        .filter(|token| !token.is_empty())
}

/// Returns the trimmed `(name, value)` pair of a `name<sep>value` token.
///
/// Only the first separator splits; without one the whole token is the
/// value and the name is empty.
///
/// ```rust
/// use logspec::cfg::helpers::extract_kv;
///
/// assert_eq!(extract_kv('=', " key  =  val "), ("key", "val"));
/// assert_eq!(extract_kv('=', "key="), ("key", ""));
/// assert_eq!(extract_kv('=', "val"), ("", "val"));
/// ```
pub fn extract_kv(sep: char, token: &str) -> (&str, &str) {
    let (name, value) = token.split_once(sep).unwrap_or(("", token));
    (name.trim_matches(TRIM_CHARS), value.trim_matches(TRIM_CHARS))
}

/// Resolves a level keyword, falling back to `FALLBACK_LEVEL` on unknown
/// text. Only ASCII letters are case folded.
pub fn resolve_level(value: &str) -> Level {
    resolve(value).unwrap_or(FALLBACK_LEVEL)
}

fn resolve(value: &str) -> Option<Level> {
    let lowered = value.to_ascii_lowercase();
    if lowered == "off" {
        return Some(Level::Off);
    }
    Level::from_name(&lowered)
}

/// Parses a level string into a `LevelAssignment`.
pub fn parse(input: &str) -> LevelAssignment {
    parse_with_report(input).0
}

/// Like `parse`, but also returns every entry whose keyword was unknown
/// and therefore fell back to `FALLBACK_LEVEL`.
pub fn parse_with_report(input: &str) -> (LevelAssignment, Vec<UnrecognizedLevel>) {
    let mut assignment = LevelAssignment::new();
    let mut unrecognized = Vec::new();

    for token in tokenize(input) {
        let (name, value) = extract_kv(KV_SEPARATOR, token);
        let level = match resolve(value) {
            Some(level) => level,
            None => {
                unrecognized.push(UnrecognizedLevel {
                    name: name.to_string(),
                    value: value.to_string(),
                    resolved: FALLBACK_LEVEL,
                });
                FALLBACK_LEVEL
            }
        };
        assignment.assign(name, level);
    }

    (assignment, unrecognized)
}

/// Unit tests for level string parsing.
#[cfg(test)]
mod tests {
    use super::*;

    fn levels(pairs: &[(&str, Level)]) -> BTreeMap<String, Level> {
        pairs
            .iter()
            .map(|(name, level)| (name.to_string(), *level))
            .collect()
    }

    #[test]
    fn test_tokenize_skips_empty_tokens() {
        let tokens: Vec<&str> = tokenize(",a=debug,,b=info,").collect();
        assert_eq!(tokens, vec!["a=debug", "b=info"]);
        assert_eq!(tokenize("").count(), 0);
        assert_eq!(tokenize(",,,").count(), 0);
    }

    #[test]
    fn test_tokenize_keeps_whitespace_tokens() {
        let tokens: Vec<&str> = tokenize("a, ,b").collect();
        assert_eq!(tokens, vec!["a", " ", "b"]);
    }

    #[test]
    fn test_extract_kv() {
        assert_eq!(extract_kv('=', "key=val"), ("key", "val"));
        assert_eq!(extract_kv('=', "key="), ("key", ""));
        assert_eq!(extract_kv('=', "=val"), ("", "val"));
        assert_eq!(extract_kv('=', "   key = val  "), ("key", "val"));
        assert_eq!(extract_kv('=', "\tval\r\n"), ("", "val"));
        assert_eq!(extract_kv('=', "a=b=c"), ("a", "b=c"));
        assert_eq!(extract_kv('=', ""), ("", ""));
    }

    #[test]
    fn test_resolve_level() {
        assert_eq!(resolve_level("DEBUG"), Level::Debug);
        assert_eq!(resolve_level("Warning"), Level::Warn);
        assert_eq!(resolve_level("oFf"), Level::Off);
        assert_eq!(resolve_level("bogus"), Level::Info);
        assert_eq!(resolve_level("err"), Level::Info);
        assert_eq!(resolve_level(""), Level::Info);
    }

    #[test]
    fn test_resolve_level_ascii_only_folding() {
        assert_eq!(resolve_level("CRITICAL"), Level::Critical);
        assert_eq!(resolve_level("CR\u{130}TICAL"), FALLBACK_LEVEL);
    }

    #[test]
    fn test_parse_empty() {
        let assignment = parse("");
        assert!(assignment.levels.is_empty());
        assert_eq!(assignment.default_level, None);
        assert!(assignment.is_empty());
        assert!(parse(",,").is_empty());
    }

    #[test]
    fn test_parse_named_levels() {
        let assignment = parse("a=debug,b=warn,c=critical");
        assert_eq!(
            assignment.levels,
            levels(&[("a", Level::Debug), ("b", Level::Warn), ("c", Level::Critical)])
        );
        assert_eq!(assignment.default_level, None);
    }

    #[test]
    fn test_parse_bare_value_sets_default() {
        let assignment = parse("info");
        assert!(assignment.levels.is_empty());
        assert_eq!(assignment.default_level, Some(Level::Info));
    }

    #[test]
    fn test_parse_wildcard_and_empty_name_set_default() {
        for input in ["*=error", "=error", " * = ERROR "] {
            let assignment = parse(input);
            assert!(assignment.levels.is_empty(), "input {:?}", input);
            assert_eq!(assignment.default_level, Some(Level::Error), "input {:?}", input);
        }
    }

    #[test]
    fn test_parse_unknown_level_falls_back() {
        let assignment = parse("a=bogus");
        assert_eq!(assignment.levels, levels(&[("a", Level::Info)]));
    }

    #[test]
    fn test_parse_off_is_case_insensitive() {
        assert_eq!(parse("a=OFF").levels, levels(&[("a", Level::Off)]));
        assert_eq!(parse("a=oFf").levels, levels(&[("a", Level::Off)]));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let assignment = parse("  a  =  warn  ,  b=err  ");
        assert_eq!(
            assignment.levels,
            levels(&[("a", Level::Warn), ("b", Level::Info)])
        );
    }

    #[test]
    fn test_parse_last_wins() {
        assert_eq!(parse("a=warn,a=error").levels, levels(&[("a", Level::Error)]));
        assert_eq!(parse("trace,*=off,=debug").default_level, Some(Level::Debug));
    }

    #[test]
    fn test_parse_skips_empty_tokens() {
        let assignment = parse("a=warn,,b=info");
        assert_eq!(
            assignment.levels,
            levels(&[("a", Level::Warn), ("b", Level::Info)])
        );
    }

    #[test]
    fn test_parse_names_are_case_sensitive() {
        let assignment = parse("Net=debug,net=error");
        assert_eq!(assignment.level_of("Net"), Some(Level::Debug));
        assert_eq!(assignment.level_of("net"), Some(Level::Error));
    }

    #[test]
    fn test_parse_mixed() {
        let assignment = parse("a=debug,b=warn,trace");
        assert_eq!(
            assignment.levels,
            levels(&[("a", Level::Debug), ("b", Level::Warn)])
        );
        assert_eq!(assignment.default_level, Some(Level::Trace));
    }

    #[test]
    fn test_parse_is_repeatable() {
        let input = "x=trace, y = OFF ,*=warning,y=critical";
        assert_eq!(parse(input), parse(input));
    }

    #[test]
    fn test_parse_from_many_threads() {
        let inputs = [
            "a=debug,b=warn,c=critical",
            "info",
            "*=error, net = OFF",
            "a=warn,a=error,,x=bogus",
            "",
            "  db  =  TRACE  ,  cache=err  ,warning",
        ];
        let expected: Vec<LevelAssignment> = inputs.iter().map(|input| parse(input)).collect();

        let handles: Vec<_> = inputs
            .iter()
            .copied()
            .map(|input| {
                std::thread::spawn(move || (0..100).map(|_| parse(input)).collect::<Vec<_>>())
            })
            .collect();

        for (handle, expected) in handles.into_iter().zip(&expected) {
            let results = handle.join().unwrap();
            assert!(results.iter().all(|result| result == expected));
        }
    }

    #[test]
    fn test_parse_with_report() {
        let (assignment, unrecognized) = parse_with_report("a=debug,b=loud,verbose,c=");
        assert_eq!(
            assignment.levels,
            levels(&[("a", Level::Debug), ("b", Level::Info), ("c", Level::Info)])
        );
        assert_eq!(assignment.default_level, Some(Level::Info));
        let values: Vec<(&str, &str)> = unrecognized
            .iter()
            .map(|u| (u.name.as_str(), u.value.as_str()))
            .collect();
        assert_eq!(values, vec![("b", "loud"), ("", "verbose"), ("c", "")]);
        assert!(unrecognized.iter().all(|u| u.resolved == FALLBACK_LEVEL));
    }

    #[test]
    fn test_parse_with_report_clean_input() {
        let (assignment, unrecognized) = parse_with_report("a=off,*=critical");
        assert!(unrecognized.is_empty());
        assert_eq!(assignment, parse("a=off,*=critical"));
    }

    #[test]
    fn test_assignment_serializes_to_json() {
        let json = serde_json::to_string(&parse("b=warn,a=debug,off")).unwrap();
        assert_eq!(
            json,
            r#"{"levels":{"a":"debug","b":"warning"},"default_level":"off"}"#
        );
    }
}
