use regex::Regex;

use crate::error::SnagError;
use crate::types::MatchResult;

/// How lines are tested against the pattern. Selected once at startup,
/// so the per-line path never re-checks the mode flag, and an invalid
/// regex fails here before any input is read.
#[derive(Debug)]
pub enum LineMatcher {
    Literal(String),
    Regex(Regex),
}

impl LineMatcher {
    pub fn new(pattern: &str, use_regex: bool) -> Result<Self, SnagError> {
        if pattern.is_empty() {
            return Err(SnagError::EmptyPattern);
        }
        if use_regex {
            let re = Regex::new(pattern).map_err(|e| SnagError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;
            Ok(Self::Regex(re))
        } else {
            Ok(Self::Literal(pattern.to_string()))
        }
    }

    /// Test one line. `None` drops the line from output entirely.
    pub fn match_line(&self, line: &str) -> Option<MatchResult> {
        match self {
            Self::Literal(pattern) => match_literal(line, pattern),
            Self::Regex(re) => match_regex(line, re),
        }
    }
}

fn match_literal(line: &str, pattern: &str) -> Option<MatchResult> {
    if !line.contains(pattern) {
        return None;
    }
    let mut segments: Vec<String> = line.split(pattern).map(String::from).collect();
    let trailing_match = line.ends_with(pattern);
    if trailing_match {
        // Drop the empty piece after the final occurrence; the formatter
        // re-emits the pattern itself after the last stored segment.
        segments.pop();
    }
    Some(MatchResult {
        segments,
        matches: Vec::new(),
        trailing_match,
    })
}

fn match_regex(line: &str, re: &Regex) -> Option<MatchResult> {
    let mut segments = Vec::new();
    let mut matches = Vec::new();
    let mut last = 0;
    for m in re.find_iter(line) {
        segments.push(line[last..m.start()].to_string());
        matches.push(m.as_str().to_string());
        last = m.end();
    }
    if matches.is_empty() {
        return None;
    }
    let trailing_match = last == line.len();
    if !trailing_match {
        segments.push(line[last..].to_string());
    }
    Some(MatchResult {
        segments,
        matches,
        trailing_match,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal(pattern: &str) -> LineMatcher {
        LineMatcher::new(pattern, false).unwrap()
    }

    fn regex(pattern: &str) -> LineMatcher {
        LineMatcher::new(pattern, true).unwrap()
    }

    #[test]
    fn literal_interior_match() {
        let result = literal("cat").match_line("the cat sat").unwrap();
        assert_eq!(result.segments, vec!["the ", " sat"]);
        assert!(result.matches.is_empty());
        assert!(!result.trailing_match);
    }

    #[test]
    fn literal_no_match_drops_line() {
        assert!(literal("xyz").match_line("abc").is_none());
    }

    #[test]
    fn literal_trailing_match_has_no_final_segment() {
        let result = literal("end").match_line("the end").unwrap();
        assert_eq!(result.segments, vec!["the "]);
        assert!(result.trailing_match);
    }

    #[test]
    fn literal_line_equal_to_pattern() {
        let result = literal("cat").match_line("cat").unwrap();
        assert_eq!(result.segments, vec![""]);
        assert!(result.trailing_match);
    }

    #[test]
    fn literal_adjacent_occurrences() {
        let result = literal("aa").match_line("xaaaa").unwrap();
        // Two occurrences back to back at line end: both split pieces empty.
        assert_eq!(result.segments, vec!["x", ""]);
        assert!(result.trailing_match);
    }

    #[test]
    fn regex_basic_split() {
        let result = regex("[0-9]+").match_line("id42done").unwrap();
        assert_eq!(result.segments, vec!["id", "done"]);
        assert_eq!(result.matches, vec!["42"]);
        assert!(!result.trailing_match);
    }

    #[test]
    fn regex_no_match_drops_line() {
        assert!(regex("[0-9]+").match_line("no digits here").is_none());
    }

    #[test]
    fn regex_full_line_match_is_trailing() {
        let result = regex("[0-9]+").match_line("12345").unwrap();
        assert_eq!(result.segments, vec![""]);
        assert_eq!(result.matches, vec!["12345"]);
        assert!(result.trailing_match);
    }

    #[test]
    fn regex_adjacent_matches_keep_empty_segment() {
        let result = regex("[0-9]").match_line("a12b").unwrap();
        assert_eq!(result.segments, vec!["a", "", "b"]);
        assert_eq!(result.matches, vec!["1", "2"]);
        assert!(!result.trailing_match);
    }

    #[test]
    fn regex_match_at_line_start() {
        let result = regex("[0-9]+").match_line("42done").unwrap();
        assert_eq!(result.segments, vec!["", "done"]);
        assert_eq!(result.matches, vec!["42"]);
    }

    /// Interleaving segments and matches in order must reproduce the line
    /// exactly, for any shape of match placement.
    #[test]
    fn regex_round_trip_is_lossless() {
        let matcher = regex("[0-9]+");
        let lines = [
            "id42done",
            "42done",
            "id42",
            "42",
            "a1b22c333d",
            "1a2b3",
            "  7  ",
        ];
        for line in lines {
            let result = matcher.match_line(line).unwrap();
            let mut rebuilt = String::new();
            for (i, seg) in result.segments.iter().enumerate() {
                rebuilt.push_str(seg);
                if let Some(m) = result.matches.get(i) {
                    rebuilt.push_str(m);
                }
            }
            assert_eq!(rebuilt, line, "round trip failed for {line:?}");
        }
    }

    #[test]
    fn segment_count_invariant() {
        let matcher = regex("[0-9]+");
        for line in ["id42done", "id42", "42 and 7", "9"] {
            let result = matcher.match_line(line).unwrap();
            let expected = if result.trailing_match {
                result.matches.len()
            } else {
                result.matches.len() + 1
            };
            assert_eq!(result.segments.len(), expected, "invariant broke for {line:?}");
        }
    }

    #[test]
    fn empty_pattern_rejected() {
        assert!(matches!(
            LineMatcher::new("", false),
            Err(SnagError::EmptyPattern)
        ));
        assert!(matches!(
            LineMatcher::new("", true),
            Err(SnagError::EmptyPattern)
        ));
    }

    #[test]
    fn invalid_regex_fails_at_construction() {
        let err = LineMatcher::new("[", true).unwrap_err();
        assert!(matches!(err, SnagError::InvalidPattern { .. }));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn literal_mode_never_compiles() {
        // "[" is a perfectly good substring when -r is off.
        let result = literal("[").match_line("a[b").unwrap();
        assert_eq!(result.segments, vec!["a", "b"]);
    }
}
