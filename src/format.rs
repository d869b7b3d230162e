use crate::matcher::LineMatcher;
use crate::types::MatchResult;

// Bright cyan, same markers the original tool emits. No TTY detection:
// the codes go out unconditionally when coloring is on.
const HIGHLIGHT: &str = "\x1b[1;36m";
const RESET: &str = "\x1b[0m";

/// Reassemble a matched line for printing, optionally wrapping each
/// matched portion in ANSI highlight markers.
pub fn render(result: &MatchResult, matcher: &LineMatcher, color: bool) -> String {
    match matcher {
        LineMatcher::Literal(pattern) => render_literal(result, pattern, color),
        LineMatcher::Regex(_) => render_regex(result, color),
    }
}

/// Literal mode reuses the one pattern string as the highlight unit after
/// every segment. The final segment is followed by the pattern only on a
/// trailing match; otherwise it closes the line bare.
fn render_literal(result: &MatchResult, pattern: &str, color: bool) -> String {
    let unit = if color {
        format!("{HIGHLIGHT}{pattern}{RESET}")
    } else {
        pattern.to_string()
    };
    let mut out = String::new();
    let last = result.segments.len().saturating_sub(1);
    for (i, segment) in result.segments.iter().enumerate() {
        out.push_str(segment);
        if i < last || result.trailing_match {
            out.push_str(&unit);
        }
    }
    out
}

/// Regex mode interleaves each segment with its captured match text; the
/// final segment, when one exists, has no match after it.
fn render_regex(result: &MatchResult, color: bool) -> String {
    let mut out = String::new();
    for (i, segment) in result.segments.iter().enumerate() {
        out.push_str(segment);
        if let Some(m) = result.matches.get(i) {
            if color {
                out.push_str(HIGHLIGHT);
                out.push_str(m);
                out.push_str(RESET);
            } else {
                out.push_str(m);
            }
        }
    }
    out
}
