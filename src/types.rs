use std::path::PathBuf;

/// Where input lines come from. `File` and `Text` are mutually exclusive
/// at the CLI; making the source an enum keeps that conflict
/// unrepresentable past argument parsing.
#[derive(Debug, Clone)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
    Text(String),
}

/// Parsed options, built once in `main` and passed by reference.
/// No process-wide flag state.
#[derive(Debug, Clone)]
pub struct Config {
    pub pattern: String,
    pub source: InputSource,
    pub regex: bool,
    pub color: bool,
}

/// One matching line, decomposed around its matches.
///
/// `segments` are the pieces between matches, in order, empty strings
/// preserved where matches are adjacent or at line start. `matches` holds
/// the matched substrings in regex mode; literal mode leaves it empty and
/// reuses the pattern string as the highlight unit for every occurrence.
///
/// When `trailing_match` is set the line ends exactly on a match and no
/// final segment is stored, so `segments` pairs one-to-one with the
/// occurrences; otherwise `segments` has one entry more than the
/// occurrence count.
#[derive(Debug, PartialEq, Eq)]
pub struct MatchResult {
    pub segments: Vec<String>,
    pub matches: Vec<String>,
    pub trailing_match: bool,
}
