#![warn(clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc, // failure modes live on the SnagError variants
)]

pub mod error;
pub(crate) mod format;
pub(crate) mod input;
pub(crate) mod matcher;
pub mod types;

use std::io::{BufRead, Write};

use error::SnagError;
use matcher::LineMatcher;
use types::Config;

/// The single public API. One linear pass over the configured source:
/// read line, match, reconstruct, write. Lines without a match are
/// dropped; setup failures abort before anything is written.
pub fn run(config: &Config, out: &mut impl Write) -> Result<(), SnagError> {
    let matcher = LineMatcher::new(&config.pattern, config.regex)?;
    let reader = input::open(&config.source)?;
    scan(&matcher, reader, config.color, out)
}

fn scan(
    matcher: &LineMatcher,
    reader: impl BufRead,
    color: bool,
    out: &mut impl Write,
) -> Result<(), SnagError> {
    for line in reader.lines() {
        let line = line.map_err(|source| SnagError::Read { source })?;
        if let Some(result) = matcher.match_line(&line) {
            let rendered = format::render(&result, matcher, color);
            writeln!(out, "{rendered}").map_err(|source| SnagError::Read { source })?;
        }
    }
    Ok(())
}
