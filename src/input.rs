use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor, IsTerminal};

use crate::error::SnagError;
use crate::types::InputSource;

/// Open the configured source as a buffered line reader. Every failure
/// here happens before any line is processed, so a bad source never
/// produces partial output.
pub fn open(source: &InputSource) -> Result<Box<dyn BufRead>, SnagError> {
    match source {
        InputSource::Stdin => {
            if io::stdin().is_terminal() {
                return Err(SnagError::StdinNotPiped);
            }
            Ok(Box::new(BufReader::new(io::stdin())))
        }
        InputSource::File(path) => {
            let file = File::open(path).map_err(|source| SnagError::Io {
                path: path.clone(),
                source,
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
        InputSource::Text(text) => Ok(Box::new(Cursor::new(text.clone().into_bytes()))),
    }
}
