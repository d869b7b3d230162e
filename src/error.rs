use std::io;
use std::path::PathBuf;

/// Every error snag can produce. All of them are fatal: the tool either
/// completes the full scan or aborts before printing anything.
#[derive(Debug)]
pub enum SnagError {
    EmptyPattern,
    InvalidPattern {
        pattern: String,
        reason: String,
    },
    StdinNotPiped,
    Io {
        path: PathBuf,
        source: io::Error,
    },
    /// Read or write failure mid-scan.
    Read {
        source: io::Error,
    },
}

impl std::fmt::Display for SnagError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPattern => {
                write!(f, "empty search pattern; provide one with -p")
            }
            Self::InvalidPattern { pattern, reason } => {
                write!(f, "invalid pattern \"{pattern}\": {reason}")
            }
            Self::StdinNotPiped => {
                write!(f, "stdin is a terminal; pipe input or use -f/-t")
            }
            Self::Io { path, source } => {
                write!(f, "{}: {source}", path.display())
            }
            Self::Read { source } => {
                write!(f, "read error: {source}")
            }
        }
    }
}

impl std::error::Error for SnagError {}

impl SnagError {
    /// Process exit code: resource errors 2, pattern errors 3.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::StdinNotPiped | Self::Io { .. } | Self::Read { .. } => 2,
            Self::EmptyPattern | Self::InvalidPattern { .. } => 3,
        }
    }
}
