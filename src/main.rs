use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use snag::types::{Config, InputSource};

/// snag — print lines matching a pattern, with matches optionally
/// highlighted. Reads stdin unless -f or -t selects another source.
#[derive(Parser)]
#[command(name = "snag", version, about)]
struct Cli {
    /// Pattern to match.
    #[arg(short = 'p', long)]
    pattern: String,

    /// Read input lines from this file.
    #[arg(short = 'f', long, value_name = "PATH", conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Treat the argument itself as the input text.
    #[arg(short = 't', long, value_name = "TEXT")]
    text: Option<String>,

    /// Interpret the pattern as a regular expression.
    #[arg(short = 'r', long)]
    regex: bool,

    /// Highlight matches in bright cyan.
    #[arg(short = 'c', long)]
    color: bool,
}

fn main() {
    let cli = Cli::parse();

    let source = match (cli.file, cli.text) {
        (Some(path), _) => InputSource::File(path),
        (None, Some(text)) => InputSource::Text(text),
        (None, None) => InputSource::Stdin,
    };

    let config = Config {
        pattern: cli.pattern,
        source,
        regex: cli.regex,
        color: cli.color,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = snag::run(&config, &mut out) {
        let _ = out.flush();
        eprintln!("{e}");
        process::exit(e.exit_code());
    }
}
