use std::{fs::File, io::{self, Write}, path::{Path, PathBuf}, process};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use uni::{
    errors::errors::{Error, ErrorImpl, ErrorTip},
    get_line_at,
    lexer::{lexer::Lexer, tokens::TokenKind},
};

/// Print the tokens of a uni source file, one per line.
#[derive(Parser, Debug)]
#[command(name = "uni", version, about = "Tokenize a uni source file")]
struct Cli {
    /// Source file to scan
    #[arg(default_value = "test.uni")]
    file: PathBuf,

    /// Log level (-v=info, -vv=debug, -vvv=trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Stop at the first illegal character and exit with an error
    #[arg(long)]
    strict: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(2);
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Returns `Ok(false)` when strict mode stopped at an illegal character.
fn run(cli: &Cli) -> Result<bool> {
    let file = File::open(&cli.file).with_context(|| format!("failed to open {}", cli.file.display()))?;
    tracing::info!(file = %cli.file.display(), "Scanning");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for token in Lexer::new(file) {
        let token = token.with_context(|| format!("failed to scan {}", cli.file.display()))?;

        if token.is_eof() {
            break;
        }

        if cli.strict && token.kind == TokenKind::Illegal {
            out.flush()?;
            let error = Error::new(
                ErrorImpl::IllegalCharacter { character: token.value },
                token.position,
            );
            display_error(&error, &cli.file)?;
            return Ok(false);
        }

        writeln!(out, "{}", token)?;
    }

    Ok(true)
}

fn display_error(error: &Error, file: &Path) -> Result<()> {
    /*
        Error: IllegalCharacter (Unexpected character `@`, ...)
        -> test.uni
           |
         4 | name = "héllo" ? @ : !
           | -----------------^
    */

    let position = error.get_position();
    let line_text = get_line_at(file, position.line)?.unwrap_or_default();

    let line_str = position.line.to_string();
    let padding = line_str.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("-> {}", file.display());
    eprintln!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    eprintln!("{} | {}", line_str, line_text_removed.trim_end());

    let arrows = (position.column as usize).saturating_sub(removed_whitespace).max(1);

    eprintln!("{:>padding$} {:->arrows$}", "|", "^");
    Ok(())
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| *c == ' ' || *c == '\t').count();

    (string.chars().skip(start).collect(), start)
}
