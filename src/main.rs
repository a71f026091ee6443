use std::{
    fs::read_to_string,
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Args, Parser, Subcommand};
use loxlex::{display_error, lexer::lexer::Lexer};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const EXIT_USAGE: u8 = 1;
const EXIT_LEXICAL_ERROR: u8 = 65;
const EXIT_INTERNAL_ERROR: u8 = 70;
const EXIT_IO_ERROR: u8 = 74;

/// Scanner for a small dynamically typed scripting language
#[derive(Parser, Debug)]
#[command(name = "loxlex")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print one line per token of a source file
    Tokenize(TokenizeArgs),
}

#[derive(Args, Debug)]
struct TokenizeArgs {
    /// Source file to scan
    file: PathBuf,

    /// Show the offending source line under each error
    #[arg(long)]
    snippets: bool,
}

fn main() -> ExitCode {
    // Logs go to stderr and stay quiet unless RUST_LOG asks for them
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            return if error.use_stderr() {
                ExitCode::from(EXIT_USAGE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match &cli.command {
        Commands::Tokenize(args) => tokenize_file(args),
    }
}

fn tokenize_file(args: &TokenizeArgs) -> ExitCode {
    let source = match read_to_string(&args.file) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error reading file: {}", error);
            return ExitCode::from(EXIT_USAGE);
        }
    };

    debug!(file = %args.file.display(), bytes = source.len(), "read source");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut token_count = 0usize;
    let mut error_count = 0usize;

    for result in Lexer::new(&source, Some(file_label(&args.file))) {
        match result {
            Ok(token) => {
                token_count += 1;
                if let Err(error) = writeln!(out, "{}", token) {
                    debug!(%error, "stopped writing tokens");
                    return ExitCode::from(write_failure_code(&error));
                }
            }
            Err(error) if error.is_fatal() => {
                eprintln!("{}", error);
                return ExitCode::from(EXIT_INTERNAL_ERROR);
            }
            Err(error) => {
                error_count += 1;
                if args.snippets {
                    eprint!("{}", display_error(&error, &source));
                } else {
                    eprintln!("{}", error);
                }
            }
        }
    }

    debug!(tokens = token_count, errors = error_count, "scan finished");

    if error_count > 0 {
        ExitCode::from(EXIT_LEXICAL_ERROR)
    } else {
        ExitCode::SUCCESS
    }
}

/// A closed stdout (`loxlex tokenize f | head`) is not a failure.
fn write_failure_code(error: &io::Error) -> u8 {
    match error.kind() {
        io::ErrorKind::BrokenPipe => 0,
        _ => EXIT_IO_ERROR,
    }
}

fn file_label(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}
