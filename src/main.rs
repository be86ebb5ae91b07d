//! Command-line entry point (spec §6, external to the core).

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser as ClapParser, Subcommand};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use loxr::interpreter::Interpreter;
use loxr::parser::Parser as LoxParser;
use loxr::printer;
use loxr::scanner::Scanner;

#[derive(ClapParser)]
#[command(name = "loxr", about = "A tree-walking interpreter for a small Lox-family language")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug/trace logging on stderr (via RUST_LOG, or -v for a
    /// reasonable default). Never affects stdout/stderr artifacts pinned by
    /// spec §6/§8.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the file and print one line per token.
    Tokenize { file: PathBuf },
    /// Scan and parse the file, printing the AST of each statement.
    Parse { file: PathBuf },
    /// Scan and parse a single expression, printing its runtime value.
    Evaluate { file: PathBuf },
    /// Scan, parse, and execute the file as a program.
    Run { file: PathBuf },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Command::Tokenize { file } => run_tokenize(file),
        Command::Parse { file } => run_parse(file),
        Command::Evaluate { file } => run_evaluate(file),
        Command::Run { file } => run_run(file),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn read_source(path: &Path) -> Result<String, ExitCode> {
    std::fs::read_to_string(path).map_err(|err| {
        eprintln!("{}: {err}", path.display());
        ExitCode::from(1)
    })
}

fn run_tokenize(path: &Path) -> ExitCode {
    let source = match read_source(path) {
        Ok(s) => s,
        Err(code) => return code,
    };

    let (tokens, errors) = Scanner::new(&source).scan();
    for token in &tokens {
        let literal = match &token.literal {
            Some(lit) => lit.tokenize_display(),
            None => "null".to_string(),
        };
        println!("{} {} {}", token.kind.display_name(), token.lexeme, literal);
    }
    for err in &errors {
        eprintln!("{err}");
    }

    if errors.is_empty() {
        ExitCode::from(0)
    } else {
        ExitCode::from(65)
    }
}

fn run_parse(path: &Path) -> ExitCode {
    let source = match read_source(path) {
        Ok(s) => s,
        Err(code) => return code,
    };

    let (tokens, scan_errors) = Scanner::new(&source).scan();
    for err in &scan_errors {
        eprintln!("{err}");
    }

    let (statements, parse_errors) = LoxParser::new(tokens).parse_program();
    for err in &parse_errors {
        eprintln!("{err}");
    }

    if !scan_errors.is_empty() || !parse_errors.is_empty() {
        return ExitCode::from(65);
    }

    for stmt in &statements {
        println!("{}", printer::print_stmt(stmt));
    }
    ExitCode::from(0)
}

fn run_evaluate(path: &Path) -> ExitCode {
    let source = match read_source(path) {
        Ok(s) => s,
        Err(code) => return code,
    };

    let (tokens, scan_errors) = Scanner::new(&source).scan();
    for err in &scan_errors {
        eprintln!("{err}");
    }
    if !scan_errors.is_empty() {
        return ExitCode::from(65);
    }

    let expr = match LoxParser::new(tokens).parse_expression() {
        Ok(expr) => expr,
        Err(errors) => {
            for err in &errors {
                eprintln!("{err}");
            }
            return ExitCode::from(65);
        }
    };

    match Interpreter::new().evaluate(&expr) {
        Ok(value) => {
            println!("{}", value.display_runtime());
            ExitCode::from(0)
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(70)
        }
    }
}

fn run_run(path: &Path) -> ExitCode {
    let source = match read_source(path) {
        Ok(s) => s,
        Err(code) => return code,
    };

    let (tokens, scan_errors) = Scanner::new(&source).scan();
    for err in &scan_errors {
        eprintln!("{err}");
    }

    let (statements, parse_errors) = LoxParser::new(tokens).parse_program();
    for err in &parse_errors {
        eprintln!("{err}");
    }

    if !scan_errors.is_empty() || !parse_errors.is_empty() {
        return ExitCode::from(65);
    }

    match Interpreter::new().interpret(&statements) {
        Ok(()) => ExitCode::from(0),
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(70)
        }
    }
}
