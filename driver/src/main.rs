mod printer;

use std::{fs, path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::Parser; // clap crate for CLI argument parsing
use model::Token;
use printer::AstTree;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the source file
    #[arg(default_value = "read.txt")]
    input_path: PathBuf,

    /// Run lexer only
    #[arg(short, long)]
    lex: bool,

    /// Do not print the token list
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

// Verbosity comes from RUST_LOG; logs go to stderr so stdout stays the tree
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> anyhow::Result<()> {
    let source = fs::read_to_string(&args.input_path)
        .with_context(|| format!("Cannot open {}", args.input_path.display()))?;
    tracing::debug!(path = %args.input_path.display(), bytes = source.len(), "read source");

    let tokens = lexer::lex(&source)?;
    tracing::debug!(count = tokens.len(), "lexed source");

    if !args.quiet {
        println!("Tokens:");
        println!("{}", token_line(&tokens));
    }

    if args.lex {
        return Ok(());
    }

    let root = parser::parse_tokens(tokens)?;
    tracing::debug!(statements = root.as_ref().map_or(0, |r| r.children().len()), "parsed program");

    if !args.quiet {
        println!();
    }
    println!("AST:");
    print!("{}", AstTree(root.as_ref()));
    Ok(())
}

fn token_line(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
