use std::{path::PathBuf, process::ExitCode, rc::Rc, time::Instant};

use clap::Parser;
use clex::{
    errors::errors::Error,
    format_error,
    lexer::lexer::tokenize,
    load_source,
    report::report::{render_summary, render_table},
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "C lexical analyzer", long_about = None)]
struct Cli {
    /// C source file to tokenize
    #[arg(default_value = "input.c")]
    file: PathBuf,

    /// Print a diagnostic for every unrecognised character
    #[arg(short, long)]
    diagnostics: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    println!("C Lexical Analyzer");
    println!("-------------------------------");

    let source = match load_source(&cli.file) {
        Ok(source) => source,
        Err(error) => {
            println!("Error: {}", error);
            return ExitCode::FAILURE;
        }
    };

    debug!("loaded {:?} ({} bytes)", cli.file, source.len());

    let start = Instant::now();
    let tokens = tokenize(&source);
    info!("tokenized in {:?}", start.elapsed());

    print!("{}", render_table(&tokens));
    print!("{}", render_summary(&tokens));

    if cli.diagnostics {
        let file = Rc::new(cli.file.to_string_lossy().into_owned());

        for token in tokens.iter().filter(|token| token.is_error()) {
            println!();
            print!("{}", format_error(&Error::from_token(token, Rc::clone(&file)), &source));
        }
    }

    ExitCode::SUCCESS
}
