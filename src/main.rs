use std::{path::PathBuf, process};

use clap::Parser;
use toyc::{
    ast::dump::dump,
    config::{ErrorPolicy, ParserConfig},
    lexer::lexer::{tokenize, Lexer},
    parser::parser::parse,
};
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "toyc", about = "Parse a Toy source file and check its syntax")]
struct Cli {
    /// Path to the source file
    file: PathBuf,

    /// Exit on the first syntax error instead of returning it to the driver
    #[arg(long)]
    abort_on_error: bool,

    /// Print the AST dump after a successful parse
    #[arg(long)]
    dump: bool,

    /// Print the token stream before parsing
    #[arg(long)]
    tokens: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            // Usage errors, including a missing file argument
            eprintln!("{}", err);
            process::exit(1);
        }
        Err(err) => err.exit(),
    };

    init_logging();

    let lexer = match Lexer::open(&cli.file) {
        Ok(lexer) => lexer,
        Err(err) => {
            // An unopened file has no meaningful location
            eprintln!("Error: {}", err.get_kind());
            process::exit(1);
        }
    };

    if cli.tokens {
        for token in tokenize(lexer.source().to_string(), Some(cli.file.display().to_string())) {
            println!("{}", token.debug());
        }
    }

    let policy = if cli.abort_on_error {
        ErrorPolicy::Abort
    } else {
        ErrorPolicy::Return
    };

    match parse(lexer, ParserConfig::new(policy)) {
        Ok(module) => {
            debug!(functions = module.functions.len(), "parse succeeded");
            if cli.dump {
                print!("{}", dump(&module));
            }
        }
        Err(err) => {
            // The parser already printed the diagnostic
            debug!(%err, "parse failed");
            process::exit(1);
        }
    }
}
