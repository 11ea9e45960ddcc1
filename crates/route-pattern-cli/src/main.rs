mod args;
mod commands;
mod render;

use args::PatternArgs;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rp", about = "Inspect how route patterns tokenize and compile")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the token list of a pattern
    Tokens {
        /// Route pattern (e.g. /users/:id)
        pattern: String,
        #[command(flatten)]
        args: PatternArgs,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the compiled regex and its parameter keys
    Compile {
        /// Route pattern (e.g. /users/:id)
        pattern: String,
        #[command(flatten)]
        args: PatternArgs,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Run the compiled regex against paths and show the bound parameters
    Test {
        /// Route pattern (e.g. /users/:id)
        pattern: String,
        /// Paths to try (e.g. /users/42)
        #[arg(required = true)]
        paths: Vec<String>,
        #[command(flatten)]
        args: PatternArgs,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Tokens {
            pattern,
            args,
            json,
        } => args
            .to_options()
            .and_then(|options| commands::tokens::run(&pattern, &options, json)),
        Commands::Compile {
            pattern,
            args,
            json,
        } => args
            .to_options()
            .and_then(|options| commands::compile::run(&pattern, &options, json)),
        Commands::Test {
            pattern,
            paths,
            args,
        } => args
            .to_options()
            .and_then(|options| commands::test::run(&pattern, &paths, &options)),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
