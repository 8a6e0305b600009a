//! # pupper
//!
//! Command-line interface for pupper: transpiles the JSON document trees
//! written by `pug-parser` into Vue templates.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pupper")]
#[command(about = "Pug to Vue template transpiler", long_about = None)]
#[command(version)]
struct Cli {
    /// Log progress to stderr (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transpile pug AST files (default command)
    #[command(visible_alias = "atelier")]
    Build(commands::build::BuildArgs),

    /// Print the JSON Schema for pupper.config.json
    Schema,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_max_level(level)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Build(args)) => commands::build::run(args),
        Some(Commands::Schema) => println!("{}", pupper::config::PUPPER_CONFIG_SCHEMA),
        None => {
            // Default to build command with default args
            commands::build::run(commands::build::BuildArgs::default());
        }
    }
}
