mod commands;
mod input;

use clap::{Parser, Subcommand};

use rectlink_core::config;

#[derive(Parser)]
#[command(
    name = "rectlink",
    version,
    about = "Containment, intersection and adjacency of two rectangles"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// Compare two rectangles given on the command line
    Compare(commands::compare::CompareArgs),
    /// Prompt for two rectangles and compare them, repeatedly
    Interactive,
}

fn main() {
    let cli = Cli::parse();

    let config = config::load();
    rectlink_core::log::init(&config.logging);

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Compare(args) => commands::compare::execute(&args, &config),
        Commands::Interactive => commands::interactive::execute(&config),
    }
}
