use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "felino-cli", version, about = "Felino daily enrichment planner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan of the day
    Plan {
        #[command(subcommand)]
        action: commands::plan::PlanAction,
    },
    /// Progress statistics
    Progress {
        #[command(subcommand)]
        action: commands::progress::ProgressAction,
    },
    /// Activity library
    Library {
        #[command(subcommand)]
        action: commands::library::LibraryAction,
    },
    /// Preference management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Plan { action } => commands::plan::run(action),
        Commands::Progress { action } => commands::progress::run(action),
        Commands::Library { action } => commands::library::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
