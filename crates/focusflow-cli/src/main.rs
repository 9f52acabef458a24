use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

#[derive(Parser)]
#[command(name = "focusflow", version, about = "FocusFlow Pomodoro timer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Timer control
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Timer settings
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Font, wallpaper and accent color
    Theme {
        #[command(subcommand)]
        action: commands::theme::ThemeAction,
    },
    /// Brown noise generator
    Noise {
        #[command(subcommand)]
        action: commands::noise::NoiseAction,
    },
    /// Erase all stored settings, theme and timer state
    ResetAll,
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("FOCUSFLOW_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Timer { action } => commands::timer::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Theme { action } => commands::theme::run(action),
        Commands::Noise { action } => commands::noise::run(action),
        Commands::ResetAll => commands::reset::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
