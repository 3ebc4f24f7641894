mod commands;
mod error;

use clap::{Parser, Subcommand};

use dispmode_core::{Display, DisplayBackend, config};

use crate::error::CliResult;

#[derive(Parser)]
#[command(
    name = "dispmode",
    version,
    about = "Inspect monitors and switch fullscreen video modes"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// List active monitors, primary first
    Monitors {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List the distinct video modes a monitor supports
    Modes {
        /// Monitor index as shown by `dispmode monitors`
        index: usize,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show the video mode currently active on a monitor
    Current {
        /// Monitor index as shown by `dispmode monitors`
        index: usize,
    },
    /// Switch a monitor to the closest supported mode, then restore it
    Set(commands::set::SetArgs),
    /// Revert a monitor to its default desktop mode
    Restore {
        /// Monitor index as shown by `dispmode monitors`
        index: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Commands::Init = cli.command {
        commands::init::execute();
        return;
    }

    let config = config::load();
    dispmode_core::log::init(&config.logging);

    if let Err(e) = run(&cli.command, &config) {
        dispmode_core::log_error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(windows)]
fn run(command: &Commands, config: &config::Config) -> CliResult<()> {
    let display = Display::with_split_policy(
        dispmode_windows::Win32Display::new(),
        config.modes.split,
    );
    dispatch(&display, command, config)
}

#[cfg(not(windows))]
fn run(_command: &Commands, _config: &config::Config) -> CliResult<()> {
    Err(dispmode_core::DisplayError::platform("display modes can only be managed on Windows").into())
}

#[cfg_attr(not(windows), allow(dead_code))]
fn dispatch<B: DisplayBackend>(
    display: &Display<B>,
    command: &Commands,
    config: &config::Config,
) -> CliResult<()> {
    match command {
        Commands::Init => Ok(()),
        Commands::Monitors { json } => commands::monitors::execute(display, *json),
        Commands::Modes { index, json } => commands::modes::execute(display, *index, *json),
        Commands::Current { index } => commands::current::execute(display, *index),
        Commands::Set(args) => commands::set::execute(display, args, &config.fullscreen),
        Commands::Restore { index } => commands::restore::execute(display, *index),
    }
}
