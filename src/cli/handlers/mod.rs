use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::cli::commands::*;
use crate::io::config_io::config_dir;
use crate::io::state::{FileThemePreference, ThemePreference};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let dir_override = cli.config_dir.as_deref().map(Path::new);

    match cli.command {
        None => crate::tui::run(dir_override),
        Some(Commands::Theme(args)) => cmd_theme(args, dir_override),
    }
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

fn resolve_dir(dir_override: Option<&Path>) -> Result<PathBuf, Box<dyn std::error::Error>> {
    config_dir(dir_override)
        .ok_or_else(|| "cannot find a config directory (set HOME or use --config-dir)".into())
}

pub fn cmd_theme(
    args: ThemeArgs,
    dir_override: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut pref = FileThemePreference::new(resolve_dir(dir_override)?);

    let dark = match args.mode {
        None => pref.load(),
        Some(ThemeChoice::Dark) => true,
        Some(ThemeChoice::Light) => false,
        Some(ThemeChoice::Toggle) => !pref.load(),
    };
    if args.mode.is_some() {
        pref.save(dark)?;
    }

    println!("{}", if dark { "dark" } else { "light" });
    Ok(())
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Send tracing output to `path`. Without a log file nothing is recorded,
/// so the terminal UI is never drawn over.
pub fn init_logging(path: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| format!("cannot open log file '{}': {}", path, e))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("jot=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging started");
    Ok(())
}
