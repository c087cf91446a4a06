use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "jot", about = concat!("jot v", env!("CARGO_PKG_VERSION"), " - a todo list for the terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Read config and theme state from a different directory
    #[arg(long = "config-dir", global = true)]
    pub config_dir: Option<String>,

    /// Write diagnostic logs to this file (filter with RUST_LOG)
    #[arg(long, global = true)]
    pub log: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show or change the saved color theme
    Theme(ThemeArgs),
}

#[derive(Args)]
pub struct ThemeArgs {
    /// New theme; omit to print the current one
    pub mode: Option<ThemeChoice>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeChoice {
    Dark,
    Light,
    Toggle,
}
