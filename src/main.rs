use clap::Parser;
use jot::cli::commands::Cli;
use jot::cli::handlers;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = handlers::init_logging(cli.log.as_deref()) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = handlers::dispatch(cli) {
        tracing::error!(error = %e, "exiting");
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
