//! CLI Adapter.

use clap::Parser;

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "grr")]
#[command(version)]
#[command(
    about = "A command-line utility to work with Gerrit",
    long_about = "A command-line utility to work with Gerrit.\n\n\
        Actions:\n  \
        init                      Add the gerrit remote and install the commit-msg hook\n  \
        fetch <change>[:<patch>]  Fetch a change and check it out\n  \
        pull [branch]             Fetch origin and check out origin/<branch>\n  \
        checkout [branch]         Check out origin/<branch>\n  \
        review [branch]           Push HEAD for review (default)\n  \
        <branch>                  Same as `review <branch>`"
)]
struct Cli {
    /// Print every external command and API request before running it
    #[arg(long)]
    debug: bool,

    /// Action followed by its arguments; defaults to `review master`
    #[arg(value_name = "ACTION")]
    args: Vec<String>,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = crate::app::api::run(&cli.args, cli.debug);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
