//! CLI entry point for headless hex grid generation

use clap::Parser;
use hexcells::io::cli::{Cli, GridRunner};
use hexcells::io::logging::init_logging;

// Allow print for the run summary
#[allow(clippy::print_stdout)]
fn main() -> hexcells::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let summary = GridRunner::new(cli).run()?;
    print!("{summary}");
    Ok(())
}
