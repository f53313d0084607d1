//! pgparse CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, run the
//! pipeline once, and exit with the appropriate status.
//! For programmatic use, prefer the library API (`pgparse::run_pipeline`).

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse_args();
    cli::run(args)
}
