use std::io;

use clap::CommandFactory;
use tracing::{Level, debug, info};
use tracing_subscriber::EnvFilter;

use pgparse::{CanonicalGenerator, Outcome, OutputWriter, SqlparserEngine, run_pipeline};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .init();
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);

    let config = args.to_config();
    debug!(
        "Configuration: {}",
        serde_json::to_string(&config).unwrap_or_else(|e| e.to_string())
    );

    let flags_help = CliArgs::command().render_help().to_string();
    let engine = SqlparserEngine::new(config.dialect);
    let mut writer = OutputWriter::new(io::stdout().lock());

    let outcome = run_pipeline(
        &config,
        &args.positional,
        &engine,
        &CanonicalGenerator,
        &mut writer,
        &flags_help,
    )
    .map_err(AppError::from)?;

    match outcome {
        Outcome::Usage => debug!("No SQL supplied; usage shown"),
        Outcome::ParseFailed if config.parse_error_exit => return Err(AppError::ParseFailed.into()),
        Outcome::ParseFailed => debug!("Parse failed; exiting normally"),
        Outcome::Completed { statements } => info!("Processed {} statement(s)", statements),
    }

    Ok(())
}
