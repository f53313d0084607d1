use std::io::Write;

use tracing::{debug, warn};

use crate::core::params::CliConfig;
use crate::engine::{ParsedSql, SqlGenerator};
use crate::error::Result;
use crate::io::OutputWriter;

/// Run the output modes selected by `config` over a successful parse.
///
/// Generation always comes first and only looks at the first statement.
/// The canonical dump, when enabled, is the last thing written.
pub fn dispatch<P, G, W>(
    parsed: &P,
    config: &CliConfig,
    generator: &G,
    writer: &mut OutputWriter<W>,
) -> Result<()>
where
    P: ParsedSql,
    G: SqlGenerator<P::Statement>,
    W: Write,
{
    if config.generate {
        match parsed.statements().first() {
            Some(statement) => {
                let sql = generator.generate(statement);
                writer.write_generated(&sql)?;
            }
            None => warn!("Nothing to generate: input contained no statements"),
        }
    }

    if config.ast {
        writer.write_ast(&parsed.to_json()?)?;
    }

    if config.should_print() {
        debug!("Printing canonical SQL (print mode: {})", config.print_mode);
        writer.write_canonical(&parsed.to_string())?;
        return Ok(());
    }

    debug!("Print disabled; canonical SQL not written");
    Ok(())
}
