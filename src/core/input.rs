//! Input resolution: picks the SQL text of a run from the inline flag, the
//! file flag or a single bare positional argument, in that order.
use std::fs;

use tracing::{debug, error};

use crate::core::params::CliConfig;
use crate::error::{Error, Result};
use crate::types::SqlSource;

/// SQL text chosen for a run, exactly as supplied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSql {
    pub text: String,
    pub source: SqlSource,
}

/// Resolve the SQL text for this run.
///
/// Returns `Ok(None)` when no source was supplied; the caller shows usage.
/// A file that cannot be read is fatal and yields `Error::ReadFile`.
pub fn resolve(config: &CliConfig, positionals: &[String]) -> Result<Option<ResolvedSql>> {
    if let Some(sql) = config.inline_sql.as_deref().filter(|s| !s.is_empty()) {
        debug!("Using inline SQL ({} bytes)", sql.len());
        return Ok(Some(ResolvedSql {
            text: sql.to_string(),
            source: SqlSource::Inline,
        }));
    }

    if let Some(path) = config
        .file_path
        .as_ref()
        .filter(|p| !p.as_os_str().is_empty())
    {
        let text = fs::read_to_string(path).map_err(|source| {
            error!("Failed to read SQL file {:?}: {}", path, source);
            Error::ReadFile {
                path: path.clone(),
                source,
            }
        })?;
        debug!("Read {} bytes of SQL from {:?}", text.len(), path);
        return Ok(Some(ResolvedSql {
            text,
            source: SqlSource::File(path.clone()),
        }));
    }

    if let [sql] = positionals {
        debug!("Using positional SQL argument ({} bytes)", sql.len());
        return Ok(Some(ResolvedSql {
            text: sql.clone(),
            source: SqlSource::Positional,
        }));
    }

    if positionals.len() > 1 {
        debug!(
            "Ignoring {} positional arguments; exactly one is accepted as SQL",
            positionals.len()
        );
    }
    Ok(None)
}
