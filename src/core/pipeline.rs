use std::io::Write;

use tracing::{error, info};

use crate::core::dispatch::dispatch;
use crate::core::input::resolve;
use crate::core::params::CliConfig;
use crate::engine::{ParsedSql, SqlGenerator, SqlParser};
use crate::error::Result;
use crate::io::OutputWriter;

/// How a run ended, when it did not end in a fatal error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No SQL source was supplied; usage was written
    Usage,
    /// The parser rejected the input; the error was logged
    ParseFailed,
    /// Parsing succeeded and the selected modes ran
    Completed { statements: usize },
}

/// Resolve input, parse it once, and dispatch to the selected output modes.
///
/// `flags_help` is the rendered flag listing shown in the usage text.
pub fn run_pipeline<P, G, W>(
    config: &CliConfig,
    positionals: &[String],
    parser: &P,
    generator: &G,
    writer: &mut OutputWriter<W>,
    flags_help: &str,
) -> Result<Outcome>
where
    P: SqlParser,
    G: SqlGenerator<<P::Parsed as ParsedSql>::Statement>,
    W: Write,
{
    let Some(resolved) = resolve(config, positionals)? else {
        writer.write_usage(flags_help)?;
        writer.flush()?;
        return Ok(Outcome::Usage);
    };

    let parsed = match parser.parse(&resolved.text) {
        Ok(parsed) => parsed,
        Err(e) => {
            error!("Failed to parse SQL from {}: {}", resolved.source, e);
            return Ok(Outcome::ParseFailed);
        }
    };

    let statements = parsed.statements().len();
    info!("Parsed {} statement(s) from {}", statements, resolved.source);

    dispatch(&parsed, config, generator, writer)?;
    writer.flush()?;
    Ok(Outcome::Completed { statements })
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;
    use crate::engine::stub::{StubGenerator, StubParser};
    use crate::error::Error;
    use crate::io::BANNER;

    fn run(
        config: &CliConfig,
        positionals: &[String],
        parser: &StubParser,
        generator: &StubGenerator,
    ) -> (Result<Outcome>, String) {
        let mut writer = OutputWriter::new(Vec::new());
        let outcome = run_pipeline(
            config,
            positionals,
            parser,
            generator,
            &mut writer,
            "  --sql <SQL>",
        );
        (outcome, String::from_utf8(writer.into_inner()).unwrap())
    }

    fn inline(sql: &str) -> CliConfig {
        CliConfig {
            inline_sql: Some(sql.to_string()),
            ..CliConfig::default()
        }
    }

    #[test]
    fn no_source_shows_usage_without_parsing() {
        let parser = StubParser::ok(&["stmt0"], "SELECT 1");
        let (outcome, out) = run(
            &CliConfig::default(),
            &[],
            &parser,
            &StubGenerator::new("x"),
        );

        assert_eq!(outcome.unwrap(), Outcome::Usage);
        assert_eq!(parser.calls.get(), 0);
        assert!(out.contains("Please provide SQL to parse"));
        assert!(out.contains("--sql <SQL>"));
        assert!(!out.contains(BANNER));
    }

    #[test]
    fn inline_sql_reaches_parser_unchanged() {
        let parser = StubParser::ok(&["stmt0"], "SELECT 1");
        let (outcome, out) = run(
            &inline(" SELECT 1 "),
            &[],
            &parser,
            &StubGenerator::new("x"),
        );

        assert_eq!(outcome.unwrap(), Outcome::Completed { statements: 1 });
        assert_eq!(parser.last_input.borrow().as_deref(), Some(" SELECT 1 "));
        assert_eq!(out, format!("{BANNER}\nSELECT 1\n"));
    }

    #[test]
    fn parse_failure_writes_nothing() {
        let parser = StubParser::failing("syntax error at or near \"SELEC\"");
        let generator = StubGenerator::new("GENERATED");
        let config = CliConfig {
            generate: true,
            ..inline("SELEC 1")
        };

        let (outcome, out) = run(&config, &[], &parser, &generator);
        assert_eq!(outcome.unwrap(), Outcome::ParseFailed);
        assert_eq!(out, "");
        assert!(generator.seen.borrow().is_empty());
    }

    #[test]
    fn missing_file_is_fatal_and_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig {
            file_path: Some(dir.path().join("absent.sql")),
            ..CliConfig::default()
        };
        let parser = StubParser::ok(&["stmt0"], "SELECT 1");

        let (outcome, out) = run(&config, &[], &parser, &StubGenerator::new("x"));
        assert!(matches!(outcome, Err(Error::ReadFile { .. })));
        assert_eq!(parser.calls.get(), 0);
        assert_eq!(out, "");
    }

    #[test]
    fn file_sql_is_parsed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "SELECT * FROM users").unwrap();
        let config = CliConfig {
            file_path: Some(file.path().to_path_buf()),
            ..CliConfig::default()
        };
        let parser = StubParser::ok(&["stmt0"], "SELECT * FROM users");

        let (outcome, _) = run(&config, &[], &parser, &StubGenerator::new("x"));
        assert_eq!(outcome.unwrap(), Outcome::Completed { statements: 1 });
        assert_eq!(
            parser.last_input.borrow().as_deref(),
            Some("SELECT * FROM users")
        );
    }

    #[test]
    fn positional_sql_is_parsed() {
        let parser = StubParser::ok(&["stmt0"], "SELECT 5");
        let (outcome, out) = run(
            &CliConfig::default(),
            &["SELECT 5".to_string()],
            &parser,
            &StubGenerator::new("x"),
        );
        assert_eq!(outcome.unwrap(), Outcome::Completed { statements: 1 });
        assert!(out.ends_with("SELECT 5\n"));
    }
}
