use clap::{ArgAction, Parser};
use std::path::PathBuf;

use pgparse::{CliConfig, PrintMode, SqlDialect};

/// Long flags that may also be written with a single dash (`-sql`, `-print=false`)
const LONG_FLAGS: &[&str] = &[
    "sql",
    "file",
    "print",
    "generate",
    "print-mode",
    "dialect",
    "ast",
    "parse-error-exit",
    "log",
    "help",
    "version",
];

/// Long flags whose value may follow as the next argument
const VALUE_FLAGS: &[&str] = &["sql", "file", "print-mode", "dialect"];

#[derive(Parser, Debug)]
#[command(
    name = "pgparse",
    version,
    about = "Parse a SQL statement and print its canonical regenerated form"
)]
pub struct CliArgs {
    /// SQL statement
    #[arg(long, allow_hyphen_values = true)]
    pub sql: Option<String>,

    /// File containing SQL
    #[arg(long, allow_hyphen_values = true)]
    pub file: Option<PathBuf>,

    /// Print the canonical SQL after a banner (use --print=false to disable)
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        default_value_t = true
    )]
    pub print: bool,

    /// Run the generator over the first statement and print its result
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        default_value_t = false
    )]
    pub generate: bool,

    /// When to print the canonical SQL: "flag" follows --print, "always" ignores it
    #[arg(long, value_enum, default_value_t = PrintMode::Flag)]
    pub print_mode: PrintMode,

    /// SQL dialect used for parsing
    #[arg(long, value_enum, default_value_t = SqlDialect::Postgres)]
    pub dialect: SqlDialect,

    /// Also print the parse tree as JSON
    #[arg(long, default_value_t = false)]
    pub ast: bool,

    /// Exit with a failure status when the SQL does not parse
    #[arg(long, default_value_t = false)]
    pub parse_error_exit: bool,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// SQL statement, used when neither --sql nor --file is given
    #[arg(value_name = "SQL")]
    pub positional: Vec<String>,
}

impl CliArgs {
    /// Parse the process arguments, accepting single-dash long flags
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args()))
    }

    pub fn to_config(&self) -> CliConfig {
        CliConfig {
            inline_sql: self.sql.clone(),
            file_path: self.file.clone(),
            print: self.print,
            generate: self.generate,
            print_mode: self.print_mode,
            dialect: self.dialect,
            ast: self.ast,
            parse_error_exit: self.parse_error_exit,
        }
    }
}

/// Rewrite single-dash long flags (`-sql`, `-print=false`) to their
/// double-dash form. The program name, flag values and everything after
/// `--` are left alone.
pub fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut out: Vec<String> = args.next().into_iter().collect();
    let mut expect_value = false;
    let mut passthrough = false;

    for arg in args {
        if passthrough || expect_value {
            expect_value = false;
            out.push(arg);
            continue;
        }
        if arg == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }

        let (single_dash, body) = if let Some(body) = arg.strip_prefix("--") {
            (false, body)
        } else if let Some(body) = arg.strip_prefix('-') {
            (true, body)
        } else {
            out.push(arg);
            continue;
        };

        let (name, has_value) = match body.split_once('=') {
            Some((name, _)) => (name, true),
            None => (body, false),
        };
        if !LONG_FLAGS.contains(&name) {
            out.push(arg);
            continue;
        }
        expect_value = VALUE_FLAGS.contains(&name) && !has_value;

        if single_dash {
            out.push(format!("-{arg}"));
        } else {
            out.push(arg);
        }
    }

    out
}
