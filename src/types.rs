//! Shared types and enums used across pgparse.
//! Includes `SqlDialect`, `PrintMode` and the `SqlSource` tag carried by
//! resolved SQL text.
use std::path::PathBuf;

use clap::ValueEnum;
use serde::Serialize;
use sqlparser::dialect::{
    AnsiDialect, BigQueryDialect, Dialect, DuckDbDialect, GenericDialect, MsSqlDialect,
    MySqlDialect, PostgreSqlDialect, SQLiteDialect, SnowflakeDialect,
};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SqlDialect {
    Postgres,
    Generic,
    Ansi,
    Mysql,
    Sqlite,
    Mssql,
    Snowflake,
    Bigquery,
    Duckdb,
}

impl SqlDialect {
    /// Concrete `sqlparser` dialect for this selection
    pub fn as_dialect(&self) -> Box<dyn Dialect> {
        match self {
            SqlDialect::Postgres => Box::new(PostgreSqlDialect {}),
            SqlDialect::Generic => Box::new(GenericDialect {}),
            SqlDialect::Ansi => Box::new(AnsiDialect {}),
            SqlDialect::Mysql => Box::new(MySqlDialect {}),
            SqlDialect::Sqlite => Box::new(SQLiteDialect {}),
            SqlDialect::Mssql => Box::new(MsSqlDialect {}),
            SqlDialect::Snowflake => Box::new(SnowflakeDialect {}),
            SqlDialect::Bigquery => Box::new(BigQueryDialect {}),
            SqlDialect::Duckdb => Box::new(DuckDbDialect {}),
        }
    }
}

impl std::fmt::Display for SqlDialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SqlDialect::Postgres => "postgres",
            SqlDialect::Generic => "generic",
            SqlDialect::Ansi => "ansi",
            SqlDialect::Mysql => "mysql",
            SqlDialect::Sqlite => "sqlite",
            SqlDialect::Mssql => "mssql",
            SqlDialect::Snowflake => "snowflake",
            SqlDialect::Bigquery => "bigquery",
            SqlDialect::Duckdb => "duckdb",
        };
        write!(f, "{}", s)
    }
}

/// When the banner and canonical dump are written.
///
/// `Flag` honours `--print` only. `Always` keeps the behaviour of the older
/// entry point, where the dump ran whatever value `--print` had.
#[derive(
    Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PrintMode {
    #[default]
    Flag,
    Always,
}

impl PrintMode {
    pub fn should_print(&self, print_flag: bool) -> bool {
        match self {
            PrintMode::Flag => print_flag,
            PrintMode::Always => true,
        }
    }
}

impl std::fmt::Display for PrintMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrintMode::Flag => write!(f, "flag"),
            PrintMode::Always => write!(f, "always"),
        }
    }
}

/// Where the SQL text of a run came from
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SqlSource {
    Inline,
    File(PathBuf),
    Positional,
}

impl std::fmt::Display for SqlSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SqlSource::Inline => write!(f, "-sql"),
            SqlSource::File(path) => write!(f, "-file {}", path.display()),
            SqlSource::Positional => write!(f, "positional argument"),
        }
    }
}
