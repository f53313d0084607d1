use std::path::PathBuf;

use serde::Serialize;

use crate::types::{PrintMode, SqlDialect};

/// Immutable options for one run, built once from the command line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CliConfig {
    pub inline_sql: Option<String>,
    pub file_path: Option<PathBuf>,
    /// Print the banner and the canonical form of the parse result
    pub print: bool,
    /// Run the generator over the first statement
    pub generate: bool,
    pub print_mode: PrintMode,
    pub dialect: SqlDialect,
    /// Dump the parse tree as JSON
    pub ast: bool,
    /// Treat a parse failure as a failed run
    pub parse_error_exit: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            inline_sql: None,
            file_path: None,
            print: true,
            generate: false,
            print_mode: PrintMode::Flag,
            dialect: SqlDialect::Postgres,
            ast: false,
            parse_error_exit: false,
        }
    }
}

impl CliConfig {
    pub fn should_print(&self) -> bool {
        self.print_mode.should_print(self.print)
    }
}
