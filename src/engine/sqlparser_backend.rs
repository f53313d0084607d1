use std::fmt;

use sqlparser::ast::Statement;
use sqlparser::parser::{Parser, ParserError};
use tracing::debug;

use super::{ParsedSql, SqlGenerator, SqlParser};
use crate::types::SqlDialect;

/// Parser capability backed by `sqlparser`
#[derive(Debug, Clone, Copy)]
pub struct SqlparserEngine {
    dialect: SqlDialect,
}

impl SqlparserEngine {
    pub fn new(dialect: SqlDialect) -> Self {
        Self { dialect }
    }
}

impl Default for SqlparserEngine {
    fn default() -> Self {
        Self::new(SqlDialect::Postgres)
    }
}

impl SqlParser for SqlparserEngine {
    type Parsed = Statements;
    type Error = ParserError;

    fn parse(&self, sql: &str) -> Result<Statements, ParserError> {
        let dialect = self.dialect.as_dialect();
        let statements = Parser::parse_sql(dialect.as_ref(), sql)?;
        debug!(
            "Parsed {} statement(s) with {} dialect",
            statements.len(),
            self.dialect
        );
        Ok(Statements(statements))
    }
}

/// Parsed statements in source order
#[derive(Debug, Clone, PartialEq)]
pub struct Statements(pub Vec<Statement>);

impl fmt::Display for Statements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, statement) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}

impl ParsedSql for Statements {
    type Statement = Statement;

    fn statements(&self) -> &[Statement] {
        &self.0
    }

    fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.0)
    }
}

/// Generator capability: renders a single statement through its `Display` form
#[derive(Debug, Clone, Copy, Default)]
pub struct CanonicalGenerator;

impl SqlGenerator<Statement> for CanonicalGenerator {
    fn generate(&self, statement: &Statement) -> String {
        statement.to_string()
    }
}
