//! Capability boundary between the pipeline and the SQL engine.
//!
//! The pipeline never looks inside a parse tree. It needs three things from an
//! engine: parse text into a result, stringify the whole result, and generate
//! SQL for a single statement. `sqlparser_backend` binds these to the
//! `sqlparser` crate; tests bind them to stand-ins.
use std::fmt;

pub mod sqlparser_backend;
#[cfg(test)]
pub(crate) mod stub;
pub use sqlparser_backend::{CanonicalGenerator, SqlparserEngine, Statements};

/// Output of a successful parse.
///
/// `Display` renders the canonical form of the whole result.
pub trait ParsedSql: fmt::Display {
    type Statement;

    fn statements(&self) -> &[Self::Statement];

    /// JSON rendering of the parse tree
    fn to_json(&self) -> serde_json::Result<String>;
}

pub trait SqlParser {
    type Parsed: ParsedSql;
    type Error: std::error::Error;

    fn parse(&self, sql: &str) -> Result<Self::Parsed, Self::Error>;
}

/// Turns one parsed statement back into SQL text
pub trait SqlGenerator<S> {
    fn generate(&self, statement: &S) -> String;
}
