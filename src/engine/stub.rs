//! Stand-in engine capabilities for unit tests.
use std::cell::{Cell, RefCell};
use std::fmt;

use thiserror::Error;

use super::{ParsedSql, SqlGenerator, SqlParser};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("stub parse error: {0}")]
pub struct StubError(pub String);

#[derive(Debug, Clone)]
pub struct StubParsed {
    pub statements: Vec<String>,
    pub rendered: String,
}

impl fmt::Display for StubParsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rendered)
    }
}

impl ParsedSql for StubParsed {
    type Statement = String;

    fn statements(&self) -> &[String] {
        &self.statements
    }

    fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.statements)
    }
}

/// Returns a fixed result and counts invocations
pub struct StubParser {
    result: Result<StubParsed, StubError>,
    pub calls: Cell<usize>,
    pub last_input: RefCell<Option<String>>,
}

impl StubParser {
    pub fn ok(statements: &[&str], rendered: &str) -> Self {
        Self {
            result: Ok(StubParsed {
                statements: statements.iter().map(|s| s.to_string()).collect(),
                rendered: rendered.to_string(),
            }),
            calls: Cell::new(0),
            last_input: RefCell::new(None),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(StubError(message.to_string())),
            calls: Cell::new(0),
            last_input: RefCell::new(None),
        }
    }
}

impl SqlParser for StubParser {
    type Parsed = StubParsed;
    type Error = StubError;

    fn parse(&self, sql: &str) -> Result<StubParsed, StubError> {
        self.calls.set(self.calls.get() + 1);
        *self.last_input.borrow_mut() = Some(sql.to_string());
        self.result.clone()
    }
}

/// Returns a fixed string and records the statements it was given
pub struct StubGenerator {
    output: String,
    pub seen: RefCell<Vec<String>>,
}

impl StubGenerator {
    pub fn new(output: &str) -> Self {
        Self {
            output: output.to_string(),
            seen: RefCell::new(Vec::new()),
        }
    }
}

impl SqlGenerator<String> for StubGenerator {
    fn generate(&self, statement: &String) -> String {
        self.seen.borrow_mut().push(statement.clone());
        self.output.clone()
    }
}
