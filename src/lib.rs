#![doc = r#"
pgparse — parse SQL from the command line and print its canonical form.

This crate powers the `pgparse` CLI. It resolves SQL text from an inline flag,
a file, or a single positional argument, hands it to a SQL engine once, and
writes the regenerated SQL to an output sink. The engine sits behind small
traits, so the pipeline can run against `sqlparser` or against any stand-in.

Quick start: run the pipeline over inline SQL
---------------------------------------------
```rust
use pgparse::{
    CanonicalGenerator, CliConfig, Outcome, OutputWriter, SqlparserEngine, run_pipeline,
};

fn main() -> pgparse::Result<()> {
    let config = CliConfig {
        inline_sql: Some("select * from users".to_string()),
        ..CliConfig::default()
    };
    let engine = SqlparserEngine::new(config.dialect);
    let mut writer = OutputWriter::new(Vec::new());

    let outcome = run_pipeline(&config, &[], &engine, &CanonicalGenerator, &mut writer, "")?;
    assert_eq!(outcome, Outcome::Completed { statements: 1 });

    let out = String::from_utf8(writer.into_inner()).unwrap();
    assert!(out.ends_with("SELECT * FROM users\n"));
    Ok(())
}
```

Plugging in another engine
--------------------------
Implement [`SqlParser`], [`ParsedSql`] and [`SqlGenerator`] for your own
types. The pipeline only reads the first statement and the whole-result
`Display` form; it never inspects or changes the tree.

Error handling
--------------
Fatal conditions (an unreadable `-file`, a failed write) come back as
[`Error`]. A parse failure is not an error: it is logged and reported as
[`Outcome::ParseFailed`], leaving the caller to decide on an exit code.

Useful modules
--------------
- [`core`] — configuration, input resolution, dispatch and the pipeline.
- [`engine`] — parser/generator capabilities and the `sqlparser` binding.
- [`io`] — the stdout-facing `OutputWriter` and banner.
- [`types`] — `SqlDialect`, `PrintMode`, `SqlSource`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod core;
pub mod engine;
pub mod error;
pub mod io;
pub mod types;

pub use crate::core::input::{ResolvedSql, resolve};
pub use crate::core::params::CliConfig;
pub use crate::core::pipeline::{Outcome, run_pipeline};
pub use error::{Error, Result};
pub use types::{PrintMode, SqlDialect, SqlSource};

pub use engine::{
    CanonicalGenerator, ParsedSql, SqlGenerator, SqlParser, SqlparserEngine, Statements,
};
pub use io::{BANNER, OutputWriter};
