use std::io::Write;

/// Separator written before the canonical SQL dump
pub const BANNER: &str =
    "------------------------------- GENERATED QUERY -------------------------------------";

/// Operator-facing output: results, usage and the banner.
///
/// Diagnostics never go through this writer; they are emitted with `tracing`.
pub struct OutputWriter<W: Write> {
    out: W,
}

impl<W: Write> OutputWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn write_generated(&mut self, sql: &str) -> std::io::Result<()> {
        writeln!(self.out, "{}", sql)
    }

    pub fn write_ast(&mut self, json: &str) -> std::io::Result<()> {
        writeln!(self.out, "{}", json)
    }

    pub fn write_canonical(&mut self, sql: &str) -> std::io::Result<()> {
        writeln!(self.out, "{}", BANNER)?;
        writeln!(self.out, "{}", sql)
    }

    pub fn write_usage(&mut self, flags_help: &str) -> std::io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Please provide SQL to parse")?;
        writeln!(self.out, "Either:\n pgparse -sql \"SELECT * FROM users\"")?;
        writeln!(self.out, "Or:\n pgparse -file <filename containing sql>")?;
        writeln!(self.out)?;
        writeln!(self.out, "Flags:")?;
        writeln!(self.out, "{}", flags_help.trim_end())?;
        writeln!(self.out)
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
