//! Output layer. `writer` holds the stdout-facing `OutputWriter` and the
//! banner constant; diagnostics are routed through `tracing` instead.
pub mod writer;
pub use writer::{BANNER, OutputWriter};
