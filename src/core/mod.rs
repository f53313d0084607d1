//! Core pipeline building blocks: the run configuration, input resolution,
//! mode dispatch and the pipeline that sequences them. The CLI binary is a
//! thin layer over `pipeline::run_pipeline`.
pub mod dispatch;
pub mod input;
pub mod params;
pub mod pipeline;
