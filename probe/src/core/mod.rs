//! Core probe logic: endpoints, the shared request pipeline, operations and reporting

pub mod endpoint;
pub mod pipeline;
pub mod probes;
pub mod report;

pub use endpoint::Endpoint;
pub use pipeline::ProbePipeline;
pub use probes::Probe;
pub use report::{Glyph, Report, ReportLine};
