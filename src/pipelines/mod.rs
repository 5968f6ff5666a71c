/*! Pipelines.

File-to-file conversions over a corpus directory tree. Each pipeline
implements the light [pipeline::Pipeline] trait; per-file failures are
logged and skipped so one broken page never stops a batch.
!*/
pub mod board;
pub mod corpus;
pub mod extract;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use corpus::CorpusPipeline;
pub use extract::ExtractPipeline;
pub use pipeline::Pipeline;
