//! Batch pipeline - many questions, one conversion run each
//!
//! Runs share nothing but the read-only relation catalog, so questions are
//! converted independently, sequentially or on a rayon pool.

pub mod batch;
pub mod error;
pub mod result;

pub use batch::{BatchConverter, BatchItem};
pub use error::PipelineError;
pub use result::{BatchReport, QuestionOutcome};
