//! Transition engine error taxonomy.
//!
//! The historical behavior was to silently ignore a move against an unknown
//! parcel or stage; these are explicit, recoverable errors instead so callers
//! can surface feedback.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("no parcel with id '{0}'")]
    ParcelNotFound(String),

    #[error("stage '{stage}' is not an active stage of pipeline {pipeline}")]
    UnknownStage { stage: String, pipeline: i64 },

    #[error("pipeline {0} not found")]
    PipelineNotFound(i64),
}
