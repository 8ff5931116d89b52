//! Pipeline definition store and first-run seeding.

use anyhow::Result;
use std::path::PathBuf;
use tracing::debug;

use crate::models::pipeline::{default_pipelines, Pipeline};
use crate::store::data_dir::DataDir;
use crate::store::json::{read_json, write_json};

pub trait PipelineStore {
    fn load(&self) -> Result<Vec<Pipeline>>;
    fn save(&self, pipelines: &[Pipeline]) -> Result<()>;
}

pub struct JsonPipelineStore {
    path: PathBuf,
}

impl JsonPipelineStore {
    pub fn new(data_dir: &DataDir) -> Self {
        Self {
            path: data_dir.pipelines_file(),
        }
    }
}

impl PipelineStore for JsonPipelineStore {
    fn load(&self) -> Result<Vec<Pipeline>> {
        Ok(read_json(&self.path)?.unwrap_or_default())
    }

    fn save(&self, pipelines: &[Pipeline]) -> Result<()> {
        write_json(&self.path, &pipelines)
    }
}

/// Return the persisted pipeline list when present and well-formed; otherwise
/// seed the hard-coded defaults and persist them.
///
/// Idempotent: a valid existing definition is never overwritten, so
/// administrative edits survive restarts.
pub fn load_or_init<S: PipelineStore>(store: &S) -> Result<Vec<Pipeline>> {
    let existing = store.load()?;
    if !existing.is_empty() && existing.iter().all(|p| p.is_well_formed()) {
        return Ok(existing);
    }

    debug!("no well-formed pipeline definitions found, seeding defaults");
    let defaults = default_pipelines();
    store.save(&defaults)?;
    Ok(defaults)
}
