//! Operator context: which pipeline the board currently shows.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::models::pipeline::{default_pipeline, Pipeline};
use crate::store::data_dir::DataDir;
use crate::store::json::{read_json, write_json};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardContext {
    pub active_pipeline: i64,
}

/// Load the stored context, falling back to the default pipeline when no
/// context has been saved yet (or the stored pipeline no longer exists).
pub fn load_context(data_dir: &DataDir, pipelines: &[Pipeline]) -> Result<BoardContext> {
    let stored: Option<BoardContext> = read_json(&data_dir.context_file())?;
    if let Some(ctx) = stored {
        if pipelines.iter().any(|p| p.id == ctx.active_pipeline) {
            return Ok(ctx);
        }
    }
    let fallback = default_pipeline(pipelines).map(|p| p.id).unwrap_or(0);
    Ok(BoardContext {
        active_pipeline: fallback,
    })
}

pub fn save_context(data_dir: &DataDir, context: &BoardContext) -> Result<()> {
    write_json(&data_dir.context_file(), context)
}
