//! Initialize the .relais/ data directory.

use anyhow::Result;
use colored::Colorize;

use crate::store::context::{save_context, BoardContext};
use crate::store::data_dir::DataDir;
use crate::store::pipelines::{load_or_init, JsonPipelineStore};

pub fn execute() -> Result<()> {
    let data_dir = DataDir::new(".");
    data_dir.initialize()?;

    let pipelines = load_or_init(&JsonPipelineStore::new(&data_dir))?;
    let active = crate::models::pipeline::default_pipeline(&pipelines)
        .map(|p| p.id)
        .unwrap_or(0);
    save_context(
        &data_dir,
        &BoardContext {
            active_pipeline: active,
        },
    )?;

    println!("{}", "Initialized .relais/".green().bold());
    println!("Seeded {} pipeline(s):", pipelines.len());
    for pipeline in &pipelines {
        println!("  {} - {}", pipeline.id, pipeline.name);
    }
    Ok(())
}
