//! List pipelines and their stage definitions.

use anyhow::Result;
use colored::Colorize;

use crate::commands::common::{load_state, open_data_dir};
use crate::store::context::load_context;

pub fn execute() -> Result<()> {
    let data_dir = open_data_dir()?;
    let (pipelines, _) = load_state(&data_dir)?;
    let context = load_context(&data_dir, &pipelines)?;

    for pipeline in &pipelines {
        let mut header = format!("{} - {}", pipeline.id, pipeline.name);
        if pipeline.id == context.active_pipeline {
            header.push_str(" (actif)");
        }
        if pipeline.logistics {
            header.push_str(" [logistique]");
        }
        println!("{}", header.bold());

        for stage in &pipeline.stages {
            let marker = if stage.active { "•" } else { "·" };
            let mut line = format!("  {marker} {}", stage.id);
            if !stage.active {
                line.push_str(" (inactif)");
            }
            println!("{line}");
        }
        println!();
    }

    Ok(())
}
