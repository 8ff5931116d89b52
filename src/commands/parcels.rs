//! Flat parcel listing.

use anyhow::Result;
use chrono::Utc;
use colored::Colorize;

use crate::board::compute_alert;
use crate::commands::common::{find_pipeline, load_state, open_data_dir, run_ownerless_migration};
use crate::models::canon::StageMap;
use crate::notify::TerminalNotifier;

pub fn execute(pipeline: Option<i64>) -> Result<()> {
    let data_dir = open_data_dir()?;
    let (pipelines, mut parcels) = load_state(&data_dir)?;
    run_ownerless_migration(&data_dir, &mut parcels, &pipelines, &TerminalNotifier)?;

    let now = Utc::now();
    let shown: Vec<_> = parcels
        .iter()
        .filter(|p| pipeline.is_none() || p.pipeline_id == pipeline)
        .collect();

    if shown.is_empty() {
        println!("Aucun colis");
        return Ok(());
    }

    for parcel in shown {
        let mut line = format!(
            "{} — {} [{}]",
            parcel.id, parcel.client_name, parcel.stage
        );
        if let Some(pipeline_id) = parcel.pipeline_id {
            if let Ok(p) = find_pipeline(&pipelines, pipeline_id) {
                line.push_str(&format!(" ({})", p.name));

                let map = StageMap::for_pipeline(p);
                if let Some(alert) = compute_alert(parcel, &map, now) {
                    line.push_str(&format!(" {}", alert.label.red().bold()));
                }
            }
        }
        println!("{line}");
    }

    Ok(())
}
