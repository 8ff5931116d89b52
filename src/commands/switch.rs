//! Switch the active pipeline, with the logistics handoff import.
//!
//! Switching to a pipeline flagged `logistics` offers to bulk-promote the
//! source pipeline's confirmed parcels into the target's pickup stage. The
//! engine only computes and applies the plan; the yes/no decision lives
//! here.

use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};
use tracing::debug;

use crate::commands::common::{find_pipeline, load_state, open_data_dir, run_ownerless_migration};
use crate::engine::{commit_import, plan_import};
use crate::models::canon::{CanonicalStage, StageMap};
use crate::models::parcel::Parcel;
use crate::models::pipeline::Pipeline;
use crate::notify::{Notification, Notifier, TerminalNotifier};
use crate::store::context::{load_context, save_context, BoardContext};
use crate::store::data_dir::DataDir;
use crate::store::parcels::{JsonParcelStore, ParcelStore};

pub fn execute(pipeline_id: i64, yes: bool) -> Result<()> {
    let data_dir = open_data_dir()?;
    let (pipelines, mut parcels) = load_state(&data_dir)?;
    run_ownerless_migration(&data_dir, &mut parcels, &pipelines, &TerminalNotifier)?;

    let context = load_context(&data_dir, &pipelines)?;
    let target = find_pipeline(&pipelines, pipeline_id)?;
    let source = context.active_pipeline;

    if target.logistics && source != target.id {
        offer_handoff_import(&data_dir, &mut parcels, source, target, yes)?;
    }

    save_context(
        &data_dir,
        &BoardContext {
            active_pipeline: target.id,
        },
    )?;
    println!("Pipeline actif: {}", target.name.bold());
    Ok(())
}

fn offer_handoff_import(
    data_dir: &DataDir,
    parcels: &mut [Parcel],
    source: i64,
    target: &Pipeline,
    yes: bool,
) -> Result<()> {
    let target_map = StageMap::for_pipeline(target);
    let Some(to_stage) = target_map.stage_for(&CanonicalStage::OutForDelivery) else {
        debug!(pipeline = target.id, "logistics pipeline has no pickup stage");
        return Ok(());
    };
    let to_stage = to_stage.to_string();

    let plan = plan_import(parcels, source, &CanonicalStage::Confirmed, target, &to_stage)?;
    if plan.is_empty() {
        return Ok(());
    }

    let prompt = format!(
        "Importer {} colis confirmés vers '{}' ? [y/N] ",
        plan.count(),
        to_stage
    );
    if !yes && !confirm(&prompt)? {
        println!("Import annulé");
        return Ok(());
    }

    let applied = commit_import(parcels, &plan);
    JsonParcelStore::new(data_dir).save(parcels)?;
    TerminalNotifier.notify(&Notification::success(
        "Import terminé",
        format!("{applied} colis importés vers '{to_stage}'"),
    ));
    Ok(())
}

/// Ask a yes/no question on stdin. Anything but y/yes (case-insensitive)
/// declines.
fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes" || answer == "o" || answer == "oui")
}
