//! Move a parcel to another stage of its pipeline.

use anyhow::{bail, Context, Result};

use crate::commands::common::{find_pipeline, load_state, open_data_dir, run_ownerless_migration};
use crate::engine::{move_parcel, MoveOutcome};
use crate::models::canon::StageMap;
use crate::notify::{Notifier, TerminalNotifier};
use crate::store::parcels::{JsonParcelStore, ParcelStore};

pub fn execute(parcel_id: String, stage: String) -> Result<()> {
    let data_dir = open_data_dir()?;
    let (pipelines, mut parcels) = load_state(&data_dir)?;
    run_ownerless_migration(&data_dir, &mut parcels, &pipelines, &TerminalNotifier)?;

    let pipeline_id = match parcels.iter().find(|p| p.id == parcel_id) {
        Some(parcel) => parcel
            .pipeline_id
            .context("parcel has no pipeline after migration")?,
        None => bail!("no parcel with id '{parcel_id}'"),
    };
    let pipeline = find_pipeline(&pipelines, pipeline_id)?;
    let map = StageMap::for_pipeline(pipeline);

    match move_parcel(&mut parcels, &parcel_id, &stage, &map)? {
        MoveOutcome::Moved(notification) => {
            // Write-through: the whole collection is replaced on every move
            JsonParcelStore::new(&data_dir).save(&parcels)?;
            TerminalNotifier.notify(&notification);
        }
        MoveOutcome::NoOp => {
            println!("Colis '{parcel_id}' est déjà dans '{stage}'");
        }
    }

    Ok(())
}
