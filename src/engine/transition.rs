//! Single-parcel stage transitions.

use tracing::debug;

use crate::engine::error::EngineError;
use crate::models::canon::StageMap;
use crate::models::parcel::Parcel;
use crate::notify::Notification;

/// Result of a move request.
///
/// `NoOp` means the parcel was already in the target stage: nothing was
/// written and no notification is owed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved(Notification),
    NoOp,
}

/// Move a parcel to a target stage of its pipeline.
///
/// The target must be an active stage id of the pipeline the `StageMap` was
/// built for. Entering a stage that canonicalizes to confirmed clears
/// `prix` and `date_report` (the re-entry rule).
///
/// Mutates the collection in place; the caller is responsible for writing
/// the full collection back to the store when the outcome is `Moved`.
pub fn move_parcel(
    parcels: &mut [Parcel],
    parcel_id: &str,
    target_stage: &str,
    map: &StageMap,
) -> Result<MoveOutcome, EngineError> {
    if !map.contains(target_stage) {
        return Err(EngineError::UnknownStage {
            stage: target_stage.to_string(),
            pipeline: map.pipeline_id(),
        });
    }

    let parcel = parcels
        .iter_mut()
        .find(|p| p.id == parcel_id)
        .ok_or_else(|| EngineError::ParcelNotFound(parcel_id.to_string()))?;

    if parcel.stage == target_stage {
        debug!(parcel_id, stage = target_stage, "move is a no-op");
        return Ok(MoveOutcome::NoOp);
    }

    let key = map.canonical(target_stage);
    parcel.enter_stage(target_stage.to_string(), &key);

    debug!(parcel_id, stage = target_stage, "parcel moved");
    Ok(MoveOutcome::Moved(Notification::success(
        "Colis déplacé",
        format!("{} → {}", parcel.client_name, target_stage),
    )))
}
