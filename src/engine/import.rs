//! Cross-pipeline bulk import.
//!
//! When the operator hands parcels over to the logistics pipeline, every
//! parcel of the source pipeline sitting in a given canonical stage is
//! promoted to a stage of the target pipeline in one batch. Split in two
//! phases so the confirmation prompt is the caller's concern: `plan_import`
//! is pure and reports what would happen, `commit_import` applies a plan.

use tracing::debug;

use crate::engine::error::EngineError;
use crate::models::canon::{CanonicalStage, StageMap};
use crate::models::parcel::Parcel;
use crate::models::pipeline::Pipeline;

/// A computed, not-yet-applied bulk import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportPlan {
    pub source_pipeline: i64,
    pub target_pipeline: i64,
    pub to_stage: String,
    pub parcel_ids: Vec<String>,
}

impl ImportPlan {
    pub fn count(&self) -> usize {
        self.parcel_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parcel_ids.is_empty()
    }
}

/// Compute which parcels a bulk import would touch.
///
/// Matches parcels owned by `source_pipeline` whose canonical stage equals
/// `from`. The target stage must be an active stage of the target pipeline.
pub fn plan_import(
    parcels: &[Parcel],
    source_pipeline: i64,
    from: &CanonicalStage,
    target: &Pipeline,
    to_stage: &str,
) -> Result<ImportPlan, EngineError> {
    let target_map = StageMap::for_pipeline(target);
    if !target_map.contains(to_stage) {
        return Err(EngineError::UnknownStage {
            stage: to_stage.to_string(),
            pipeline: target.id,
        });
    }

    let parcel_ids = parcels
        .iter()
        .filter(|p| p.pipeline_id == Some(source_pipeline))
        .filter(|p| crate::models::canon::normalize_stage_key(&p.stage) == *from)
        .map(|p| p.id.clone())
        .collect();

    Ok(ImportPlan {
        source_pipeline,
        target_pipeline: target.id,
        to_stage: to_stage.to_string(),
        parcel_ids,
    })
}

/// Apply a plan: reassign every planned parcel to the target pipeline and
/// stage, clearing `prix` and `date_report` (the same re-entry rule as a
/// confirm transition), as one batch over the collection.
///
/// Returns the number of parcels actually rewritten.
pub fn commit_import(parcels: &mut [Parcel], plan: &ImportPlan) -> usize {
    let mut applied = 0;
    for parcel in parcels
        .iter_mut()
        .filter(|p| plan.parcel_ids.iter().any(|id| *id == p.id))
    {
        parcel.pipeline_id = Some(plan.target_pipeline);
        parcel.stage = plan.to_stage.clone();
        parcel.prix = None;
        parcel.date_report = None;
        applied += 1;
    }

    debug!(
        count = applied,
        from = plan.source_pipeline,
        to = plan.target_pipeline,
        "bulk import committed"
    );
    applied
}
