//! One-time migration of ownerless parcels.
//!
//! Parcels created before pipelines existed carry no `pipeline_id`. Whenever
//! both collections are non-empty, any such parcel is assigned the default
//! pipeline. Once every parcel has an owner this is a no-op.

use tracing::debug;

use crate::models::parcel::Parcel;
use crate::models::pipeline::{default_pipeline, Pipeline};

/// Assign the default pipeline to every parcel lacking one.
///
/// Returns the number of parcels migrated (0 when idempotent re-runs find
/// nothing to do, or when either collection is empty).
pub fn migrate_ownerless(parcels: &mut [Parcel], pipelines: &[Pipeline]) -> usize {
    if parcels.is_empty() || pipelines.is_empty() {
        return 0;
    }

    let Some(target) = default_pipeline(pipelines) else {
        return 0;
    };

    let mut migrated = 0;
    for parcel in parcels.iter_mut().filter(|p| p.pipeline_id.is_none()) {
        parcel.pipeline_id = Some(target.id);
        migrated += 1;
    }

    if migrated > 0 {
        debug!(count = migrated, pipeline = target.id, "migrated ownerless parcels");
    }
    migrated
}
