//! Grouping the sorted parcel collection into board columns.

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::board::sort::sort_board;
use crate::models::canon::{resolve_active_stages, StageColumn, StageMap};
use crate::models::parcel::Parcel;
use crate::models::pipeline::Pipeline;

/// One rendered column: an active stage and its parcels, in board order.
#[derive(Debug, Clone)]
pub struct StageGroup {
    pub column: StageColumn,
    pub parcels: Vec<Parcel>,
}

/// Read-only view of a pipeline's board.
///
/// Parcels whose stage resolves to no active column are not silently lost:
/// they are excluded from every group but listed in `unresolved` so callers
/// (and tests) can observe the exclusion.
#[derive(Debug, Clone)]
pub struct BoardProjection {
    pub groups: Vec<StageGroup>,
    pub unresolved: Vec<String>,
}

impl BoardProjection {
    /// Parcels visible across all columns.
    pub fn total_visible(&self) -> usize {
        self.groups.iter().map(|g| g.parcels.len()).sum()
    }
}

/// Project the parcels owned by `pipeline` onto its active columns.
///
/// Sorts globally first, then partitions; relative order inside each column
/// follows the global board order.
pub fn project_board(
    parcels: &[Parcel],
    pipeline: &Pipeline,
    now: DateTime<Utc>,
) -> BoardProjection {
    let map = StageMap::for_pipeline(pipeline);

    let mut owned: Vec<Parcel> = parcels
        .iter()
        .filter(|p| p.pipeline_id == Some(pipeline.id))
        .cloned()
        .collect();
    sort_board(&mut owned, &map, now);

    let mut groups: Vec<StageGroup> = resolve_active_stages(pipeline)
        .into_iter()
        .map(|column| StageGroup {
            column,
            parcels: Vec::new(),
        })
        .collect();
    let mut unresolved = Vec::new();

    for parcel in owned {
        let slot = map
            .column_for(&parcel.stage)
            .and_then(|id| groups.iter().position(|g| g.column.id == id));
        match slot {
            Some(i) => groups[i].parcels.push(parcel),
            None => {
                warn!(
                    parcel_id = %parcel.id,
                    stage = %parcel.stage,
                    pipeline = pipeline.id,
                    "parcel stage resolves to no active column"
                );
                unresolved.push(parcel.id);
            }
        }
    }

    BoardProjection { groups, unresolved }
}
