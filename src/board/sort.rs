//! The board's total ordering.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::board::alert::compute_alert;
use crate::models::canon::{CanonicalStage, StageMap};
use crate::models::parcel::Parcel;

/// Comparator precedence (first non-equal rule wins):
///
/// 1. parcels with an active alert sort before parcels without one
///    (overdue vs soon relative order is not specified),
/// 2. two postponed parcels order ascending by `date_report`, with a
///    missing deadline sorting after a set one,
/// 3. otherwise descending by `date_created` (newest first).
pub fn board_ordering(a: &Parcel, b: &Parcel, map: &StageMap, now: DateTime<Utc>) -> Ordering {
    let a_alerts = compute_alert(a, map, now).is_some();
    let b_alerts = compute_alert(b, map, now).is_some();
    if a_alerts != b_alerts {
        return if a_alerts {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }

    let both_postponed = map.canonical(&a.stage) == CanonicalStage::Postponed
        && map.canonical(&b.stage) == CanonicalStage::Postponed;
    if both_postponed {
        match (a.date_report, b.date_report) {
            (Some(da), Some(db)) if da != db => return da.cmp(&db),
            (Some(_), None) => return Ordering::Less,
            (None, Some(_)) => return Ordering::Greater,
            _ => {}
        }
    }

    b.date_created.cmp(&a.date_created)
}

/// Sort a parcel collection into board order. Stable, so equal parcels keep
/// their stored relative order and repeated calls are deterministic.
pub fn sort_board(parcels: &mut [Parcel], map: &StageMap, now: DateTime<Utc>) {
    parcels.sort_by(|a, b| board_ordering(a, b, map, now));
}
