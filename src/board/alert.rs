//! Urgency alerts for postponed parcels.

use chrono::{DateTime, Utc};

use crate::models::canon::{CanonicalStage, StageMap};
use crate::models::parcel::Parcel;

pub const OVERDUE_LABEL: &str = "Date dépassée!";
pub const SOON_LABEL: &str = "Bientôt!";

/// Hours before the reschedule deadline at which a parcel starts alerting.
const SOON_WINDOW_HOURS: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertSeverity {
    Overdue,
    Soon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alert {
    pub severity: AlertSeverity,
    pub label: &'static str,
}

/// Compute the alert state of a parcel at `now`.
///
/// Only parcels sitting in the postponed stage with a reschedule deadline
/// alert. Pure in `now`: callers must re-evaluate on every render rather
/// than caching the result on the parcel.
pub fn compute_alert(parcel: &Parcel, map: &StageMap, now: DateTime<Utc>) -> Option<Alert> {
    if map.canonical(&parcel.stage) != CanonicalStage::Postponed {
        return None;
    }
    let date_report = parcel.date_report?;

    let hours_until = (date_report - now).num_milliseconds() as f64 / 3_600_000.0;
    if hours_until <= 0.0 {
        Some(Alert {
            severity: AlertSeverity::Overdue,
            label: OVERDUE_LABEL,
        })
    } else if hours_until <= SOON_WINDOW_HOURS {
        Some(Alert {
            severity: AlertSeverity::Soon,
            label: SOON_LABEL,
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::pipeline::default_pipelines;
    use chrono::Duration;

    fn postponed_parcel(date_report: Option<DateTime<Utc>>) -> Parcel {
        let mut parcel = Parcel::new("Aicha".to_string(), "Reporter".to_string(), 1);
        parcel.date_report = date_report;
        parcel
    }

    fn map() -> StageMap {
        StageMap::for_pipeline(&default_pipelines()[0])
    }

    #[test]
    fn test_just_past_deadline_is_overdue() {
        let now = Utc::now();
        let parcel = postponed_parcel(Some(now - Duration::milliseconds(1)));

        let alert = compute_alert(&parcel, &map(), now).unwrap();
        assert_eq!(alert.severity, AlertSeverity::Overdue);
        assert_eq!(alert.label, OVERDUE_LABEL);
    }

    #[test]
    fn test_three_hours_out_is_soon() {
        let now = Utc::now();
        let parcel = postponed_parcel(Some(now + Duration::hours(3)));

        let alert = compute_alert(&parcel, &map(), now).unwrap();
        assert_eq!(alert.severity, AlertSeverity::Soon);
        assert_eq!(alert.label, SOON_LABEL);
    }

    #[test]
    fn test_five_hours_out_is_quiet() {
        let now = Utc::now();
        let parcel = postponed_parcel(Some(now + Duration::hours(5)));

        assert_eq!(compute_alert(&parcel, &map(), now), None);
    }

    #[test]
    fn test_no_report_date_never_alerts() {
        assert_eq!(compute_alert(&postponed_parcel(None), &map(), Utc::now()), None);
    }

    #[test]
    fn test_only_postponed_stage_alerts() {
        let now = Utc::now();
        let mut parcel = postponed_parcel(Some(now - Duration::hours(1)));
        parcel.stage = "Confirmé".to_string();

        assert_eq!(compute_alert(&parcel, &map(), now), None);
    }

    #[test]
    fn test_postponed_spelling_variant_alerts() {
        let now = Utc::now();
        let mut parcel = postponed_parcel(Some(now - Duration::hours(1)));
        parcel.stage = "Reporté".to_string();

        assert!(compute_alert(&parcel, &map(), now).is_some());
    }
}
