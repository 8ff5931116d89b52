//! Integration tests for the board pipeline: normalization, transitions,
//! alerting, ordering and projection over one parcel collection.

use chrono::{Duration, Utc};
use relais::board::{compute_alert, project_board, AlertSeverity};
use relais::engine::{move_parcel, EngineError, MoveOutcome};
use relais::models::canon::{normalize_stage_key, CanonicalStage, StageMap};
use relais::models::parcel::Parcel;
use relais::models::pipeline::default_pipelines;

fn parcel(id: &str, stage: &str, pipeline: i64) -> Parcel {
    let mut p = Parcel::new(format!("client-{id}"), stage.to_string(), pipeline);
    p.id = id.to_string();
    p
}

#[test]
fn test_documented_synonym_equivalence_classes() {
    // Only documented variants are equivalence classes
    for raw in ["Confirmé", "confirmé-AG", "Confirmed"] {
        assert_eq!(normalize_stage_key(raw), CanonicalStage::Confirmed);
    }
    for raw in ["Livré", "livré-AG", "Delivered"] {
        assert_eq!(normalize_stage_key(raw), CanonicalStage::Delivered);
    }
    // An arbitrary string is not pulled into a canonical class
    assert_eq!(
        normalize_stage_key("Whatever"),
        CanonicalStage::Custom("whatever".to_string())
    );
}

#[test]
fn test_move_to_current_stage_changes_nothing() {
    let pipelines = default_pipelines();
    let map = StageMap::for_pipeline(&pipelines[0]);
    let mut parcels = vec![parcel("a", "Reporter", 1)];
    let before = serde_json::to_string(&parcels).unwrap();

    let outcome = move_parcel(&mut parcels, "a", "Reporter", &map).unwrap();

    assert_eq!(outcome, MoveOutcome::NoOp);
    assert_eq!(serde_json::to_string(&parcels).unwrap(), before);
}

#[test]
fn test_confirm_clears_fields_regardless_of_prior_values() {
    let pipelines = default_pipelines();
    let map = StageMap::for_pipeline(&pipelines[0]);

    for (prix, date_report) in [
        (None, None),
        (Some("500".to_string()), None),
        (Some("0".to_string()), Some(Utc::now() + Duration::days(3))),
    ] {
        let mut p = parcel("a", "Reporter", 1);
        p.prix = prix;
        p.date_report = date_report;
        let mut parcels = vec![p];

        move_parcel(&mut parcels, "a", "Confirmé", &map).unwrap();

        assert_eq!(parcels[0].prix, None);
        assert_eq!(parcels[0].date_report, None);
    }
}

#[test]
fn test_unknown_parcel_is_reported_not_swallowed() {
    let pipelines = default_pipelines();
    let map = StageMap::for_pipeline(&pipelines[0]);
    let mut parcels = vec![parcel("a", "Reporter", 1)];

    let result = move_parcel(&mut parcels, "missing", "Confirmé", &map);
    assert_eq!(
        result,
        Err(EngineError::ParcelNotFound("missing".to_string()))
    );
}

#[test]
fn test_alert_thresholds() {
    let pipelines = default_pipelines();
    let map = StageMap::for_pipeline(&pipelines[0]);
    let now = Utc::now();

    let mut p = parcel("a", "Reporter", 1);

    p.date_report = Some(now - Duration::milliseconds(1));
    assert_eq!(
        compute_alert(&p, &map, now).map(|a| a.severity),
        Some(AlertSeverity::Overdue)
    );

    p.date_report = Some(now + Duration::hours(3));
    assert_eq!(
        compute_alert(&p, &map, now).map(|a| a.severity),
        Some(AlertSeverity::Soon)
    );

    p.date_report = Some(now + Duration::hours(5));
    assert_eq!(compute_alert(&p, &map, now), None);
}

#[test]
fn test_sort_precedence_on_the_board() {
    let pipelines = default_pipelines();
    let pipeline = &pipelines[0];
    let now = Utc::now();

    // A: postponed, overdue
    let mut a = parcel("a", "Reporter", 1);
    a.date_report = Some(now - Duration::hours(1));
    a.date_created = now - Duration::days(4);

    // B: postponed, quiet (deadline far out)
    let mut b = parcel("b", "Reporter", 1);
    b.date_report = Some(now + Duration::hours(24));
    b.date_created = now - Duration::days(2);

    // C: confirmed, newest
    let mut c = parcel("c", "Confirmé", 1);
    c.date_created = now - Duration::days(1);

    let projection = project_board(&[c.clone(), b.clone(), a.clone()], pipeline, now);

    let reporter = &projection.groups[0];
    assert_eq!(reporter.column.id, "Reporter");
    assert_eq!(reporter.parcels[0].id, "a", "alerting parcel leads");
    assert_eq!(reporter.parcels[1].id, "b");

    // Repeatable across calls with identical inputs
    let again = project_board(&[c, b, a], pipeline, now);
    let ids = |p: &relais::board::BoardProjection| -> Vec<String> {
        p.groups
            .iter()
            .flat_map(|g| g.parcels.iter().map(|x| x.id.clone()))
            .collect()
    };
    assert_eq!(ids(&projection), ids(&again));
}

#[test]
fn test_unresolved_stage_is_invisible_but_counted() {
    let pipelines = default_pipelines();
    let pipeline = &pipelines[0];

    let parcels = vec![
        parcel("ok-1", "Reporter", 1),
        parcel("ok-2", "Confirmed", 1),
        parcel("lost", "GarbageValue", 1),
    ];

    let projection = project_board(&parcels, pipeline, Utc::now());

    for group in &projection.groups {
        assert!(group.parcels.iter().all(|p| p.id != "lost"));
    }
    assert_eq!(parcels.len() - projection.total_visible(), 1);
    assert_eq!(projection.unresolved, vec!["lost".to_string()]);
}
