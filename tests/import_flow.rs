//! Integration tests for ownerless migration and the cross-pipeline bulk
//! import, exercised through the JSON stores.

use chrono::Utc;
use relais::engine::{commit_import, migrate_ownerless, plan_import};
use relais::models::canon::CanonicalStage;
use relais::models::parcel::Parcel;
use relais::models::pipeline::default_pipelines;
use relais::store::data_dir::DataDir;
use relais::store::parcels::{JsonParcelStore, ParcelStore};
use relais::store::pipelines::{load_or_init, JsonPipelineStore};
use tempfile::TempDir;

fn parcel(id: &str, stage: &str, pipeline: Option<i64>) -> Parcel {
    let mut p = Parcel::new(format!("client-{id}"), stage.to_string(), 0);
    p.id = id.to_string();
    p.pipeline_id = pipeline;
    p
}

#[test]
fn test_migration_is_idempotent_through_the_store() {
    let temp = TempDir::new().unwrap();
    let data_dir = DataDir::new(temp.path());
    data_dir.initialize().unwrap();

    let pipelines = load_or_init(&JsonPipelineStore::new(&data_dir)).unwrap();
    let store = JsonParcelStore::new(&data_dir);
    store
        .save(&[
            parcel("a", "Reporter", None),
            parcel("b", "Confirmé", Some(2)),
            parcel("c", "Reporter", None),
        ])
        .unwrap();

    // First pass migrates the two ownerless parcels
    let mut parcels = store.load().unwrap();
    assert_eq!(migrate_ownerless(&mut parcels, &pipelines), 2);
    store.save(&parcels).unwrap();
    let after_once = store.load().unwrap();

    // Second pass is a no-op: same final collection
    let mut parcels = store.load().unwrap();
    assert_eq!(migrate_ownerless(&mut parcels, &pipelines), 0);
    store.save(&parcels).unwrap();
    let after_twice = store.load().unwrap();

    assert_eq!(after_once, after_twice);
    assert!(after_twice.iter().all(|p| p.pipeline_id.is_some()));
    assert_eq!(after_twice[1].pipeline_id, Some(2), "owned parcel untouched");
}

#[test]
fn test_bulk_import_promotes_confirmed_parcels() {
    let temp = TempDir::new().unwrap();
    let data_dir = DataDir::new(temp.path());
    data_dir.initialize().unwrap();

    let pipelines = load_or_init(&JsonPipelineStore::new(&data_dir)).unwrap();
    let logistics = pipelines.iter().find(|p| p.logistics).unwrap();

    let store = JsonParcelStore::new(&data_dir);
    let mut confirmed_with_payload = parcel("a", "Confirmé", Some(1));
    confirmed_with_payload.prix = Some("300".to_string());
    confirmed_with_payload.date_report = Some(Utc::now());
    store
        .save(&[
            confirmed_with_payload,
            parcel("b", "Confirmed", Some(1)),
            parcel("c", "confirmé", Some(1)),
            parcel("d", "Reporter", Some(1)),
            parcel("e", "Confirmé-AG", Some(2)),
        ])
        .unwrap();

    let mut parcels = store.load().unwrap();
    let plan = plan_import(
        &parcels,
        1,
        &CanonicalStage::Confirmed,
        logistics,
        "Ramassé",
    )
    .unwrap();

    // The prompt reports the number of parcels the commit will touch
    assert_eq!(plan.count(), 3);

    let applied = commit_import(&mut parcels, &plan);
    store.save(&parcels).unwrap();

    assert_eq!(applied, 3);
    let final_parcels = store.load().unwrap();
    for id in ["a", "b", "c"] {
        let p = final_parcels.iter().find(|p| p.id == id).unwrap();
        assert_eq!(p.pipeline_id, Some(logistics.id));
        assert_eq!(p.stage, "Ramassé");
        assert_eq!(p.prix, None);
        assert_eq!(p.date_report, None);
    }
    // Non-matching parcels are untouched
    let d = final_parcels.iter().find(|p| p.id == "d").unwrap();
    assert_eq!(d.stage, "Reporter");
    assert_eq!(d.pipeline_id, Some(1));
    let e = final_parcels.iter().find(|p| p.id == "e").unwrap();
    assert_eq!(e.stage, "Confirmé-AG");
}

#[test]
fn test_declined_import_changes_nothing() {
    // Declining means simply not committing the plan
    let pipelines = default_pipelines();
    let logistics = pipelines.iter().find(|p| p.logistics).unwrap();

    let parcels = vec![parcel("a", "Confirmé", Some(1))];
    let before = parcels.clone();

    let plan = plan_import(
        &parcels,
        1,
        &CanonicalStage::Confirmed,
        logistics,
        "Ramassé",
    )
    .unwrap();

    assert_eq!(plan.count(), 1);
    assert_eq!(parcels, before, "planning alone mutates nothing");
}
