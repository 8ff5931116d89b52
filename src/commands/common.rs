//! Shared loading and maintenance steps for commands.

use anyhow::{bail, Result};

use crate::engine::migrate_ownerless;
use crate::models::parcel::Parcel;
use crate::models::pipeline::Pipeline;
use crate::notify::{Notification, Notifier};
use crate::store::data_dir::DataDir;
use crate::store::parcels::{JsonParcelStore, ParcelStore};
use crate::store::pipelines::{load_or_init, JsonPipelineStore};

/// Open the data directory in the current working directory.
pub fn open_data_dir() -> Result<DataDir> {
    let data_dir = DataDir::new(".");
    data_dir.load()?;
    Ok(data_dir)
}

/// Load pipelines (seeding defaults on first run) and the parcel collection.
pub fn load_state(data_dir: &DataDir) -> Result<(Vec<Pipeline>, Vec<Parcel>)> {
    let pipelines = load_or_init(&JsonPipelineStore::new(data_dir))?;
    let parcels = JsonParcelStore::new(data_dir).load()?;
    Ok((pipelines, parcels))
}

/// Run the ownerless-parcel migration pass and persist + announce it when it
/// changed anything. Safe to call on every load path; idempotent.
pub fn run_ownerless_migration(
    data_dir: &DataDir,
    parcels: &mut [Parcel],
    pipelines: &[Pipeline],
    notifier: &dyn Notifier,
) -> Result<usize> {
    let migrated = migrate_ownerless(parcels, pipelines);
    if migrated > 0 {
        JsonParcelStore::new(data_dir).save(parcels)?;
        notifier.notify(&Notification::info(
            "Migration",
            format!("{migrated} colis rattachés au pipeline par défaut"),
        ));
    }
    Ok(migrated)
}

pub fn find_pipeline(pipelines: &[Pipeline], id: i64) -> Result<&Pipeline> {
    match pipelines.iter().find(|p| p.id == id) {
        Some(pipeline) => Ok(pipeline),
        None => bail!("pipeline {id} not found"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::pipeline::default_pipelines;
    use crate::notify::test_support::RecordingNotifier;
    use tempfile::TempDir;

    #[test]
    fn test_migration_saves_and_notifies_once() {
        let temp = TempDir::new().unwrap();
        let data_dir = DataDir::new(temp.path());
        data_dir.initialize().unwrap();

        let pipelines = default_pipelines();
        let mut ownerless = Parcel::new("Aicha".to_string(), "Reporter".to_string(), 0);
        ownerless.pipeline_id = None;
        let mut parcels = vec![ownerless];

        let notifier = RecordingNotifier::default();
        let migrated =
            run_ownerless_migration(&data_dir, &mut parcels, &pipelines, &notifier).unwrap();

        assert_eq!(migrated, 1);
        assert_eq!(notifier.seen.borrow().len(), 1);
        assert!(notifier.seen.borrow()[0].description.contains('1'));

        // Persisted: a fresh load sees the owner
        let reloaded = JsonParcelStore::new(&data_dir).load().unwrap();
        assert_eq!(reloaded[0].pipeline_id, Some(1));
    }

    #[test]
    fn test_migration_noop_is_silent() {
        let temp = TempDir::new().unwrap();
        let data_dir = DataDir::new(temp.path());
        data_dir.initialize().unwrap();

        let pipelines = default_pipelines();
        let mut parcels = vec![Parcel::new("Omar".to_string(), "Reporter".to_string(), 1)];

        let notifier = RecordingNotifier::default();
        let migrated =
            run_ownerless_migration(&data_dir, &mut parcels, &pipelines, &notifier).unwrap();

        assert_eq!(migrated, 0);
        assert!(notifier.seen.borrow().is_empty());
        assert!(
            !data_dir.parcels_file().exists(),
            "no-op migration must not write the store"
        );
    }
}
