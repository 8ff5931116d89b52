//! Parcel record store.
//!
//! The store owns all parcel mutable state. Mutations read the full
//! collection, compute a new one, and write it back as a single unit:
//! replace-on-write, never partial patches.

use anyhow::Result;
use std::path::PathBuf;

use crate::models::parcel::Parcel;
use crate::store::data_dir::DataDir;
use crate::store::json::{read_json, write_json};

/// Full-collection load/save contract, injected so the engine and commands
/// are testable without a real persistence backend.
pub trait ParcelStore {
    fn load(&self) -> Result<Vec<Parcel>>;
    fn save(&self, parcels: &[Parcel]) -> Result<()>;
}

/// JSON-file backed parcel store inside the data directory.
pub struct JsonParcelStore {
    path: PathBuf,
}

impl JsonParcelStore {
    pub fn new(data_dir: &DataDir) -> Self {
        Self {
            path: data_dir.parcels_file(),
        }
    }
}

impl ParcelStore for JsonParcelStore {
    fn load(&self) -> Result<Vec<Parcel>> {
        Ok(read_json(&self.path)?.unwrap_or_default())
    }

    fn save(&self, parcels: &[Parcel]) -> Result<()> {
        write_json(&self.path, &parcels)
    }
}
