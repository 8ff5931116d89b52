pub mod error;
pub mod import;
pub mod migrate;
pub mod transition;

pub use error::EngineError;
pub use import::{commit_import, plan_import, ImportPlan};
pub use migrate::migrate_ownerless;
pub use transition::{move_parcel, MoveOutcome};
