//! Pipeline definitions: the ordered stage lists parcels move through.

use serde::{Deserialize, Serialize};

/// Name of the pipeline ownerless parcels are migrated into.
pub const DEFAULT_PIPELINE_NAME: &str = "Livraison Ammex";

/// One stage of a pipeline: a board column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageDef {
    pub id: String,
    pub name: String,
    pub color: String,
    pub active: bool,
}

impl StageDef {
    /// Stage whose id equals its display name, the common case.
    pub fn new(name: &str, color: &str) -> Self {
        Self {
            id: name.to_string(),
            name: name.to_string(),
            color: color.to_string(),
            active: true,
        }
    }
}

/// A named, ordered set of stages: one business process lane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipeline {
    pub id: i64,
    pub name: String,
    /// Marks the delivery-handoff pipeline: switching to it offers to bulk-
    /// import confirmed parcels from the previous pipeline.
    #[serde(default)]
    pub logistics: bool,
    /// Definition order is the board's left-to-right column order.
    #[serde(default)]
    pub stages: Vec<StageDef>,
}

impl Pipeline {
    /// A pipeline without stages cannot host parcels; treated as malformed
    /// persisted data and reseeded.
    pub fn is_well_formed(&self) -> bool {
        !self.stages.is_empty()
    }
}

/// The hard-coded default pipelines, seeded at first run.
///
/// "Livreur Agadir" suffixes its stage identifiers so historical data from
/// both pipelines can coexist in one flat parcel collection.
pub fn default_pipelines() -> Vec<Pipeline> {
    vec![
        Pipeline {
            id: 1,
            name: DEFAULT_PIPELINE_NAME.to_string(),
            logistics: false,
            stages: vec![
                StageDef::new("Reporter", "yellow"),
                StageDef::new("Confirmé", "green"),
                StageDef::new("Packaging", "cyan"),
                StageDef::new("Out for delivery", "blue"),
                StageDef::new("Livré", "magenta"),
                StageDef::new("Annuler", "red"),
            ],
        },
        Pipeline {
            id: 2,
            name: "Livreur Agadir".to_string(),
            logistics: true,
            stages: vec![
                StageDef::new("Confirmé-AG", "green"),
                StageDef::new("Ramassé", "blue"),
                StageDef::new("Livré-AG", "magenta"),
                StageDef::new("Annulé-AG", "red"),
            ],
        },
    ]
}

/// Pick the pipeline ownerless parcels should be assigned to: the one whose
/// name matches the known default, else the first.
pub fn default_pipeline(pipelines: &[Pipeline]) -> Option<&Pipeline> {
    pipelines
        .iter()
        .find(|p| p.name == DEFAULT_PIPELINE_NAME)
        .or_else(|| pipelines.first())
}
