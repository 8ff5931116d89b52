//! Parcel ("colis") entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::canon::CanonicalStage;

fn default_nb_piece() -> u32 {
    1
}

/// A tracked shipment moving through a pipeline.
///
/// The transition engine only interprets `pipeline_id`, `stage`, `prix`,
/// `date_report` and `date_created`; the rest is descriptive payload carried
/// for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parcel {
    pub id: String,
    /// Owning pipeline. Parcels from before pipelines existed lack this and
    /// are assigned a default by the one-time migration pass.
    #[serde(default)]
    pub pipeline_id: Option<i64>,
    /// Raw stage key; resolves to an active stage of the owning pipeline
    /// through normalization.
    pub stage: String,
    pub client_name: String,
    #[serde(default)]
    pub tel: String,
    #[serde(default)]
    pub ville: String,
    #[serde(default)]
    pub quartier: String,
    #[serde(default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub product_name: String,
    /// Agreed price, free-form as entered. Cleared on entry to the confirmed
    /// stage and re-entered fresh.
    #[serde(default)]
    pub prix: Option<String>,
    #[serde(default = "default_nb_piece")]
    pub nb_piece: u32,
    #[serde(default)]
    pub employee: String,
    #[serde(default)]
    pub business: String,
    #[serde(default)]
    pub commentaire: String,
    /// Rescheduled-contact deadline; only meaningful while the parcel sits
    /// in the postponed stage.
    #[serde(default)]
    pub date_report: Option<DateTime<Utc>>,
    pub date_created: DateTime<Utc>,
}

impl Parcel {
    pub fn new(client_name: String, stage: String, pipeline_id: i64) -> Self {
        Self {
            id: Self::generate_id(),
            pipeline_id: Some(pipeline_id),
            stage,
            client_name,
            tel: String::new(),
            ville: String::new(),
            quartier: String::new(),
            product_id: None,
            product_name: String::new(),
            prix: None,
            nb_piece: 1,
            employee: String::new(),
            business: String::new(),
            commentaire: String::new(),
            date_report: None,
            date_created: Utc::now(),
        }
    }

    pub fn generate_id() -> String {
        format!("colis-{}", Uuid::new_v4())
    }

    /// Place the parcel in a stage, applying stage-entry side effects.
    ///
    /// Entering the confirmed stage clears `prix` and `date_report`: both are
    /// re-negotiated after confirmation, and a stale reschedule deadline
    /// would otherwise keep alerting.
    pub fn enter_stage(&mut self, stage_id: String, key: &CanonicalStage) {
        self.stage = stage_id;
        if *key == CanonicalStage::Confirmed {
            self.prix = None;
            self.date_report = None;
        }
    }
}
