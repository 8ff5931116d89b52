//! Canonical stage keys and stage-name normalization.
//!
//! Pipelines accumulated years of inconsistent stage spellings: accented and
//! unaccented variants ("Confirmé" / "confirme"), per-pipeline suffixes
//! ("Confirmé-AG"), English/French mixes ("Delivered" / "Livré") and a couple
//! of renamed business stages ("en cours" became packaging, "nouveau" became
//! the postponed stage). Two raw stage strings denote the same board column
//! iff they normalize to the same canonical key.

use std::collections::HashMap;

use crate::models::pipeline::Pipeline;

/// Canonical identity of a stage, independent of locale, accents and
/// per-pipeline suffixes.
///
/// The fixed set covers the six business stages every pipeline is built
/// from. Anything that doesn't resolve to one of them keeps its own
/// (lower-cased) identity via `Custom`, so an operator-defined stage still
/// gets its own column when the pipeline declares a matching id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CanonicalStage {
    /// Contact deferred to a later date; carries a `date_report` deadline.
    Postponed,
    /// Order confirmed by the client. Entering this stage clears price and
    /// reschedule date so they are re-entered fresh.
    Confirmed,
    /// Being packaged for handoff.
    Packaging,
    /// Picked up / out with a delivery driver.
    OutForDelivery,
    /// Delivered to the client; terminal.
    Delivered,
    /// Cancelled; terminal.
    Cancelled,
    /// Unrecognized stage name, kept as its lower-cased raw form.
    Custom(String),
}

impl CanonicalStage {
    /// The canonical key string, as stored in historical data.
    pub fn key(&self) -> &str {
        match self {
            CanonicalStage::Postponed => "reporter",
            CanonicalStage::Confirmed => "confirmer",
            CanonicalStage::Packaging => "packaging",
            CanonicalStage::OutForDelivery => "out_for_delivery",
            CanonicalStage::Delivered => "livre",
            CanonicalStage::Cancelled => "annuler",
            CanonicalStage::Custom(raw) => raw,
        }
    }
}

impl std::fmt::Display for CanonicalStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Fold accented characters to their ASCII base letter.
///
/// Only the characters that actually occur in stage names need handling;
/// anything else passes through unchanged.
fn fold_accents(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'à' | 'â' | 'ä' => 'a',
            'î' | 'ï' => 'i',
            'ô' | 'ö' => 'o',
            'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            _ => c,
        })
        .collect()
}

/// Synonym table from folded, lower-cased spellings to canonical stages.
///
/// Covers spelling/locale variants plus the two business remaps
/// ("en cours" -> packaging, "nouveau" -> postponed). Deliberately small:
/// unknown names are NOT guessed into a canonical stage.
fn lookup(folded: &str) -> Option<CanonicalStage> {
    match folded {
        "reporter" | "reporte" | "postponed" | "nouveau" => Some(CanonicalStage::Postponed),
        "confirmer" | "confirme" | "confirmed" => Some(CanonicalStage::Confirmed),
        "packaging" | "emballage" | "en cours" => Some(CanonicalStage::Packaging),
        "out_for_delivery" | "out for delivery" | "en livraison" | "ramasse" => {
            Some(CanonicalStage::OutForDelivery)
        }
        "livre" | "livree" | "delivered" => Some(CanonicalStage::Delivered),
        "annuler" | "annule" | "cancelled" | "canceled" => Some(CanonicalStage::Cancelled),
        _ => None,
    }
}

/// Normalize a raw stage string to its canonical key.
///
/// Lower-cases, folds accents, and consults the synonym table; if that
/// misses and the name carries a `-` suffix (pipeline variants like
/// "Confirmé-AG"), retries with the final segment stripped. Unrecognized
/// names normalize to themselves lower-cased rather than erroring.
pub fn normalize_stage_key(raw: &str) -> CanonicalStage {
    let lowered = raw.trim().to_lowercase();
    let folded = fold_accents(&lowered);

    if let Some(key) = lookup(&folded) {
        return key;
    }

    // Pipeline-variant suffix: "confirme-ag" -> "confirme"
    if let Some((head, _suffix)) = folded.rsplit_once('-') {
        if let Some(key) = lookup(head) {
            return key;
        }
    }

    CanonicalStage::Custom(lowered)
}

/// An active stage resolved for display: one board column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageColumn {
    pub id: String,
    pub title: String,
    pub color: String,
}

/// Derive the active, ordered column list for a pipeline.
///
/// Filters to `active` stages and preserves definition order, which is the
/// board's left-to-right column order.
pub fn resolve_active_stages(pipeline: &Pipeline) -> Vec<StageColumn> {
    pipeline
        .stages
        .iter()
        .filter(|s| s.active)
        .map(|s| StageColumn {
            id: s.id.clone(),
            title: s.name.clone(),
            color: s.color.clone(),
        })
        .collect()
}

/// Raw-stage-id to canonical-key mapping for one pipeline, built once per
/// pipeline load instead of re-normalizing on every comparison.
#[derive(Debug, Clone)]
pub struct StageMap {
    pipeline_id: i64,
    canonical_by_id: HashMap<String, CanonicalStage>,
    /// Active stage ids in definition order, for canonical -> id lookups.
    order: Vec<String>,
}

impl StageMap {
    /// Build the map over a pipeline's active stages.
    pub fn for_pipeline(pipeline: &Pipeline) -> Self {
        let mut canonical_by_id = HashMap::new();
        let mut order = Vec::new();
        for stage in pipeline.stages.iter().filter(|s| s.active) {
            canonical_by_id.insert(stage.id.clone(), normalize_stage_key(&stage.id));
            order.push(stage.id.clone());
        }
        Self {
            pipeline_id: pipeline.id,
            canonical_by_id,
            order,
        }
    }

    pub fn pipeline_id(&self) -> i64 {
        self.pipeline_id
    }

    /// Whether `stage_id` is an active stage of this pipeline (exact id).
    pub fn contains(&self, stage_id: &str) -> bool {
        self.canonical_by_id.contains_key(stage_id)
    }

    /// Canonical key of an active stage id, or of any raw string.
    ///
    /// Parcels may carry stage spellings that are not literal pipeline ids;
    /// those fall back to plain normalization.
    pub fn canonical(&self, raw_stage: &str) -> CanonicalStage {
        self.canonical_by_id
            .get(raw_stage)
            .cloned()
            .unwrap_or_else(|| normalize_stage_key(raw_stage))
    }

    /// Resolve a parcel's raw stage to the active column it belongs to.
    ///
    /// Returns the id of the first active stage whose canonical key equals
    /// the raw value's. `None` means the parcel is invisible on this board.
    pub fn column_for(&self, raw_stage: &str) -> Option<&str> {
        let key = normalize_stage_key(raw_stage);
        self.order
            .iter()
            .find(|id| self.canonical_by_id[*id] == key)
            .map(|id| id.as_str())
    }

    /// The pipeline's active stage id for a canonical key, if it has one.
    ///
    /// Used to address a stage of another pipeline without knowing its local
    /// spelling (e.g. the logistics pipeline's pickup stage).
    pub fn stage_for(&self, key: &CanonicalStage) -> Option<&str> {
        self.order
            .iter()
            .find(|id| self.canonical_by_id[*id] == *key)
            .map(|id| id.as_str())
    }
}
