//! Create a parcel.
//!
//! Stands in for the original add-parcel form: the descriptive payload is
//! taken from arguments, product name and default price are enriched from
//! reference data when a product id is given.

use anyhow::{bail, Result};
use chrono::{DateTime, Utc};

use crate::commands::common::{find_pipeline, load_state, open_data_dir};
use crate::models::canon::StageMap;
use crate::models::parcel::Parcel;
use crate::notify::{Notification, Notifier, TerminalNotifier};
use crate::store::context::load_context;
use crate::store::parcels::{JsonParcelStore, ParcelStore};
use crate::store::reference::{list_products, list_villes};

#[allow(clippy::too_many_arguments)]
pub fn execute(
    client_name: String,
    tel: Option<String>,
    ville: Option<String>,
    quartier: Option<String>,
    product: Option<String>,
    prix: Option<String>,
    nb_piece: Option<u32>,
    employee: Option<String>,
    business: Option<String>,
    commentaire: Option<String>,
    stage: Option<String>,
    pipeline: Option<i64>,
    date_report: Option<DateTime<Utc>>,
) -> Result<()> {
    let data_dir = open_data_dir()?;
    let (pipelines, mut parcels) = load_state(&data_dir)?;

    let context = load_context(&data_dir, &pipelines)?;
    let pipeline = find_pipeline(&pipelines, pipeline.unwrap_or(context.active_pipeline))?;
    let map = StageMap::for_pipeline(pipeline);

    // Default to the pipeline's first column
    let stage = match stage {
        Some(stage) => {
            if !map.contains(&stage) {
                bail!(
                    "stage '{stage}' is not an active stage of pipeline {}",
                    pipeline.id
                );
            }
            stage
        }
        None => match pipeline.stages.iter().find(|s| s.active) {
            Some(first) => first.id.clone(),
            None => bail!("pipeline {} has no active stages", pipeline.id),
        },
    };

    let mut parcel = Parcel::new(client_name, stage, pipeline.id);
    parcel.tel = tel.unwrap_or_default();
    parcel.ville = ville.unwrap_or_default();
    parcel.quartier = quartier.unwrap_or_default();
    parcel.nb_piece = nb_piece.unwrap_or(1);
    parcel.employee = employee.unwrap_or_default();
    parcel.business = business.unwrap_or_default();
    parcel.commentaire = commentaire.unwrap_or_default();
    parcel.prix = prix;
    parcel.date_report = date_report;

    if !parcel.ville.is_empty() {
        let villes = list_villes(&data_dir)?;
        if !villes.is_empty() && !villes.iter().any(|v| v.name == parcel.ville) {
            println!("Warning: ville '{}' is not in the reference list", parcel.ville);
        }
    }

    if let Some(product_id) = product {
        let products = list_products(&data_dir)?;
        match products.iter().find(|p| p.id == product_id) {
            Some(product) => {
                parcel.product_name = product.nom.clone();
                if parcel.prix.is_none() {
                    parcel.prix = product.prix1.clone();
                }
            }
            None => println!("Warning: unknown product '{product_id}', kept as-is"),
        }
        parcel.product_id = Some(product_id);
    }

    let id = parcel.id.clone();
    let client = parcel.client_name.clone();
    let stage = parcel.stage.clone();
    parcels.push(parcel);
    JsonParcelStore::new(&data_dir).save(&parcels)?;

    TerminalNotifier.notify(&Notification::success(
        "Colis créé",
        format!("{client} — {stage} ({id})"),
    ));
    Ok(())
}
