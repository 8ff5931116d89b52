//! Read-only reference data: products, villes, quartiers, businesses.
//!
//! Display enrichment only, never consulted by the transition, alert or
//! sort logic. Each collection is a flat JSON file under `reference/`;
//! missing files read as empty collections.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::store::data_dir::DataDir;
use crate::store::json::read_json;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub nom: String,
    #[serde(default)]
    pub image: String,
    /// Default unit price, as displayed on the add form.
    #[serde(default)]
    pub prix1: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ville {
    pub id: String,
    pub name: String,
}

pub fn list_products(data_dir: &DataDir) -> Result<Vec<Product>> {
    Ok(read_json(&data_dir.reference_dir().join("products.json"))?.unwrap_or_default())
}

pub fn list_villes(data_dir: &DataDir) -> Result<Vec<Ville>> {
    Ok(read_json(&data_dir.reference_dir().join("villes.json"))?.unwrap_or_default())
}

pub fn list_quartiers(data_dir: &DataDir) -> Result<Vec<String>> {
    Ok(read_json(&data_dir.reference_dir().join("quartiers.json"))?.unwrap_or_default())
}

pub fn list_businesses(data_dir: &DataDir) -> Result<Vec<String>> {
    Ok(read_json(&data_dir.reference_dir().join("businesses.json"))?.unwrap_or_default())
}
