use serde::{Deserialize, Serialize};

/// One catalog record exactly as the endpoint serves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeerRecord {
    pub abv: f64,
    pub description: String,
    pub ibu: i64,
    pub id: u64,
    pub image_url: String,
    pub name: String,
}

/// The endpoint wraps the record list in a `record` envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub record: Vec<BeerRecord>,
}
