use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MarketplaceKind {
    Handicraft,
    Homestay,
    #[serde(rename = "eco-tour")]
    EcoTour,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct MarketplaceItem {
    pub id: String,
    pub name: String,
    pub kind: MarketplaceKind,
    pub price: f64,
    pub eco_score: u32,
    pub description: String,
    pub seller: String,
    pub rating: f32,
    pub reviews: u32,
}
