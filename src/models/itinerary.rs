use serde::{Deserialize, Serialize};

use crate::models::destination::Destination;
use crate::models::marketplace::MarketplaceItem;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Relax,
    Adventure,
    Spiritual,
    Cultural,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ItineraryRequest {
    pub mood: Mood,
    pub budget: f64,
    pub days: u32,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ItineraryDay {
    pub day: u32,
    pub destination: Destination,
    pub activities: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accommodation: Option<MarketplaceItem>,
    pub eco_points: u32,
    pub reasoning: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Itinerary {
    pub mood: Mood,
    pub budget: f64,
    pub days: u32,
    pub total_eco_score: u32,
    pub days_plan: Vec<ItineraryDay>,
    pub total_cost: u64,
}
