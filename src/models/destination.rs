use serde::{Deserialize, Serialize};

use crate::models::itinerary::Mood;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DestinationCategory {
    Cultural,
    Adventure,
    Spiritual,
    Natural,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub location: GeoLocation,
    pub eco_score: u32,
    pub category: DestinationCategory,
    pub description: String,
    pub activities: Vec<String>,
    pub best_for_mood: Vec<Mood>,
}

impl Destination {
    pub fn suits_mood(&self, mood: Mood) -> bool {
        self.best_for_mood.contains(&mood)
    }
}
