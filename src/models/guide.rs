use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TourGuide {
    pub id: String,
    pub name: String,
    pub rating: f32,
    pub verified: bool,
    pub specializations: Vec<String>,
    pub price_per_day: f64,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ledger_id: Option<String>,
}
