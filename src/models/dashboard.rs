use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct VisitorStats {
    pub month: String,
    pub visitors: u32,
    pub eco_score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forecast: Option<u32>,
}
