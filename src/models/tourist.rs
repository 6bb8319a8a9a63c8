use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub date_earned: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct Tourist {
    pub id: String,
    pub name: String,
    pub eco_score: u32,
    pub badges: Vec<Badge>,
    pub total_points: u32,
}

impl Tourist {
    pub fn has_badge(&self, badge_id: &str) -> bool {
        self.badges.iter().any(|badge| badge.id == badge_id)
    }
}
