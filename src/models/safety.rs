use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Warning,
    Info,
    Severe,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct WeatherAlert {
    pub id: String,
    pub severity: AlertSeverity,
    pub message: String,
    pub location: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CrowdLevel {
    Low,
    Medium,
    High,
    Extreme,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CrowdAlert {
    pub id: String,
    pub location: String,
    pub crowd_level: CrowdLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}
