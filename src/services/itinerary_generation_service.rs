use std::fmt;
use std::sync::Arc;

use crate::data::catalog::Catalog;
use crate::models::destination::{Destination, DestinationCategory};
use crate::models::itinerary::{Itinerary, ItineraryDay, ItineraryRequest, Mood};
use crate::models::marketplace::{MarketplaceItem, MarketplaceKind};

const ACCOMMODATION_BUDGET_SHARE: f64 = 0.6;
const ACTIVITY_BUDGET_SHARE: f64 = 0.4;
const ECO_POINTS_RATE: f64 = 0.5;

#[derive(Clone)]
pub struct ItineraryGenerationConfig {
    /// A homestay qualifies when its nightly price stays within this share
    /// of the daily allowance.
    pub accommodation_budget_share: f64,
    /// Flat share of the daily allowance reserved for activities.
    pub activity_budget_share: f64,
    /// Eco points awarded per destination eco-score point.
    pub eco_points_rate: f64,
}

impl Default for ItineraryGenerationConfig {
    fn default() -> Self {
        Self {
            accommodation_budget_share: ACCOMMODATION_BUDGET_SHARE,
            activity_budget_share: ACTIVITY_BUDGET_SHARE,
            eco_points_rate: ECO_POINTS_RATE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationError {
    InvalidBudget,
    InvalidDayCount,
    NoMatchingDestinations,
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBudget => write!(f, "Budget must be greater than zero"),
            Self::InvalidDayCount => write!(f, "Trip length must be at least one day"),
            Self::NoMatchingDestinations => {
                write!(f, "No destinations match the selected mood")
            }
        }
    }
}

impl std::error::Error for GenerationError {}

pub struct ItineraryGenerator {
    catalog: Arc<Catalog>,
    config: ItineraryGenerationConfig,
}

impl ItineraryGenerator {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            config: ItineraryGenerationConfig::default(),
        }
    }

    pub fn with_config(catalog: Arc<Catalog>, config: ItineraryGenerationConfig) -> Self {
        Self { catalog, config }
    }

    /// Generate a day-by-day itinerary for the requested mood, budget and
    /// trip length. Pure over the catalog; identical requests produce
    /// identical itineraries.
    pub fn generate(&self, request: &ItineraryRequest) -> Result<Itinerary, GenerationError> {
        if request.budget <= 0.0 {
            return Err(GenerationError::InvalidBudget);
        }
        if request.days == 0 {
            return Err(GenerationError::InvalidDayCount);
        }

        let destinations = self.select_destinations(request.mood);
        if destinations.is_empty() {
            return Err(GenerationError::NoMatchingDestinations);
        }

        let daily_allowance = request.budget / request.days as f64;
        let accommodation = self.find_accommodation(daily_allowance);

        let mut days_plan = Vec::with_capacity(request.days as usize);
        let mut total_cost = 0.0;
        let mut eco_score_sum: u32 = 0;

        for i in 0..request.days {
            // Cycle through the matching destinations when the trip is
            // longer than the list.
            let destination = destinations[i as usize % destinations.len()];

            let day_cost = accommodation.map(|item| item.price).unwrap_or(0.0)
                + daily_allowance * self.config.activity_budget_share;
            total_cost += day_cost;
            eco_score_sum += destination.eco_score;

            days_plan.push(ItineraryDay {
                day: i + 1,
                destination: destination.clone(),
                activities: destination.activities.clone(),
                accommodation: accommodation.cloned(),
                eco_points: (destination.eco_score as f64 * self.config.eco_points_rate).floor()
                    as u32,
                reasoning: build_reasoning(request.mood, destination),
            });
        }

        Ok(Itinerary {
            mood: request.mood,
            budget: request.budget,
            days: request.days,
            total_eco_score: eco_score_sum / request.days,
            days_plan,
            total_cost: total_cost.floor() as u64,
        })
    }

    /// Destinations suiting the mood, in catalog order. For the cultural
    /// mood, destinations whose category is itself cultural move to the
    /// front via a stable two-pass partition so type-true sites get picked
    /// first on short trips.
    fn select_destinations(&self, mood: Mood) -> Vec<&Destination> {
        let matching: Vec<&Destination> = self
            .catalog
            .destinations
            .iter()
            .filter(|dest| dest.suits_mood(mood))
            .collect();

        if mood != Mood::Cultural {
            return matching;
        }

        let mut ordered: Vec<&Destination> = matching
            .iter()
            .copied()
            .filter(|dest| dest.category == DestinationCategory::Cultural)
            .collect();
        ordered.extend(
            matching
                .iter()
                .copied()
                .filter(|dest| dest.category != DestinationCategory::Cultural),
        );
        ordered
    }

    /// First homestay cheap enough for the nightly share of the allowance.
    /// None is a valid outcome; the day simply carries no accommodation.
    fn find_accommodation(&self, daily_allowance: f64) -> Option<&MarketplaceItem> {
        let cap = daily_allowance * self.config.accommodation_budget_share;
        self.catalog
            .marketplace
            .iter()
            .find(|item| item.kind == MarketplaceKind::Homestay && item.price <= cap)
    }
}

fn build_reasoning(mood: Mood, destination: &Destination) -> String {
    let activities = destination.activities.join(", ");
    match mood {
        Mood::Adventure => format!(
            "Perfect for adventure lovers! {} offers thrilling {}. Budget-friendly yet exciting.",
            destination.name, activities
        ),
        Mood::Relax => format!(
            "Ideal for relaxation. {} provides peaceful environment for unwinding with {}.",
            destination.name, activities
        ),
        Mood::Spiritual => format!(
            "Spiritually enriching destination. {} offers sacred experiences and inner peace through {}.",
            destination.name, activities
        ),
        Mood::Cultural => format!(
            "Rich cultural immersion at {}. Experience authentic Jharkhand through {}.",
            destination.name, activities
        ),
    }
}
