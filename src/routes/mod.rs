pub mod dashboard;
pub mod destination;
pub mod gamification;
pub mod guide;
pub mod health;
pub mod itinerary;
pub mod marketplace;
pub mod safety;
