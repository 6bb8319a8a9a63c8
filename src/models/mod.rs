pub mod dashboard;
pub mod destination;
pub mod guide;
pub mod itinerary;
pub mod marketplace;
pub mod safety;
pub mod tourist;
