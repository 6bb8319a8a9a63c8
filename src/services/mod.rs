pub mod gamification_service;
pub mod itinerary_generation_service;
