use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::data::catalog::Catalog;
use crate::models::destination::Destination;
use crate::models::itinerary::Mood;

#[derive(serde::Deserialize)]
pub struct QueryParams {
    mood: Option<Mood>,
}

/*
    /api/destinations
*/
pub async fn get_destinations(
    data: web::Data<Arc<Catalog>>,
    params: web::Query<QueryParams>,
) -> impl Responder {
    let catalog = data.into_inner();

    let destinations: Vec<&Destination> = match params.mood {
        Some(mood) => catalog
            .destinations
            .iter()
            .filter(|dest| dest.suits_mood(mood))
            .collect(),
        None => catalog.destinations.iter().collect(),
    };

    HttpResponse::Ok().json(destinations)
}
