use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use std::sync::Arc;

use crate::data::catalog::Catalog;
use crate::models::itinerary::ItineraryRequest;
use crate::services::itinerary_generation_service::ItineraryGenerator;

/*
    /api/itineraries/generate
*/
pub async fn generate(
    data: web::Data<Arc<Catalog>>,
    payload: web::Json<ItineraryRequest>,
) -> impl Responder {
    let generator = ItineraryGenerator::new(Arc::clone(data.get_ref()));

    match generator.generate(&payload) {
        Ok(itinerary) => HttpResponse::Ok().json(itinerary),
        Err(err) => {
            eprintln!("Itinerary generation rejected: {}", err);
            HttpResponse::BadRequest().json(json!({ "error": err.to_string() }))
        }
    }
}
