use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::data::catalog::Catalog;
use crate::models::guide::TourGuide;

#[derive(serde::Deserialize)]
pub struct QueryParams {
    verified: Option<bool>,
}

/*
    /api/guides
*/
pub async fn get_guides(
    data: web::Data<Arc<Catalog>>,
    params: web::Query<QueryParams>,
) -> impl Responder {
    let catalog = data.into_inner();

    let guides: Vec<&TourGuide> = match params.verified {
        Some(verified) => catalog
            .guides
            .iter()
            .filter(|guide| guide.verified == verified)
            .collect(),
        None => catalog.guides.iter().collect(),
    };

    HttpResponse::Ok().json(guides)
}
