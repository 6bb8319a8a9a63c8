use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use std::sync::Arc;

use crate::data::catalog::Catalog;
use crate::models::tourist::Tourist;
use crate::services::gamification_service::GamificationService;

#[derive(Deserialize)]
pub struct EcoActionRequest {
    pub tourist: Tourist,
    pub action: String,
}

/*
    /api/tourist
*/
pub async fn get_tourist(data: web::Data<Arc<Catalog>>) -> impl Responder {
    let catalog = data.into_inner();

    HttpResponse::Ok().json(&catalog.tourist)
}

/*
    /api/eco/actions
*/
pub async fn apply_action(
    data: web::Data<Arc<Catalog>>,
    payload: web::Json<EcoActionRequest>,
) -> impl Responder {
    let catalog = data.into_inner();

    let outcome = GamificationService::apply_eco_action(
        &payload.tourist,
        &payload.action,
        &catalog.badge_catalog,
    );

    HttpResponse::Ok().json(outcome)
}
