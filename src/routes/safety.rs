use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use std::sync::Arc;

use crate::data::catalog::Catalog;

/*
    /api/safety/alerts
*/
pub async fn get_alerts(data: web::Data<Arc<Catalog>>) -> impl Responder {
    let catalog = data.into_inner();

    HttpResponse::Ok().json(json!({
        "weather": catalog.weather_alerts,
        "crowd": catalog.crowd_alerts,
    }))
}
