use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::data::catalog::Catalog;

/*
    /api/dashboard/stats
*/
pub async fn get_stats(data: web::Data<Arc<Catalog>>) -> impl Responder {
    let catalog = data.into_inner();

    HttpResponse::Ok().json(&catalog.visitor_stats)
}
