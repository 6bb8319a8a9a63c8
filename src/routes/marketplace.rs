use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::data::catalog::Catalog;
use crate::models::marketplace::{MarketplaceItem, MarketplaceKind};

#[derive(serde::Deserialize)]
pub struct QueryParams {
    kind: Option<MarketplaceKind>,
}

/*
    /api/marketplace
*/
pub async fn get_marketplace(
    data: web::Data<Arc<Catalog>>,
    params: web::Query<QueryParams>,
) -> impl Responder {
    let catalog = data.into_inner();

    let items: Vec<&MarketplaceItem> = match params.kind {
        Some(kind) => catalog
            .marketplace
            .iter()
            .filter(|item| item.kind == kind)
            .collect(),
        None => catalog.marketplace.iter().collect(),
    };

    HttpResponse::Ok().json(items)
}
