use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use ecotrip_api::data::catalog::load_catalog;
use ecotrip_api::routes;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    println!("Logger initialized");

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    } else {
        println!("Release mode");
    }

    let host = std::env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);
    println!("Attempting to bind to {}:{}", host, port);

    let catalog = Arc::new(load_catalog());
    println!(
        "Catalog loaded: {} destinations, {} marketplace items, {} guides",
        catalog.destinations.len(),
        catalog.marketplace.len(),
        catalog.guides.len()
    );

    println!("Starting HTTP server...");

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .route("/health", web::get().to(routes::health::health_check))
            .app_data(web::Data::new(catalog.clone()))
            .service(
                web::scope("/api")
                    .route(
                        "/destinations",
                        web::get().to(routes::destination::get_destinations),
                    )
                    .route(
                        "/marketplace",
                        web::get().to(routes::marketplace::get_marketplace),
                    )
                    .route("/guides", web::get().to(routes::guide::get_guides))
                    .route("/safety/alerts", web::get().to(routes::safety::get_alerts))
                    .route("/dashboard/stats", web::get().to(routes::dashboard::get_stats))
                    .route("/tourist", web::get().to(routes::gamification::get_tourist))
                    .service(
                        web::scope("/itineraries")
                            .route("/generate", web::post().to(routes::itinerary::generate)),
                    )
                    .service(
                        web::scope("/eco")
                            .route("/actions", web::post().to(routes::gamification::apply_action)),
                    ),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
