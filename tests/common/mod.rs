use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App};
use std::sync::Arc;

use ecotrip_api::data::catalog::{load_catalog, Catalog};
use ecotrip_api::routes;

pub struct TestApp {
    pub catalog: Arc<Catalog>,
}

impl TestApp {
    pub fn new() -> Self {
        let catalog = Arc::new(load_catalog());

        Self { catalog }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.catalog.clone()))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .route("/", web::get().to(|| async { "EcoTrip API is running" }))
            .route("/health", web::get().to(routes::health::health_check))
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
    }
}
