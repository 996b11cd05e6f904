pub mod error;
pub mod handlers;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use tracing::info;

use crate::config::ServerConfig;
use crate::scoring::{Ranker, WeightedScorer};
use crate::store::WarehouseStore;
pub use error::ApiError;

/// Shared, read-only state handed to every worker.
#[derive(Clone)]
pub struct ApiState {
    pub store: Arc<WarehouseStore>,
    pub ranker: Arc<Ranker<WeightedScorer>>,
    pub config: ServerConfig,
}

impl ApiState {
    pub fn new(store: WarehouseStore, config: ServerConfig) -> Self {
        Self {
            store: Arc::new(store),
            ranker: Arc::new(Ranker::default()),
            config,
        }
    }
}

/// Register state and `/api` routes on an app.
pub fn configure(state: ApiState) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(state)).service(
            web::scope("/api")
                .route("/ping", web::get().to(handlers::ping))
                .route("/health", web::get().to(handlers::health))
                .route("/stats", web::get().to(handlers::stats))
                .route("/recommend", web::post().to(handlers::recommend))
                .route("/recommend", web::get().to(handlers::recommend_usage)),
        );
    }
}

pub async fn serve(state: ApiState) -> std::io::Result<()> {
    let bind = (state.config.host.clone(), state.config.port);
    info!("Starting HTTP server on {}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new().wrap(cors).configure(configure(state.clone()))
    })
    .bind(bind)?
    .run()
    .await
}
