mod errors;
mod params;
mod registration;
mod services;
mod store;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use clap::Parser;

use crate::params::Args;
use crate::registration::register_with_coordinator;
use crate::services::storage_service::{self, AppState, NodeConfig};
use crate::store::KeyedBlobStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt::init();

    let config = NodeConfig::from_args(&args);
    tracing::info!("storage node starting on {}", config.http_addr);
    tracing::info!("chain type: {}", config.chain_type);
    tracing::info!("expose URL: {}", config.expose_url);

    let state = web::Data::new(AppState {
        store: KeyedBlobStore::new(),
        config: config.clone(),
    });

    // Runs once, off the request-serving path; readiness does not wait on it.
    actix_web::rt::spawn(register_with_coordinator(config.clone()));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(storage_service::health)
            .service(
                web::scope("/api")
                    .service(storage_service::info)
                    .service(storage_service::store_blob)
                    .service(storage_service::retrieve_blob)
                    .service(storage_service::upload_document)
                    .service(storage_service::download_document),
            )
    })
    .bind(config.http_addr)?
    .run()
    .await
}
