#[cfg(feature = "server")]
use std::sync::Arc;

#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};

#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::{RecordSource, xml::XmlFileSource};
#[cfg(feature = "server")]
use crate::routes::search::search_users;

#[cfg(feature = "client")]
pub mod client;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod services;

/// Registers the search endpoint and its shared state on an app.
#[cfg(feature = "server")]
pub fn configure(
    cfg: &mut web::ServiceConfig,
    source: Arc<dyn RecordSource>,
    server_config: ServerConfig,
) {
    cfg.app_data(web::Data::from(source))
        .app_data(web::Data::new(server_config))
        .service(search_users);
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let dataset = XmlFileSource::new(&server_config.dataset_path);

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Serving {} on {}:{}",
        dataset.path().display(),
        bind_address.0,
        bind_address.1
    );

    let source: Arc<dyn RecordSource> = Arc::new(dataset);
    HttpServer::new(move || {
        let source = Arc::clone(&source);
        let server_config = server_config.clone();
        App::new()
            .wrap(middleware::Logger::default())
            .configure(move |cfg| configure(cfg, source, server_config))
    })
    .bind(bind_address)?
    .run()
    .await
}
