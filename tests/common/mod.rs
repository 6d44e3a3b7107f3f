#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use record_search::domain::user::User;
use record_search::dto::search::SearchQueryParams;
use record_search::models::config::ServerConfig;
use record_search::repository::RecordSource;
use record_search::repository::xml::XmlFileSource;
use serde_json::json;

pub const ACCESS_TOKEN: &str = "123";

pub const DATASET_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/dataset.xml");

pub fn server_config() -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".to_string(),
        port: 0,
        dataset_path: DATASET_PATH.to_string(),
        access_token: ACCESS_TOKEN.to_string(),
    }
}

pub fn dataset() -> Arc<dyn RecordSource> {
    Arc::new(XmlFileSource::new(DATASET_PATH))
}

pub fn annie() -> User {
    User {
        id: 16,
        name: "Annie Osborn".to_string(),
        age: 35,
        about: "Consequat fugiat veniam commodo nisi nostrud culpa pariatur. \
                Aliquip velit adipisicing dolor et nostrud. \
                Eu nostrud officia velit eiusmod ullamco duis eiusmod ad non do quis.\n"
            .to_string(),
        gender: "female".to_string(),
    }
}

/// Starts the real search endpoint on an ephemeral port and returns its URL.
pub fn spawn_search_server(source: Arc<dyn RecordSource>) -> String {
    let config = server_config();
    let server = HttpServer::new(move || {
        let source = Arc::clone(&source);
        let config = config.clone();
        App::new().configure(move |cfg| record_search::configure(cfg, source, config))
    })
    .workers(1)
    .disable_signals()
    .bind(("127.0.0.1", 0))
    .expect("bind search server");

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{addr}/")
}

/// Misbehaving server: the `offset` parameter selects the failure.
async fn broken_server(req: HttpRequest, hits: web::Data<AtomicUsize>) -> HttpResponse {
    hits.fetch_add(1, Ordering::SeqCst);

    let offset = web::Query::<SearchQueryParams>::from_query(req.query_string())
        .map(|q| q.into_inner().offset)
        .unwrap_or_default();

    match offset.as_str() {
        "5" => HttpResponse::Ok().body(r#"{"status": 400"#),
        "10" => HttpResponse::BadRequest().body(r#"{"status": 400"#),
        "15" => HttpResponse::InternalServerError().finish(),
        "20" => {
            actix_web::rt::time::sleep(Duration::from_millis(500)).await;
            HttpResponse::Ok().body("[]")
        }
        "21" => HttpResponse::BadRequest().json(json!({"error": "ErrorBadOrderField"})),
        "22" => HttpResponse::BadRequest()
            .json(json!({"error": "Bad offset param value: must be less than limit param!"})),
        _ => HttpResponse::ImATeapot().finish(),
    }
}

/// Starts [`broken_server`] and returns its URL with a request counter.
pub fn spawn_broken_server() -> (String, web::Data<AtomicUsize>) {
    let hits = web::Data::new(AtomicUsize::new(0));
    let app_hits = hits.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_hits.clone())
            .default_service(web::to(broken_server))
    })
    .workers(1)
    .disable_signals()
    .bind(("127.0.0.1", 0))
    .expect("bind broken server");

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    (format!("http://{addr}/"), hits)
}
