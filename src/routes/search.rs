use actix_web::{HttpRequest, HttpResponse, get, web};

use crate::dto::search::{
    ACCESS_TOKEN_HEADER, ERROR_BAD_ORDER_FIELD, HAS_MORE_HEADER, SearchErrorResponse,
    SearchQueryParams,
};
use crate::forms::search::SearchParams;
use crate::models::config::ServerConfig;
use crate::repository::RecordSource;
use crate::services::ServiceError;
use crate::services::search as search_service;

/// Search endpoint: `GET /?limit=&offset=&order_by=&order_field=&query=`.
#[get("/")]
pub async fn search_users(
    req: HttpRequest,
    source: web::Data<dyn RecordSource>,
    server_config: web::Data<ServerConfig>,
) -> HttpResponse {
    let token = req
        .headers()
        .get(ACCESS_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok());
    if token != Some(server_config.access_token.as_str()) {
        log::warn!("Rejected search with missing or wrong access token");
        return HttpResponse::Unauthorized().json(SearchErrorResponse::new("Unauthorized"));
    }

    let raw = match web::Query::<Vec<(String, String)>>::from_query(req.query_string()) {
        Ok(pairs) => pairs.into_inner().into_iter().collect::<SearchQueryParams>(),
        Err(e) => {
            log::warn!("Failed to decode query string: {e}");
            return HttpResponse::BadRequest().json(SearchErrorResponse::new(format!(
                "Bad URI request {}",
                req.uri()
            )));
        }
    };

    let params = match SearchParams::try_from(raw) {
        Ok(params) => params,
        Err(e) => {
            log::warn!("Rejected search params: {e}");
            return HttpResponse::BadRequest().json(SearchErrorResponse::new(e.to_string()));
        }
    };

    let source = source.into_inner();
    let result = web::block(move || search_service::search_users(source.as_ref(), &params)).await;

    match result {
        Ok(Ok(page)) => HttpResponse::Ok()
            .insert_header((HAS_MORE_HEADER, page.has_more.to_string()))
            .json(page.items),
        Ok(Err(ServiceError::BadOrderField(field))) => {
            log::warn!("Rejected search with order field {field:?}");
            HttpResponse::BadRequest().json(SearchErrorResponse::new(ERROR_BAD_ORDER_FIELD))
        }
        Ok(Err(e)) => {
            log::error!("Failed to search records: {e}");
            HttpResponse::InternalServerError().finish()
        }
        Err(e) => {
            log::error!("Search task failed: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
