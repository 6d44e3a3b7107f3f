use std::sync::atomic::Ordering;
use std::time::Duration;

use record_search::client::{ErrorKind, SearchClient};
use record_search::domain::types::OrderBy;
use record_search::dto::search::{SearchRequest, SearchResponse};

mod common;

fn request(limit: i32, offset: i32, query: &str, order_field: &str) -> SearchRequest {
    SearchRequest {
        limit,
        offset,
        query: query.to_string(),
        order_field: order_field.to_string(),
        order_by: OrderBy::AsIs,
    }
}

#[actix_web::test]
async fn wrong_token_is_bad_access_token() {
    let url = common::spawn_search_server(common::dataset());
    let client = SearchClient::new(url, "");

    let cases = [
        request(1, 0, "An", "Id"),
        request(10, 0, "", "About"),
        SearchRequest::default(),
    ];
    for req in cases {
        let err = client.find_users(&req).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadAccessToken);
        assert_eq!(err.to_string(), "Bad AccessToken");
    }
}

#[actix_web::test]
async fn first_match_with_more_pages() {
    let url = common::spawn_search_server(common::dataset());
    let client = SearchClient::new(url, common::ACCESS_TOKEN);

    let response = client
        .find_users(&request(1, 0, "An", "Id"))
        .await
        .unwrap();

    assert_eq!(
        response,
        SearchResponse {
            users: vec![common::annie()],
            next_page: true,
        }
    );
}

#[actix_web::test]
async fn exactly_limit_matches_has_no_next_page() {
    let url = common::spawn_search_server(common::dataset());
    let client = SearchClient::new(url, common::ACCESS_TOKEN);

    let response = client
        .find_users(&request(2, 0, "An", "Id"))
        .await
        .unwrap();

    let ids: Vec<i32> = response.users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![16, 25]);
    assert!(!response.next_page);
}

#[actix_web::test]
async fn second_page_of_sorted_results() {
    let url = common::spawn_search_server(common::dataset());
    let client = SearchClient::new(url, common::ACCESS_TOKEN);
    // The wire limit of 5 caps the scan at ids 0, 1, 16, 3, 25 before sorting.
    let mut req = request(4, 2, "", "Id");
    req.order_by = OrderBy::Asc;

    let response = client.find_users(&req).await.unwrap();

    let ids: Vec<i32> = response.users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![3, 16]);
    assert!(response.next_page);
}

#[actix_web::test]
async fn no_matches_is_empty_page() {
    let url = common::spawn_search_server(common::dataset());
    let client = SearchClient::new(url, common::ACCESS_TOKEN);

    let response = client
        .find_users(&request(10, 0, "Annet", "Id"))
        .await
        .unwrap();

    assert_eq!(response, SearchResponse::default());
}

#[actix_web::test]
async fn zero_limit_only_reports_next_page() {
    let url = common::spawn_search_server(common::dataset());
    let client = SearchClient::new(url, common::ACCESS_TOKEN);

    let response = client.find_users(&SearchRequest::default()).await.unwrap();
    assert!(response.users.is_empty());
    assert!(response.next_page);

    let response = client
        .find_users(&request(0, 0, "Annet", ""))
        .await
        .unwrap();
    assert_eq!(response, SearchResponse::default());
}

#[actix_web::test]
async fn unknown_order_field_is_reported() {
    let url = common::spawn_search_server(common::dataset());
    let client = SearchClient::new(url, common::ACCESS_TOKEN);

    let err = client
        .find_users(&request(10, 0, "Annet", "About"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::BadOrderField);
    assert_eq!(err.to_string(), "OrderField About invalid");
}

#[actix_web::test]
async fn offset_past_clamped_limit_is_rejected_by_server() {
    let url = common::spawn_search_server(common::dataset());
    let client = SearchClient::new(url, common::ACCESS_TOKEN);

    let err = client
        .find_users(&request(30, 27, "", "Id"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UnknownBadRequest);
    assert_eq!(
        err.to_string(),
        "unknown bad request error: Bad offset param value: must be less than limit param!"
    );
}

#[actix_web::test]
async fn dataset_failure_is_fatal() {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), "<root><row><id>oops</id></row></root>").unwrap();
    let source = std::sync::Arc::new(record_search::repository::xml::XmlFileSource::new(
        file.path(),
    ));
    let url = common::spawn_search_server(source);
    let client = SearchClient::new(url, common::ACCESS_TOKEN);

    let err = client
        .find_users(&request(10, 0, "", ""))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::FatalServer);
}

#[actix_web::test]
async fn local_argument_errors_skip_the_network() {
    let (url, hits) = common::spawn_broken_server();
    let client = SearchClient::new(url, common::ACCESS_TOKEN);

    let cases = [
        (request(-1, 0, "", ""), "limit must be >= 0"),
        (request(0, 3, "", ""), "offset must be less than limit"),
        (request(10, -1, "", ""), "offset must be >= 0"),
        (request(19, 20, "", "Id"), "offset must be less than limit"),
    ];
    for (req, expected) in cases {
        let err = client.find_users(&req).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.to_string(), expected);
    }

    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[actix_web::test]
async fn broken_result_json() {
    let (url, _hits) = common::spawn_broken_server();
    let client = SearchClient::new(url, common::ACCESS_TOKEN);

    let err = client
        .find_users(&request(25, 5, "", ""))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::BadResultJson);
    assert!(err.to_string().starts_with("can't unpack result json: "));
}

#[actix_web::test]
async fn broken_error_json() {
    let (url, _hits) = common::spawn_broken_server();
    let client = SearchClient::new(url, common::ACCESS_TOKEN);

    let err = client
        .find_users(&request(25, 10, "", ""))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::BadResultJson);
    assert!(err.to_string().starts_with("can't unpack error json: "));
}

#[actix_web::test]
async fn internal_server_error_is_fatal() {
    let (url, _hits) = common::spawn_broken_server();
    let client = SearchClient::new(url, common::ACCESS_TOKEN);

    let err = client
        .find_users(&request(25, 15, "", ""))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::FatalServer);
    assert_eq!(err.to_string(), "SearchServer fatal error");
}

#[actix_web::test]
async fn bad_request_envelopes_are_classified() {
    let (url, _hits) = common::spawn_broken_server();
    let client = SearchClient::new(url, common::ACCESS_TOKEN);

    let err = client
        .find_users(&request(25, 21, "", "Gender"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BadOrderField);
    assert_eq!(err.to_string(), "OrderField Gender invalid");

    let err = client
        .find_users(&request(25, 22, "", ""))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownBadRequest);
}

#[actix_web::test]
async fn unexpected_status_is_reported() {
    let (url, _hits) = common::spawn_broken_server();
    let client = SearchClient::new(url, common::ACCESS_TOKEN);

    let err = client
        .find_users(&request(25, 0, "", ""))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UnexpectedStatus);
    assert_eq!(err.to_string(), "unexpected status code 418");
}

#[actix_web::test]
async fn slow_server_times_out_once() {
    let (url, hits) = common::spawn_broken_server();
    let client =
        SearchClient::new(url, common::ACCESS_TOKEN).with_timeout(Duration::from_millis(50));

    let err = client
        .find_users(&request(25, 20, "", ""))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Timeout);
    assert_eq!(
        err.to_string(),
        "timeout for limit=26&offset=20&order_by=0&order_field=&query="
    );
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[actix_web::test]
async fn transport_failures_are_unknown() {
    for url in ["", "not a url", "ftp://127.0.0.1/", "http://127.0.0.1:1/"] {
        let client = SearchClient::new(url, common::ACCESS_TOKEN);

        let err = client
            .find_users(&request(1, 0, "", ""))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Unknown, "{url}");
        assert!(err.to_string().starts_with("unknown error "), "{url}");
    }
}
