use serde::{Deserialize, Serialize};

use crate::domain::types::OrderBy;
use crate::domain::user::User;

/// Error string the server sends when the sort field is not recognised.
pub const ERROR_BAD_ORDER_FIELD: &str = "ErrorBadOrderField";

/// Request header carrying the static access token.
pub const ACCESS_TOKEN_HEADER: &str = "AccessToken";

/// Response header with the server-side `has_more` flag of a page.
pub const HAS_MORE_HEADER: &str = "X-Has-More";

/// Caller-side search intent, encoded by the client into query parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub limit: i32,
    pub offset: i32,
    pub query: String,
    /// `Id`, `Age`, `Name` or empty. Other values are rejected by the server.
    pub order_field: String,
    pub order_by: OrderBy,
}

/// Result of a successful search call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub users: Vec<User>,
    pub next_page: bool,
}

/// JSON body of 400 and 401 responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchErrorResponse {
    pub error: String,
}

impl SearchErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Raw query parameters as received by the server.
///
/// Every value stays a string so that malformed numbers are reported by
/// [`crate::forms::search::SearchParams`] rather than by the extractor.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SearchQueryParams {
    #[serde(default)]
    pub limit: String,
    #[serde(default)]
    pub offset: String,
    #[serde(default)]
    pub order_by: String,
    #[serde(default)]
    pub order_field: String,
    #[serde(default)]
    pub query: String,
}

/// Collects decoded `(key, value)` pairs. The first value of a repeated key
/// wins and unknown keys are ignored.
impl FromIterator<(String, String)> for SearchQueryParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut seen = [false; 5];
        let mut params = Self::default();
        for (key, value) in pairs {
            let (slot, field) = match key.as_str() {
                "limit" => (0, &mut params.limit),
                "offset" => (1, &mut params.offset),
                "order_by" => (2, &mut params.order_by),
                "order_field" => (3, &mut params.order_field),
                "query" => (4, &mut params.query),
                _ => continue,
            };
            if !seen[slot] {
                seen[slot] = true;
                *field = value;
            }
        }
        params
    }
}

/// Typed query parameters as sent by the client, in wire order.
#[derive(Debug, Serialize)]
pub struct SearchWireParams<'a> {
    pub limit: i32,
    pub offset: i32,
    pub order_by: i64,
    pub order_field: &'a str,
    pub query: &'a str,
}
