//! Mapping of a received HTTP response to a search result or error.
//!
//! Kept free of any transport so each branch can be exercised directly.

use reqwest::StatusCode;

use crate::client::errors::{ArgumentError, ClientError, ClientResult, Payload};
use crate::domain::user::User;
use crate::dto::search::{
    ERROR_BAD_ORDER_FIELD, SearchErrorResponse, SearchRequest, SearchResponse,
};

/// Largest page the client asks for.
pub const MAX_LIMIT: i32 = 25;

/// Validated page bounds of one request, with the limit clamped to [`MAX_LIMIT`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    pub limit: i32,
    pub offset: i32,
}

impl PageWindow {
    /// Most records a page may hold.
    pub fn page_size(self) -> usize {
        usize::try_from(self.limit - self.offset).unwrap_or(0)
    }

    /// Limit sent on the wire: one extra record probes for a next page.
    pub const fn wire_limit(self) -> i32 {
        self.limit + 1
    }
}

impl TryFrom<&SearchRequest> for PageWindow {
    type Error = ArgumentError;

    fn try_from(request: &SearchRequest) -> Result<Self, Self::Error> {
        if request.limit < 0 {
            return Err(ArgumentError::NegativeLimit);
        }
        if request.offset < 0 {
            return Err(ArgumentError::NegativeOffset);
        }
        // A zero limit asks for an empty page that only reports `next_page`.
        if request.offset > 0 && request.offset >= request.limit {
            return Err(ArgumentError::OffsetNotLessThanLimit);
        }

        Ok(Self {
            limit: request.limit.min(MAX_LIMIT),
            offset: request.offset,
        })
    }
}

/// Classifies a response by status, then by body shape.
pub fn classify_response(
    status: StatusCode,
    body: &[u8],
    order_field: &str,
    window: PageWindow,
) -> ClientResult<SearchResponse> {
    match status {
        StatusCode::UNAUTHORIZED => Err(ClientError::BadAccessToken),
        StatusCode::BAD_REQUEST => {
            let envelope: SearchErrorResponse =
                serde_json::from_slice(body).map_err(|source| ClientError::BadResultJson {
                    payload: Payload::Error,
                    source,
                })?;
            if envelope.error == ERROR_BAD_ORDER_FIELD {
                Err(ClientError::BadOrderField(order_field.to_string()))
            } else {
                Err(ClientError::UnknownBadRequest(envelope.error))
            }
        }
        StatusCode::INTERNAL_SERVER_ERROR => Err(ClientError::FatalServer),
        StatusCode::OK => {
            let mut users: Vec<User> =
                serde_json::from_slice(body).map_err(|source| ClientError::BadResultJson {
                    payload: Payload::Result,
                    source,
                })?;

            let page_size = window.page_size();
            let next_page = users.len() > page_size;
            users.truncate(page_size);

            Ok(SearchResponse { users, next_page })
        }
        other => Err(ClientError::UnexpectedStatus(other.as_u16())),
    }
}
