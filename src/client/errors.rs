use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Request shapes rejected before any network call.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("limit must be >= 0")]
    NegativeLimit,
    #[error("offset must be >= 0")]
    NegativeOffset,
    #[error("offset must be less than limit")]
    OffsetNotLessThanLimit,
}

/// Which JSON body failed to decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Payload {
    Error,
    Result,
}

impl Display for Payload {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => f.write_str("error"),
            Self::Result => f.write_str("result"),
        }
    }
}

/// Every way a search call can fail.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    InvalidArgument(#[from] ArgumentError),

    #[error("Bad AccessToken")]
    BadAccessToken,

    #[error("OrderField {0} invalid")]
    BadOrderField(String),

    #[error("unknown bad request error: {0}")]
    UnknownBadRequest(String),

    #[error("can't unpack {payload} json: {source}")]
    BadResultJson {
        payload: Payload,
        #[source]
        source: serde_json::Error,
    },

    #[error("SearchServer fatal error")]
    FatalServer,

    #[error("timeout for {query}")]
    Timeout {
        query: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unknown error {0}")]
    Unknown(#[source] reqwest::Error),

    #[error("unexpected status code {0}")]
    UnexpectedStatus(u16),
}

/// Fieldless view of [`ClientError`] for matching on the failure category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    BadAccessToken,
    BadOrderField,
    UnknownBadRequest,
    BadResultJson,
    FatalServer,
    Timeout,
    Unknown,
    UnexpectedStatus,
}

impl ClientError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::BadAccessToken => ErrorKind::BadAccessToken,
            Self::BadOrderField(_) => ErrorKind::BadOrderField,
            Self::UnknownBadRequest(_) => ErrorKind::UnknownBadRequest,
            Self::BadResultJson { .. } => ErrorKind::BadResultJson,
            Self::FatalServer => ErrorKind::FatalServer,
            Self::Timeout { .. } => ErrorKind::Timeout,
            Self::Unknown(_) => ErrorKind::Unknown,
            Self::UnexpectedStatus(_) => ErrorKind::UnexpectedStatus,
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
