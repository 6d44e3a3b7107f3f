use thiserror::Error;

use crate::domain::types::OrderBy;
use crate::dto::search::SearchQueryParams;

/// Rejections produced while validating raw search parameters.
///
/// The display strings are the exact `error` values sent back to clients.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Bad limit param value: must be an integer!")]
    LimitNotInteger,
    #[error("Bad offset param value: must be an integer!")]
    OffsetNotInteger,
    #[error("Bad offset param value: must be less than limit param!")]
    OffsetNotLessThanLimit,
    #[error("Bad offset param value: must not be negative!")]
    NegativeOffset,
    #[error("Bad order_by param value: must be an integer!")]
    OrderByNotInteger,
}

/// Validated search parameters handed to the search engine.
///
/// `order_field` is kept verbatim: its legality is only checked once the
/// engine attempts to sort.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchParams {
    pub limit: usize,
    pub offset: usize,
    pub order_by: OrderBy,
    pub order_field: String,
    pub query: String,
}

impl TryFrom<SearchQueryParams> for SearchParams {
    type Error = FormError;

    /// Checks run in a fixed order and the first failure wins.
    fn try_from(raw: SearchQueryParams) -> Result<Self, Self::Error> {
        let limit: i64 = raw.limit.parse().map_err(|_| FormError::LimitNotInteger)?;
        let offset: i64 = raw.offset.parse().map_err(|_| FormError::OffsetNotInteger)?;

        if offset >= limit {
            return Err(FormError::OffsetNotLessThanLimit);
        }
        if offset < 0 {
            return Err(FormError::NegativeOffset);
        }

        let order_by = raw
            .order_by
            .parse::<i64>()
            .ok()
            .and_then(|value| OrderBy::try_from(value).ok())
            .ok_or(FormError::OrderByNotInteger)?;

        // 0 <= offset < limit, so both fit once the sign is settled.
        let limit = usize::try_from(limit).map_err(|_| FormError::LimitNotInteger)?;
        let offset = usize::try_from(offset).map_err(|_| FormError::OffsetNotInteger)?;

        Ok(Self {
            limit,
            offset,
            order_by,
            order_field: raw.order_field,
            query: raw.query,
        })
    }
}
