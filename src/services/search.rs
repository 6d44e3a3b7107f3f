//! Scan, sort and paginate records for one search request.

use crate::domain::types::{OrderBy, OrderField};
use crate::domain::user::User;
use crate::forms::search::SearchParams;
use crate::pagination::{Page, paginate};
use crate::repository::RecordSource;
use crate::repository::errors::RepositoryResult;
use crate::services::{ServiceError, ServiceResult};

/// Records collected by [`scan_matches`].
#[derive(Debug)]
pub struct ScanOutcome {
    /// Matches in source order.
    pub matched: Vec<User>,
    /// `true` when the scan stopped because `limit` matches were found.
    pub capped: bool,
}

/// Reads the source in order, keeping records that match `query`.
///
/// Stops as soon as `limit` records matched. Any read or decode fault aborts
/// the scan.
pub fn scan_matches<R>(repo: &R, query: &str, limit: usize) -> RepositoryResult<ScanOutcome>
where
    R: RecordSource + ?Sized,
{
    let mut cursor = repo.open()?;
    let mut matched = Vec::new();

    while matched.len() < limit {
        match cursor.next_record()? {
            Some(user) if user.matches(query) => matched.push(user),
            Some(_) => {}
            None => {
                return Ok(ScanOutcome {
                    matched,
                    capped: false,
                });
            }
        }
    }

    Ok(ScanOutcome {
        matched,
        capped: true,
    })
}

/// Orders `users` by `order_field` in the `order_by` direction.
///
/// The field is resolved even when there is nothing to sort, so an unknown
/// field always fails. An empty field or [`OrderBy::AsIs`] keeps scan order.
/// Ties keep scan order in both directions.
pub fn sort_users(
    mut users: Vec<User>,
    order_field: &str,
    order_by: OrderBy,
) -> ServiceResult<Vec<User>> {
    let field = OrderField::parse_optional(order_field)
        .map_err(|_| ServiceError::BadOrderField(order_field.to_string()))?;

    let Some(field) = field else {
        return Ok(users);
    };

    log::debug!("Sorting {} record(s) by {field} {order_by:?}", users.len());
    let cmp = field.comparator();
    match order_by {
        OrderBy::AsIs => {}
        OrderBy::Asc => users.sort_by(cmp),
        OrderBy::Desc => users.sort_by(|a, b| cmp(b, a)),
    }

    Ok(users)
}

/// Runs a full search: scan, sort, then slice from `offset`.
pub fn search_users<R>(repo: &R, params: &SearchParams) -> ServiceResult<Page<User>>
where
    R: RecordSource + ?Sized,
{
    let scan = scan_matches(repo, &params.query, params.limit)?;
    log::debug!(
        "Scan for {:?} matched {} record(s), capped: {}",
        params.query,
        scan.matched.len(),
        scan.capped
    );

    let sorted = sort_users(scan.matched, &params.order_field, params.order_by)?;

    Ok(paginate(sorted, params.offset, scan.capped))
}
