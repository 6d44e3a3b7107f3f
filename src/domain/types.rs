//! Strongly-typed sort selectors used by search requests.
//!
//! The wire carries the sort field as a free string and the direction as an
//! integer. These types are the closed sets both are resolved into.
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::user::User;

/// Errors produced when a raw value does not name a known sort selector.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Sort field outside of `Id`, `Age`, `Name`.
    #[error("unknown order field: {0}")]
    UnknownOrderField(String),
    /// Sort direction outside of `-1`, `0`, `1`.
    #[error("unknown order direction: {0}")]
    UnknownOrderBy(i64),
}

/// Record field a search result may be sorted by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrderField {
    Id,
    Age,
    Name,
}

type Comparator = fn(&User, &User) -> Ordering;

impl OrderField {
    /// Resolves a wire value. The empty string means "no sort field".
    pub fn parse_optional(value: &str) -> Result<Option<Self>, TypeConstraintError> {
        if value.is_empty() {
            Ok(None)
        } else {
            value.parse().map(Some)
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "Id",
            Self::Age => "Age",
            Self::Name => "Name",
        }
    }

    /// Ascending comparator for this field.
    pub fn comparator(self) -> Comparator {
        match self {
            Self::Id => |a, b| a.id.cmp(&b.id),
            Self::Age => |a, b| a.age.cmp(&b.age),
            Self::Name => |a, b| a.name.cmp(&b.name),
        }
    }
}

impl FromStr for OrderField {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Id" => Ok(Self::Id),
            "Age" => Ok(Self::Age),
            "Name" => Ok(Self::Name),
            other => Err(TypeConstraintError::UnknownOrderField(other.to_string())),
        }
    }
}

impl Display for OrderField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction. `AsIs` keeps scan order.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "i64", into = "i64")]
pub enum OrderBy {
    Desc,
    #[default]
    AsIs,
    Asc,
}

impl OrderBy {
    /// Integer carried in the `order_by` query parameter.
    pub const fn as_i64(self) -> i64 {
        match self {
            Self::Desc => -1,
            Self::AsIs => 0,
            Self::Asc => 1,
        }
    }
}

impl TryFrom<i64> for OrderBy {
    type Error = TypeConstraintError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::Desc),
            0 => Ok(Self::AsIs),
            1 => Ok(Self::Asc),
            other => Err(TypeConstraintError::UnknownOrderBy(other)),
        }
    }
}

impl From<OrderBy> for i64 {
    fn from(value: OrderBy) -> Self {
        value.as_i64()
    }
}
