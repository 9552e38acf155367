//! Pagination query parameters.

use carvoy_postgres::query::Pagination;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Represents pagination parameters commonly used in API queries.
///
/// `PaginationParams` allows clients to retrieve data in chunks by specifying
/// how many records to skip and how many to fetch.
#[derive(Debug, Default, Copy, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    /// The number of records to skip before starting to return results.
    pub offset: Option<u32>,
    /// The maximum number of records to return.
    pub limit: Option<u32>,
}

impl PaginationParams {
    /// Default pagination limit.
    const DEFAULT_LIMIT: u32 = 50;
    /// Default pagination offset.
    const DEFAULT_OFFSET: u32 = 0;

    /// Returns the pagination offset.
    pub fn offset(&self) -> u32 {
        self.offset.unwrap_or(Self::DEFAULT_OFFSET)
    }

    /// Returns the pagination limit.
    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(Self::DEFAULT_LIMIT)
    }
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        Self::new(params.limit() as i64, params.offset() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let params = PaginationParams::default();
        assert_eq!(params.limit(), 50);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn converts_into_clamped_pagination() {
        let params = PaginationParams {
            limit: Some(100_000),
            offset: Some(10),
        };
        let pagination: Pagination = params.into();
        assert!(pagination.limit <= carvoy_postgres::query::MAX_PAGE_LIMIT);
        assert_eq!(pagination.offset, 10);
    }
}
