use async_trait::async_trait;
use serde::Serialize;

use crate::address::application::domain::entities::Address;
use crate::auth::application::domain::entities::UserId;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

/// Terms are trimmed; blank terms are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressListFilter {
    pub search: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl AddressListFilter {
    pub fn new(search: Option<String>, city: Option<String>, country: Option<String>) -> Self {
        Self {
            search: normalize_term(search),
            city: normalize_term(city),
            country: normalize_term(country),
        }
    }
}

fn normalize_term(term: Option<String>) -> Option<String> {
    term.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl PageRequest {
    /// Out-of-range values fall back to the defaults instead of failing.
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        let page = match page {
            Some(p) if p > 0 => p as u64,
            _ => DEFAULT_PAGE,
        };
        let limit = match limit {
            Some(l) if l > 0 && l as u64 <= MAX_LIMIT => l as u64,
            _ => DEFAULT_LIMIT,
        };
        Self { page, limit }
    }

    /// Capped at `i64::MAX`, the largest OFFSET Postgres binds. A page past
    /// the end is simply empty.
    pub fn offset(&self) -> u64 {
        (self.page - 1)
            .saturating_mul(self.limit)
            .min(i64::MAX as u64)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub limit: u64,
    pub total: u64,
}

impl<T> PageResult<T> {
    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(self.limit.max(1))
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddressQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read side, owner-scoped, never returns soft-deleted rows)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait AddressQuery: Send + Sync {
    /// Newest first. `total` counts every match before paging.
    async fn list(
        &self,
        owner: UserId,
        filter: AddressListFilter,
        page: PageRequest,
    ) -> Result<PageResult<Address>, AddressQueryError>;

    /// Every record of the owner, newest first.
    async fn find_all(&self, owner: UserId) -> Result<Vec<Address>, AddressQueryError>;
}
