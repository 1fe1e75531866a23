//! Offset pagination: a validated count plus a bounded fetch.
//!
//! A [`Paginator`] holds an immutable page size (`per`) and a 1-indexed
//! page number. Executing it counts the rows matching the handle's current
//! state, fetches the requested page, and computes [`PageInfo`] metadata.
//!
//! ```rust
//! use pagewise::Paginator;
//!
//! let paginator = Paginator::new(25, 3);
//! assert_eq!(paginator.offset(), 50);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{QueryError, QueryResult};
use crate::handle::QueryHandle;

/// Immutable pagination configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    per: u64,
    page: u64,
}

/// Metadata for one executed page.
///
/// Computed fresh per paginated call; never partially populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Page size the query was executed with.
    pub per: u64,
    /// The 1-indexed page number that was fetched.
    pub page: u64,
    /// Total number of pages; 0 when no rows match.
    pub total_pages: u64,
    /// Total number of matching rows across all pages.
    pub total_count: u64,
    /// Whether the requested page number is strictly below the total page
    /// count. Note the direction: this is a page-number comparison, so it
    /// is `false` on the exact last page and `false` when `page`
    /// overshoots `total_pages`.
    pub has_more: bool,
}

impl Paginator {
    /// Create a paginator for the given page size and 1-indexed page.
    ///
    /// Values are not validated here; a zero `per` or `page` fails at
    /// execution time before any data access.
    pub fn new(per: u64, page: u64) -> Self {
        Self { per, page }
    }

    /// The page size.
    pub fn per(&self) -> u64 {
        self.per
    }

    /// The 1-indexed page number.
    pub fn page(&self) -> u64 {
        self.page
    }

    /// Rows to skip before the requested page: `per * (page - 1)`.
    pub fn offset(&self) -> u64 {
        self.per * self.page.saturating_sub(1)
    }

    /// Execute a count and a bounded fetch against the handle.
    ///
    /// The count runs against the handle's current state (already
    /// order/preload-augmented by the caller), then the fetch runs with
    /// this paginator's offset and limit. The two calls are sequential; a
    /// count failure aborts before the fetch is attempted. Handle errors
    /// pass through unchanged.
    pub async fn paginate<H: QueryHandle>(
        &self,
        handle: H,
    ) -> QueryResult<(Vec<H::Record>, PageInfo)> {
        if self.per == 0 || self.page == 0 {
            return Err(QueryError::invalid_pagination(self.per, self.page));
        }

        let total_count = handle.count().await?;

        tracing::debug!(
            target: "pagewise",
            per = self.per,
            page = self.page,
            total_count = total_count,
            "Counted rows, fetching page"
        );

        let records = handle.offset(self.offset()).limit(self.per).find().await?;

        let total_pages = if total_count == 0 {
            0
        } else {
            (total_count - 1) / self.per + 1
        };

        Ok((
            records,
            PageInfo {
                per: self.per,
                page: self.page,
                total_pages,
                total_count,
                has_more: total_pages > self.page,
            },
        ))
    }
}
