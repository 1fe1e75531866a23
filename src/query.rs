//! Query orchestration.
//!
//! A [`Query`] aggregates the three optional components (ordering,
//! preloads, pagination) and executes a `first` or `find` against a
//! handle. Options are applied in a fixed order: ordering, then preloads,
//! then pagination (or a plain unbounded find). `None` means the feature
//! is absent; `Query` branches on presence, not emptiness.
//!
//! ```rust,ignore
//! let query = Query::new()
//!     .order(OrderExpr::desc("created_at"))
//!     .preloads(PreloadSet::new().with_unfiltered("comments"))
//!     .paginate(25, 1);
//!
//! let result = query.find(db).await?;
//! let info = result.page.expect("paginated find always carries metadata");
//! ```

use std::fmt;

use crate::error::QueryResult;
use crate::handle::QueryHandle;
use crate::order::OrderExpr;
use crate::paginate::{PageInfo, Paginator};
use crate::preload::PreloadSet;

/// Composable query options executed against a [`QueryHandle`].
///
/// A `Query` is immutable during execution and may be reused across
/// requests; each call owns its handle exclusively.
pub struct Query<H: QueryHandle> {
    order: Option<OrderExpr>,
    preloads: Option<PreloadSet<H>>,
    paginator: Option<Paginator>,
}

/// Records returned by [`Query::find`], plus page metadata when the query
/// was paginated.
#[derive(Debug, Clone)]
pub struct FindResult<T> {
    /// The fetched records.
    pub records: Vec<T>,
    /// Page metadata; `Some` only for paginated finds.
    pub page: Option<PageInfo>,
}

impl<H: QueryHandle> Query<H> {
    /// Create a query with no options set.
    pub fn new() -> Self {
        Self {
            order: None,
            preloads: None,
            paginator: None,
        }
    }

    /// Set the ordering expression.
    pub fn order(mut self, order: OrderExpr) -> Self {
        self.order = Some(order);
        self
    }

    /// Set the preload set.
    pub fn preloads(mut self, preloads: PreloadSet<H>) -> Self {
        self.preloads = Some(preloads);
        self
    }

    /// Set the paginator.
    pub fn paginator(mut self, paginator: Paginator) -> Self {
        self.paginator = Some(paginator);
        self
    }

    /// Set a paginator from page size and 1-indexed page number.
    pub fn paginate(self, per: u64, page: u64) -> Self {
        self.paginator(Paginator::new(per, page))
    }

    /// Apply ordering then preloads, whichever are present.
    fn assemble(&self, mut handle: H) -> H {
        if let Some(order) = &self.order {
            handle = order.apply(handle);
        }
        if let Some(preloads) = &self.preloads {
            handle = preloads.apply(handle);
        }
        handle
    }

    /// Fetch a single record with the composed options applied.
    ///
    /// Handle errors, "not found" included, propagate unchanged.
    pub async fn first(&self, handle: H) -> QueryResult<H::Record> {
        let handle = self.assemble(handle);

        tracing::trace!(target: "pagewise", "Executing first");
        handle.first().await
    }

    /// Fetch records with the composed options applied.
    ///
    /// With a paginator present the fetch is bounded and the result
    /// carries [`PageInfo`]; otherwise the fetch is unbounded and `page`
    /// is `None`. Handle errors propagate unchanged.
    pub async fn find(&self, handle: H) -> QueryResult<FindResult<H::Record>> {
        let handle = self.assemble(handle);

        match &self.paginator {
            Some(paginator) => {
                let (records, page) = paginator.paginate(handle).await?;
                Ok(FindResult {
                    records,
                    page: Some(page),
                })
            }
            None => {
                tracing::trace!(target: "pagewise", "Executing unbounded find");
                let records = handle.find().await?;
                Ok(FindResult {
                    records,
                    page: None,
                })
            }
        }
    }
}

impl<H: QueryHandle> Default for Query<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: QueryHandle> Clone for Query<H> {
    fn clone(&self) -> Self {
        Self {
            order: self.order.clone(),
            preloads: self.preloads.clone(),
            paginator: self.paginator,
        }
    }
}

impl<H: QueryHandle> fmt::Debug for Query<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("order", &self.order)
            .field("preloads", &self.preloads)
            .field("paginator", &self.paginator)
            .finish()
    }
}

impl<T> FindResult<T> {
    /// Number of fetched records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if no records were fetched.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T> IntoIterator for FindResult<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
