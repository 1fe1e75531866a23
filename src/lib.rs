//! # pagewise
//!
//! Composable pagination, eager-loading and ordering options for abstract
//! query handles.
//!
//! This crate is a thin helper layer on top of a relational data-access
//! layer: it composes three independent, optional components into one
//! request and executes a `first` or `find` query. SQL generation,
//! connection pooling, and result hydration stay with the handle
//! implementation.
//!
//! - [`OrderExpr`]: a raw ordering clause plus bind arguments
//! - [`PreloadSet`]: relation-name to eager-load condition mapping
//! - [`Paginator`]: page size and page number, count + bounded fetch
//! - [`Query`]: composes the three and exposes `first` / `find`
//!
//! ## Ordering
//!
//! ```rust
//! use pagewise::OrderExpr;
//!
//! let order = OrderExpr::desc("created_at");
//! assert_eq!(order.clause(), "created_at DESC");
//!
//! // Raw clauses carry bind arguments untouched
//! let order = OrderExpr::new("CASE WHEN id = ? THEN 0 ELSE 1 END").bind(42);
//! assert_eq!(order.binds().len(), 1);
//! ```
//!
//! ## Pagination
//!
//! ```rust
//! use pagewise::Paginator;
//!
//! let paginator = Paginator::new(25, 3);
//! assert_eq!(paginator.per(), 25);
//! assert_eq!(paginator.offset(), 50);
//! ```
//!
//! ## Composing a query
//!
//! ```rust,ignore
//! use pagewise::{OrderExpr, PreloadSet, Query};
//!
//! let query = Query::new()
//!     .order(OrderExpr::desc("created_at"))
//!     .preloads(
//!         PreloadSet::new()
//!             .with("comments", Arc::new(|h: Db| h.filter("visible = true")))
//!             .with_unfiltered("author"),
//!     )
//!     .paginate(25, 1);
//!
//! let result = query.find(db).await?;
//! let page = result.page.expect("paginated find carries metadata");
//! println!("{} of {} rows", result.len(), page.total_count);
//! ```
//!
//! Options are applied in a fixed order: ordering, then preloads, then
//! pagination or a plain unbounded find. Handle errors pass through
//! unchanged; the only error synthesized here is the zero-`per`/`page`
//! validation failure, raised before any data access.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod bind;
pub mod error;
pub mod handle;
pub mod logging;
pub mod order;
pub mod paginate;
pub mod preload;
pub mod query;

pub use bind::BindValue;
pub use error::{ErrorCode, QueryError, QueryResult};
pub use handle::{PreloadCondition, QueryHandle};
pub use order::OrderExpr;
pub use paginate::{PageInfo, Paginator};
pub use preload::PreloadSet;
pub use query::{FindResult, Query};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bind::BindValue;
    pub use crate::error::{ErrorCode, QueryError, QueryResult};
    pub use crate::handle::{PreloadCondition, QueryHandle};
    pub use crate::order::OrderExpr;
    pub use crate::paginate::{PageInfo, Paginator};
    pub use crate::preload::PreloadSet;
    pub use crate::query::{FindResult, Query};
}
