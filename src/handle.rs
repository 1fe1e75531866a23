//! The abstract data-access handle this crate composes options onto.
//!
//! A [`QueryHandle`] is the single external collaborator: a chainable
//! query builder offered by the data-access layer. Builder methods consume
//! the handle and return an augmented one; execution methods perform the
//! actual data access. Everything below the handle (SQL generation,
//! pooling, hydration) is the implementation's concern.

use std::sync::Arc;

use futures::future::BoxFuture;

use crate::bind::BindValue;
use crate::error::QueryResult;

/// A per-relation preload condition: receives the in-flight relation
/// handle and returns a possibly-modified one (e.g. with an extra
/// condition scoped to the preloaded relation).
pub type PreloadCondition<H> = Arc<dyn Fn(H) -> H + Send + Sync>;

/// Abstract chainable query handle.
///
/// Execution calls are awaited strictly sequentially by this crate; any
/// timeout, cancellation, or retry behavior belongs to the implementation
/// or its transport.
pub trait QueryHandle: Sized + Send {
    /// The hydrated row type this handle produces.
    type Record: Send;

    /// Attach a raw ordering clause with its bind arguments.
    fn order(self, clause: &str, binds: &[BindValue]) -> Self;

    /// Attach a named eager-load instruction with its condition.
    fn preload(self, relation: &str, condition: PreloadCondition<Self>) -> Self;

    /// Skip the first `n` matching rows.
    fn offset(self, n: u64) -> Self;

    /// Fetch at most `n` rows.
    fn limit(self, n: u64) -> Self;

    /// Count the rows matching the handle's current state.
    fn count(&self) -> BoxFuture<'_, QueryResult<u64>>;

    /// Fetch all rows matching the handle's current state.
    fn find(&self) -> BoxFuture<'_, QueryResult<Vec<Self::Record>>>;

    /// Fetch a single row; "not found" surfaces as an implementation
    /// error, untranslated.
    fn first(&self) -> BoxFuture<'_, QueryResult<Self::Record>>;
}
