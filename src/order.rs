//! Ordering expressions.
//!
//! An [`OrderExpr`] carries a raw ordering clause and its bind arguments
//! and knows how to attach itself to a handle. The clause is not validated
//! at construction; a malformed clause surfaces as a data-access error at
//! execution time.
//!
//! ```rust
//! use pagewise::OrderExpr;
//!
//! let order = OrderExpr::desc("created_at");
//! assert_eq!(order.clause(), "created_at DESC");
//!
//! let weighted = OrderExpr::new("score + ? DESC").bind(10);
//! assert_eq!(weighted.binds().len(), 1);
//! ```

use std::borrow::Cow;

use crate::bind::BindValue;
use crate::handle::QueryHandle;

/// A raw ordering clause plus positional bind arguments.
///
/// Immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderExpr {
    clause: Cow<'static, str>,
    binds: Vec<BindValue>,
}

impl OrderExpr {
    /// Create an ordering expression from a raw clause.
    pub fn new(clause: impl Into<Cow<'static, str>>) -> Self {
        Self {
            clause: clause.into(),
            binds: Vec::new(),
        }
    }

    /// Create an ordering expression from a raw clause and bind arguments.
    pub fn with_binds(
        clause: impl Into<Cow<'static, str>>,
        binds: impl IntoIterator<Item = impl Into<BindValue>>,
    ) -> Self {
        Self {
            clause: clause.into(),
            binds: binds.into_iter().map(Into::into).collect(),
        }
    }

    /// Append a bind argument (construction-time builder).
    pub fn bind(mut self, value: impl Into<BindValue>) -> Self {
        self.binds.push(value.into());
        self
    }

    /// Ascending order on a column.
    pub fn asc(column: impl AsRef<str>) -> Self {
        Self::new(format!("{} ASC", column.as_ref()))
    }

    /// Descending order on a column.
    pub fn desc(column: impl AsRef<str>) -> Self {
        Self::new(format!("{} DESC", column.as_ref()))
    }

    /// The raw clause.
    pub fn clause(&self) -> &str {
        &self.clause
    }

    /// The bind arguments.
    pub fn binds(&self) -> &[BindValue] {
        &self.binds
    }

    /// Attach this ordering to a handle.
    pub fn apply<H: QueryHandle>(&self, handle: H) -> H {
        handle.order(&self.clause, &self.binds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::future::BoxFuture;
    use crate::error::QueryResult;
    use crate::handle::PreloadCondition;

    struct FakeHandle {
        orders: Vec<(String, Vec<BindValue>)>,
    }

    impl QueryHandle for FakeHandle {
        type Record = ();

        fn order(mut self, clause: &str, binds: &[BindValue]) -> Self {
            self.orders.push((clause.to_string(), binds.to_vec()));
            self
        }

        fn preload(self, _relation: &str, _condition: PreloadCondition<Self>) -> Self {
            self
        }

        fn offset(self, _n: u64) -> Self {
            self
        }

        fn limit(self, _n: u64) -> Self {
            self
        }

        fn count(&self) -> BoxFuture<'_, QueryResult<u64>> {
            Box::pin(async { Ok(0) })
        }

        fn find(&self) -> BoxFuture<'_, QueryResult<Vec<()>>> {
            Box::pin(async { Ok(Vec::new()) })
        }

        fn first(&self) -> BoxFuture<'_, QueryResult<()>> {
            Box::pin(async { Ok(()) })
        }
    }

    #[test]
    fn test_asc_desc_clauses() {
        assert_eq!(OrderExpr::asc("name").clause(), "name ASC");
        assert_eq!(OrderExpr::desc("created_at").clause(), "created_at DESC");
    }

    #[test]
    fn test_raw_clause_kept_verbatim() {
        let order = OrderExpr::new("FIELD(status, 'open', 'closed')");
        assert_eq!(order.clause(), "FIELD(status, 'open', 'closed')");
        assert!(order.binds().is_empty());
    }

    #[test]
    fn test_binds_accumulate_in_order() {
        let order = OrderExpr::new("CASE WHEN id = ? THEN 0 ELSE ? END")
            .bind(7)
            .bind(1);
        assert_eq!(
            order.binds(),
            &[BindValue::Int(7), BindValue::Int(1)]
        );
    }

    #[test]
    fn test_with_binds() {
        let order = OrderExpr::with_binds("score + ? DESC", [5]);
        assert_eq!(order.binds(), &[BindValue::Int(5)]);
    }

    #[test]
    fn test_apply_forwards_clause_and_binds() {
        let order = OrderExpr::new("rank DESC").bind("tiebreak");
        let handle = order.apply(FakeHandle { orders: Vec::new() });

        assert_eq!(handle.orders.len(), 1);
        assert_eq!(handle.orders[0].0, "rank DESC");
        assert_eq!(handle.orders[0].1, vec![BindValue::String("tiebreak".into())]);
    }
}
