//! Cost model and alignment configuration.

use crate::{equal::SymbolEq, error::AlignError, mode::AlignMode, task::AlignTask};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Costs of the four edit operations.
///
/// Weights are signed and the recurrence is max-seeking: non-positive
/// weights give the distance framing (classic edit distance via negated
/// costs), a positive `exact` weight gives the similarity framing. Stored
/// as `i64` so that cells cannot overflow for sequences in the thousands of
/// symbols, whatever the weight magnitudes.
pub struct OpCosts {
    /// Cost of deleting a symbol from the first sequence.
    pub delete: i64,
    /// Cost of inserting a symbol from the second sequence.
    pub insert: i64,
    /// Cost of substituting a mismatched pair.
    pub substitute: i64,
    /// Cost of matching an exact pair.
    pub exact: i64,
}

impl OpCosts {
    /// New cost model from the four weights.
    pub fn new(delete: i64, insert: i64, substitute: i64, exact: i64) -> Self {
        Self {
            delete,
            insert,
            substitute,
            exact,
        }
    }

    /// Incremental construction, for callers assembling weights from
    /// elsewhere. [`OpCostsBuilder::build`] reports the first missing
    /// weight.
    pub fn builder() -> OpCostsBuilder {
        OpCostsBuilder::default()
    }

    /// Pairwise score `t(a, b)`: `exact` if the equality capability holds
    /// for the pair, `substitute` otherwise.
    pub fn pair_score<T, E: SymbolEq<T>>(&self, eq: &E, a: &T, b: &T) -> i64 {
        if eq.are_equal(a, b) {
            self.exact
        } else {
            self.substitute
        }
    }
}

impl Default for OpCosts {
    /// Unit edit distance: `{delete: -1, insert: -1, substitute: -1, exact: 0}`.
    fn default() -> Self {
        Self::new(-1, -1, -1, 0)
    }
}

#[derive(Debug, Clone, Default)]
/// Builder for [`OpCosts`].
///
/// ```
/// use rs_seqalign::config::OpCosts;
///
/// let costs = OpCosts::builder()
///     .delete(-1)
///     .insert(-1)
///     .substitute(-2)
///     .exact(0)
///     .build()
///     .unwrap();
/// assert_eq!(costs.substitute, -2);
/// ```
///
/// Leaving a weight unset is an error:
/// ```
/// use rs_seqalign::config::OpCosts;
///
/// assert!(OpCosts::builder().delete(-1).build().is_err());
/// ```
pub struct OpCostsBuilder {
    delete: Option<i64>,
    insert: Option<i64>,
    substitute: Option<i64>,
    exact: Option<i64>,
}

impl OpCostsBuilder {
    /// Set the deletion weight.
    pub fn delete(mut self, weight: i64) -> Self {
        self.delete = Some(weight);
        self
    }

    /// Set the insertion weight.
    pub fn insert(mut self, weight: i64) -> Self {
        self.insert = Some(weight);
        self
    }

    /// Set the substitution weight.
    pub fn substitute(mut self, weight: i64) -> Self {
        self.substitute = Some(weight);
        self
    }

    /// Set the exact-match weight.
    pub fn exact(mut self, weight: i64) -> Self {
        self.exact = Some(weight);
        self
    }

    /// Finish the cost model.
    ///
    /// # Errors
    /// [`AlignError::MissingCost`] naming the first unset weight.
    pub fn build(self) -> Result<OpCosts, AlignError> {
        Ok(OpCosts {
            delete: self.delete.ok_or(AlignError::MissingCost("delete"))?,
            insert: self.insert.ok_or(AlignError::MissingCost("insert"))?,
            substitute: self.substitute.ok_or(AlignError::MissingCost("substitute"))?,
            exact: self.exact.ok_or(AlignError::MissingCost("exact"))?,
        })
    }
}

#[derive(Debug, Clone, Default)]
/// Alignment configuration.
pub struct AlignConfig {
    /// Edit-operation weights, [`OpCosts`].
    pub costs: OpCosts,
    /// Alignment method, [`AlignMode`].
    pub mode: AlignMode,
    /// Alignment task, [`AlignTask`].
    pub task: AlignTask,
}
