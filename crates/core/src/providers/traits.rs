use crate::models::breakdown::AggregationResult;
use crate::models::period::Period;
use crate::models::transaction::FlowType;

/// Trait abstraction for chart breakdown data sources.
///
/// The sample provider stands in for a backend today; the ledger
/// provider computes the same shape from raw transactions. Swapping
/// one for the other never touches the chart pipeline.
pub trait BreakdownProvider: Send + Sync {
    /// Human-readable name of this provider (for logs).
    fn name(&self) -> &str;

    /// Chart-ready per-category breakdown for one period and flow.
    ///
    /// Never fails: `total_amount` always equals the sum of the
    /// category totals, and an empty breakdown is a valid result.
    fn breakdown(&self, period: Period, flow: FlowType) -> AggregationResult;
}
