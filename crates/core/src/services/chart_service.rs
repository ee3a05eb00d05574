use tracing::debug;

use crate::models::breakdown::{AggregationResult, CategoryBreakdown};
use crate::models::period::Period;
use crate::models::transaction::FlowType;
use crate::providers::traits::BreakdownProvider;

/// Produces chart-ready category breakdowns from the configured data
/// source.
///
/// The core computes all the numbers — the frontend only renders.
pub struct ChartService {
    provider: Box<dyn BreakdownProvider>,
}

impl ChartService {
    pub fn new(provider: Box<dyn BreakdownProvider>) -> Self {
        Self { provider }
    }

    /// Name of the backing data source (for logs/debugging).
    #[must_use]
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Look up the breakdown for a period key and flow.
    /// Unrecognized period keys fall back to the month dataset.
    pub fn lookup(&self, period: &str, flow: FlowType) -> AggregationResult {
        let parsed = match Period::parse(period) {
            Some(p) => p,
            None => {
                debug!(period, "unrecognized period key, falling back to month");
                Period::Month
            }
        };
        self.provider.breakdown(parsed, flow)
    }

    /// Breakdown for a period, restricted to the applied category
    /// selection.
    ///
    /// `wallet_ids` is accepted but not filtered on — wallet scoping
    /// happens in the backing data source once a real backend exists.
    pub fn filtered(
        &self,
        period: Period,
        flow: FlowType,
        _wallet_ids: Option<&[String]>,
        category_ids: Option<&[String]>,
    ) -> AggregationResult {
        let result = self.provider.breakdown(period, flow);
        filter_by_categories(&result, category_ids)
    }
}

/// Restrict a breakdown to the given category ids and renormalize.
///
/// - No ids (or an empty list) returns the result unchanged.
/// - Otherwise the matching subset is kept in source order,
///   `total_amount` becomes the subset sum, and every percentage is
///   recomputed as the share of the *visible* subtotal — not carried
///   over from the unfiltered breakdown.
/// - A subset that matches nothing yields a valid zero-total result.
///
/// Never fails.
#[must_use]
pub fn filter_by_categories(
    result: &AggregationResult,
    category_ids: Option<&[String]>,
) -> AggregationResult {
    let ids = match category_ids {
        Some(ids) if !ids.is_empty() => ids,
        _ => return result.clone(),
    };

    let mut categories: Vec<CategoryBreakdown> = result
        .categories
        .iter()
        .filter(|c| ids.iter().any(|id| id == &c.id))
        .cloned()
        .collect();

    let total_amount: f64 = categories.iter().map(|c| c.total).sum();

    for category in &mut categories {
        category.percentage = if total_amount > 0.0 {
            (category.total / total_amount) * 100.0
        } else {
            // Zero subtotal: percentages are defined as 0 rather than NaN
            0.0
        };
    }

    AggregationResult {
        categories,
        total_amount,
        period: result.period.clone(),
        currency: result.currency.clone(),
    }
}
