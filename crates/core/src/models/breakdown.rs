use serde::{Deserialize, Serialize};

/// One category's aggregated share of a chart flow within a period.
///
/// The core computes these — the frontend just renders slices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    /// Category id (e.g., "cat_salary")
    pub id: String,

    /// Display name (e.g., "Salary")
    pub name: String,

    /// Hex color for the chart slice
    pub color: String,

    /// Summed amount for this category
    pub total: f64,

    /// Share of the breakdown's total, 0..100.
    /// After filtering, this is the share of the *visible* subtotal.
    pub percentage: f64,

    /// Number of transactions behind the total
    pub transaction_count: usize,
}

impl CategoryBreakdown {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        color: impl Into<String>,
        total: f64,
        percentage: f64,
        transaction_count: usize,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            total,
            percentage,
            transaction_count,
        }
    }
}

/// Chart-ready breakdown for one (period, flow) pair.
///
/// Invariant: `total_amount` equals the sum of `categories[].total`,
/// including after any filtering step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationResult {
    /// Per-category breakdowns
    pub categories: Vec<CategoryBreakdown>,

    /// Sum of all category totals
    pub total_amount: f64,

    /// Display label of the aggregation window (e.g., "Last 30 days")
    pub period: String,

    /// ISO currency code of all amounts
    pub currency: String,
}

impl AggregationResult {
    /// A valid zero-category result. Consumers render an explicit empty
    /// state for it rather than fail.
    pub fn empty(period: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            categories: Vec::new(),
            total_amount: 0.0,
            period: period.into(),
            currency: currency.into(),
        }
    }

    /// True when there is nothing to render.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
