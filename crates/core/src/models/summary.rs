use serde::{Deserialize, Serialize};

/// Headline figures for the dashboard summary strip.
///
/// Percentage changes compare the current period window against the
/// immediately preceding window of the same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthSummary {
    /// Total income in the window
    pub income: f64,

    /// Income change vs. the previous window, in percent
    pub income_pct_change: f64,

    /// Total expenses in the window
    pub expense: f64,

    /// Expense change vs. the previous window, in percent
    pub expense_pct_change: f64,

    /// income - expense
    pub net: f64,

    /// Net change vs. the previous window, in percent
    pub net_pct_change: f64,
}
