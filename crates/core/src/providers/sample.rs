use crate::models::breakdown::{AggregationResult, CategoryBreakdown};
use crate::models::period::Period;
use crate::models::transaction::FlowType;

use super::traits::BreakdownProvider;

/// Canned breakdown datasets, standing in for a backend.
///
/// Covers every period/flow pair with the numbers a real aggregation
/// over the demo ledger would produce. All amounts are KRW.
pub struct SampleDataProvider;

impl SampleDataProvider {
    pub fn new() -> Self {
        Self
    }

    fn week_income() -> Vec<CategoryBreakdown> {
        vec![
            cat("cat_salary", "Salary", "#10B981", 875_000.0, 87.5, 1),
            cat("cat_freelance", "Freelance", "#3B82F6", 125_000.0, 12.5, 1),
        ]
    }

    fn week_expense() -> Vec<CategoryBreakdown> {
        vec![
            cat("cat_food", "Food & Dining", "#EF4444", 85_000.0, 34.0, 5),
            cat("cat_transport", "Transportation", "#F97316", 65_000.0, 26.0, 3),
            cat("cat_shopping", "Shopping", "#EC4899", 50_000.0, 20.0, 2),
            cat("cat_entertainment", "Entertainment", "#8B5CF6", 50_000.0, 20.0, 2),
        ]
    }

    fn month_income() -> Vec<CategoryBreakdown> {
        vec![
            cat("cat_salary", "Salary", "#10B981", 3_500_000.0, 70.0, 2),
            cat("cat_freelance", "Freelance", "#3B82F6", 800_000.0, 16.0, 4),
            cat("cat_investment", "Investment Returns", "#8B5CF6", 450_000.0, 9.0, 3),
            cat("cat_bonus", "Bonus", "#F59E0B", 250_000.0, 5.0, 1),
        ]
    }

    fn month_expense() -> Vec<CategoryBreakdown> {
        vec![
            cat("cat_food", "Food & Dining", "#EF4444", 450_000.0, 28.1, 15),
            cat("cat_transport", "Transportation", "#F97316", 320_000.0, 20.0, 8),
            cat("cat_shopping", "Shopping", "#EC4899", 280_000.0, 17.5, 6),
            cat("cat_utilities", "Utilities", "#06B6D4", 220_000.0, 13.8, 4),
            cat("cat_entertainment", "Entertainment", "#8B5CF6", 180_000.0, 11.3, 7),
            cat("cat_healthcare", "Healthcare", "#10B981", 150_000.0, 9.3, 3),
        ]
    }

    fn three_months_income() -> Vec<CategoryBreakdown> {
        vec![
            cat("cat_salary", "Salary", "#10B981", 10_500_000.0, 70.0, 6),
            cat("cat_freelance", "Freelance", "#3B82F6", 2_400_000.0, 16.0, 12),
            cat("cat_investment", "Investment Returns", "#8B5CF6", 1_350_000.0, 9.0, 9),
            cat("cat_bonus", "Bonus", "#F59E0B", 750_000.0, 5.0, 3),
        ]
    }

    fn three_months_expense() -> Vec<CategoryBreakdown> {
        vec![
            cat("cat_food", "Food & Dining", "#EF4444", 1_350_000.0, 28.1, 45),
            cat("cat_transport", "Transportation", "#F97316", 960_000.0, 20.0, 24),
            cat("cat_shopping", "Shopping", "#EC4899", 840_000.0, 17.5, 18),
            cat("cat_utilities", "Utilities", "#06B6D4", 660_000.0, 13.8, 12),
            cat("cat_entertainment", "Entertainment", "#8B5CF6", 540_000.0, 11.3, 21),
            cat("cat_healthcare", "Healthcare", "#10B981", 450_000.0, 9.3, 9),
        ]
    }

    fn year_income() -> Vec<CategoryBreakdown> {
        vec![
            cat("cat_salary", "Salary", "#10B981", 42_000_000.0, 70.0, 24),
            cat("cat_freelance", "Freelance", "#3B82F6", 9_600_000.0, 16.0, 48),
            cat("cat_investment", "Investment Returns", "#8B5CF6", 5_400_000.0, 9.0, 36),
            cat("cat_bonus", "Bonus", "#F59E0B", 3_000_000.0, 5.0, 12),
        ]
    }

    fn year_expense() -> Vec<CategoryBreakdown> {
        vec![
            cat("cat_food", "Food & Dining", "#EF4444", 5_400_000.0, 28.1, 180),
            cat("cat_transport", "Transportation", "#F97316", 3_840_000.0, 20.0, 96),
            cat("cat_shopping", "Shopping", "#EC4899", 3_360_000.0, 17.5, 72),
            cat("cat_utilities", "Utilities", "#06B6D4", 2_640_000.0, 13.8, 48),
            cat("cat_entertainment", "Entertainment", "#8B5CF6", 2_160_000.0, 11.3, 84),
            cat("cat_healthcare", "Healthcare", "#10B981", 1_800_000.0, 9.3, 36),
        ]
    }

    fn all_income() -> Vec<CategoryBreakdown> {
        vec![
            cat("cat_salary", "Salary", "#10B981", 84_000_000.0, 70.0, 48),
            cat("cat_freelance", "Freelance", "#3B82F6", 19_200_000.0, 16.0, 96),
            cat("cat_investment", "Investment Returns", "#8B5CF6", 10_800_000.0, 9.0, 72),
            cat("cat_bonus", "Bonus", "#F59E0B", 6_000_000.0, 5.0, 24),
        ]
    }

    fn all_expense() -> Vec<CategoryBreakdown> {
        vec![
            cat("cat_food", "Food & Dining", "#EF4444", 10_800_000.0, 28.1, 360),
            cat("cat_transport", "Transportation", "#F97316", 7_680_000.0, 20.0, 192),
            cat("cat_shopping", "Shopping", "#EC4899", 6_720_000.0, 17.5, 144),
            cat("cat_utilities", "Utilities", "#06B6D4", 5_280_000.0, 13.8, 96),
            cat("cat_entertainment", "Entertainment", "#8B5CF6", 4_320_000.0, 11.3, 168),
            cat("cat_healthcare", "Healthcare", "#10B981", 3_600_000.0, 9.3, 72),
        ]
    }
}

impl BreakdownProvider for SampleDataProvider {
    fn name(&self) -> &str {
        "SampleData"
    }

    fn breakdown(&self, period: Period, flow: FlowType) -> AggregationResult {
        let categories = match (period, flow) {
            (Period::Week, FlowType::Income) => Self::week_income(),
            (Period::Week, FlowType::Expense) => Self::week_expense(),
            (Period::Month, FlowType::Income) => Self::month_income(),
            (Period::Month, FlowType::Expense) => Self::month_expense(),
            (Period::ThreeMonths, FlowType::Income) => Self::three_months_income(),
            (Period::ThreeMonths, FlowType::Expense) => Self::three_months_expense(),
            (Period::Year, FlowType::Income) => Self::year_income(),
            (Period::Year, FlowType::Expense) => Self::year_expense(),
            (Period::All, FlowType::Income) => Self::all_income(),
            (Period::All, FlowType::Expense) => Self::all_expense(),
        };
        dataset(categories, period)
    }
}

impl Default for SampleDataProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn cat(
    id: &str,
    name: &str,
    color: &str,
    total: f64,
    percentage: f64,
    transaction_count: usize,
) -> CategoryBreakdown {
    CategoryBreakdown::new(id, name, color, total, percentage, transaction_count)
}

/// Totals are derived from the category sums, so the provider contract
/// holds by construction.
fn dataset(categories: Vec<CategoryBreakdown>, period: Period) -> AggregationResult {
    let total_amount = categories.iter().map(|c| c.total).sum();
    AggregationResult {
        categories,
        total_amount,
        period: period.label().to_string(),
        currency: "KRW".to_string(),
    }
}
