use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::breakdown::{AggregationResult, CategoryBreakdown};
use crate::models::category::Category;
use crate::models::period::Period;
use crate::models::transaction::{FlowType, Transaction};

use super::traits::BreakdownProvider;

/// Computes chart breakdowns from an in-memory transaction ledger.
///
/// This is the real aggregation the sample datasets stand in for:
/// per-category sums and counts over the period's date window, with
/// percentages of the flow total.
pub struct LedgerProvider {
    transactions: Vec<Transaction>,
    categories: Vec<Category>,
    currency: String,
    as_of: NaiveDate,
}

impl LedgerProvider {
    /// `as_of` anchors the period windows (charts show "last N days"
    /// relative to it). `currency` labels the results.
    pub fn new(
        transactions: Vec<Transaction>,
        categories: Vec<Category>,
        currency: impl Into<String>,
        as_of: NaiveDate,
    ) -> Self {
        Self {
            transactions,
            categories,
            currency: currency.into(),
            as_of,
        }
    }
}

impl BreakdownProvider for LedgerProvider {
    fn name(&self) -> &str {
        "Ledger"
    }

    fn breakdown(&self, period: Period, flow: FlowType) -> AggregationResult {
        let range = period.date_range(self.as_of);

        // Sum amounts and count transactions per category id.
        // Transfers, uncategorized transactions, and transactions
        // outside the window are skipped.
        let mut totals: HashMap<&str, (f64, usize)> = HashMap::new();
        for txn in &self.transactions {
            if txn.transaction_type.flow() != Some(flow) {
                continue;
            }
            if let Some((start, end)) = range {
                if txn.date < start || txn.date > end {
                    continue;
                }
            }
            let category_id = match &txn.category_id {
                Some(id) => id.as_str(),
                None => continue,
            };
            let entry = totals.entry(category_id).or_insert((0.0, 0));
            entry.0 += txn.amount;
            entry.1 += 1;
        }

        // Only known categories render; amounts under unknown ids are
        // dropped from the total as well, keeping the sum invariant.
        let mut categories: Vec<CategoryBreakdown> = self
            .categories
            .iter()
            .filter_map(|c| {
                totals.get(c.id.as_str()).map(|&(total, count)| {
                    CategoryBreakdown::new(&c.id, &c.name, &c.color, total, 0.0, count)
                })
            })
            .collect();

        let total_amount: f64 = categories.iter().map(|c| c.total).sum();
        for category in &mut categories {
            category.percentage = if total_amount > 0.0 {
                (category.total / total_amount) * 100.0
            } else {
                0.0
            };
        }

        // Largest slice first
        categories.sort_by(|a, b| {
            b.total
                .partial_cmp(&a.total)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        AggregationResult {
            categories,
            total_amount,
            period: period.label().to_string(),
            currency: self.currency.clone(),
        }
    }
}
