use chrono::{Duration, NaiveDate};

use crate::models::period::Period;
use crate::models::summary::MonthSummary;
use crate::models::transaction::{FlowType, Transaction};

/// Computes the dashboard's headline figures from the transaction
/// ledger.
pub struct AnalyticsService;

impl AnalyticsService {
    pub fn new() -> Self {
        Self
    }

    /// Income, expenses, and net over the period window ending at
    /// `as_of`, each with the percentage change versus the immediately
    /// preceding window of the same length.
    ///
    /// `All` has no preceding window, so its changes are 0. A previous
    /// window with a zero figure also yields 0 rather than a division
    /// by zero.
    pub fn summary(
        &self,
        transactions: &[Transaction],
        period: Period,
        as_of: NaiveDate,
    ) -> MonthSummary {
        let range = period.date_range(as_of);
        let (income, expense) = Self::flow_totals(transactions, range);
        let net = income - expense;

        let previous = range.and_then(|(start, end)| {
            let days = (end - start).num_days();
            let prev_end = start.pred_opt()?;
            Some((prev_end - Duration::days(days), prev_end))
        });

        let (income_pct_change, expense_pct_change, net_pct_change) = match previous {
            Some(window) => {
                let (prev_income, prev_expense) = Self::flow_totals(transactions, Some(window));
                (
                    Self::pct_change(income, prev_income),
                    Self::pct_change(expense, prev_expense),
                    Self::pct_change(net, prev_income - prev_expense),
                )
            }
            None => (0.0, 0.0, 0.0),
        };

        MonthSummary {
            income,
            income_pct_change,
            expense,
            expense_pct_change,
            net,
            net_pct_change,
        }
    }

    /// (income, expense) totals within an inclusive window.
    /// `None` means unbounded (all transactions).
    fn flow_totals(
        transactions: &[Transaction],
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> (f64, f64) {
        let mut income = 0.0;
        let mut expense = 0.0;
        for txn in transactions {
            if let Some((start, end)) = range {
                if txn.date < start || txn.date > end {
                    continue;
                }
            }
            match txn.transaction_type.flow() {
                Some(FlowType::Income) => income += txn.amount,
                Some(FlowType::Expense) => expense += txn.amount,
                None => {}
            }
        }
        (income, expense)
    }

    /// Percentage change from `previous` to `current`; 0 when there is
    /// no previous figure to compare against.
    fn pct_change(current: f64, previous: f64) -> f64 {
        if previous == 0.0 {
            0.0
        } else {
            ((current - previous) / previous.abs()) * 100.0
        }
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}
