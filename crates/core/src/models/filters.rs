use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::period::Period;
use super::transaction::FlowType;

/// Which chart the dashboard renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Bar,
    Pie,
}

/// The dashboard's owned filter state.
///
/// One instance is shared by the filter panel and both charts; committed
/// category selections land here, while in-progress edits stay inside
/// each chart's `ChartSelection`. Data flows one way: charts commit
/// upward, this state flows back down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartFilters {
    /// Bar or pie rendering
    pub chart_type: ChartType,

    /// Wallets to scope charts to. Accepted and surfaced, but not
    /// filtered on yet — wallet scoping belongs to the backing data
    /// source once a real backend exists.
    pub wallets: Option<Vec<String>>,

    /// Committed category selection for the income chart
    pub income_categories: Option<Vec<String>>,

    /// Committed category selection for the expense chart
    pub expense_categories: Option<Vec<String>>,

    /// Start of the aggregation window (None = unbounded)
    pub start_date: Option<NaiveDate>,

    /// End of the aggregation window (None = unbounded)
    pub end_date: Option<NaiveDate>,
}

impl Default for ChartFilters {
    fn default() -> Self {
        Self {
            chart_type: ChartType::Bar,
            wallets: None,
            income_categories: None,
            expense_categories: None,
            start_date: None,
            end_date: None,
        }
    }
}

impl ChartFilters {
    /// The committed category selection for a flow. Empty when none.
    #[must_use]
    pub fn categories(&self, flow: FlowType) -> &[String] {
        let list = match flow {
            FlowType::Income => &self.income_categories,
            FlowType::Expense => &self.expense_categories,
        };
        list.as_deref().unwrap_or(&[])
    }

    /// Store a committed category selection for a flow.
    /// An empty list normalizes to no filter.
    pub fn set_categories(&mut self, flow: FlowType, ids: Vec<String>) {
        let value = if ids.is_empty() { None } else { Some(ids) };
        match flow {
            FlowType::Income => self.income_categories = value,
            FlowType::Expense => self.expense_categories = value,
        }
    }

    /// Store the wallet scope. An empty list normalizes to no filter.
    pub fn set_wallets(&mut self, ids: Vec<String>) {
        self.wallets = if ids.is_empty() { None } else { Some(ids) };
    }

    /// Set the aggregation window to a named period ending at `as_of`.
    pub fn set_timeline(&mut self, period: Period, as_of: NaiveDate) {
        match period.date_range(as_of) {
            Some((start, end)) => {
                self.start_date = Some(start);
                self.end_date = Some(end);
            }
            None => {
                self.start_date = None;
                self.end_date = None;
            }
        }
    }

    /// The named period the current date window corresponds to.
    #[must_use]
    pub fn timeline(&self) -> Period {
        Period::infer(self.start_date, self.end_date)
    }

    /// True when any filter deviates from the default state.
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        self.wallets.is_some()
            || self.income_categories.is_some()
            || self.expense_categories.is_some()
            || self.start_date.is_some()
            || self.end_date.is_some()
    }

    /// Reset every filter to its default, chart type included.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
