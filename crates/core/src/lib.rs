pub mod errors;
pub mod format;
pub mod models;
pub mod providers;
pub mod samples;
pub mod services;

use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::debug;
use uuid::Uuid;

use models::{
    breakdown::AggregationResult,
    category::Category,
    filters::{ChartFilters, ChartType},
    period::Period,
    summary::MonthSummary,
    transaction::{
        DayGroup, FlowType, Transaction, TransactionSortOrder, TransactionsByDate,
    },
    wallet::Wallet,
};
use providers::{ledger::LedgerProvider, sample::SampleDataProvider, traits::BreakdownProvider};
use services::{
    analytics_service::AnalyticsService, chart_service::ChartService, selection::ChartSelection,
};

use errors::CoreError;

/// Which data source backs the chart service.
enum DataSource {
    Sample,
    Ledger,
}

/// Main entry point for the MoneyView core library.
///
/// Owns the dashboard's filter state, one pending/applied selection per
/// chart, the wallet list, and the transaction ledger, plus the
/// services that compute everything the pages render.
#[must_use]
pub struct Dashboard {
    chart_service: ChartService,
    analytics_service: AnalyticsService,
    filters: ChartFilters,
    income_selection: ChartSelection,
    expense_selection: ChartSelection,
    wallets: Vec<Wallet>,
    categories: Vec<Category>,
    transactions: Vec<Transaction>,
    currency: String,
    /// Anchor for period windows ("last 30 days" counts back from here).
    as_of: NaiveDate,
    source: DataSource,
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("provider", &self.chart_service.provider_name())
            .field("transactions", &self.transactions.len())
            .field("wallets", &self.wallets.len())
            .field("filters", &self.filters)
            .finish()
    }
}

impl Dashboard {
    /// A dashboard backed by the bundled sample datasets, anchored at
    /// today.
    pub fn with_sample_data() -> Self {
        let as_of = chrono::Utc::now().date_naive();
        Self::build(
            DataSource::Sample,
            samples::transactions(as_of),
            samples::categories(),
            samples::wallets(),
            samples::CURRENCY.to_string(),
            as_of,
        )
    }

    /// A dashboard that aggregates a caller-supplied ledger.
    /// Period windows count back from `as_of`.
    pub fn from_ledger(
        transactions: Vec<Transaction>,
        categories: Vec<Category>,
        wallets: Vec<Wallet>,
        currency: impl Into<String>,
        as_of: NaiveDate,
    ) -> Self {
        Self::build(
            DataSource::Ledger,
            transactions,
            categories,
            wallets,
            currency.into(),
            as_of,
        )
    }

    // ── Charts ──────────────────────────────────────────────────────

    /// Breakdown for one chart, using the current timeline and that
    /// flow's committed category selection.
    #[must_use]
    pub fn chart_data(&self, flow: FlowType) -> AggregationResult {
        self.chart_service.filtered(
            self.filters.timeline(),
            flow,
            self.filters.wallets.as_deref(),
            Some(self.filters.categories(flow)),
        )
    }

    /// Unfiltered breakdown for a raw period key.
    /// Unrecognized keys fall back to the month dataset.
    #[must_use]
    pub fn lookup(&self, period: &str, flow: FlowType) -> AggregationResult {
        self.chart_service.lookup(period, flow)
    }

    // ── Filters ─────────────────────────────────────────────────────

    /// The current filter state.
    #[must_use]
    pub fn filters(&self) -> &ChartFilters {
        &self.filters
    }

    pub fn set_chart_type(&mut self, chart_type: ChartType) {
        self.filters.chart_type = chart_type;
    }

    /// Point the aggregation window at a named period ending at the
    /// dashboard's as-of date.
    pub fn set_timeline(&mut self, period: Period) {
        self.filters.set_timeline(period, self.as_of);
    }

    /// Scope charts to a set of wallets. Stored and surfaced, not
    /// filtered on yet.
    pub fn set_wallet_filter(&mut self, wallet_ids: Vec<String>) {
        self.filters.set_wallets(wallet_ids);
    }

    /// Reset every filter. Both charts observe the externally cleared
    /// applied lists, which discards their pending edits too.
    pub fn clear_all_filters(&mut self) {
        debug!("clearing all dashboard filters");
        self.filters.clear();
        self.income_selection.external_applied_change(Vec::new());
        self.expense_selection.external_applied_change(Vec::new());
    }

    // ── Category selection ──────────────────────────────────────────

    /// Flip one category in a chart's pending selection.
    pub fn toggle_category(&mut self, flow: FlowType, category_id: &str) {
        match flow {
            FlowType::Income => self.income_selection.toggle(category_id),
            FlowType::Expense => self.expense_selection.toggle(category_id),
        }
    }

    /// Commit a chart's pending selection into the filter state, then
    /// echo the committed list back into the chart.
    pub fn apply_selection(&mut self, flow: FlowType) {
        match flow {
            FlowType::Income => self.income_selection.apply(&mut self.filters),
            FlowType::Expense => self.expense_selection.apply(&mut self.filters),
        }
        let applied = self.filters.categories(flow).to_vec();
        match flow {
            FlowType::Income => self.income_selection.external_applied_change(applied),
            FlowType::Expense => self.expense_selection.external_applied_change(applied),
        }
    }

    /// Clear a chart's selection immediately, pending and applied both.
    pub fn clear_selection(&mut self, flow: FlowType) {
        match flow {
            FlowType::Income => self.income_selection.clear(&mut self.filters),
            FlowType::Expense => self.expense_selection.clear(&mut self.filters),
        }
        let applied = self.filters.categories(flow).to_vec();
        match flow {
            FlowType::Income => self.income_selection.external_applied_change(applied),
            FlowType::Expense => self.expense_selection.external_applied_change(applied),
        }
    }

    /// A chart's in-progress selection.
    #[must_use]
    pub fn pending_categories(&self, flow: FlowType) -> &[String] {
        self.selection(flow).pending()
    }

    /// A chart's committed selection.
    #[must_use]
    pub fn applied_categories(&self, flow: FlowType) -> &[String] {
        self.selection(flow).applied()
    }

    /// True when a chart has uncommitted selection edits.
    #[must_use]
    pub fn has_pending_changes(&self, flow: FlowType) -> bool {
        self.selection(flow).has_changes()
    }

    /// True when a chart has any selection, applied or pending.
    #[must_use]
    pub fn has_any_selections(&self, flow: FlowType) -> bool {
        self.selection(flow).has_any_selections()
    }

    // ── Summary ─────────────────────────────────────────────────────

    /// Headline income/expense/net figures for the current timeline,
    /// with changes versus the preceding window.
    #[must_use]
    pub fn month_summary(&self) -> MonthSummary {
        self.analytics_service
            .summary(&self.transactions, self.filters.timeline(), self.as_of)
    }

    // ── Transactions ────────────────────────────────────────────────

    /// All transactions, ordered by date (oldest first).
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Total number of transactions in the ledger.
    #[must_use]
    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Get a single transaction by its ID.
    #[must_use]
    pub fn get_transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Add a transaction to the ledger. Validates it first and keeps
    /// the ledger date-sorted. Chart data reflects the change
    /// immediately.
    pub fn add_transaction(&mut self, transaction: Transaction) -> Result<Uuid, CoreError> {
        Self::validate_transaction(&transaction)?;
        let id = transaction.id;
        let pos = self
            .transactions
            .binary_search_by_key(&transaction.date, |t| t.date)
            .unwrap_or_else(|pos| pos);
        self.transactions.insert(pos, transaction);
        self.rebuild_chart_service();
        Ok(id)
    }

    /// Remove a transaction by its ID.
    pub fn remove_transaction(&mut self, id: Uuid) -> Result<(), CoreError> {
        let idx = self
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| CoreError::TransactionNotFound(id.to_string()))?;
        self.transactions.remove(idx);
        self.rebuild_chart_service();
        Ok(())
    }

    /// Search transactions by matching query against title, receiver,
    /// and note (case-insensitive).
    #[must_use]
    pub fn search_transactions(&self, query: &str) -> Vec<&Transaction> {
        let q = query.to_lowercase();
        self.transactions
            .iter()
            .filter(|t| {
                t.title.to_lowercase().contains(&q)
                    || t.receiver.to_lowercase().contains(&q)
                    || t.note.to_lowercase().contains(&q)
            })
            .collect()
    }

    /// Get transactions sorted by a specific order.
    #[must_use]
    pub fn transactions_sorted(&self, order: &TransactionSortOrder) -> Vec<&Transaction> {
        let mut transactions: Vec<&Transaction> = self.transactions.iter().collect();
        match order {
            TransactionSortOrder::DateDesc => transactions.sort_by(|a, b| b.date.cmp(&a.date)),
            TransactionSortOrder::DateAsc => transactions.sort_by(|a, b| a.date.cmp(&b.date)),
            TransactionSortOrder::AmountDesc => transactions.sort_by(|a, b| {
                b.amount
                    .partial_cmp(&a.amount)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
            TransactionSortOrder::AmountAsc => transactions.sort_by(|a, b| {
                a.amount
                    .partial_cmp(&b.amount)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
            TransactionSortOrder::TitleAsc => {
                transactions.sort_by(|a, b| a.title.cmp(&b.title));
            }
            TransactionSortOrder::TitleDesc => {
                transactions.sort_by(|a, b| b.title.cmp(&a.title));
            }
        }
        transactions
    }

    /// Transactions grouped per day for list rendering, newest day
    /// first.
    #[must_use]
    pub fn transactions_by_date(&self) -> TransactionsByDate {
        let mut days: Vec<DayGroup> = Vec::new();
        // Internal storage is oldest-first; walk backwards so groups
        // come out newest-first.
        for txn in self.transactions.iter().rev() {
            match days.last_mut() {
                Some(day) if day.date == txn.date => day.transactions.push(txn.clone()),
                _ => days.push(DayGroup {
                    date: txn.date,
                    transactions: vec![txn.clone()],
                }),
            }
        }
        TransactionsByDate {
            total_count: self.transactions.len(),
            days,
        }
    }

    /// Get transactions within a date range (inclusive), newest first.
    #[must_use]
    pub fn transactions_in_range(&self, from: NaiveDate, to: NaiveDate) -> Vec<&Transaction> {
        let mut transactions: Vec<&Transaction> = self
            .transactions
            .iter()
            .filter(|t| t.date >= from && t.date <= to)
            .collect();
        transactions.reverse();
        transactions
    }

    // ── Wallets & Categories ────────────────────────────────────────

    #[must_use]
    pub fn wallets(&self) -> &[Wallet] {
        &self.wallets
    }

    /// Get a single wallet by its ID.
    #[must_use]
    pub fn get_wallet(&self, id: &str) -> Option<&Wallet> {
        self.wallets.iter().find(|w| w.id == id)
    }

    /// Per-currency balance sums for the wallets summary rail.
    #[must_use]
    pub fn total_balances_by_currency(&self) -> BTreeMap<String, f64> {
        models::wallet::total_balances_by_currency(&self.wallets)
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Get a single category by its ID.
    #[must_use]
    pub fn get_category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    // ── Export / Import ─────────────────────────────────────────────

    /// Export all transactions as a JSON string.
    pub fn export_transactions_to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.transactions).map_err(|e| {
            CoreError::Serialization(format!("Failed to serialize transactions to JSON: {e}"))
        })
    }

    /// Export all transactions as a CSV string.
    /// Columns: id, type, wallet_id, category_id, title, receiver,
    /// amount, currency, date, note
    #[must_use]
    pub fn export_transactions_to_csv(&self) -> String {
        let mut csv =
            String::from("id,type,wallet_id,category_id,title,receiver,amount,currency,date,note\n");
        for txn in &self.transactions {
            csv.push_str(&format!(
                "{},{},{},{},{},{},{},{},{},{}\n",
                txn.id,
                txn.transaction_type,
                txn.wallet_id,
                txn.category_id.as_deref().unwrap_or(""),
                Self::escape_csv(&txn.title),
                Self::escape_csv(&txn.receiver),
                txn.amount,
                txn.currency,
                txn.date,
                Self::escape_csv(&txn.note),
            ));
        }
        csv
    }

    /// Import transactions from a JSON string. All entries are
    /// validated first; if any fails, none are added. Returns the
    /// number of transactions imported.
    pub fn import_transactions_from_json(&mut self, json: &str) -> Result<usize, CoreError> {
        let imported: Vec<Transaction> = serde_json::from_str(json)?;
        for txn in &imported {
            Self::validate_transaction(txn)?;
        }
        let count = imported.len();
        for txn in imported {
            let pos = self
                .transactions
                .binary_search_by_key(&txn.date, |t| t.date)
                .unwrap_or_else(|pos| pos);
            self.transactions.insert(pos, txn);
        }
        debug!(count, "imported transactions");
        self.rebuild_chart_service();
        Ok(count)
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(
        source: DataSource,
        mut transactions: Vec<Transaction>,
        categories: Vec<Category>,
        wallets: Vec<Wallet>,
        currency: String,
        as_of: NaiveDate,
    ) -> Self {
        transactions.sort_by_key(|t| t.date);

        let mut filters = ChartFilters::default();
        filters.set_timeline(Period::Month, as_of);

        let income_selection =
            ChartSelection::new(FlowType::Income, filters.categories(FlowType::Income).to_vec());
        let expense_selection = ChartSelection::new(
            FlowType::Expense,
            filters.categories(FlowType::Expense).to_vec(),
        );

        let provider = Self::make_provider(&source, &transactions, &categories, &currency, as_of);

        Self {
            chart_service: ChartService::new(provider),
            analytics_service: AnalyticsService::new(),
            filters,
            income_selection,
            expense_selection,
            wallets,
            categories,
            transactions,
            currency,
            as_of,
            source,
        }
    }

    fn make_provider(
        source: &DataSource,
        transactions: &[Transaction],
        categories: &[Category],
        currency: &str,
        as_of: NaiveDate,
    ) -> Box<dyn BreakdownProvider> {
        match source {
            DataSource::Sample => Box::new(SampleDataProvider::new()),
            DataSource::Ledger => Box::new(LedgerProvider::new(
                transactions.to_vec(),
                categories.to_vec(),
                currency,
                as_of,
            )),
        }
    }

    /// Swap in a provider that reflects the current ledger, so chart
    /// data never serves stale aggregates after a mutation.
    fn rebuild_chart_service(&mut self) {
        let provider = Self::make_provider(
            &self.source,
            &self.transactions,
            &self.categories,
            &self.currency,
            self.as_of,
        );
        self.chart_service = ChartService::new(provider);
    }

    fn selection(&self, flow: FlowType) -> &ChartSelection {
        match flow {
            FlowType::Income => &self.income_selection,
            FlowType::Expense => &self.expense_selection,
        }
    }

    /// Quote a CSV field when it contains commas, quotes, or newlines.
    fn escape_csv(field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    fn validate_transaction(transaction: &Transaction) -> Result<(), CoreError> {
        if transaction.title.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Transaction title must not be empty".to_string(),
            ));
        }
        if !transaction.amount.is_finite() || transaction.amount <= 0.0 {
            return Err(CoreError::ValidationError(format!(
                "Transaction amount must be positive, got {}",
                transaction.amount
            )));
        }
        let code = &transaction.currency;
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CoreError::ValidationError(format!(
                "Invalid currency code '{code}': must be exactly 3 ASCII letters (e.g., KRW, USD)"
            )));
        }
        Ok(())
    }
}
