use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The two transaction flows the dashboard charts break down by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowType {
    Income,
    Expense,
}

impl std::fmt::Display for FlowType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlowType::Income => write!(f, "income"),
            FlowType::Expense => write!(f, "expense"),
        }
    }
}

/// Type of ledger transaction.
/// Transfers move money between the user's own wallets and belong to
/// neither chart flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    Income,
    Expense,
    Transfer,
}

impl TransactionType {
    /// The chart flow this transaction type contributes to, if any.
    #[must_use]
    pub fn flow(&self) -> Option<FlowType> {
        match self {
            TransactionType::Income => Some(FlowType::Income),
            TransactionType::Expense => Some(FlowType::Expense),
            TransactionType::Transfer => None,
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionType::Income => write!(f, "Income"),
            TransactionType::Expense => write!(f, "Expense"),
            TransactionType::Transfer => write!(f, "Transfer"),
        }
    }
}

/// Repeat cadence for recurring transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecurringInterval {
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Custom,
}

/// Sort order for transaction listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionSortOrder {
    /// Newest date first (default for display)
    DateDesc,
    /// Oldest date first
    DateAsc,
    /// Largest amount first
    AmountDesc,
    /// Smallest amount first
    AmountAsc,
    /// Alphabetical by title
    TitleAsc,
    /// Reverse alphabetical by title
    TitleDesc,
}

/// A single ledger transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: Uuid,

    /// Wallet the money moved through
    pub wallet_id: String,

    /// Spending/income category; transfers and uncategorized
    /// transactions carry none
    #[serde(default)]
    pub category_id: Option<String>,

    /// Income, Expense, or Transfer
    pub transaction_type: TransactionType,

    /// Short title shown in listings
    pub title: String,

    /// Other party involved in the transaction
    #[serde(default)]
    pub receiver: String,

    /// Free-text note by the user
    #[serde(default)]
    pub note: String,

    /// Amount in the transaction's currency (always positive)
    pub amount: f64,

    /// ISO currency code (e.g., "KRW", "USD")
    pub currency: String,

    /// Date of the transaction (no time component — daily granularity)
    pub date: NaiveDate,

    /// Whether this transaction repeats
    #[serde(default)]
    pub is_recurring: bool,

    /// Repeat cadence, when recurring
    #[serde(default)]
    pub recurring_interval: Option<RecurringInterval>,
}

impl Transaction {
    pub fn new(
        transaction_type: TransactionType,
        wallet_id: impl Into<String>,
        title: impl Into<String>,
        amount: f64,
        currency: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            wallet_id: wallet_id.into(),
            category_id: None,
            transaction_type,
            title: title.into(),
            receiver: String::new(),
            note: String::new(),
            amount,
            currency: currency.into().to_uppercase(),
            date,
            is_recurring: false,
            recurring_interval: None,
        }
    }

    /// Attach a category.
    #[must_use]
    pub fn with_category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    /// Set the other party.
    #[must_use]
    pub fn with_receiver(mut self, receiver: impl Into<String>) -> Self {
        self.receiver = receiver.into();
        self
    }

    /// Attach a free-text note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Mark as recurring with the given cadence.
    #[must_use]
    pub fn recurring(mut self, interval: RecurringInterval) -> Self {
        self.is_recurring = true;
        self.recurring_interval = Some(interval);
        self
    }
}

/// One day's worth of transactions in a grouped listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayGroup {
    pub date: NaiveDate,
    pub transactions: Vec<Transaction>,
}

/// Transactions grouped per day for list rendering, newest day first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionsByDate {
    pub days: Vec<DayGroup>,
    pub total_count: usize,
}
