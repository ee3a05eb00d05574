//! Demo fixtures: the wallets, categories, and ledger a fresh
//! dashboard starts with. Dates are relative to the caller's as-of
//! date so the demo always has recent activity.

use chrono::{Duration, NaiveDate};

use crate::models::category::Category;
use crate::models::transaction::{RecurringInterval, Transaction, TransactionType};
use crate::models::wallet::{Wallet, WalletType};

/// The demo currency.
pub const CURRENCY: &str = "KRW";

pub fn categories() -> Vec<Category> {
    vec![
        Category::new("cat_salary", "Salary", "#10B981", "briefcase"),
        Category::new("cat_freelance", "Freelance", "#3B82F6", "laptop"),
        Category::new("cat_investment", "Investment Returns", "#8B5CF6", "trending-up"),
        Category::new("cat_bonus", "Bonus", "#F59E0B", "gift"),
        Category::new("cat_food", "Food & Dining", "#EF4444", "utensils"),
        Category::new("cat_transport", "Transportation", "#F97316", "bus"),
        Category::new("cat_shopping", "Shopping", "#EC4899", "shopping-bag"),
        Category::new("cat_utilities", "Utilities", "#06B6D4", "zap"),
        Category::new("cat_entertainment", "Entertainment", "#8B5CF6", "film"),
        Category::new("cat_healthcare", "Healthcare", "#10B981", "heart-pulse"),
    ]
}

pub fn wallets() -> Vec<Wallet> {
    vec![
        Wallet::new("wallet_main", "Main Account", WalletType::BankAccount, "KRW", 4_250_000.0),
        Wallet::new("wallet_cash", "Cash", WalletType::Cash, "KRW", 180_000.0),
        Wallet::new("wallet_savings", "Emergency Fund", WalletType::Savings, "KRW", 12_000_000.0),
        Wallet::new("wallet_travel", "Travel Card", WalletType::Card, "USD", 820.0),
    ]
}

/// A month of demo activity ending at `as_of`, plus some older entries
/// so longer windows have history too.
pub fn transactions(as_of: NaiveDate) -> Vec<Transaction> {
    let day = |days_ago: i64| as_of - Duration::days(days_ago);

    vec![
        Transaction::new(TransactionType::Income, "wallet_main", "Monthly salary", 3_500_000.0, CURRENCY, day(3))
            .with_category("cat_salary")
            .with_receiver("Hanbit Studio")
            .recurring(RecurringInterval::Monthly),
        Transaction::new(TransactionType::Income, "wallet_main", "Logo design gig", 450_000.0, CURRENCY, day(9))
            .with_category("cat_freelance")
            .with_receiver("Dasom Cafe"),
        Transaction::new(TransactionType::Income, "wallet_main", "Dividend payout", 180_000.0, CURRENCY, day(15))
            .with_category("cat_investment"),
        Transaction::new(TransactionType::Expense, "wallet_cash", "Lunch with team", 42_000.0, CURRENCY, day(1))
            .with_category("cat_food")
            .with_receiver("Gogi House"),
        Transaction::new(TransactionType::Expense, "wallet_main", "Weekly groceries", 86_000.0, CURRENCY, day(2))
            .with_category("cat_food")
            .with_receiver("Emart"),
        Transaction::new(TransactionType::Expense, "wallet_main", "Subway pass", 62_000.0, CURRENCY, day(5))
            .with_category("cat_transport")
            .recurring(RecurringInterval::Monthly),
        Transaction::new(TransactionType::Expense, "wallet_main", "Running shoes", 129_000.0, CURRENCY, day(8))
            .with_category("cat_shopping")
            .with_note("replacing the worn-out pair"),
        Transaction::new(TransactionType::Expense, "wallet_main", "Electricity bill", 74_000.0, CURRENCY, day(11))
            .with_category("cat_utilities")
            .recurring(RecurringInterval::Monthly),
        Transaction::new(TransactionType::Expense, "wallet_main", "Movie night", 28_000.0, CURRENCY, day(13))
            .with_category("cat_entertainment"),
        Transaction::new(TransactionType::Expense, "wallet_main", "Dentist checkup", 55_000.0, CURRENCY, day(20))
            .with_category("cat_healthcare"),
        // Transfers belong to neither chart flow
        Transaction::new(TransactionType::Transfer, "wallet_main", "Top up emergency fund", 500_000.0, CURRENCY, day(6))
            .with_receiver("Emergency Fund"),
        // Older history for the longer windows
        Transaction::new(TransactionType::Income, "wallet_main", "Monthly salary", 3_500_000.0, CURRENCY, day(33))
            .with_category("cat_salary")
            .with_receiver("Hanbit Studio")
            .recurring(RecurringInterval::Monthly),
        Transaction::new(TransactionType::Income, "wallet_main", "Year-end bonus", 250_000.0, CURRENCY, day(40))
            .with_category("cat_bonus"),
        Transaction::new(TransactionType::Expense, "wallet_main", "Winter coat", 240_000.0, CURRENCY, day(38))
            .with_category("cat_shopping"),
        Transaction::new(TransactionType::Expense, "wallet_main", "Groceries", 91_000.0, CURRENCY, day(36))
            .with_category("cat_food"),
    ]
}
