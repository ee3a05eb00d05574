use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The kind of account a wallet represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WalletType {
    Cash,
    BankAccount,
    Card,
    Savings,
}

impl std::fmt::Display for WalletType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WalletType::Cash => write!(f, "Cash"),
            WalletType::BankAccount => write!(f, "Bank Account"),
            WalletType::Card => write!(f, "Card"),
            WalletType::Savings => write!(f, "Savings"),
        }
    }
}

/// A wallet (account) holding a balance in a single currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    /// Stable identifier (e.g., "wallet_main")
    pub id: String,

    /// Display name (e.g., "Main Account")
    pub name: String,

    /// Kind of account
    pub wallet_type: WalletType,

    /// ISO currency code of the balance (e.g., "KRW")
    pub currency: String,

    /// Current balance in the wallet's currency
    pub balance: f64,
}

impl Wallet {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        wallet_type: WalletType,
        currency: impl Into<String>,
        balance: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            wallet_type,
            currency: currency.into().to_uppercase(),
            balance,
        }
    }
}

/// Sum wallet balances per currency code, for the wallets summary rail.
/// Returns deterministic order (sorted by currency code).
#[must_use]
pub fn total_balances_by_currency(wallets: &[Wallet]) -> BTreeMap<String, f64> {
    let mut totals = BTreeMap::new();
    for wallet in wallets {
        *totals.entry(wallet.currency.clone()).or_insert(0.0) += wallet.balance;
    }
    totals
}
