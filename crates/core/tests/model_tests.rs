use chrono::NaiveDate;
use moneyview_core::models::breakdown::{AggregationResult, CategoryBreakdown};
use moneyview_core::models::filters::{ChartFilters, ChartType};
use moneyview_core::models::period::Period;
use moneyview_core::models::transaction::{
    FlowType, RecurringInterval, Transaction, TransactionType,
};
use moneyview_core::models::wallet::{total_balances_by_currency, Wallet, WalletType};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
//  Period
// ═══════════════════════════════════════════════════════════════════

mod period {
    use super::*;

    #[test]
    fn parse_known_keys() {
        assert_eq!(Period::parse("week"), Some(Period::Week));
        assert_eq!(Period::parse("month"), Some(Period::Month));
        assert_eq!(Period::parse("3months"), Some(Period::ThreeMonths));
        assert_eq!(Period::parse("year"), Some(Period::Year));
        assert_eq!(Period::parse("all"), Some(Period::All));
    }

    #[test]
    fn parse_unknown_key_is_none() {
        assert_eq!(Period::parse("quarter"), None);
        assert_eq!(Period::parse(""), None);
        assert_eq!(Period::parse("Month"), None);
    }

    #[test]
    fn key_roundtrips_through_parse() {
        for period in [
            Period::Week,
            Period::Month,
            Period::ThreeMonths,
            Period::Year,
            Period::All,
        ] {
            assert_eq!(Period::parse(period.key()), Some(period));
        }
    }

    #[test]
    fn labels() {
        assert_eq!(Period::Week.label(), "Last 7 days");
        assert_eq!(Period::Month.label(), "Last 30 days");
        assert_eq!(Period::ThreeMonths.label(), "Last 3 months");
        assert_eq!(Period::Year.label(), "Last 12 months");
        assert_eq!(Period::All.label(), "All time");
    }

    #[test]
    fn display_uses_wire_key() {
        assert_eq!(Period::ThreeMonths.to_string(), "3months");
    }

    #[test]
    fn week_range_ends_at_as_of() {
        let as_of = d(2025, 6, 30);
        let (start, end) = Period::Week.date_range(as_of).unwrap();
        assert_eq!(start, d(2025, 6, 23));
        assert_eq!(end, as_of);
    }

    #[test]
    fn month_range_subtracts_one_calendar_month() {
        let (start, end) = Period::Month.date_range(d(2025, 6, 30)).unwrap();
        assert_eq!(start, d(2025, 5, 30));
        assert_eq!(end, d(2025, 6, 30));
    }

    #[test]
    fn year_range_subtracts_twelve_months() {
        let (start, _) = Period::Year.date_range(d(2025, 6, 30)).unwrap();
        assert_eq!(start, d(2024, 6, 30));
    }

    #[test]
    fn all_range_is_unbounded() {
        assert_eq!(Period::All.date_range(d(2025, 6, 30)), None);
    }

    #[test]
    fn infer_reverses_date_range() {
        let as_of = d(2025, 6, 30);
        for period in [
            Period::Week,
            Period::Month,
            Period::ThreeMonths,
            Period::Year,
        ] {
            let (start, end) = period.date_range(as_of).unwrap();
            assert_eq!(Period::infer(Some(start), Some(end)), period);
        }
    }

    #[test]
    fn infer_missing_bound_is_all() {
        assert_eq!(Period::infer(None, None), Period::All);
        assert_eq!(Period::infer(Some(d(2025, 1, 1)), None), Period::All);
        assert_eq!(Period::infer(None, Some(d(2025, 1, 1))), Period::All);
    }

    #[test]
    fn infer_wide_window_is_all() {
        assert_eq!(
            Period::infer(Some(d(2020, 1, 1)), Some(d(2025, 1, 1))),
            Period::All
        );
    }

    #[test]
    fn serde_uses_wire_keys() {
        assert_eq!(
            serde_json::to_string(&Period::ThreeMonths).unwrap(),
            "\"3months\""
        );
        let back: Period = serde_json::from_str("\"week\"").unwrap();
        assert_eq!(back, Period::Week);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  FlowType & TransactionType
// ═══════════════════════════════════════════════════════════════════

mod flow_type {
    use super::*;

    #[test]
    fn display_is_lowercase() {
        assert_eq!(FlowType::Income.to_string(), "income");
        assert_eq!(FlowType::Expense.to_string(), "expense");
    }

    #[test]
    fn serde_is_lowercase() {
        assert_eq!(serde_json::to_string(&FlowType::Income).unwrap(), "\"income\"");
    }

    #[test]
    fn income_and_expense_map_to_flows() {
        assert_eq!(TransactionType::Income.flow(), Some(FlowType::Income));
        assert_eq!(TransactionType::Expense.flow(), Some(FlowType::Expense));
    }

    #[test]
    fn transfer_has_no_flow() {
        assert_eq!(TransactionType::Transfer.flow(), None);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Transaction
// ═══════════════════════════════════════════════════════════════════

mod transaction {
    use super::*;

    #[test]
    fn new_sets_essentials() {
        let t = Transaction::new(
            TransactionType::Expense,
            "wallet_main",
            "Groceries",
            42_000.0,
            "krw",
            d(2025, 6, 1),
        );
        assert_eq!(t.wallet_id, "wallet_main");
        assert_eq!(t.title, "Groceries");
        assert_eq!(t.amount, 42_000.0);
        assert_eq!(t.currency, "KRW");
        assert_eq!(t.category_id, None);
        assert!(!t.is_recurring);
    }

    #[test]
    fn builder_attaches_details() {
        let t = Transaction::new(
            TransactionType::Income,
            "wallet_main",
            "Salary",
            3_500_000.0,
            "KRW",
            d(2025, 6, 25),
        )
        .with_category("cat_salary")
        .with_receiver("Hanbit Studio")
        .with_note("June payroll")
        .recurring(RecurringInterval::Monthly);

        assert_eq!(t.category_id.as_deref(), Some("cat_salary"));
        assert_eq!(t.receiver, "Hanbit Studio");
        assert_eq!(t.note, "June payroll");
        assert!(t.is_recurring);
        assert_eq!(t.recurring_interval, Some(RecurringInterval::Monthly));
    }

    #[test]
    fn unique_ids() {
        let a = Transaction::new(
            TransactionType::Expense,
            "w",
            "a",
            1.0,
            "KRW",
            d(2025, 1, 1),
        );
        let b = Transaction::new(
            TransactionType::Expense,
            "w",
            "b",
            1.0,
            "KRW",
            d(2025, 1, 1),
        );
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn deserializes_without_optional_fields() {
        let json = format!(
            r#"{{
                "id": "{}",
                "wallet_id": "wallet_main",
                "transaction_type": "Expense",
                "title": "Coffee",
                "amount": 4500.0,
                "currency": "KRW",
                "date": "2025-06-10"
            }}"#,
            uuid::Uuid::new_v4()
        );
        let t: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(t.category_id, None);
        assert_eq!(t.receiver, "");
        assert_eq!(t.note, "");
        assert!(!t.is_recurring);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  ChartFilters
// ═══════════════════════════════════════════════════════════════════

mod chart_filters {
    use super::*;

    #[test]
    fn default_has_no_active_filters() {
        let filters = ChartFilters::default();
        assert_eq!(filters.chart_type, ChartType::Bar);
        assert!(!filters.has_active_filters());
        assert_eq!(filters.timeline(), Period::All);
    }

    #[test]
    fn empty_category_list_normalizes_to_none() {
        let mut filters = ChartFilters::default();
        filters.set_categories(FlowType::Income, vec!["cat_salary".into()]);
        assert_eq!(filters.categories(FlowType::Income), ["cat_salary"]);

        filters.set_categories(FlowType::Income, Vec::new());
        assert_eq!(filters.income_categories, None);
        assert!(filters.categories(FlowType::Income).is_empty());
    }

    #[test]
    fn flows_are_independent() {
        let mut filters = ChartFilters::default();
        filters.set_categories(FlowType::Income, vec!["cat_salary".into()]);
        assert!(filters.categories(FlowType::Expense).is_empty());
    }

    #[test]
    fn empty_wallet_list_normalizes_to_none() {
        let mut filters = ChartFilters::default();
        filters.set_wallets(vec!["wallet_main".into()]);
        assert!(filters.has_active_filters());
        filters.set_wallets(Vec::new());
        assert_eq!(filters.wallets, None);
    }

    #[test]
    fn set_timeline_roundtrips_through_inference() {
        let mut filters = ChartFilters::default();
        filters.set_timeline(Period::ThreeMonths, d(2025, 6, 30));
        assert_eq!(filters.timeline(), Period::ThreeMonths);
        assert!(filters.has_active_filters());
    }

    #[test]
    fn set_timeline_all_clears_bounds() {
        let mut filters = ChartFilters::default();
        filters.set_timeline(Period::Month, d(2025, 6, 30));
        filters.set_timeline(Period::All, d(2025, 6, 30));
        assert_eq!(filters.start_date, None);
        assert_eq!(filters.end_date, None);
        assert_eq!(filters.timeline(), Period::All);
    }

    #[test]
    fn clear_resets_everything() {
        let mut filters = ChartFilters::default();
        filters.chart_type = ChartType::Pie;
        filters.set_wallets(vec!["wallet_main".into()]);
        filters.set_categories(FlowType::Expense, vec!["cat_food".into()]);
        filters.set_timeline(Period::Week, d(2025, 6, 30));

        filters.clear();
        assert_eq!(filters, ChartFilters::default());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Breakdown models
// ═══════════════════════════════════════════════════════════════════

mod breakdown {
    use super::*;

    #[test]
    fn empty_result_is_valid() {
        let result = AggregationResult::empty("Last 30 days", "KRW");
        assert!(result.is_empty());
        assert_eq!(result.total_amount, 0.0);
        assert_eq!(result.period, "Last 30 days");
    }

    #[test]
    fn serde_roundtrip() {
        let result = AggregationResult {
            categories: vec![CategoryBreakdown::new(
                "cat_salary",
                "Salary",
                "#10B981",
                3_500_000.0,
                70.0,
                2,
            )],
            total_amount: 3_500_000.0,
            period: "Last 30 days".to_string(),
            currency: "KRW".to_string(),
        };
        let json = serde_json::to_string(&result).unwrap();
        let back: AggregationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Wallets
// ═══════════════════════════════════════════════════════════════════

mod wallet {
    use super::*;

    #[test]
    fn balances_sum_per_currency() {
        let wallets = vec![
            Wallet::new("w1", "Main", WalletType::BankAccount, "KRW", 4_000_000.0),
            Wallet::new("w2", "Cash", WalletType::Cash, "KRW", 200_000.0),
            Wallet::new("w3", "Travel", WalletType::Card, "USD", 820.0),
        ];
        let totals = total_balances_by_currency(&wallets);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals["KRW"], 4_200_000.0);
        assert_eq!(totals["USD"], 820.0);
    }

    #[test]
    fn no_wallets_no_totals() {
        assert!(total_balances_by_currency(&[]).is_empty());
    }

    #[test]
    fn currency_is_uppercased() {
        let w = Wallet::new("w", "Main", WalletType::BankAccount, "krw", 0.0);
        assert_eq!(w.currency, "KRW");
    }

    #[test]
    fn wallet_type_display() {
        assert_eq!(WalletType::BankAccount.to_string(), "Bank Account");
        assert_eq!(WalletType::Cash.to_string(), "Cash");
    }
}
