// ═══════════════════════════════════════════════════════════════════
// Formatting Tests — currency and percentage display strings
// ═══════════════════════════════════════════════════════════════════

use moneyview_core::format::{
    format_currency, format_percentage_change, format_signed_percentage,
};

// ── Currency ────────────────────────────────────────────────────────

mod currency {
    use super::*;

    #[test]
    fn krw_with_thousands_separators() {
        assert_eq!(format_currency(5_000_000.0, "KRW"), "₩5,000,000");
    }

    #[test]
    fn usd() {
        assert_eq!(format_currency(1_250.0, "USD"), "$1,250");
    }

    #[test]
    fn negative_amount_keeps_sign_ahead_of_symbol() {
        assert_eq!(format_currency(-1_250.0, "USD"), "-$1,250");
    }

    #[test]
    fn small_amounts_have_no_separator() {
        assert_eq!(format_currency(999.0, "KRW"), "₩999");
        assert_eq!(format_currency(0.0, "KRW"), "₩0");
    }

    #[test]
    fn fractions_round_to_whole_units() {
        assert_eq!(format_currency(1_249.6, "USD"), "$1,250");
        assert_eq!(format_currency(1_249.4, "USD"), "$1,249");
    }

    #[test]
    fn unknown_code_falls_back_to_spaced_prefix() {
        assert_eq!(format_currency(5_000.0, "PLN"), "PLN 5,000");
    }
}

// ── Percentages ─────────────────────────────────────────────────────

mod percentage {
    use super::*;

    #[test]
    fn positive_gets_explicit_plus() {
        assert_eq!(format_signed_percentage(10.0), "+10.0%");
    }

    #[test]
    fn negative_keeps_minus() {
        assert_eq!(format_signed_percentage(-5.0), "-5.0%");
    }

    #[test]
    fn zero_is_signed_positive() {
        assert_eq!(format_signed_percentage(0.0), "+0.0%");
    }

    #[test]
    fn one_decimal_place() {
        assert_eq!(format_signed_percentage(12.345), "+12.3%");
        assert_eq!(format_signed_percentage(-0.25), "-0.2%");
    }

    #[test]
    fn change_label_for_exact_zero() {
        assert_eq!(format_percentage_change(0.0), "No change");
    }

    #[test]
    fn change_label_for_nonzero() {
        assert_eq!(format_percentage_change(10.0), "+10.0%");
        assert_eq!(format_percentage_change(-5.0), "-5.0%");
    }
}
