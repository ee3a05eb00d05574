//! Display formatting for amounts and percentage changes.
//!
//! These are pure and deterministic — the UI renders the strings as-is.

/// Symbol prefixes for the currencies the app ships with.
/// Unknown codes fall back to a spaced code prefix ("PLN 1,000").
fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "KRW" => Some("₩"),
        "JPY" => Some("¥"),
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        _ => None,
    }
}

/// Localized currency string: symbol plus thousands-separated amount,
/// rounded to whole units ("₩5,000,000", "-$1,250").
#[must_use]
pub fn format_currency(amount: f64, currency: &str) -> String {
    let negative = amount < 0.0;
    let grouped = group_thousands(amount.abs().round() as i64);
    let sign = if negative { "-" } else { "" };
    match currency_symbol(currency) {
        Some(symbol) => format!("{sign}{symbol}{grouped}"),
        None => format!("{sign}{currency} {grouped}"),
    }
}

/// Signed percentage with one decimal and an explicit `+` for
/// non-negative values ("+10.0%", "-5.0%").
#[must_use]
pub fn format_signed_percentage(percentage: f64) -> String {
    if percentage >= 0.0 {
        format!("+{percentage:.1}%")
    } else {
        format!("{percentage:.1}%")
    }
}

/// Percentage-change label: "No change" when the value is exactly
/// zero, the signed form otherwise.
#[must_use]
pub fn format_percentage_change(percentage: f64) -> String {
    if percentage == 0.0 {
        "No change".to_string()
    } else {
        format_signed_percentage(percentage)
    }
}

fn group_thousands(value: i64) -> String {
    let digits: Vec<char> = value.to_string().chars().rev().collect();
    let mut out = Vec::new();
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}
