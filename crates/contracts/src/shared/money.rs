//! Money is carried as integer minor units (cents) and only divided for display.

/// Formats minor units with two decimals: `1050` → `"10.50"`.
pub fn format_minor_units(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}
