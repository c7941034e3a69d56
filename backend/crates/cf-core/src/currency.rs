/// Format a dollar amount with thousands separators and two decimals.
///
/// Rounds half away from zero at the cent: `700000.0` becomes `"$700,000.00"`,
/// `-1234.5` becomes `"-$1,234.50"`. Exact for amounts whose cent count fits
/// an `f64` mantissa; decoded project amounts are capped at
/// [`MAX_TARGET_AMOUNT`](crate::models::amount::MAX_TARGET_AMOUNT).
pub fn format_currency(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i128;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();

    let dollars = (cents / 100).to_string();
    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, digit) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}${}.{:02}", sign, grouped, cents % 100)
}
