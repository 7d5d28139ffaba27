//! Display formatting for prices shown on the dashboard.

/// Compact price string: millions as "x.xx M", thousands as "x.x K".
pub fn format_analysis_price(price: f64) -> String {
    if price >= 1_000_000.0 {
        format!("{:.2} M", price / 1_000_000.0)
    } else if price >= 1_000.0 {
        format!("{:.1} K", price / 1_000.0)
    } else {
        format!("{:.0}", price)
    }
}

/// Replace ASCII digits with Persian (Extended Arabic-Indic) digits.
pub fn to_persian_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => char::from_u32('۰' as u32 + d).unwrap_or(c),
            None => c,
        })
        .collect()
}
