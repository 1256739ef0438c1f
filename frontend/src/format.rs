use rust_decimal::{Decimal, RoundingStrategy};

fn format_with_commas(digits: &str) -> String {
    let chars = digits.chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

/// Formats a dollar amount with thousands separators and at most two
/// fraction digits, dropping trailing zeros: `1234.50` -> `$1,234.5`.
pub fn format_money(amount: Decimal) -> String {
    let sign = if amount.is_sign_negative() && !amount.is_zero() {
        "-"
    } else {
        ""
    };
    let plain = amount
        .abs()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string();
    let (whole, fraction) = match plain.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (plain.as_str(), None),
    };
    match fraction {
        Some(fraction) => format!("{}${}.{}", sign, format_with_commas(whole), fraction),
        None => format!("{}${}", sign, format_with_commas(whole)),
    }
}

pub fn format_signed(amount: Decimal, outflow: bool) -> String {
    format!("{}{}", if outflow { "-" } else { "+" }, format_money(amount.abs()))
}

pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value)
}
