use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount as US currency, e.g. `$1,299.99` or `-$5.00`.
pub fn currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let digits = format!("{:.2}", rounded.abs());
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

/// Short date, month/day/year without padding: `1/5/2027`.
pub fn short_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_groups_thousands() {
        assert_eq!(currency(Decimal::new(129999, 2)), "$1,299.99");
        assert_eq!(currency(Decimal::new(1234567890, 2)), "$12,345,678.90");
        assert_eq!(currency(Decimal::from(100)), "$100.00");
        assert_eq!(currency(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn test_currency_rounds_half_away_from_zero() {
        assert_eq!(currency(Decimal::new(1005, 3)), "$1.01");
        assert_eq!(currency(Decimal::new(-500, 2)), "-$5.00");
    }

    #[test]
    fn test_short_date() {
        let date = NaiveDate::from_ymd_opt(2027, 1, 5).unwrap();
        assert_eq!(short_date(date), "1/5/2027");
    }
}
