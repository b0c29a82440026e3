/// Rounds to the nearest integer and groups thousands with commas (en-US).
pub fn format_number(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}{}", group_digits(&format!("{:.0}", rounded.abs())))
}

/// US dollars with thousands grouping and no fraction digits.
pub fn format_currency(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_digits(&format!("{:.0}", rounded.abs())))
}

/// Percentages keep their natural precision: `5`, `7.5`.
pub fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_grouped_and_rounded() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.4), "999");
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(1_234_567.6), "1,234,568");
        assert_eq!(format_number(-2500.0), "-2,500");
    }

    #[test]
    fn currency_has_no_fraction_digits() {
        assert_eq!(format_currency(125_000.0), "$125,000");
        assert_eq!(format_currency(12.5), "$13");
    }

    #[test]
    fn percents_drop_trailing_zero() {
        assert_eq!(format_percent(5.0), "5");
        assert_eq!(format_percent(7.5), "7.5");
    }
}
