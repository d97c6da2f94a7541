use crate::workflows::news::group_thousands;

pub fn count(value: u64) -> String {
    group_thousands(value)
}

/// `R$ 1,234,567.89` style amount.
pub fn brl(value: f64) -> String {
    if !value.is_finite() {
        return "R$ n/a".to_string();
    }
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{sign}R$ {}.{:02}",
        group_thousands(cents / 100),
        cents % 100
    )
}

pub fn percent(ratio: Option<f64>) -> String {
    match ratio {
        Some(value) => format!("{:.1}%", value * 100.0),
        None => "n/a".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_currency_with_grouping_and_cents() {
        assert_eq!(brl(0.0), "R$ 0.00");
        assert_eq!(brl(1_234_567.891), "R$ 1,234,567.89");
        assert_eq!(brl(500_000.0), "R$ 500,000.00");
    }

    #[test]
    fn undefined_ratios_render_as_not_available() {
        assert_eq!(percent(None), "n/a");
        assert_eq!(percent(Some(0.731)), "73.1%");
    }
}
