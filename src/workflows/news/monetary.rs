use regex::Regex;
use std::sync::OnceLock;

const MILLION: f64 = 1_000_000.0;
const BILLION: f64 = 1_000_000_000.0;

fn patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            r"R\$\s*([\d.,]+)",
            r"([\d.,]+)\s*(?:milhões|milhão)",
            r"([\d.,]+)\s*(?:bilhões|bilhão)",
        ]
        .into_iter()
        .map(|pattern| Regex::new(pattern).expect("monetary pattern compiles"))
        .collect()
    })
}

fn grouped_thousands() -> &'static Regex {
    static GROUPED: OnceLock<Regex> = OnceLock::new();
    GROUPED.get_or_init(|| {
        Regex::new(r"^\d{1,3}(?:[.,]\d{3})+$").expect("grouping pattern compiles")
    })
}

fn brazilian_decimal() -> &'static Regex {
    static DECIMAL: OnceLock<Regex> = OnceLock::new();
    DECIMAL.get_or_init(|| {
        Regex::new(r"^\d{1,3}(?:\.\d{3})*,\d{1,2}$").expect("decimal pattern compiles")
    })
}

/// Reads the first currency amount out of a headline.
///
/// Returns 0.0 when no pattern yields a parseable numeral. The million or
/// billion scale applies whenever the unit word occurs anywhere in the title.
pub fn extract_monetary_value(title: &str) -> f64 {
    for pattern in patterns() {
        let Some(captures) = pattern.captures(title) else {
            continue;
        };
        let Some(value) = captures.get(1).and_then(|m| parse_numeral(m.as_str())) else {
            continue;
        };

        return value * scale_for(title);
    }

    0.0
}

fn scale_for(title: &str) -> f64 {
    if title.contains("milhões") || title.contains("milhão") {
        MILLION
    } else if title.contains("bilhões") || title.contains("bilhão") {
        BILLION
    } else {
        1.0
    }
}

/// `500,000` and `500.000` are both thousands groupings and `1.000,50` uses
/// the Brazilian decimal comma; anything else keeps `.` as the decimal point.
fn parse_numeral(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_end_matches(['.', ',']);
    let normalized = if brazilian_decimal().is_match(trimmed) {
        trimmed.replace('.', "").replace(',', ".")
    } else if grouped_thousands().is_match(trimmed) {
        trimmed.replace(['.', ','], "")
    } else {
        trimmed.replace(',', "")
    };
    normalized.parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotted_thousands_after_currency_symbol() {
        assert_eq!(
            extract_monetary_value("Fraude causa prejuízo de R$ 500.000"),
            500_000.0
        );
    }

    #[test]
    fn comma_grouping_from_generated_titles() {
        assert_eq!(
            extract_monetary_value("Consumidores perdem R$ 1,000,000 com fraudes em compras online"),
            1_000_000.0
        );
    }

    #[test]
    fn million_word_scales_bare_numbers() {
        assert_eq!(extract_monetary_value("Prejuízo de 2 milhões"), 2_000_000.0);
        assert_eq!(extract_monetary_value("Rombo de 1 milhão"), 1_000_000.0);
        assert_eq!(
            extract_monetary_value("Ataque custa 3 bilhões ao setor"),
            3_000_000_000.0
        );
    }

    #[test]
    fn unit_word_scales_currency_match_too() {
        assert_eq!(
            extract_monetary_value("Fraudes online causam prejuízo de R$ 100,000 milhões no Brasil"),
            100_000.0 * 1_000_000.0
        );
    }

    #[test]
    fn titles_without_amounts_yield_zero() {
        assert_eq!(
            extract_monetary_value("Banco alerta para novo golpe de phishing via WhatsApp"),
            0.0
        );
        assert_eq!(extract_monetary_value("Crimes digitais crescem 45% durante pandemia"), 0.0);
    }

    #[test]
    fn malformed_numeral_falls_through_to_next_pattern() {
        assert_eq!(extract_monetary_value("Custo em R$ ... chega a 4 milhões"), 4_000_000.0);
        assert_eq!(extract_monetary_value("Valor: R$ ,"), 0.0);
    }

    #[test]
    fn brazilian_decimal_comma_after_dotted_thousands() {
        assert_eq!(
            extract_monetary_value("Golpe desvia R$ 1.000.000,50 de correntistas"),
            1_000_000.5
        );
        assert_eq!(extract_monetary_value("Multa de R$ 250,75"), 250.75);
        assert_eq!(extract_monetary_value("Perdas de R$ 2,5 milhões"), 2_500_000.0);
    }

    #[test]
    fn decimal_point_is_kept_when_not_a_grouping() {
        assert_eq!(extract_monetary_value("Perdas de 2.5 milhões"), 2_500_000.0);
    }
}
