//! Утилиты форматирования чисел для таблиц

/// Форматирует число с разделителем тысяч и указанным количеством знаков после запятой
///
/// # Примеры
///
/// ```rust,ignore
/// let formatted = format_number_with_separator(1234.567, 2, ',');
/// assert_eq!(formatted, "1,234.57");
/// ```
pub fn format_number_with_separator(value: f64, decimals: u8, separator: char) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        2 => format!("{:.2}", value),
        3 => format!("{:.3}", value),
        _ => format!("{:.2}", value), // По умолчанию 2 знака
    };

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    // Вставляем разделитель каждые 3 цифры с конца целой части
    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(separator);
        }
        result.push(*c);
    }

    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Форматирует сумму в долларах США (en-US): "$1,234.56", "-$1,234.56"
pub fn format_currency(value: f64) -> String {
    let digits = format_number_with_separator(value.abs(), 2, ',');
    if value < 0.0 && digits != "0.00" {
        format!("-${}", digits)
    } else {
        format!("${}", digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234.56), "$1,234.56");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(99.5), "$99.50");
        assert_eq!(format_currency(-1234.56), "-$1,234.56");
        assert_eq!(format_currency(-0.001), "$0.00");
    }

    #[test]
    fn test_format_number_with_separator() {
        assert_eq!(format_number_with_separator(1234.567, 0, ','), "1,235");
        assert_eq!(format_number_with_separator(1234.567, 1, ' '), "1 234.6");
        assert_eq!(format_number_with_separator(1234.567, 3, ','), "1,234.567");
        assert_eq!(format_number_with_separator(-1234.0, 0, ','), "-1,234");
        assert_eq!(format_number_with_separator(-123.0, 0, ','), "-123");
    }
}
