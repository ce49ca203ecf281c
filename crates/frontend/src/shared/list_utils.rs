//! Утилиты сортировки и форматирования для страниц списков

/// Следующее состояние сортировки при клике на заголовок колонки:
/// повторный клик по активной колонке меняет направление, новая колонка начинает с `asc`
pub fn next_sort(current_by: Option<&str>, current_order: &str, field: &str) -> (String, &'static str) {
    let is_active = current_by == Some(field);
    let order = if is_active && !current_order.eq_ignore_ascii_case("desc") {
        "desc"
    } else {
        "asc"
    };
    (field.to_string(), order)
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current_by: Option<&str>, field: &str, descending: bool) -> &'static str {
    if current_by == Some(field) {
        if descending { " ▼" } else { " ▲" }
    } else {
        " ⇅"
    }
}

/// CSS класс индикатора сортировки
pub fn get_sort_class(current_by: Option<&str>, field: &str) -> &'static str {
    if current_by == Some(field) {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Сумма с разделителем тысяч (пробел) и двумя знаками после точки
pub fn format_amount(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (integer, fraction) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let digits: Vec<char> = integer.chars().collect();
    let grouped = digits
        .rchunks(3)
        .rev()
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ");

    let sign = if value < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_sort() {
        assert_eq!(next_sort(None, "asc", "amount"), ("amount".to_string(), "asc"));
        assert_eq!(next_sort(Some("amount"), "asc", "amount"), ("amount".to_string(), "desc"));
        assert_eq!(next_sort(Some("amount"), "DESC", "amount"), ("amount".to_string(), "asc"));
        assert_eq!(next_sort(Some("amount"), "desc", "customer"), ("customer".to_string(), "asc"));
    }

    #[test]
    fn test_sort_indicator_and_class() {
        assert_eq!(get_sort_indicator(Some("amount"), "amount", false), " ▲");
        assert_eq!(get_sort_indicator(Some("amount"), "amount", true), " ▼");
        assert_eq!(get_sort_indicator(None, "amount", true), " ⇅");
        assert!(get_sort_class(Some("amount"), "amount").ends_with("--active"));
        assert_eq!(get_sort_class(Some("customer"), "amount"), "table__sort-indicator");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(999.5), "999.50");
        assert_eq!(format_amount(1234.567), "1 234.57");
        assert_eq!(format_amount(1234567.0), "1 234 567.00");
        assert_eq!(format_amount(-52000.0), "-52 000.00");
        assert_eq!(format_amount(-0.001), "0.00");
    }
}
