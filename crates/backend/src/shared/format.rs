/// Форматирует число с разделителями тысяч (точками)
///
/// Используется логгером запросов для размера ответа.
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result
}
