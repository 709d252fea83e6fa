//! # Tabular Row Parser
//!
//! Single-pass tokenizer for one CSV line with RFC 4180 style quoting: a `"` toggles
//! quote mode, `""` inside quotes is a literal quote, and `,` separates fields only
//! outside quotes. Fields are trimmed after quote resolution.

/// Split a CSV line into trimmed fields
///
/// # Examples
///
/// ```rust
/// use meal_planner::row_parser::parse_row;
///
/// assert_eq!(parse_row(r#"a,"b,c",d"#), vec!["a", "b,c", "d"]);
/// assert_eq!(parse_row(r#"a,"b""c",d"#), vec!["a", "b\"c", "d"]);
/// assert_eq!(parse_row("a,,"), vec!["a", "", ""]);
/// ```
pub fn parse_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }

    fields.push(current.trim().to_string());
    fields
}

/// Quote a field for output when it contains a separator, a quote or a line break
///
/// The inverse of the quoting rules [`parse_row`] understands.
pub fn quote_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_fields() {
        assert_eq!(parse_row("Lunes,Desayuno,Huevo,2pza"), vec!["Lunes", "Desayuno", "Huevo", "2pza"]);
    }

    #[test]
    fn test_quoted_separator() {
        assert_eq!(parse_row(r#"a,"b,c",d"#), vec!["a", "b,c", "d"]);
    }

    #[test]
    fn test_escaped_quote() {
        assert_eq!(parse_row(r#"a,"b""c",d"#), vec!["a", "b\"c", "d"]);
    }

    #[test]
    fn test_empty_fields() {
        assert_eq!(parse_row("a,,c"), vec!["a", "", "c"]);
        assert_eq!(parse_row("a,b,"), vec!["a", "b", ""]);
        assert_eq!(parse_row(""), vec![""]);
    }

    #[test]
    fn test_whitespace_trimmed_after_quotes() {
        assert_eq!(parse_row(r#"  a , " b " ,c "#), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_unterminated_quote_keeps_rest() {
        assert_eq!(parse_row(r#"a,"b,c"#), vec!["a", "b,c"]);
    }

    #[test]
    fn test_quote_field_round_trips() {
        let fields = ["plain", "with,comma", "say \"hi\""];
        let line = fields.iter().map(|f| quote_field(f)).collect::<Vec<_>>().join(",");
        assert_eq!(parse_row(&line), fields);
    }
}
