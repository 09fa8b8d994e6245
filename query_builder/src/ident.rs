//! Identifier quoting
//!
//! Field and table names are quoted with the dialect's quote character.
//! Dotted paths (`table.column`) are split and each segment is quoted
//! independently; `*`, bare integer literals and pre-quoted segments pass
//! through untouched.

/// Quote a possibly dotted identifier path
pub fn quote_path(name: &str, quote: char) -> String {
    let trimmed = name.trim();
    if trimmed == "*" {
        return trimmed.to_string();
    }

    trimmed
        .split('.')
        .map(|segment| quote_segment(segment, quote))
        .collect::<Vec<_>>()
        .join(".")
}

fn quote_segment(segment: &str, quote: char) -> String {
    if segment == "*" || is_integer_literal(segment) || is_quoted(segment, quote) {
        return segment.to_string();
    }

    let mut quoted = String::with_capacity(segment.len() + 2);
    quoted.push(quote);
    for c in segment.chars() {
        quoted.push(c);
        // escape embedded quote characters by doubling
        if c == quote {
            quoted.push(quote);
        }
    }
    quoted.push(quote);
    quoted
}

fn is_integer_literal(segment: &str) -> bool {
    !segment.is_empty() && segment.chars().all(|c| c.is_ascii_digit())
}

fn is_quoted(segment: &str, quote: char) -> bool {
    segment.len() >= 2 && segment.starts_with(quote) && segment.ends_with(quote)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unqualified_name_quoted_once() {
        assert_eq!(quote_path("name", '`'), "`name`");
        assert_eq!(quote_path("name", '"'), "\"name\"");
    }

    #[test]
    fn test_dotted_path_quotes_each_segment() {
        assert_eq!(quote_path("users.name", '`'), "`users`.`name`");
        assert_eq!(quote_path("a.b.c", '"'), "\"a\".\"b\".\"c\"");
    }

    #[test]
    fn test_star_passes_through() {
        assert_eq!(quote_path("*", '`'), "*");
        assert_eq!(quote_path("users.*", '`'), "`users`.*");
    }

    #[test]
    fn test_integer_literal_passes_through() {
        assert_eq!(quote_path("1", '`'), "1");
    }

    #[test]
    fn test_already_quoted_segment_untouched() {
        assert_eq!(quote_path("`users`.name", '`'), "`users`.`name`");
    }

    #[test]
    fn test_embedded_quote_is_doubled() {
        assert_eq!(quote_path("we`ird", '`'), "`we``ird`");
        assert_eq!(quote_path("we\"ird", '"'), "\"we\"\"ird\"");
    }

    #[test]
    fn test_whitespace_trimmed() {
        assert_eq!(quote_path("  name  ", '`'), "`name`");
    }
}
