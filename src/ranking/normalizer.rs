//! Text normalization for keyword matching and vectorization

/// Lowercase and collapse whitespace so that substring and token checks
/// behave the same regardless of how the source document was laid out.
/// Pure and deterministic; empty input yields an empty string.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases() {
        assert_eq!(normalize("Python Developer"), "python developer");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize("  SQL\n\tand   Rust  "), "sql and rust");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t  "), "");
    }

    #[test]
    fn test_deterministic() {
        let text = "Senior Engineer\nPython, SQL";
        assert_eq!(normalize(text), normalize(text));
    }
}
