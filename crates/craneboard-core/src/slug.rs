//! URL slug generation for technology pages.

/// Turn a title into a URL-safe slug.
///
/// Lowercases the input, keeps ASCII alphanumerics, and joins the remaining
/// runs with single hyphens: `"3 C++ / Systems"` becomes `"3-c-systems"`.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_separator = false;

    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_basic() {
        assert_eq!(slugify("Rust"), "rust");
        assert_eq!(slugify("1 Rust"), "1-rust");
        assert_eq!(slugify("12 TypeScript"), "12-typescript");
    }

    #[test]
    fn test_collapses_symbol_runs() {
        assert_eq!(slugify("C++"), "c");
        assert_eq!(slugify("3 C++ / Systems"), "3-c-systems");
        assert_eq!(slugify("  spaced   out  "), "spaced-out");
    }

    #[test]
    fn test_empty_and_symbol_only() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("+++"), "");
    }
}
