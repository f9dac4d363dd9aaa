//! Text matching helpers

/// Whether `haystack` contains `needle` verbatim. An empty needle never
/// matches.
pub fn contains_text(haystack: &str, needle: &str) -> bool {
    !needle.is_empty() && haystack.contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_text() {
        assert!(contains_text("\n  Iniciar Sesión\n", "Iniciar Sesión"));
        assert!(!contains_text("Iniciar sesión", "Iniciar Sesión"));
        assert!(!contains_text("anything", ""));
        // Whitespace in the needle is matched as-is
        assert!(contains_text("  Iniciar Sesión  ", " Iniciar Sesión "));
    }
}
