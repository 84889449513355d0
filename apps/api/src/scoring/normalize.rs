//! Text Normalizer — lowercases and strips raw text down to a matchable token stream.
//!
//! Kept characters: `a-z`, `0-9`, `-`, `/`, `+`, `#`, `.` (so `c++`, `c#`, `node.js`,
//! `ci/cd` survive intact). Everything else becomes a separator.

/// Returns true for characters that survive normalization.
fn is_token_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '/' | '+' | '#' | '.')
}

/// Lowercases `text`, replaces every character outside the token alphabet with a space,
/// collapses whitespace runs, and trims. Total: empty input yields an empty string.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut normalized = String::with_capacity(lowered.len());

    for token in lowered.split(|c: char| !is_token_char(c)) {
        if token.is_empty() {
            continue;
        }
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(token);
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_collapses_whitespace() {
        assert_eq!(normalize("  Senior   RUST\tEngineer\n"), "senior rust engineer");
    }

    #[test]
    fn test_preserves_symbol_tokens() {
        assert_eq!(
            normalize("C++, C#, Node.js and CI/CD (k8s-ready)!"),
            "c++ c# node.js and ci/cd k8s-ready"
        );
    }

    #[test]
    fn test_empty_and_symbol_only_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("!!! ??? ***"), "");
    }

    #[test]
    fn test_non_ascii_letters_become_separators() {
        assert_eq!(normalize("Café Résumé"), "caf r sum");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize("Built REST APIs @ Scale: 10x throughput.");
        assert_eq!(normalize(&once), once);
    }
}
