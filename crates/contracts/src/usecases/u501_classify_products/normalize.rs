/// Normalize a product description as the operator types it.
///
/// The text is uppercased, then only `A-Z`, the Latin-1 capitals `À`..=`Ü`
/// (U+00C0..=U+00DC), digits and the plain space are kept. Runs of spaces are
/// preserved.
pub fn normalize_description(input: &str) -> String {
    input
        .to_uppercase()
        .chars()
        .filter(|c| is_allowed(*c))
        .collect()
}

fn is_allowed(c: char) -> bool {
    matches!(c, 'A'..='Z' | '\u{C0}'..='\u{DC}' | '0'..='9' | ' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accented_letters_are_kept() {
        assert_eq!(normalize_description("café  3x!"), "CAFÉ  3X");
        assert_eq!(normalize_description("pão de açúcar"), "PÃO DE AÇÚCAR");
    }

    #[test]
    fn test_punctuation_is_removed() {
        assert_eq!(normalize_description("refri-cola 2,5l."), "REFRICOLA 25L");
        assert_eq!(normalize_description("a\tb\nc"), "ABC");
    }

    #[test]
    fn test_characters_outside_range_are_removed() {
        // ÿ uppercases to Ÿ (U+0178), outside the kept range
        assert_eq!(normalize_description("ÿes"), "ES");
        assert_eq!(normalize_description("ñandu"), "ÑANDU");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize_description("Feijão 1kg (tipo 1)");
        assert_eq!(normalize_description(&once), once);
    }
}
