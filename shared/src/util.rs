//! Text utilities for list ordering
//!
//! Rooming lists sort people by surname with Italian collation: accented
//! letters sort together with their base letter (Nicolò between Nicolai
//! and Nicosia, not after Zanetti). Italian names only carry vowel
//! accents, so the fold is a small static table rather than a collator.

/// Extract the sort surname from a display name.
///
/// The roster stores free-form display names entered given-name first
/// ("Maria Rossi"); printed lists sort by the last whitespace-delimited
/// token. Compound surnames ("Gian Piero De Luca") therefore key on their
/// final word, which is how the agency's paper lists were ordered too.
pub fn surname(display_name: &str) -> &str {
    display_name.split_whitespace().last().unwrap_or("")
}

/// Collation fold: lowercase plus accent stripping.
///
/// Characters outside the fold table pass through lowercased, so names
/// from other alphabets still sort deterministically.
pub fn collation_key(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(fold_accent)
        .collect()
}

/// Sort key for a participant display name: the folded surname.
pub fn surname_key(display_name: &str) -> String {
    collation_key(surname(display_name))
}

fn fold_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ä' => 'a',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ò' | 'ó' | 'ô' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surname_last_token() {
        assert_eq!(surname("Maria Rossi"), "Rossi");
        assert_eq!(surname("Gian Piero De Luca"), "Luca");
        assert_eq!(surname("Cher"), "Cher");
        assert_eq!(surname("  spaced   out  "), "out");
        assert_eq!(surname(""), "");
    }

    #[test]
    fn test_collation_folds_accents() {
        assert_eq!(collation_key("Nicolò"), "nicolo");
        assert_eq!(collation_key("PERÙ"), "peru");
        assert_eq!(collation_key("Müller"), "muller");
        assert_eq!(collation_key("François"), "francois");
    }

    #[test]
    fn test_collation_orders_accented_with_base() {
        // Nicolò must land between Nicolai and Nicosia, not after z
        let mut names = vec!["Nicosia", "Nicolò", "Nicolai"];
        names.sort_by_key(|n| collation_key(n));
        assert_eq!(names, vec!["Nicolai", "Nicolò", "Nicosia"]);
    }

    #[test]
    fn test_surname_key() {
        assert_eq!(surname_key("Andrea Perù"), "peru");
        assert_eq!(surname_key(""), "");
    }
}
