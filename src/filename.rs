//! Download file names derived from the person's name.

use chrono::NaiveDate;
use unicode_normalization::UnicodeNormalization;

/// Extension of exported documents.
pub const FILE_EXTENSION: &str = "doc";

/// Accented letters kept alongside ASCII letters and digits.
const ALLOWED_ACCENTED: &str = "áéíóúñüÁÉÍÓÚÑÜ";

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || ALLOWED_ACCENTED.contains(c)
}

/// Reduce a name to a file-name-safe stem.
///
/// The name is NFC-normalized, every character outside the allow-list
/// (ASCII letters and digits, `áéíóúñü` in both cases, whitespace) is
/// dropped, whitespace runs become a single `_`, and the result is cut to
/// `max_len` characters. Whitespace before the first or after the last kept
/// character never becomes a separator.
pub fn sanitize_name(name: &str, max_len: usize) -> String {
    let mut stem = String::with_capacity(name.len());
    let mut pending_space = false;

    for c in name.trim().nfc() {
        if c.is_whitespace() {
            pending_space = true;
        } else if is_allowed(c) {
            if pending_space && !stem.is_empty() {
                stem.push('_');
            }
            pending_space = false;
            stem.push(c);
        }
    }

    stem.chars().take(max_len).collect()
}

/// Build `<prefix>_<stem>_<YYYY-MM-DD>.doc`.
///
/// An empty stem gives `<prefix>_<YYYY-MM-DD>.doc`.
pub fn file_name(name: &str, date: NaiveDate, prefix: &str, max_len: usize) -> String {
    let stem = sanitize_name(name, max_len);
    let date = date.format("%Y-%m-%d");
    if stem.is_empty() {
        format!("{}_{}.{}", prefix, date, FILE_EXTENSION)
    } else {
        format!("{}_{}_{}.{}", prefix, stem, date, FILE_EXTENSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn test_sanitize_keeps_accents_and_collapses_spaces() {
        assert_eq!(sanitize_name("José  O'Brien!!", 50), "José_OBrien");
        assert_eq!(sanitize_name("Ñandú Müller", 50), "Ñandú_Müller");
    }

    #[test]
    fn test_sanitize_drops_disallowed_letters() {
        // ç and è are outside the allow-list.
        assert_eq!(sanitize_name("François Lefèvre", 50), "Franois_Lefvre");
    }

    #[test]
    fn test_sanitize_normalizes_decomposed_input() {
        // "e" + combining acute accent
        assert_eq!(sanitize_name("Jose\u{0301}", 50), "José");
    }

    #[test]
    fn test_sanitize_whitespace_around_removed_chars() {
        // Removed punctuation between spaces still leaves one separator.
        assert_eq!(sanitize_name("Ana - Pérez", 50), "Ana_Pérez");
        assert_eq!(sanitize_name("  Ana\t\nPérez  ", 50), "Ana_Pérez");
    }

    #[test]
    fn test_sanitize_no_separator_at_edges() {
        // Spaces left at either end by dropped punctuation are not kept.
        assert_eq!(sanitize_name("Ana !!", 50), "Ana");
        assert_eq!(sanitize_name("!! Ana", 50), "Ana");
        assert_eq!(sanitize_name("¡ Ana Pérez !", 50), "Ana_Pérez");
    }

    #[test]
    fn test_sanitize_truncates_by_chars() {
        let long = "á".repeat(80);
        let stem = sanitize_name(&long, 50);
        assert_eq!(stem.chars().count(), 50);
    }

    #[test]
    fn test_file_name() {
        assert_eq!(
            file_name("María García", date(), "CV", 50),
            "CV_María_García_2026-10-16.doc"
        );
        assert_eq!(file_name("!!!", date(), "CV", 50), "CV_2026-10-16.doc");
    }
}
