//! Tag normalization
//!
//! Turns the producer's free-form tag strings ("Salud Pública", "#Empleo")
//! into URL/CSS-safe tokens. The same function builds each card's tag set
//! and each filter button's token, so the two always agree.
//!
//! # Example
//! ```
//! use boletin::tags::normalize_tag;
//!
//! assert_eq!(normalize_tag("#Salud Pública"), "salud-publica");
//! assert_eq!(normalize_tag("salud-publica"), "salud-publica");
//! ```

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Normalize a raw tag into a token matching `[a-z0-9]+(-[a-z0-9]+)*`.
///
/// Idempotent: normalizing a token returns it unchanged.
pub fn normalize_tag(raw: &str) -> String {
    let mut token = String::with_capacity(raw.len());
    // Separator seen since the last kept character
    let mut pending_hyphen = false;

    let lowered = raw
        .trim()
        .nfd()
        .filter(|c| !is_combining_diacritic(*c))
        .flat_map(char::to_lowercase);

    for c in lowered {
        if c.is_whitespace() || c == '-' {
            pending_hyphen = true;
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !token.is_empty() {
                token.push('-');
            }
            pending_hyphen = false;
            token.push(c);
        }
    }

    token
}

fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Normalized, deduplicated tags of one entry, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSet(Vec<String>);

impl TagSet {
    /// Build a tag set from raw tags, dropping those that normalize to nothing
    pub fn from_raw<S: AsRef<str>>(raw: &[S]) -> Self {
        let mut tokens: Vec<String> = Vec::with_capacity(raw.len());
        for tag in raw {
            let token = normalize_tag(tag.as_ref());
            if !token.is_empty() && !tokens.contains(&token) {
                tokens.push(token);
            }
        }
        Self(tokens)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|t| t == token)
    }

    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Space-separated form stored in a card's `data-etiquetas` attribute
    pub fn data_attribute(&self) -> String {
        self.0.join(" ")
    }

    /// Display form: `#token` per tag
    pub fn hashtags(&self) -> Vec<String> {
        self.0.iter().map(|t| format!("#{}", t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "Salud",
        "Salud Pública",
        "#Empleo",
        "##Comercio   Exterior",
        "  Energía - Minería  ",
        "Niñez y Adolescencia",
        "Ciencia & Tecnología",
        "a--b",
        "-guion-inicial-",
        "Año 2025",
        "ÁRBOLES",
        "İstanbul",
        "Straße",
        "   ",
        "",
        "日本",
        "salud-publica",
    ];

    #[test]
    fn test_normalize_known_values() {
        assert_eq!(normalize_tag("Salud"), "salud");
        assert_eq!(normalize_tag("Salud Pública"), "salud-publica");
        assert_eq!(normalize_tag("#Empleo"), "empleo");
        assert_eq!(normalize_tag("##Comercio   Exterior"), "comercio-exterior");
        assert_eq!(normalize_tag("  Energía - Minería  "), "energia-mineria");
        assert_eq!(normalize_tag("Niñez y Adolescencia"), "ninez-y-adolescencia");
        assert_eq!(normalize_tag("Año 2025"), "ano-2025");
        assert_eq!(normalize_tag("ÁRBOLES"), "arboles");
    }

    #[test]
    fn test_normalize_drops_disallowed_characters() {
        assert_eq!(normalize_tag("Ciencia & Tecnología"), "ciencia-tecnologia");
        assert_eq!(normalize_tag("a--b"), "a-b");
        assert_eq!(normalize_tag("-guion-inicial-"), "guion-inicial");
        assert_eq!(normalize_tag("Straße"), "strae");
        assert_eq!(normalize_tag("日本"), "");
        assert_eq!(normalize_tag("   "), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in SAMPLES {
            let once = normalize_tag(raw);
            let twice = normalize_tag(&once);
            assert_eq!(once, twice, "not idempotent for {:?}", raw);
        }
    }

    #[test]
    fn test_normalize_output_alphabet() {
        for raw in SAMPLES {
            let token = normalize_tag(raw);
            assert!(token
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
            assert!(!token.starts_with('-') && !token.ends_with('-'));
            assert!(!token.contains("--"));
        }
    }

    #[test]
    fn test_tag_set_dedups_and_drops_empty() {
        let set = TagSet::from_raw(&["Salud", "#salud", "   ", "Empleo"]);

        assert_eq!(set.tokens(), &["salud".to_string(), "empleo".to_string()]);
        assert!(set.contains("salud"));
        assert!(!set.contains("Salud"));
        assert_eq!(set.data_attribute(), "salud empleo");
        assert_eq!(set.hashtags(), vec!["#salud", "#empleo"]);
    }
}
