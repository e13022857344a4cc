//! Display-side localization: label tables and currency formatting for the
//! two supported languages. Nothing in `core` depends on this module.

mod format;
mod strings;

pub use format::{format_currency, format_percent};
pub use strings::{LabelKey, frequency_label, label, labels};

use serde::Serialize;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "no")]
    Norwegian,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::English, Locale::Norwegian];

    /// Accepts bare language tags and region-qualified ones (`nb-NO`, `en_US`).
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Locale::English),
            "no" | "nb" | "nn" => Some(Locale::Norwegian),
            _ => None,
        }
    }

    /// Like `from_code`, but unknown or missing codes fall back to English.
    pub fn resolve(code: Option<&str>) -> Self {
        match code {
            None => Locale::default(),
            Some(code) => Self::from_code(code).unwrap_or_else(|| {
                log::warn!("unsupported language '{code}', falling back to English");
                Locale::default()
            }),
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Norwegian => "no",
        }
    }

    pub fn lang_code(self) -> &'static str {
        match self {
            Locale::English => "en-US",
            Locale::Norwegian => "nb-NO",
        }
    }

    pub fn currency_code(self) -> &'static str {
        match self {
            Locale::English => "USD",
            Locale::Norwegian => "NOK",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_accepts_region_tags_and_norwegian_variants() {
        assert_eq!(Locale::from_code("en"), Some(Locale::English));
        assert_eq!(Locale::from_code("EN-us"), Some(Locale::English));
        assert_eq!(Locale::from_code("no"), Some(Locale::Norwegian));
        assert_eq!(Locale::from_code("nb_NO"), Some(Locale::Norwegian));
        assert_eq!(Locale::from_code(" nn "), Some(Locale::Norwegian));
        assert_eq!(Locale::from_code("de"), None);
        assert_eq!(Locale::from_code(""), None);
    }

    #[test]
    fn resolve_falls_back_to_english() {
        assert_eq!(Locale::resolve(None), Locale::English);
        assert_eq!(Locale::resolve(Some("fr")), Locale::English);
        assert_eq!(Locale::resolve(Some("no")), Locale::Norwegian);
    }

    #[test]
    fn codes_round_trip_through_from_code() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
            assert_eq!(Locale::from_code(locale.lang_code()), Some(locale));
        }
        assert_eq!(Locale::Norwegian.currency_code(), "NOK");
        assert_eq!(Locale::English.currency_code(), "USD");
    }
}
