use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Ar,
    Fr,
}

/// A text value stored as a default plus per-locale overrides.
///
/// Collapses the `name` / `name_ar` / `name_fr` column triple into one value
/// with a single fallback rule: the override for the requested locale if one
/// exists, the default otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalizedText {
    default: String,
    overrides: HashMap<Locale, String>,
}

impl LocalizedText {
    pub fn new(default: impl Into<String>) -> Self {
        Self {
            default: default.into(),
            overrides: HashMap::new(),
        }
    }

    pub fn with_override(mut self, locale: Locale, text: Option<String>) -> Self {
        if let Some(text) = text {
            self.overrides.insert(locale, text);
        }
        self
    }

    pub fn resolve(&self, locale: Option<Locale>) -> &str {
        locale
            .and_then(|l| self.overrides.get(&l))
            .unwrap_or(&self.default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_override_when_present() {
        let text = LocalizedText::new("Leather bag")
            .with_override(Locale::Fr, Some("Sac en cuir".to_string()));

        assert_eq!(text.resolve(Some(Locale::Fr)), "Sac en cuir");
    }

    #[test]
    fn falls_back_to_default_when_override_missing() {
        let text = LocalizedText::new("Leather bag")
            .with_override(Locale::Fr, Some("Sac en cuir".to_string()));

        assert_eq!(text.resolve(Some(Locale::Ar)), "Leather bag");
        assert_eq!(text.resolve(None), "Leather bag");
    }

    #[test]
    fn none_override_is_not_stored() {
        let text = LocalizedText::new("Leather bag").with_override(Locale::Ar, None);

        assert_eq!(text.resolve(Some(Locale::Ar)), "Leather bag");
    }
}
