use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

// supported languages
//
// the language code is always the first path segment of a page url, so the
// serialized form doubles as the url prefix
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Fr,
    En,
}

pub const SUPPORTED: [Lang; 2] = [Lang::Fr, Lang::En];

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::Fr => "fr",
            Lang::En => "en",
        }
    }

    // exact, lower-case match on the code; this is what the path segment check uses
    pub fn from_code(code: &str) -> Option<Lang> {
        SUPPORTED.into_iter().find(|lang| lang.code() == code)
    }

    pub fn others(self) -> impl Iterator<Item = Lang> {
        SUPPORTED.into_iter().filter(move |lang| *lang != self)
    }

    // the url root of the language, i.e. the home page
    pub fn root(self) -> String {
        format!("/{}", self.code())
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug)]
pub struct UnsupportedLang(pub String);

impl fmt::Display for UnsupportedLang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported language code: {}", self.0)
    }
}

impl std::error::Error for UnsupportedLang {}

impl FromStr for Lang {
    type Err = UnsupportedLang;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lang::from_code(s).ok_or_else(|| UnsupportedLang(s.to_owned()))
    }
}

// a value per language
//
// content tables are written as `LangData { fr: .., en: .. }` consts, so this
// stays a plain struct rather than a map
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct LangData<T> {
    pub fr: T,
    pub en: T,
}

impl<T> LangData<T> {
    pub const fn new(fr: T, en: T) -> Self {
        LangData { fr, en }
    }

    pub fn get(&self, lang: Lang) -> &T {
        match lang {
            Lang::Fr => &self.fr,
            Lang::En => &self.en,
        }
    }
}

impl<T: Copy> LangData<T> {
    pub fn pick(&self, lang: Lang) -> T {
        *self.get(lang)
    }
}

impl<T: Clone> LangData<T> {
    pub fn same(value: T) -> Self {
        LangData {
            fr: value.clone(),
            en: value,
        }
    }
}

// language negotiation
//
// Accept-Language is read in the order the client sent it; quality values are
// ignored, and only the primary subtag is compared ("en-US" counts as "en").  the
// first supported entry wins, otherwise the fallback is returned.
pub fn detect_preferred_lang(header: Option<&str>, fallback: Lang) -> Lang {
    let Some(header) = header else {
        return fallback;
    };

    header
        .split(',')
        .filter_map(|part| part.split(';').next())
        .map(|tag| tag.trim().to_lowercase())
        .find_map(|tag| {
            let primary = tag.split('-').next().unwrap_or_default();
            Lang::from_code(primary)
        })
        .unwrap_or(fallback)
}

pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_paths() {
        assert_eq!(Lang::from_code("fr"), Some(Lang::Fr));
        assert_eq!(Lang::from_code("en"), Some(Lang::En));
        assert_eq!(Lang::from_code("EN"), None);
        assert_eq!(Lang::from_code("de"), None);
        assert_eq!(Lang::En.root(), "/en");
        assert!("it".parse::<Lang>().is_err());
    }

    #[test]
    fn header_missing_or_empty_uses_fallback() {
        assert_eq!(detect_preferred_lang(None, Lang::Fr), Lang::Fr);
        assert_eq!(detect_preferred_lang(Some(""), Lang::En), Lang::En);
    }

    #[test]
    fn header_primary_subtag_is_matched_in_order() {
        let header = "de-DE,de;q=0.9,en-US;q=0.8,fr;q=0.7";
        assert_eq!(detect_preferred_lang(Some(header), Lang::Fr), Lang::En);

        let header = " FR-ca ; q=1, en";
        assert_eq!(detect_preferred_lang(Some(header), Lang::En), Lang::Fr);
    }

    #[test]
    fn header_without_supported_entry_uses_fallback() {
        assert_eq!(detect_preferred_lang(Some("es,it;q=0.5,*"), Lang::Fr), Lang::Fr);
    }

    #[test]
    fn others_excludes_self() {
        assert_eq!(Lang::Fr.others().collect::<Vec<_>>(), vec![Lang::En]);
    }

    #[test]
    fn capitalize_handles_unicode_and_empty() {
        assert_eq!(capitalize("émoji"), "Émoji");
        assert_eq!(capitalize(""), "");
    }
}
