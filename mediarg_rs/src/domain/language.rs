//! Languages accepted by `--lang`.
//!
//! A language can be named by its ISO 639-1 code (`en`), either ISO 639-2 code
//! (`eng`, or the bibliographic `ger` next to terminological `deu`), or its
//! English name (`English`). There is no fallback: the `--lang` option itself
//! carries the `en` default, so an explicit value that matches nothing is
//! always an error.

use std::fmt;

use serde::Serialize;

use crate::error::IllegalValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Language {
    /// Two-letter ISO 639-1 code.
    pub code: &'static str,
    /// Three-letter ISO 639-2/T code.
    pub iso3: &'static str,
    /// Three-letter ISO 639-2/B code; equal to `iso3` for most languages.
    #[serde(skip)]
    pub iso3b: &'static str,
    /// English display name.
    pub name: &'static str,
}

const fn lang(
    code: &'static str,
    iso3: &'static str,
    iso3b: &'static str,
    name: &'static str,
) -> Language {
    Language {
        code,
        iso3,
        iso3b,
        name,
    }
}

const LANGUAGES: &[Language] = &[
    lang("en", "eng", "eng", "English"),
    lang("de", "deu", "ger", "German"),
    lang("fr", "fra", "fre", "French"),
    lang("es", "spa", "spa", "Spanish"),
    lang("it", "ita", "ita", "Italian"),
    lang("pt", "por", "por", "Portuguese"),
    lang("nl", "nld", "dut", "Dutch"),
    lang("sv", "swe", "swe", "Swedish"),
    lang("da", "dan", "dan", "Danish"),
    lang("no", "nor", "nor", "Norwegian"),
    lang("fi", "fin", "fin", "Finnish"),
    lang("is", "isl", "ice", "Icelandic"),
    lang("pl", "pol", "pol", "Polish"),
    lang("cs", "ces", "cze", "Czech"),
    lang("sk", "slk", "slo", "Slovak"),
    lang("sl", "slv", "slv", "Slovenian"),
    lang("hr", "hrv", "hrv", "Croatian"),
    lang("sr", "srp", "srp", "Serbian"),
    lang("bs", "bos", "bos", "Bosnian"),
    lang("bg", "bul", "bul", "Bulgarian"),
    lang("ro", "ron", "rum", "Romanian"),
    lang("hu", "hun", "hun", "Hungarian"),
    lang("el", "ell", "gre", "Greek"),
    lang("tr", "tur", "tur", "Turkish"),
    lang("ru", "rus", "rus", "Russian"),
    lang("uk", "ukr", "ukr", "Ukrainian"),
    lang("be", "bel", "bel", "Belarusian"),
    lang("et", "est", "est", "Estonian"),
    lang("lv", "lav", "lav", "Latvian"),
    lang("lt", "lit", "lit", "Lithuanian"),
    lang("mk", "mkd", "mac", "Macedonian"),
    lang("sq", "sqi", "alb", "Albanian"),
    lang("ar", "ara", "ara", "Arabic"),
    lang("he", "heb", "heb", "Hebrew"),
    lang("fa", "fas", "per", "Persian"),
    lang("hi", "hin", "hin", "Hindi"),
    lang("bn", "ben", "ben", "Bengali"),
    lang("ur", "urd", "urd", "Urdu"),
    lang("ta", "tam", "tam", "Tamil"),
    lang("te", "tel", "tel", "Telugu"),
    lang("th", "tha", "tha", "Thai"),
    lang("vi", "vie", "vie", "Vietnamese"),
    lang("id", "ind", "ind", "Indonesian"),
    lang("ms", "msa", "may", "Malay"),
    lang("tl", "tgl", "tgl", "Tagalog"),
    lang("zh", "zho", "chi", "Chinese"),
    lang("ja", "jpn", "jpn", "Japanese"),
    lang("ko", "kor", "kor", "Korean"),
    lang("ca", "cat", "cat", "Catalan"),
    lang("eu", "eus", "baq", "Basque"),
    lang("gl", "glg", "glg", "Galician"),
    lang("cy", "cym", "wel", "Welsh"),
    lang("ga", "gle", "gle", "Irish"),
    lang("ka", "kat", "geo", "Georgian"),
    lang("hy", "hye", "arm", "Armenian"),
    lang("af", "afr", "afr", "Afrikaans"),
    lang("sw", "swa", "swa", "Swahili"),
    lang("eo", "epo", "epo", "Esperanto"),
    lang("la", "lat", "lat", "Latin"),
];

const EXPECTED: &[&str] = &["2-letter code", "3-letter code", "English language name"];

impl Language {
    pub const ENGLISH: Language = LANGUAGES[0];

    /// Find a language by code or name, ignoring case.
    pub fn find(raw: &str) -> Option<Self> {
        let needle = raw.trim();
        if needle.is_empty() {
            return None;
        }
        LANGUAGES
            .iter()
            .find(|language| {
                language.code.eq_ignore_ascii_case(needle)
                    || language.iso3.eq_ignore_ascii_case(needle)
                    || language.iso3b.eq_ignore_ascii_case(needle)
                    || language.name.eq_ignore_ascii_case(needle)
            })
            .copied()
    }

    /// Resolve a language value. Unlike the other mappers, absence is an error.
    pub fn from_option(raw: Option<&str>) -> Result<Self, IllegalValue> {
        let raw = raw.unwrap_or_default();
        Self::find(raw).ok_or_else(|| IllegalValue::new("--lang", raw, EXPECTED.to_vec()))
    }

    pub fn all() -> &'static [Language] {
        LANGUAGES
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
