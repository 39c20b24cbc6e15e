//! Character encodings for text output (`--encoding`).

use std::fmt;

use serde::Serialize;

use crate::error::IllegalValue;

/// A supported character set, identified by its canonical IANA name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Encoding {
    name: &'static str,
}

struct Charset {
    name: &'static str,
    aliases: &'static [&'static str],
}

const CHARSETS: &[Charset] = &[
    Charset { name: "UTF-8", aliases: &["utf8", "unicode-1-1-utf-8"] },
    Charset { name: "UTF-16", aliases: &["utf16"] },
    Charset { name: "UTF-16BE", aliases: &["utf16be", "unicodebigunmarked"] },
    Charset { name: "UTF-16LE", aliases: &["utf16le", "unicodelittleunmarked"] },
    Charset { name: "US-ASCII", aliases: &["ascii", "iso646-us", "default"] },
    Charset { name: "ISO-8859-1", aliases: &["latin1", "iso8859_1", "iso_8859-1", "l1"] },
    Charset { name: "ISO-8859-15", aliases: &["latin9", "iso8859_15", "latin-9"] },
    Charset { name: "windows-1250", aliases: &["cp1250"] },
    Charset { name: "windows-1251", aliases: &["cp1251"] },
    Charset { name: "windows-1252", aliases: &["cp1252"] },
    Charset { name: "Shift_JIS", aliases: &["sjis", "shift-jis", "ms_kanji"] },
    Charset { name: "EUC-JP", aliases: &["eucjp", "euc_jp"] },
    Charset { name: "GBK", aliases: &["cp936", "windows-936"] },
    Charset { name: "Big5", aliases: &["csbig5"] },
    Charset { name: "KOI8-R", aliases: &["koi8", "cskoi8r"] },
];

impl Encoding {
    pub const UTF_8: Encoding = Encoding { name: "UTF-8" };

    /// Look up a charset by canonical name or alias, ignoring case.
    pub fn for_name(raw: &str) -> Result<Self, IllegalValue> {
        let needle = raw.trim();
        CHARSETS
            .iter()
            .find(|charset| {
                charset.name.eq_ignore_ascii_case(needle)
                    || charset
                        .aliases
                        .iter()
                        .any(|alias| alias.eq_ignore_ascii_case(needle))
            })
            .map(|charset| Encoding { name: charset.name })
            .ok_or_else(|| {
                IllegalValue::new(
                    "--encoding",
                    raw,
                    CHARSETS.iter().map(|charset| charset.name).collect(),
                )
            })
    }

    /// Resolve `--encoding`; absence leaves the platform default to the caller.
    pub fn from_option(raw: Option<&str>) -> Result<Option<Self>, IllegalValue> {
        raw.map(Self::for_name).transpose()
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_canonical_names_and_aliases() {
        assert_eq!(Encoding::for_name("utf-8"), Ok(Encoding::UTF_8));
        assert_eq!(Encoding::for_name("UTF8").unwrap().name(), "UTF-8");
        assert_eq!(Encoding::for_name("Windows-1252").unwrap().name(), "windows-1252");
        assert_eq!(Encoding::for_name("cp1252").unwrap().to_string(), "windows-1252");
        assert_eq!(Encoding::for_name("latin1").unwrap().name(), "ISO-8859-1");
    }

    #[test]
    fn unknown_charset_is_an_error() {
        let err = Encoding::for_name("klingon-8").unwrap_err();
        assert_eq!(err.field, "--encoding");
        assert_eq!(err.value, "klingon-8");
        assert_eq!(Encoding::from_option(None), Ok(None));
    }
}
