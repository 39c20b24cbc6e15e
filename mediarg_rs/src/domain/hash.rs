//! Checksum types for verification files.

use std::path::Path;

use serde::Serialize;

use super::lookup::{NamedValue, find_by_name};
use crate::error::IllegalValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HashType {
    Sfv,
    Md5,
    Sha1,
    Sha256,
}

impl HashType {
    pub const DEFAULT: HashType = HashType::Sfv;

    /// File extension of the verification file this type produces.
    pub fn extension(self) -> &'static str {
        match self {
            HashType::Sfv => "sfv",
            HashType::Md5 => "md5",
            HashType::Sha1 => "sha1",
            HashType::Sha256 => "sha256",
        }
    }

    /// Hash type named by a verification file's extension, if any.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.extension().eq_ignore_ascii_case(ext))
    }

    /// Pick the checksum type for `-check`.
    ///
    /// An `--output` path with a known extension decides first. Otherwise
    /// `--format` names the type, and only when both are absent does the
    /// default apply. An output path whose extension names no hash type
    /// defers to `--format`.
    pub fn from_options(output: Option<&str>, format: Option<&str>) -> Result<Self, IllegalValue> {
        if let Some(kind) = output.and_then(|output| Self::from_path(Path::new(output))) {
            return Ok(kind);
        }
        match format {
            Some(format) => find_by_name("--format", format),
            None => Ok(Self::DEFAULT),
        }
    }
}

impl NamedValue for HashType {
    const ALL: &'static [Self] = &[HashType::Sfv, HashType::Md5, HashType::Sha1, HashType::Sha256];

    fn name(self) -> &'static str {
        match self {
            HashType::Sfv => "SFV",
            HashType::Md5 => "MD5",
            HashType::Sha1 => "SHA1",
            HashType::Sha256 => "SHA256",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            HashType::Sfv => &["crc32"],
            HashType::Sha1 => &["sha-1"],
            HashType::Sha256 => &["sha-256"],
            HashType::Md5 => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_extension_decides_first() {
        assert_eq!(HashType::from_options(Some("report.sfv"), None), Ok(HashType::Sfv));
        assert_eq!(
            HashType::from_options(Some("/tmp/sums.SHA256"), Some("MD5")),
            Ok(HashType::Sha256)
        );
    }

    #[test]
    fn format_applies_without_output() {
        assert_eq!(HashType::from_options(None, Some("MD5")), Ok(HashType::Md5));
        assert_eq!(HashType::from_options(None, Some("sha1")), Ok(HashType::Sha1));
    }

    #[test]
    fn neither_option_falls_back_to_sfv() {
        assert_eq!(HashType::from_options(None, None), Ok(HashType::Sfv));
    }

    #[test]
    fn output_without_hash_extension_defers_to_format() {
        assert_eq!(
            HashType::from_options(Some("checksums.txt"), Some("md5")),
            Ok(HashType::Md5)
        );
        assert_eq!(HashType::from_options(Some("out"), None), Ok(HashType::Sfv));
    }

    #[test]
    fn unknown_format_is_illegal() {
        let err = HashType::from_options(None, Some("whirlpool")).unwrap_err();
        assert_eq!(err.field, "--format");
        // "sha" matches both SHA1 and SHA256
        assert!(HashType::from_options(None, Some("sha")).is_err());
    }
}
