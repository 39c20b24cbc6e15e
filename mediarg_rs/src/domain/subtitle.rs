//! Subtitle naming schemes and output formats.

use serde::Serialize;

use super::lookup::{NamedValue, find_by_name};
use crate::error::IllegalValue;

/// How fetched subtitle files are named relative to their video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SubtitleNaming {
    #[serde(rename = "ORIGINAL")]
    Original,
    #[serde(rename = "MATCH_VIDEO")]
    MatchVideo,
    #[serde(rename = "MATCH_VIDEO_ADD_LANGUAGE_TAG")]
    MatchVideoAddLanguageTag,
}

impl SubtitleNaming {
    /// Video file name plus a language tag, e.g. `Movie.eng.srt`.
    pub const DEFAULT: SubtitleNaming = SubtitleNaming::MatchVideoAddLanguageTag;

    /// Resolve the naming scheme from `--format`.
    pub fn from_option(raw: Option<&str>) -> Result<Self, IllegalValue> {
        match raw {
            Some(raw) => find_by_name("--format", raw),
            None => Ok(Self::DEFAULT),
        }
    }
}

impl NamedValue for SubtitleNaming {
    const ALL: &'static [Self] = &[
        SubtitleNaming::Original,
        SubtitleNaming::MatchVideo,
        SubtitleNaming::MatchVideoAddLanguageTag,
    ];

    fn name(self) -> &'static str {
        match self {
            SubtitleNaming::Original => "ORIGINAL",
            SubtitleNaming::MatchVideo => "MATCH_VIDEO",
            SubtitleNaming::MatchVideoAddLanguageTag => "MATCH_VIDEO_ADD_LANGUAGE_TAG",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            SubtitleNaming::Original => &["Keep Original"],
            SubtitleNaming::MatchVideo => &["Match Video"],
            SubtitleNaming::MatchVideoAddLanguageTag => &["Match Video and Language"],
        }
    }
}

/// Subtitle file formats that fetched subtitles can be converted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SubtitleFormat {
    SubRip,
    #[serde(rename = "MicroDVD")]
    MicroDvd,
    SubViewer,
    #[serde(rename = "SAMI")]
    Sami,
    SubStationAlpha,
}

impl SubtitleFormat {
    /// Resolve the output format from `--output`; absence means "keep as is".
    pub fn from_option(raw: Option<&str>) -> Result<Option<Self>, IllegalValue> {
        raw.map(|raw| find_by_name("--output", raw)).transpose()
    }
}

impl NamedValue for SubtitleFormat {
    const ALL: &'static [Self] = &[
        SubtitleFormat::SubRip,
        SubtitleFormat::MicroDvd,
        SubtitleFormat::SubViewer,
        SubtitleFormat::Sami,
        SubtitleFormat::SubStationAlpha,
    ];

    fn name(self) -> &'static str {
        match self {
            SubtitleFormat::SubRip => "SubRip",
            SubtitleFormat::MicroDvd => "MicroDVD",
            SubtitleFormat::SubViewer => "SubViewer",
            SubtitleFormat::Sami => "SAMI",
            SubtitleFormat::SubStationAlpha => "SubStationAlpha",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            SubtitleFormat::SubRip => &["srt"],
            SubtitleFormat::Sami => &["smi"],
            SubtitleFormat::SubStationAlpha => &["ass", "ssa"],
            _ => &[],
        }
    }
}
