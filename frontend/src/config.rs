use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

const EMBEDDED_CONFIG: &str = include_str!("../assets/valentine.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse page config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("palette must contain at least one color")]
    EmptyPalette,
    #[error("unknown page variant `{0}`")]
    UnknownVariant(String),
    #[error("variant lists section {0:?} but the config has no content for it")]
    MissingSection(SectionId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    Hero,
    Media,
    LoveMessage,
    Question,
    Footer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Classic,
    Memories,
}

impl Variant {
    pub fn name(self) -> &'static str {
        match self {
            Variant::Classic => "classic",
            Variant::Memories => "memories",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HeroContent {
    pub eyebrow: String,
    pub headline_accent: String,
    pub headline: String,
    pub subtext: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MediaContent {
    pub video: String,
    #[serde(default)]
    pub poster: Option<String>,
    pub caption: String,
    pub fallback: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Polaroid {
    pub image: String,
    pub alt: String,
    pub caption: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoveMessageContent {
    pub quote: String,
    pub attribution: String,
    pub heading: String,
    pub subheading: String,
    pub reasons: Vec<String>,
    #[serde(default)]
    pub polaroids: Vec<Polaroid>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct QuestionContent {
    pub title: String,
    pub prompt: String,
    pub yes_label: String,
    pub no_label: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CelebrationContent {
    pub headline: String,
    pub message: String,
    pub closing: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FooterContent {
    pub lead: String,
    pub trail: String,
    pub caption: String,
}

/// Everything the page renders, loaded from `assets/valentine.json`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PageConfig {
    pub palette: Vec<String>,
    pub hero: HeroContent,
    #[serde(default)]
    pub media: Option<MediaContent>,
    pub love_message: LoveMessageContent,
    pub question: QuestionContent,
    pub celebration: CelebrationContent,
    pub footer: FooterContent,
    variants: HashMap<String, Vec<SectionId>>,
}

impl PageConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_json(EMBEDDED_CONFIG)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: PageConfig = serde_json::from_str(raw)?;
        if config.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(config)
    }

    /// Ordered sections for a variant. A `media` entry needs a `media` block.
    pub fn sections(&self, variant: Variant) -> Result<&[SectionId], ConfigError> {
        let sections = self
            .variants
            .get(variant.name())
            .ok_or_else(|| ConfigError::UnknownVariant(variant.name().to_string()))?;
        if sections.contains(&SectionId::Media) && self.media.is_none() {
            return Err(ConfigError::MissingSection(SectionId::Media));
        }
        Ok(sections.as_slice())
    }
}

/// Percent-encodes each path segment so names like `Memory 1.jpeg` load.
pub fn asset_url(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses_with_default_palette() {
        let config = PageConfig::load().expect("embedded config should parse");
        assert_eq!(
            config.palette,
            vec!["#c44569", "#e17055", "#d4a373", "#ffd6e0", "#fff"]
        );
        assert_eq!(config.love_message.reasons.len(), 4);
        assert_eq!(config.love_message.polaroids.len(), 2);
    }

    #[test]
    fn both_variants_resolve() {
        let config = PageConfig::load().unwrap();
        assert_eq!(
            config.sections(Variant::Classic).unwrap(),
            &[
                SectionId::Hero,
                SectionId::LoveMessage,
                SectionId::Question,
                SectionId::Footer
            ]
        );
        let memories = config.sections(Variant::Memories).unwrap();
        assert_eq!(memories[1], SectionId::Media);
        assert_eq!(memories.len(), 5);
    }

    #[test]
    fn media_section_without_content_is_rejected() {
        let mut config = PageConfig::load().unwrap();
        config.media = None;
        assert!(matches!(
            config.sections(Variant::Memories),
            Err(ConfigError::MissingSection(SectionId::Media))
        ));
        assert!(config.sections(Variant::Classic).is_ok());
    }

    #[test]
    fn unknown_variant_is_reported() {
        let mut config = PageConfig::load().unwrap();
        config.variants.remove("memories");
        match config.sections(Variant::Memories) {
            Err(ConfigError::UnknownVariant(name)) => assert_eq!(name, "memories"),
            other => panic!("expected unknown variant, got {:?}", other),
        }
    }

    #[test]
    fn empty_palette_is_rejected() {
        let raw = EMBEDDED_CONFIG.replacen(
            r##"["#c44569", "#e17055", "#d4a373", "#ffd6e0", "#fff"]"##,
            "[]",
            1,
        );
        assert!(matches!(
            PageConfig::from_json(&raw),
            Err(ConfigError::EmptyPalette)
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            PageConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn asset_urls_encode_spaces_but_keep_slashes() {
        assert_eq!(asset_url("/Memory 1.jpeg"), "/Memory%201.jpeg");
        assert_eq!(asset_url("/memory.mp4"), "/memory.mp4");
    }
}
