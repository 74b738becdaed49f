use crate::error::{GameListError, GameListResult};
use bitflags::bitflags;
use fxhash::FxHashMap;
use serde::{Deserialize, Deserializer};
use std::path::Path;

bitflags! {
    /// Selects which attributes of a theme element a widget picks up
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct ThemeFlags: u32 {
        const PATH       = 1 << 0;
        const POSITION   = 1 << 1;
        const SIZE       = 1 << 2;
        const ORIGIN     = 1 << 3;
        const COLOR      = 1 << 4;
        const FONT_SIZE  = 1 << 5;
        const ALIGNMENT  = 1 << 6;
        const TEXT       = 1 << 7;
        const DELAY      = 1 << 8;
        const Z_INDEX    = 1 << 9;
        const ROTATION   = 1 << 10;
        const VISIBLE    = 1 << 11;

        const ALL = Self::PATH.bits() | Self::POSITION.bits() | Self::SIZE.bits()
            | Self::ORIGIN.bits() | Self::COLOR.bits() | Self::FONT_SIZE.bits()
            | Self::ALIGNMENT.bits() | Self::TEXT.bits() | Self::DELAY.bits()
            | Self::Z_INDEX.bits() | Self::ROTATION.bits() | Self::VISIBLE.bits();
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Text,
    DateTime,
    Rating,
    Image,
    Video,
    ImageGrid,
}

/// Which of an entry's images a widget shows
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSource {
    Image,
    #[default]
    Thumbnail,
    Marquee,
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Visual attributes of one element. Positions and sizes are fractions of the screen, font sizes
/// a fraction of the screen height.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeElement {
    #[serde(rename = "type")]
    pub kind: ElementKind,
    #[serde(default)]
    pub pos: Option<[f32; 2]>,
    #[serde(default)]
    pub size: Option<[f32; 2]>,
    #[serde(default)]
    pub max_size: Option<[f32; 2]>,
    #[serde(default)]
    pub origin: Option<[f32; 2]>,
    #[serde(default, deserialize_with = "deserialize_color")]
    pub color: Option<u32>,
    #[serde(default)]
    pub font_size: Option<f32>,
    #[serde(default)]
    pub alignment: Option<Alignment>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub default: Option<String>,
    /// Seconds
    #[serde(default)]
    pub delay: Option<f32>,
    #[serde(default)]
    pub z_index: Option<f32>,
    #[serde(default)]
    pub rotation: Option<f32>,
    #[serde(default)]
    pub visible: Option<bool>,
    #[serde(default)]
    pub image_source: Option<ImageSource>,
    #[serde(default)]
    pub snapshot_source: Option<ImageSource>,
    #[serde(default)]
    pub grid_size: Option<[f32; 2]>,
}

/// Parses `RRGGBB` or `RRGGBBAA`
pub fn parse_color(text: &str) -> GameListResult<u32> {
    let invalid = || GameListError::InvalidColor {
        text: text.to_owned(),
    };

    let hex = text.trim_start_matches('#');
    let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;

    match hex.len() {
        6 => Ok((value << 8) | 0xFF),
        8 => Ok(value),
        _ => Err(invalid()),
    }
}

fn deserialize_color<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let text: Option<String> = Option::deserialize(deserializer)?;
    text.map(|t| parse_color(&t).map_err(serde::de::Error::custom))
        .transpose()
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct ViewTheme {
    #[serde(default)]
    elements: FxHashMap<String, ThemeElement>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct ThemeData {
    #[serde(default)]
    views: FxHashMap<String, ViewTheme>,
}

impl ThemeData {
    pub fn from_json5(text: &str) -> GameListResult<Self> {
        Ok(json5::from_str(text)?)
    }

    pub fn load(path: &Path) -> GameListResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json5(&text)
    }

    pub fn has_view(&self, view: &str) -> bool {
        self.views.contains_key(view)
    }

    /// Looks up `element` of `view`. Elements of another kind count as missing.
    pub fn element(&self, view: &str, element: &str, kind: ElementKind) -> Option<&ThemeElement> {
        self.views
            .get(view)?
            .elements
            .get(element)
            .filter(|e| e.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_THEME: &str = r#"{
        views: {
            grid: {
                elements: {
                    md_image: { type: "image", pos: [0.3, 0.4], maxSize: [0.2, 0.2] },
                    md_name: { type: "text", color: "FF0000", alignment: "right" },
                    md_video: { type: "video", snapshotSource: "marquee", delay: 1.5 },
                },
            },
        },
    }"#;

    #[test]
    fn test_element_lookup_by_kind() {
        let theme = ThemeData::from_json5(TEST_THEME).unwrap();
        assert!(theme.has_view("grid"));
        assert!(theme.element("grid", "md_image", ElementKind::Image).is_some());
        assert!(theme.element("grid", "md_image", ElementKind::Video).is_none());
        assert!(theme.element("grid", "md_marquee", ElementKind::Image).is_none());
        assert!(theme.element("detailed", "md_image", ElementKind::Image).is_none());
    }

    #[test]
    fn test_element_attributes() {
        let theme = ThemeData::from_json5(TEST_THEME).unwrap();
        let name = theme.element("grid", "md_name", ElementKind::Text).unwrap();
        assert_eq!(name.color, Some(0xFF0000FF));
        assert_eq!(name.alignment, Some(Alignment::Right));

        let video = theme.element("grid", "md_video", ElementKind::Video).unwrap();
        assert_eq!(video.snapshot_source, Some(ImageSource::Marquee));
        assert_eq!(video.delay, Some(1.5));
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("AAAAAAFF").unwrap(), 0xAAAAAAFF);
        assert_eq!(parse_color("#102030").unwrap(), 0x102030FF);
        assert!(parse_color("12345").is_err());
        assert!(parse_color("zzzzzz").is_err());
    }

    #[test]
    fn test_invalid_color_fails_theme() {
        let text = r#"{ views: { grid: { elements: { md_name: { type: "text", color: "nope" } } } } }"#;
        assert!(ThemeData::from_json5(text).is_err());
    }

    #[test]
    fn test_flags_exclude_path() {
        let flags = ThemeFlags::ALL - ThemeFlags::PATH;
        assert!(!flags.contains(ThemeFlags::PATH));
        assert!(flags.contains(ThemeFlags::POSITION | ThemeFlags::Z_INDEX));
    }
}
