//! Page dimensions and margins.
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser::SerializeMap};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleError {
    #[error("Page margin {margin:.1}pt leaves no content area on a {width:.1}x{height:.1}pt page")]
    MarginTooLarge { margin: f32, width: f32, height: f32 },
    #[error("Invalid page dimension: {0}")]
    InvalidDimension(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PageSize {
    #[default]
    A4,
    Letter,
    Legal,
    Custom { width: f32, height: f32 },
}

impl PageSize {
    pub fn dimensions_pt(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (595.28, 841.89),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }

    /// Parse a page size name (e.g., "A4", "Letter", "Legal")
    fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "a4" => Ok(PageSize::A4),
            "letter" => Ok(PageSize::Letter),
            "legal" => Ok(PageSize::Legal),
            _ => Err(format!("Unknown page size: {}", s)),
        }
    }
}

impl Serialize for PageSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PageSize::A4 => serializer.serialize_str("A4"),
            PageSize::Letter => serializer.serialize_str("Letter"),
            PageSize::Legal => serializer.serialize_str("Legal"),
            PageSize::Custom { width, height } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("width", width)?;
                map.serialize_entry("height", height)?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for PageSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum PageSizeDef {
            Str(String),
            Map { width: f32, height: f32 },
        }

        match PageSizeDef::deserialize(deserializer)? {
            PageSizeDef::Str(s) => Self::parse(&s).map_err(de::Error::custom),
            PageSizeDef::Map { width, height } => Ok(PageSize::Custom { width, height }),
        }
    }
}

/// Physical page setup: size, a uniform margin and the band kept free for the footer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageSettings {
    pub size: PageSize,
    pub margin: f32,
    pub footer_reserve: f32,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            size: PageSize::A4,
            margin: 50.0,
            footer_reserve: 40.0,
        }
    }
}

impl PageSettings {
    pub fn validate(&self) -> Result<(), StyleError> {
        let (width, height) = self.size.dimensions_pt();
        if !(width > 0.0 && height > 0.0) {
            return Err(StyleError::InvalidDimension(format!(
                "{}x{}",
                width, height
            )));
        }
        if self.margin < 0.0 || self.footer_reserve < 0.0 {
            return Err(StyleError::InvalidDimension(
                "margin and footer reserve must not be negative".to_string(),
            ));
        }
        let usable_width = width - 2.0 * self.margin;
        let usable_height = height - 2.0 * self.margin - self.footer_reserve;
        if usable_width <= 0.0 || usable_height <= 0.0 {
            return Err(StyleError::MarginTooLarge {
                margin: self.margin,
                width,
                height,
            });
        }
        Ok(())
    }
}
