//! Engine configuration.
//!
//! Every field has a default, so an empty JSON object is a valid configuration.
use crate::blocks::decoration::footer_height;
use crate::error::ReportError;
use attest_layout::LayoutConfig;
use attest_style::{PageSettings, StyleTheme};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Branding printed in the header banner and the footer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Institution {
    pub name: String,
    pub subtitle: String,
}

impl Default for Institution {
    fn default() -> Self {
        Self {
            name: "Institute of Technology".to_string(),
            subtitle: "Training and Placement Cell".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    pub page: PageSettings,
    pub layout: LayoutConfig,
    pub theme: StyleTheme,
    pub institution: Institution,
    /// Draw a "(continued)" strip at the top of every page after the first.
    pub continuation_header: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            page: PageSettings::default(),
            layout: LayoutConfig::default(),
            theme: StyleTheme::default(),
            institution: Institution::default(),
            continuation_header: true,
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ReportError> {
        let path_ref = path.as_ref();
        let json = fs::read_to_string(path_ref).map_err(|e| {
            ReportError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read config from '{}': {}", path_ref.display(), e),
            ))
        })?;
        Self::from_json(&json)
    }

    /// Rejects settings that would leave no room for content or break the estimator.
    pub fn validate(&self) -> Result<(), ReportError> {
        self.page.validate()?;
        let footer = footer_height(&self.theme);
        if self.page.footer_reserve < footer {
            return Err(ReportError::InvalidConfig(format!(
                "footerReserve {:.1}pt is smaller than the {:.1}pt footer",
                self.page.footer_reserve, footer
            )));
        }

        let layout = &self.layout;
        if !(layout.avg_char_width_ratio > 0.0) {
            return Err(ReportError::InvalidConfig(format!(
                "avgCharWidthRatio must be positive, got {}",
                layout.avg_char_width_ratio
            )));
        }
        if layout.safety_factor < 1.0 {
            return Err(ReportError::InvalidConfig(format!(
                "safetyFactor must be at least 1.0, got {}",
                layout.safety_factor
            )));
        }
        if layout.line_gap < 0.0 || layout.near_empty_threshold < 0.0 {
            return Err(ReportError::InvalidConfig(
                "lineGap and nearEmptyThreshold must not be negative".to_string(),
            ));
        }

        let metrics = &self.theme.metrics;
        if !(0.05..=0.95).contains(&metrics.label_column_ratio) {
            return Err(ReportError::InvalidConfig(format!(
                "labelColumnRatio must be between 0.05 and 0.95, got {}",
                metrics.label_column_ratio
            )));
        }
        if metrics.row_height <= 0.0 {
            return Err(ReportError::InvalidConfig("rowHeight must be positive".to_string()));
        }
        Ok(())
    }
}
