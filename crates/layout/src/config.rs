use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Average glyph advance as a fraction of the font size.
    ///
    /// 0.5 over-estimates Helvetica body text slightly, which keeps reserved
    /// heights on the safe side.
    pub avg_char_width_ratio: f32,
    /// Extra leading added to the font size to get a line height.
    pub line_gap: f32,
    /// Multiplier applied to estimated text heights before space is reserved.
    ///
    /// Defaults to `1.15`.
    pub safety_factor: f32,
    /// How far below the top of the content area the cursor must be before a page
    /// counts as holding meaningful content. Pages above this line never break.
    ///
    /// Defaults to `100.0` points. Tune against the concrete drawing surface.
    pub near_empty_threshold: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            avg_char_width_ratio: 0.5,
            line_gap: 4.0,
            safety_factor: 1.15,
            near_empty_threshold: 100.0,
        }
    }
}
