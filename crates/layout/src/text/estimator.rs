use super::wrap::wrap_words;
use crate::LayoutConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextEstimate {
    pub lines: usize,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextEstimator {
    avg_char_width_ratio: f32,
    line_gap: f32,
}

impl Default for TextEstimator {
    fn default() -> Self {
        Self::from_config(&LayoutConfig::default())
    }
}

impl TextEstimator {
    pub fn new(avg_char_width_ratio: f32, line_gap: f32) -> Self {
        Self {
            avg_char_width_ratio,
            line_gap,
        }
    }

    pub fn from_config(config: &LayoutConfig) -> Self {
        Self::new(config.avg_char_width_ratio, config.line_gap)
    }

    pub fn avg_char_width(&self, font_size: f32) -> f32 {
        font_size * self.avg_char_width_ratio
    }

    pub fn line_height(&self, font_size: f32) -> f32 {
        font_size + self.line_gap
    }

    /// Whole characters that fit on one line of `width`. Always at least 1.
    pub fn chars_per_line(&self, font_size: f32, width: f32) -> usize {
        let avg = self.avg_char_width(font_size);
        if avg <= 0.0 || !width.is_finite() {
            return usize::MAX;
        }
        ((width / avg).floor() as usize).max(1)
    }

    /// Estimated wrapped line count and height for `text` set at `font_size` in a
    /// column of `width`. Blank text still occupies one line.
    pub fn estimate(&self, text: &str, font_size: f32, width: f32) -> TextEstimate {
        let lines = if text.trim().is_empty() {
            1
        } else {
            let len = text.chars().count();
            len.div_ceil(self.chars_per_line(font_size, width)).max(1)
        };
        TextEstimate {
            lines,
            height: lines as f32 * self.line_height(font_size),
        }
    }

    pub fn text_width(&self, text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * self.avg_char_width(font_size)
    }

    /// Greedy word wrap at the estimated characters-per-line.
    pub fn wrap(&self, text: &str, font_size: f32, width: f32) -> Vec<String> {
        wrap_words(text, self.chars_per_line(font_size, width))
    }

    /// Fits `text` on one line of `width`, replacing the tail with `...` when needed.
    pub fn truncate(&self, text: &str, font_size: f32, width: f32) -> String {
        let max = self.chars_per_line(font_size, width);
        if text.chars().count() <= max {
            return text.to_string();
        }
        if max <= 3 {
            return ".".repeat(max);
        }
        let head: String = text.chars().take(max - 3).collect();
        format!("{}...", head.trim_end())
    }
}
