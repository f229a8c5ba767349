use crate::constants::*;
use egui::Color32;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerStyle {
    pub page_background: Color32,
    pub placeholder_background: Color32,
    pub placeholder_text: Color32,
    pub arrow_background: Color32,
    pub arrow_color: Color32,
    pub corner_radius: u8,
    pub arrow_size: f32,
    pub arrow_gutter: f32,
    pub dot_diameter: f32,
    pub dot_gap: f32,
    pub inactive_dot_opacity: f32,
    pub dot_strip_offset: f32,
}

impl ViewerStyle {
    pub fn active_dot_color(&self) -> Color32 {
        self.arrow_color
    }

    pub fn inactive_dot_color(&self) -> Color32 {
        self.arrow_color
            .gamma_multiply(self.inactive_dot_opacity.clamp(0.0, 1.0))
    }

    pub fn dot_strip_height(&self) -> f32 {
        self.dot_strip_offset.max(0.0) + self.dot_diameter
    }

    pub fn dot_strip_width(&self, count: usize) -> f32 {
        if count == 0 {
            return 0.0;
        }
        count as f32 * self.dot_diameter + (count - 1) as f32 * self.dot_gap
    }
}

impl Default for ViewerStyle {
    fn default() -> Self {
        Self {
            page_background: DEFAULT_PAGE_BACKGROUND,
            placeholder_background: DEFAULT_PLACEHOLDER_BACKGROUND,
            placeholder_text: DEFAULT_PLACEHOLDER_TEXT,
            arrow_background: DEFAULT_ARROW_BACKGROUND,
            arrow_color: DEFAULT_ARROW_COLOR,
            corner_radius: DEFAULT_CORNER_RADIUS,
            arrow_size: DEFAULT_ARROW_SIZE,
            arrow_gutter: DEFAULT_ARROW_GUTTER,
            dot_diameter: DEFAULT_DOT_DIAMETER,
            dot_gap: DEFAULT_DOT_GAP,
            inactive_dot_opacity: DEFAULT_INACTIVE_DOT_OPACITY,
            dot_strip_offset: DEFAULT_DOT_STRIP_OFFSET,
        }
    }
}
