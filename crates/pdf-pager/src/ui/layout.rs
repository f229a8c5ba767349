use super::style::ViewerStyle;
use egui::{Rect, pos2, vec2};

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerLayout {
    pub page: Rect,
    pub previous: Rect,
    pub next: Rect,
    pub dots: Vec<Rect>,
}

impl ViewerLayout {
    pub fn compute(area: Rect, style: &ViewerStyle, page_count: usize) -> Self {
        let strip_height = if page_count > 0 {
            style.dot_strip_height()
        } else {
            0.0
        };
        let gutter = style.arrow_gutter.clamp(0.0, area.width() / 4.0);

        let page_left = area.left() + gutter;
        let page_right = (area.right() - gutter).max(page_left);
        let page_bottom = (area.bottom() - strip_height).max(area.top());
        let page = Rect::from_min_max(pos2(page_left, area.top()), pos2(page_right, page_bottom));

        let arrow_size = vec2(gutter, gutter);
        let previous =
            Rect::from_center_size(pos2(area.left() + gutter * 0.5, page.center().y), arrow_size);
        let next =
            Rect::from_center_size(pos2(area.right() - gutter * 0.5, page.center().y), arrow_size);

        let diameter = style.dot_diameter;
        let strip_left = page.center().x - style.dot_strip_width(page_count) * 0.5;
        let dot_y = page.bottom() + style.dot_strip_offset.max(0.0) + diameter * 0.5;
        let dots = (0..page_count)
            .map(|i| {
                let x = strip_left + diameter * 0.5 + i as f32 * (diameter + style.dot_gap);
                Rect::from_center_size(pos2(x, dot_y), vec2(diameter, diameter))
            })
            .collect();

        Self {
            page,
            previous,
            next,
            dots,
        }
    }
}
