use super::style::ViewerStyle;
use crate::constants::*;
use crate::viewer::state::PaginationDot;
use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrow {
    Previous,
    Next,
}

impl Arrow {
    fn glyph(self) -> &'static str {
        match self {
            Arrow::Previous => PREVIOUS_ARROW_GLYPH,
            Arrow::Next => NEXT_ARROW_GLYPH,
        }
    }

    fn tooltip(self) -> &'static str {
        match self {
            Arrow::Previous => PREVIOUS_PAGE_TOOLTIP,
            Arrow::Next => NEXT_PAGE_TOOLTIP,
        }
    }
}

/// Returns true when the arrow was clicked this frame.
pub fn show_arrow(ui: &mut egui::Ui, rect: egui::Rect, arrow: Arrow, style: &ViewerStyle) -> bool {
    let label = egui::RichText::new(arrow.glyph())
        .size(style.arrow_size)
        .color(style.arrow_color);

    let button = egui::Button::new(label)
        .fill(style.arrow_background)
        .stroke(egui::Stroke::NONE)
        .corner_radius(style.corner_radius);

    ui.put(rect, button)
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .on_hover_text(arrow.tooltip())
        .clicked()
}

pub fn show_pagination_dots(
    ui: &mut egui::Ui,
    id: egui::Id,
    dots: &[PaginationDot],
    rects: &[egui::Rect],
    style: &ViewerStyle,
) -> Option<usize> {
    let mut clicked = None;

    for (dot, rect) in dots.iter().zip(rects) {
        let response = ui
            .interact(*rect, id.with(dot.page), egui::Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand)
            .on_hover_text(&dot.tooltip);

        let color = if dot.active {
            style.active_dot_color()
        } else {
            style.inactive_dot_color()
        };
        ui.painter()
            .circle_filled(rect.center(), style.dot_diameter * 0.5, color);

        if response.clicked() {
            clicked = Some(dot.page);
        }
    }

    clicked
}
