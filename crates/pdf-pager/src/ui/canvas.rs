use super::style::ViewerStyle;
use crate::constants::PLACEHOLDER_ASPECT;
use crate::engine::{LoadedDocument, RenderEngine};
use eframe::egui;

struct PageTexture {
    page: usize,
    width: u32,
    handle: egui::TextureHandle,
}

struct RenderFailure {
    page: usize,
    width: u32,
    message: String,
}

/// Holds the raster of the page on screen. Only the current page is kept;
/// changing page or slot width renders again.
#[derive(Default)]
pub struct PageCanvas {
    texture: Option<PageTexture>,
    failure: Option<RenderFailure>,
}

impl PageCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        rect: egui::Rect,
        engine: &dyn RenderEngine,
        document: &LoadedDocument,
        page: usize,
        style: &ViewerStyle,
        texture_name: &str,
    ) {
        ui.painter()
            .rect_filled(rect, style.corner_radius, style.page_background);

        let width = (rect.width() * ui.ctx().pixels_per_point()).round().max(1.0) as u32;

        if let Some(failure) = &self.failure
            && failure.page == page
            && failure.width == width
        {
            paint_centered_text(ui, rect, &failure.message, style.placeholder_text);
            return;
        }

        let cached = self
            .texture
            .as_ref()
            .is_some_and(|t| t.page == page && t.width == width);

        if !cached {
            match engine.render_page(document, page, width) {
                Ok(rendered) => {
                    let handle = ui.ctx().load_texture(
                        texture_name,
                        rendered.to_color_image(),
                        egui::TextureOptions::LINEAR,
                    );
                    self.texture = Some(PageTexture {
                        page,
                        width,
                        handle,
                    });
                    self.failure = None;
                }
                Err(e) => {
                    log::error!("Failed to render page {}: {}", page, e);
                    self.texture = None;
                    self.failure = Some(RenderFailure {
                        page,
                        width,
                        message: format!("Failed to render page: {}", e),
                    });
                    return;
                }
            }
        }

        if let Some(texture) = &self.texture {
            let image = egui::Image::new(&texture.handle)
                .fit_to_exact_size(rect.size())
                .corner_radius(style.corner_radius);
            ui.put(rect, image);
        }
    }
}

pub fn show_placeholder(ui: &mut egui::Ui, style: &ViewerStyle, text: &str) -> egui::Response {
    let width = ui.available_width();
    let mut height = width * PLACEHOLDER_ASPECT;
    let available_height = ui.available_height();
    if available_height.is_finite() && available_height > 0.0 {
        height = height.min(available_height);
    }

    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());

    ui.painter()
        .rect_filled(rect, style.corner_radius, style.placeholder_background);
    paint_centered_text(ui, rect, text, style.placeholder_text);

    response
}

fn paint_centered_text(ui: &egui::Ui, rect: egui::Rect, text: &str, color: egui::Color32) {
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        text,
        egui::TextStyle::Body.resolve(ui.style()),
        color,
    );
}
