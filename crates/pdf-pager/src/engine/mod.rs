//! Boundary between the viewer and the library that actually parses and
//! rasterises PDF pages.

pub mod pdfium;
pub mod source;

pub use source::DocumentSource;

use crate::constants::{MAX_RENDER_EDGE, MIN_RENDER_EDGE};
use crate::error::{PdfError, Result};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct LoadedDocument {
    bytes: Arc<[u8]>,
    total_pages: usize,
}

impl LoadedDocument {
    pub fn new(bytes: Arc<[u8]>, total_pages: usize) -> Self {
        Self { bytes, total_pages }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn page_index(&self, page_number: usize) -> Result<usize> {
        if page_number == 0 || page_number > self.total_pages {
            return Err(PdfError::PageOutOfRange {
                page: page_number,
                total: self.total_pages,
            });
        }
        Ok(page_number - 1)
    }
}

/// RGBA8 raster of a single page, row-major with no padding.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl RenderedPage {
    pub fn to_color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgba_unmultiplied(
            [self.width as usize, self.height as usize],
            &self.rgba,
        )
    }
}

pub trait RenderEngine: Send + Sync {
    /// Fetches and parses the document. Runs on the loader thread.
    fn load(&self, source: &DocumentSource) -> Result<LoadedDocument>;

    fn render_page(
        &self,
        document: &LoadedDocument,
        page_number: usize,
        target_width: u32,
    ) -> Result<RenderedPage>;
}

pub fn clamp_render_edge(edge: u32) -> u32 {
    edge.clamp(MIN_RENDER_EDGE, MAX_RENDER_EDGE)
}

pub fn render_height_for(width: u32, aspect_ratio: f32) -> u32 {
    clamp_render_edge((width as f32 / aspect_ratio.max(0.001)).round() as u32)
}
