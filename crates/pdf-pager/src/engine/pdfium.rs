use super::{
    DocumentSource, LoadedDocument, RenderEngine, RenderedPage, clamp_render_edge,
    render_height_for,
};
use crate::config::EngineConfig;
use crate::error::{PdfError, Result};
use image::{Rgba, RgbaImage};
use pdfium_render::prelude::*;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, OnceLock};

static ENGINE: OnceLock<Arc<PdfiumEngine>> = OnceLock::new();
static INIT_LOCK: Mutex<()> = Mutex::new(());

/// Binds the pdfium library for the whole process. Later calls return the
/// engine from the first successful call and ignore their config.
pub fn init(config: &EngineConfig) -> Result<Arc<PdfiumEngine>> {
    if let Some(engine) = ENGINE.get() {
        return Ok(engine.clone());
    }

    // A second bound Pdfium would unload the library under the first when dropped.
    let _guard = INIT_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(engine) = ENGINE.get() {
        return Ok(engine.clone());
    }

    let engine = Arc::new(PdfiumEngine::bind(config)?);
    Ok(ENGINE.get_or_init(|| engine).clone())
}

fn candidate_library_paths(config: &EngineConfig) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(configured) = &config.library_path {
        if configured.is_dir() {
            paths.push(PathBuf::from(Pdfium::pdfium_platform_library_name_at_path(
                configured,
            )));
        } else {
            paths.push(configured.clone());
        }
        return paths;
    }

    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        paths.push(PathBuf::from(Pdfium::pdfium_platform_library_name_at_path(
            exe_dir,
        )));
    }

    paths.push(PathBuf::from(Pdfium::pdfium_platform_library_name_at_path(
        "./",
    )));

    paths
}

pub struct PdfiumEngine {
    pdfium: Pdfium,
    library_path: Option<PathBuf>,
}

impl std::fmt::Debug for PdfiumEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PdfiumEngine")
            .field("library_path", &self.library_path)
            .finish()
    }
}

impl PdfiumEngine {
    pub fn global() -> Result<Arc<PdfiumEngine>> {
        ENGINE.get().cloned().ok_or(PdfError::EngineNotInitialized)
    }

    fn bind(config: &EngineConfig) -> Result<Self> {
        let mut last_error = None;

        for path in candidate_library_paths(config) {
            match Pdfium::bind_to_library(&path) {
                Ok(bindings) => {
                    log::info!("Bound pdfium library at {}", path.display());
                    return Ok(Self {
                        pdfium: Pdfium::new(bindings),
                        library_path: Some(path),
                    });
                }
                Err(e) => {
                    log::debug!("No pdfium library at {}: {}", path.display(), e);
                    last_error = Some(format!("{}: {}", path.display(), e));
                }
            }
        }

        if config.library_path.is_some() {
            return Err(PdfError::EngineInit(
                last_error.unwrap_or_else(|| "no library path".into()),
            ));
        }

        let bindings = Pdfium::bind_to_system_library()
            .map_err(|e| PdfError::EngineInit(format!("system library: {}", e)))?;
        log::info!("Bound system pdfium library");

        Ok(Self {
            pdfium: Pdfium::new(bindings),
            library_path: None,
        })
    }
}

impl RenderEngine for PdfiumEngine {
    fn load(&self, source: &DocumentSource) -> Result<LoadedDocument> {
        let bytes = source.read_bytes()?;

        let total_pages = {
            let document = self
                .pdfium
                .load_pdf_from_byte_slice(&bytes, None)
                .map_err(|e| PdfError::InvalidPdf(format!("{}: {}", source, e)))?;
            document.pages().len() as usize
        };

        Ok(LoadedDocument::new(bytes, total_pages))
    }

    fn render_page(
        &self,
        document: &LoadedDocument,
        page_number: usize,
        target_width: u32,
    ) -> Result<RenderedPage> {
        let index = document.page_index(page_number)?;

        let pdf = self
            .pdfium
            .load_pdf_from_byte_slice(document.bytes(), None)
            .map_err(|e| PdfError::RenderFailed(format!("Failed to reopen PDF: {}", e)))?;

        let page = pdf.pages().get(index as u16).map_err(|e| {
            PdfError::RenderFailed(format!("Failed to get page {}: {}", page_number, e))
        })?;

        let aspect_ratio = page.width().value / page.height().value.max(0.001);
        let width = clamp_render_edge(target_width);
        let height = render_height_for(width, aspect_ratio);

        let mut bitmap = PdfBitmap::empty(
            width as i32,
            height as i32,
            PdfBitmapFormat::BGRx,
            self.pdfium.bindings(),
        )
        .map_err(|e| PdfError::RenderFailed(format!("Failed to create bitmap: {:?}", e)))?;

        page.render_into_bitmap(&mut bitmap, width as i32, height as i32, None)
            .map_err(|e| PdfError::RenderFailed(format!("Failed to render bitmap: {:?}", e)))?;

        let pixels = bitmap.as_raw_bytes();
        let rgba_image = bgrx_to_rgba(&pixels, width, height);

        Ok(RenderedPage {
            width: rgba_image.width(),
            height: rgba_image.height(),
            rgba: rgba_image.into_raw(),
        })
    }
}

fn bgrx_to_rgba(pixels: &[u8], width: u32, height: u32) -> RgbaImage {
    let mut rgba_image = RgbaImage::new(width, height);

    if height == 0 {
        return rgba_image;
    }

    let stride = (pixels.len() / height as usize).max(width as usize * 4);

    for y in 0..height {
        let start = y as usize * stride;
        for x in 0..width {
            let offset = start + x as usize * 4;
            let pixel = match pixels.get(offset..offset + 4) {
                Some(px) => Rgba([px[2], px[1], px[0], 255]),
                None => Rgba([255, 255, 255, 255]),
            };
            rgba_image.put_pixel(x, y, pixel);
        }
    }

    rgba_image
}
