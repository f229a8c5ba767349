use crate::constants::{LOAD_FAILED_TEXT, LOADING_TEXT, PLACEHOLDER_ASPECT};
use crate::engine::{DocumentSource, LoadedDocument, RenderEngine};
use crate::ui::canvas::{self, PageCanvas};
use crate::ui::controls::{self, Arrow};
use crate::ui::layout::ViewerLayout;
use crate::ui::style::ViewerStyle;
use crate::viewer::loader::LoadHandle;
use crate::viewer::state::{LoadPhase, ViewerState};
use eframe::egui;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

static NEXT_VIEWER_ID: AtomicU64 = AtomicU64::new(0);

const LOAD_POLL_INTERVAL: Duration = Duration::from_millis(30);

/// A single-page PDF viewer with previous/next arrows and a dot strip.
///
/// Mounting starts the document load in the background. To show another
/// document, or to retry after a failure, build a new viewer.
pub struct PdfViewer {
    id: u64,
    source: DocumentSource,
    engine: Arc<dyn RenderEngine>,
    state: ViewerState,
    loader: LoadHandle,
    document: Option<LoadedDocument>,
    canvas: PageCanvas,
    style: ViewerStyle,
}

impl PdfViewer {
    pub fn new(source: DocumentSource, engine: Arc<dyn RenderEngine>) -> Self {
        let loader = LoadHandle::spawn(engine.clone(), source.clone());
        Self {
            id: NEXT_VIEWER_ID.fetch_add(1, Ordering::Relaxed),
            source,
            engine,
            state: ViewerState::new(),
            loader,
            document: None,
            canvas: PageCanvas::new(),
            style: ViewerStyle::default(),
        }
    }

    pub fn with_style(mut self, style: ViewerStyle) -> Self {
        self.style = style;
        self
    }

    pub fn source(&self) -> &DocumentSource {
        &self.source
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn phase(&self) -> &LoadPhase {
        self.state.phase()
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page()
    }

    pub fn total_pages(&self) -> usize {
        self.state.total_pages()
    }

    /// Applies a finished background load, if any. Called by `show` every frame.
    pub fn poll_load(&mut self) {
        let Some(result) = self.loader.poll() else {
            return;
        };

        match result {
            Ok(document) => {
                log::info!(
                    "Loaded {} ({} pages)",
                    self.source,
                    document.total_pages()
                );
                self.state.on_load_success(document.total_pages());
                self.document = Some(document);
            }
            Err(e) => {
                log::error!("Failed to load {}: {}", self.source, e);
                self.state.on_load_failure(e.to_string());
            }
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui) -> egui::Response {
        self.poll_load();

        match self.state.phase().clone() {
            LoadPhase::Loading => {
                ui.ctx().request_repaint_after(LOAD_POLL_INTERVAL);
                canvas::show_placeholder(ui, &self.style, LOADING_TEXT)
            }
            LoadPhase::Failed(_) => canvas::show_placeholder(ui, &self.style, LOAD_FAILED_TEXT),
            LoadPhase::Loaded => self.show_document(ui),
        }
    }

    fn show_document(&mut self, ui: &mut egui::Ui) -> egui::Response {
        let total_pages = self.state.total_pages();
        let available = ui.available_size_before_wrap();
        let height = if available.y.is_finite() && available.y > 0.0 {
            available.y
        } else {
            available.x * PLACEHOLDER_ASPECT + self.style.dot_strip_height()
        };

        let (area, response) =
            ui.allocate_exact_size(egui::vec2(available.x, height), egui::Sense::hover());
        let layout = ViewerLayout::compute(area, &self.style, total_pages);

        if let Some(document) = &self.document
            && total_pages > 0
        {
            let page = self.state.current_page();
            let texture_name = format!("pdf_pager_{}_page_{}", self.id, page);
            self.canvas.show(
                ui,
                layout.page,
                self.engine.as_ref(),
                document,
                page,
                &self.style,
                &texture_name,
            );
        }

        if self.state.can_go_previous()
            && controls::show_arrow(ui, layout.previous, Arrow::Previous, &self.style)
        {
            self.state.previous_page();
        }

        if self.state.can_go_next()
            && controls::show_arrow(ui, layout.next, Arrow::Next, &self.style)
        {
            self.state.next_page();
        }

        let dots = self.state.pagination_dots();
        let dots_id = egui::Id::new("pdf_pager_dots").with(self.id);
        if let Some(page) =
            controls::show_pagination_dots(ui, dots_id, &dots, &layout.dots, &self.style)
            && let Err(e) = self.state.select_page(page)
        {
            log::warn!("Ignoring dot click: {}", e);
        }

        response
    }
}
