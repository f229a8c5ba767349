use crate::engine::{DocumentSource, RenderEngine};
use crate::ui::style::ViewerStyle;
use crate::widget::PdfViewer;
use eframe::egui;
use std::sync::Arc;

pub struct PdfPagerApp {
    engine: Arc<dyn RenderEngine>,
    style: ViewerStyle,
    viewer: Option<PdfViewer>,
}

impl PdfPagerApp {
    pub fn new(engine: Arc<dyn RenderEngine>, style: ViewerStyle) -> Self {
        Self {
            engine,
            style,
            viewer: None,
        }
    }

    pub fn with_document(mut self, source: DocumentSource) -> Self {
        self.mount(source);
        self
    }

    pub fn mount(&mut self, source: DocumentSource) {
        log::info!("Mounting viewer for {}", source);
        self.viewer =
            Some(PdfViewer::new(source, self.engine.clone()).with_style(self.style.clone()));
    }

    fn show_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Open PDF…").clicked()
                && let Some(path) = rfd::FileDialog::new()
                    .add_filter("PDF", &["pdf"])
                    .pick_file()
            {
                self.mount(DocumentSource::Path(path));
            }

            if let Some(viewer) = &self.viewer {
                ui.separator();
                ui.label(viewer.source().to_string());
            }
        });
    }
}

impl eframe::App for PdfPagerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.show_toolbar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| match &mut self.viewer {
            Some(viewer) => {
                viewer.show(ui);
            }
            None => {
                ui.vertical_centered(|ui| {
                    ui.add_space(100.0);
                    ui.label("Open a PDF file to view");
                });
            }
        });
    }
}
