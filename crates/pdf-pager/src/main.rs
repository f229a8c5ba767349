use clap::Parser;
use eframe::egui;
use pdf_pager::app::PdfPagerApp;
use pdf_pager::config;
use pdf_pager::engine::{self, DocumentSource};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pdf-pager")]
#[command(about = "Page through a PDF one page at a time", long_about = None)]
struct Cli {
    /// PDF file path or http(s) URL
    document: Option<String>,

    /// pdfium shared library, or a directory containing it
    #[arg(long, value_name = "PATH")]
    pdfium_lib: Option<PathBuf>,

    /// JSON config file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut app_config = config::load_or_default(cli.config.as_deref());
    app_config.apply_env_overrides();
    if let Some(path) = cli.pdfium_lib {
        app_config.engine.library_path = Some(path);
    }

    let engine = match engine::pdfium::init(&app_config.engine) {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let mut app = PdfPagerApp::new(engine, app_config.style);
    if let Some(document) = cli.document.as_deref() {
        app = app.with_document(DocumentSource::parse(document));
    }

    let options = eframe::NativeOptions {
        vsync: true,
        renderer: eframe::Renderer::Glow,
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 960.0])
            .with_title("PDF Pager"),
        ..Default::default()
    };

    eframe::run_native("PDF Pager", options, Box::new(|_cc| Ok(Box::new(app))))
}
