pub mod app;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod ui;
pub mod viewer;
pub mod widget;

pub use engine::{DocumentSource, LoadedDocument, RenderEngine, RenderedPage};
pub use error::{PdfError, Result};
pub use viewer::state::{LoadPhase, PaginationDot, ViewerState};
pub use widget::PdfViewer;
