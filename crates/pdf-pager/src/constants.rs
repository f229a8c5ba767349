use egui::Color32;

pub const LOADING_TEXT: &str = "Loading resource...";
pub const LOAD_FAILED_TEXT: &str = "Failed to load PDF preview";
pub const PREVIOUS_PAGE_TOOLTIP: &str = "Previous Page";
pub const NEXT_PAGE_TOOLTIP: &str = "Next Page";

pub const PREVIOUS_ARROW_GLYPH: &str = "⏴";
pub const NEXT_ARROW_GLYPH: &str = "⏵";

pub const MIN_RENDER_EDGE: u32 = 100;
pub const MAX_RENDER_EDGE: u32 = 4096;

/// Height over width of a US letter page, used to size placeholders.
pub const PLACEHOLDER_ASPECT: f32 = 11.0 / 8.5;

pub const DEFAULT_PAGE_BACKGROUND: Color32 = Color32::WHITE;
pub const DEFAULT_PLACEHOLDER_BACKGROUND: Color32 = Color32::from_rgb(236, 238, 241);
pub const DEFAULT_PLACEHOLDER_TEXT: Color32 = Color32::from_rgb(33, 37, 41);
pub const DEFAULT_ARROW_BACKGROUND: Color32 = Color32::from_rgb(250, 250, 250);
pub const DEFAULT_ARROW_COLOR: Color32 = Color32::from_rgb(33, 37, 41);

pub const DEFAULT_CORNER_RADIUS: u8 = 4;
pub const DEFAULT_ARROW_SIZE: f32 = 36.0;
pub const DEFAULT_ARROW_GUTTER: f32 = 48.0;
pub const DEFAULT_DOT_DIAMETER: f32 = 12.0;
pub const DEFAULT_DOT_GAP: f32 = 12.0;
pub const DEFAULT_INACTIVE_DOT_OPACITY: f32 = 0.5;
pub const DEFAULT_DOT_STRIP_OFFSET: f32 = 24.0;

pub const PDFIUM_LIBRARY_ENV: &str = "PDF_PAGER_PDFIUM_LIB";
pub const LOADER_THREAD_NAME: &str = "pdf-pager-loader";
