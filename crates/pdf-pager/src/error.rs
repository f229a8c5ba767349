use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum PdfError {
    #[error("PDF engine not initialized")]
    EngineNotInitialized,

    #[error("PDF engine initialization failed: {0}")]
    EngineInit(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Fetch failed: {0}")]
    Fetch(String),

    #[error("Invalid PDF file: {0}")]
    InvalidPdf(String),

    #[error("Render failed: {0}")]
    RenderFailed(String),

    #[error("Page {page} out of range (1-{total})")]
    PageOutOfRange { page: usize, total: usize },

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Thread error: {0}")]
    ThreadError(String),
}

impl From<std::io::Error> for PdfError {
    fn from(e: std::io::Error) -> Self {
        PdfError::IoError(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PdfError>;
