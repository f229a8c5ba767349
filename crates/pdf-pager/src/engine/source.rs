use crate::error::{PdfError, Result};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Where the document bytes come from. Owned by the host; the viewer only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    Path(PathBuf),
    Url(String),
    Bytes(Arc<[u8]>),
}

impl DocumentSource {
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            DocumentSource::Url(trimmed.to_string())
        } else {
            DocumentSource::Path(PathBuf::from(trimmed))
        }
    }

    /// Resolves the source into raw bytes. Blocks on disk or network I/O.
    pub fn read_bytes(&self) -> Result<Arc<[u8]>> {
        match self {
            DocumentSource::Path(path) => {
                if !path.exists() {
                    return Err(PdfError::FileNotFound(path.clone()));
                }
                let bytes = std::fs::read(path)?;
                Ok(Arc::from(bytes))
            }
            DocumentSource::Url(url) => fetch_url(url),
            DocumentSource::Bytes(bytes) => Ok(bytes.clone()),
        }
    }
}

impl From<PathBuf> for DocumentSource {
    fn from(path: PathBuf) -> Self {
        DocumentSource::Path(path)
    }
}

impl From<Vec<u8>> for DocumentSource {
    fn from(bytes: Vec<u8>) -> Self {
        DocumentSource::Bytes(Arc::from(bytes))
    }
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSource::Path(path) => write!(f, "{}", path.display()),
            DocumentSource::Url(url) => write!(f, "{}", url),
            DocumentSource::Bytes(bytes) => write!(f, "<{} bytes>", bytes.len()),
        }
    }
}

fn fetch_url(url: &str) -> Result<Arc<[u8]>> {
    log::debug!("Fetching {}", url);

    let response = reqwest::blocking::get(url)
        .and_then(|r| r.error_for_status())
        .map_err(|e| PdfError::Fetch(format!("{}: {}", url, e)))?;

    let body = response
        .bytes()
        .map_err(|e| PdfError::Fetch(format!("{}: {}", url, e)))?;

    Ok(Arc::from(body.to_vec()))
}
