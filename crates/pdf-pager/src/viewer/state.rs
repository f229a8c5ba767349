use crate::error::{PdfError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationDot {
    pub page: usize,
    pub active: bool,
    pub tooltip: String,
}

/// Page bookkeeping for one mounted viewer. Pages are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerState {
    phase: LoadPhase,
    current_page: usize,
    total_pages: usize,
}

impl ViewerState {
    pub fn new() -> Self {
        Self {
            phase: LoadPhase::Loading,
            current_page: 1,
            total_pages: 0,
        }
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn is_loaded(&self) -> bool {
        self.phase == LoadPhase::Loaded
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn on_load_success(&mut self, total_pages: usize) {
        if self.phase != LoadPhase::Loading {
            log::debug!("Ignoring load success in phase {:?}", self.phase);
            return;
        }
        self.total_pages = total_pages;
        self.phase = LoadPhase::Loaded;
    }

    pub fn on_load_failure(&mut self, reason: impl Into<String>) {
        if self.phase != LoadPhase::Loading {
            log::debug!("Ignoring load failure in phase {:?}", self.phase);
            return;
        }
        self.phase = LoadPhase::Failed(reason.into());
    }

    pub fn can_go_previous(&self) -> bool {
        self.is_loaded() && self.current_page > 1
    }

    // Hidden one page early: the last page is only reachable through the dots.
    pub fn can_go_next(&self) -> bool {
        self.is_loaded() && self.total_pages.saturating_sub(self.current_page) > 1
    }

    pub fn previous_page(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.current_page -= 1;
        log::debug!("Page {} of {}", self.current_page, self.total_pages);
        true
    }

    pub fn next_page(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.current_page += 1;
        log::debug!("Page {} of {}", self.current_page, self.total_pages);
        true
    }

    pub fn select_page(&mut self, page: usize) -> Result<()> {
        if !self.is_loaded() || page == 0 || page > self.total_pages {
            return Err(PdfError::PageOutOfRange {
                page,
                total: self.total_pages,
            });
        }
        self.current_page = page;
        log::debug!("Page {} of {}", self.current_page, self.total_pages);
        Ok(())
    }

    pub fn pagination_dots(&self) -> Vec<PaginationDot> {
        if !self.is_loaded() {
            return Vec::new();
        }
        (1..=self.total_pages)
            .map(|page| PaginationDot {
                page,
                active: page == self.current_page,
                tooltip: format!("Page {} of {}", page, self.total_pages),
            })
            .collect()
    }
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new()
    }
}
