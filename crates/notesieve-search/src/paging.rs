//! Paging over a ranked result list ("show more" in the host UI).

use notesieve_core::defaults::RESULT_PAGE_SIZE;
use notesieve_core::SearchResult;
use serde::Serialize;

/// One page of ranked results.
#[derive(Debug, Clone, Serialize)]
pub struct ResultPage {
    pub items: Vec<SearchResult>,
    /// Zero-based page index.
    pub page: usize,
    pub page_size: usize,
    /// Total results across all pages.
    pub total: usize,
}

impl ResultPage {
    /// Whether results exist beyond this page.
    pub fn has_more(&self) -> bool {
        self.remaining() > 0
    }

    /// Number of results after this page.
    pub fn remaining(&self) -> usize {
        let shown = self.page.saturating_mul(self.page_size) + self.items.len();
        self.total.saturating_sub(shown)
    }
}

/// Cut page `page` out of `results`. A page size of 0 uses the default.
pub fn paginate(results: &[SearchResult], page: usize, page_size: usize) -> ResultPage {
    let page_size = if page_size == 0 {
        RESULT_PAGE_SIZE
    } else {
        page_size
    };
    let start = page.saturating_mul(page_size).min(results.len());
    let end = start.saturating_add(page_size).min(results.len());

    ResultPage {
        items: results[start..end].to_vec(),
        page,
        page_size,
        total: results.len(),
    }
}
