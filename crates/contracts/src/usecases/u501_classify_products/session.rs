use std::collections::HashSet;

use super::dto::{PendingProduct, ProductSubmission};
use super::normalize::normalize_description;
use crate::domain::a004_subgrupo::aggregate::Subgrupo;
use crate::shared::pagination;

/// Grid page sizes offered to the operator.
pub const GRID_PAGE_SIZE_OPTIONS: [usize; 3] = [10, 25, 50];
pub const DEFAULT_GRID_PAGE_SIZE: usize = 10;

/// In-memory review queue of one classification page.
///
/// Products live here between load and submit only. `remaining` follows the
/// list length; `processed` accumulates the counts reported by the service,
/// which may differ from the number of rows sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSession {
    products: Vec<PendingProduct>,
    remaining: usize,
    processed: i64,
    page: usize,
    page_size: usize,
}

impl Default for ReviewSession {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            remaining: 0,
            processed: 0,
            page: 0,
            page_size: DEFAULT_GRID_PAGE_SIZE,
        }
    }
}

impl ReviewSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[PendingProduct] {
        &self.products
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn processed(&self) -> i64 {
        self.processed
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.products.len(), self.page_size)
    }

    /// Replace the queue with a freshly loaded list.
    pub fn replace(&mut self, products: Vec<PendingProduct>) {
        self.remaining = products.len();
        self.products = products;
        self.page = pagination::clamp_page(self.page, self.products.len(), self.page_size);
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = pagination::clamp_page(page, self.products.len(), self.page_size);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 0;
    }

    /// Rows on the current grid page, in list order.
    pub fn visible(&self) -> &[PendingProduct] {
        pagination::page_slice(&self.products, self.page, self.page_size)
    }

    /// Discard a row locally without telling the service.
    pub fn remove(&mut self, code: i64) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.code != code);
        let removed = self.products.len() < before;
        if removed {
            self.remaining = self.remaining.saturating_sub(1);
            self.page = pagination::clamp_page(self.page, self.products.len(), self.page_size);
        }
        removed
    }

    /// Write the chosen subgroup onto the product row.
    pub fn assign_subgrupo(&mut self, code: i64, subgrupo: &Subgrupo) -> bool {
        match self.products.iter_mut().find(|p| p.code == code) {
            Some(product) => {
                product.suggested_subgrupo_code = subgrupo.code;
                product.suggested_subgrupo_description = subgrupo.description.clone();
                true
            }
            None => false,
        }
    }

    /// Commit an inline description edit.
    pub fn set_description(&mut self, code: i64, raw: &str) -> bool {
        match self.products.iter_mut().find(|p| p.code == code) {
            Some(product) => {
                product.description = normalize_description(raw);
                true
            }
            None => false,
        }
    }

    /// Payload for "submit visible page".
    pub fn visible_submission(&self) -> Vec<ProductSubmission> {
        self.visible().iter().map(ProductSubmission::page_entry).collect()
    }

    /// Payload for "submit all remaining".
    pub fn full_submission(&self) -> Vec<ProductSubmission> {
        self.products.iter().map(ProductSubmission::full_entry).collect()
    }

    /// Drop the submitted rows and add the count the service reported.
    pub fn apply_page_submitted(&mut self, submitted_codes: &[i64], reported: i64) {
        let submitted: HashSet<i64> = submitted_codes.iter().copied().collect();
        self.products.retain(|p| !submitted.contains(&p.code));
        self.processed += reported;
        self.remaining = self.products.len();
        self.page = pagination::clamp_page(self.page, self.products.len(), self.page_size);
    }

    /// After a full submission the running count restarts; a reload follows.
    pub fn reset_processed(&mut self) {
        self.processed = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(code: i64) -> PendingProduct {
        PendingProduct {
            code,
            description: format!("PRODUTO {}", code),
            suggested_subgrupo_code: 100,
            suggested_subgrupo_description: "SUGESTAO".into(),
        }
    }

    fn session_with(n: i64) -> ReviewSession {
        let mut s = ReviewSession::new();
        s.replace((1..=n).map(product).collect());
        s
    }

    fn codes(products: &[PendingProduct]) -> Vec<i64> {
        products.iter().map(|p| p.code).collect()
    }

    #[test]
    fn test_replace_resets_remaining() {
        let s = session_with(23);
        assert_eq!(s.remaining(), 23);
        assert_eq!(s.processed(), 0);
        assert_eq!(s.total_pages(), 3);
    }

    #[test]
    fn test_visible_page_slice() {
        let mut s = session_with(23);
        s.set_page(1);
        assert_eq!(codes(s.visible()), (11..=20).collect::<Vec<_>>());
        let submission: Vec<i64> = s.visible_submission().iter().map(|p| p.code).collect();
        assert_eq!(submission, (11..=20).collect::<Vec<_>>());

        s.set_page(2);
        assert_eq!(codes(s.visible()), vec![21, 22, 23]);
    }

    #[test]
    fn test_page_submission_removes_exactly_submitted_codes() {
        let mut s = session_with(23);
        s.set_page(1);
        let sent: Vec<i64> = s.visible_submission().iter().map(|p| p.code).collect();

        // the service may report a different count than rows sent
        s.apply_page_submitted(&sent, 7);

        let expected: Vec<i64> = (1..=10).chain(21..=23).collect();
        assert_eq!(codes(s.products()), expected);
        assert_eq!(s.processed(), 7);
        assert_eq!(s.remaining(), 13);
        assert_eq!(s.page(), 1);
    }

    #[test]
    fn test_processed_accumulates_and_page_clamps() {
        let mut s = session_with(12);
        s.set_page(1);
        let sent: Vec<i64> = s.visible_submission().iter().map(|p| p.code).collect();
        s.apply_page_submitted(&sent, 2);
        assert_eq!(s.page(), 0);

        let sent: Vec<i64> = s.visible_submission().iter().map(|p| p.code).collect();
        s.apply_page_submitted(&sent, 10);
        assert_eq!(s.processed(), 12);
        assert!(s.is_empty());
        assert_eq!(s.remaining(), 0);
    }

    #[test]
    fn test_full_submission_then_reload() {
        let mut s = session_with(5);
        s.apply_page_submitted(&[1], 1);
        assert_eq!(s.full_submission().len(), 4);

        s.reset_processed();
        s.replace(vec![product(40), product(41)]);
        assert_eq!(s.processed(), 0);
        assert_eq!(s.remaining(), 2);
    }

    #[test]
    fn test_remove_is_local_and_decrements() {
        let mut s = session_with(3);
        assert!(s.remove(2));
        assert_eq!(codes(s.products()), vec![1, 3]);
        assert_eq!(s.remaining(), 2);
        assert!(!s.remove(99));
        assert_eq!(s.remaining(), 2);
    }

    #[test]
    fn test_assign_subgrupo() {
        let mut s = session_with(2);
        let sub = Subgrupo { code: 777, description: "BISCOITOS".into(), grupo_code: 7 };
        assert!(s.assign_subgrupo(2, &sub));
        assert_eq!(s.products()[1].suggested_subgrupo_code, 777);
        assert_eq!(s.products()[1].suggested_subgrupo_description, "BISCOITOS");
        assert_eq!(s.products()[0].suggested_subgrupo_code, 100);
    }

    #[test]
    fn test_set_description_normalizes() {
        let mut s = session_with(1);
        assert!(s.set_description(1, "leite integral 1l!"));
        assert_eq!(s.products()[0].description, "LEITE INTEGRAL 1L");
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut s = session_with(60);
        s.set_page(3);
        s.set_page_size(25);
        assert_eq!(s.page(), 0);
        assert_eq!(s.total_pages(), 3);
    }
}
