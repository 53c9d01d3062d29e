use crate::domain::a004_subgrupo::aggregate::Subgrupo;
use crate::shared::pagination;
use crate::shared::search::filter_by_query;

/// Rows per page in the subgroup picker.
pub const PICKER_PAGE_SIZE: usize = 20;

/// Search and paging state of the subgroup picker modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubgrupoPickerState {
    pub query: String,
    pub page: usize,
}

impl SubgrupoPickerState {
    /// New search text; paging restarts at the first page.
    pub fn set_query(&mut self, query: String) {
        self.query = query;
        self.page = 0;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn filtered(&self, options: &[Subgrupo]) -> Vec<Subgrupo> {
        filter_by_query(options, &self.query)
    }

    /// Rows of the current page out of an already filtered list.
    pub fn page_of<'a>(&self, filtered: &'a [Subgrupo]) -> &'a [Subgrupo] {
        pagination::page_slice(filtered, self.page, PICKER_PAGE_SIZE)
    }

    pub fn total_pages(&self, filtered_len: usize) -> usize {
        pagination::total_pages(filtered_len, PICKER_PAGE_SIZE)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self, filtered_len: usize) -> bool {
        (self.page + 1) * PICKER_PAGE_SIZE < filtered_len
    }

    pub fn previous(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    pub fn next(&mut self, filtered_len: usize) {
        if self.has_next(filtered_len) {
            self.page += 1;
        }
    }

    /// "Página X de Y"
    pub fn label(&self, filtered_len: usize) -> String {
        format!("Página {} de {}", self.page + 1, self.total_pages(filtered_len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(n: i64) -> Vec<Subgrupo> {
        (1..=n)
            .map(|code| Subgrupo {
                code,
                description: if code % 2 == 0 { format!("Bebida {}", code) } else { format!("Limpeza {}", code) },
                grupo_code: 1,
            })
            .collect()
    }

    #[test]
    fn test_pages_of_twenty() {
        let opts = options(45);
        let mut picker = SubgrupoPickerState::default();
        let filtered = picker.filtered(&opts);
        assert_eq!(picker.page_of(&filtered).len(), 20);
        assert!(!picker.has_previous());
        assert!(picker.has_next(45));

        picker.next(45);
        picker.next(45);
        assert_eq!(picker.page, 2);
        assert_eq!(picker.page_of(&filtered).len(), 5);
        assert!(!picker.has_next(45));
        picker.next(45);
        assert_eq!(picker.page, 2);
        assert_eq!(picker.label(45), "Página 3 de 3");
    }

    #[test]
    fn test_exact_multiple_has_no_next() {
        let picker = SubgrupoPickerState::default();
        assert!(!picker.has_next(20));
        assert!(picker.has_next(21));
    }

    #[test]
    fn test_query_resets_page_and_filters() {
        let opts = options(45);
        let mut picker = SubgrupoPickerState { query: String::new(), page: 2 };
        picker.set_query("BEBIDA".into());
        assert_eq!(picker.page, 0);
        let filtered = picker.filtered(&opts);
        assert_eq!(filtered.len(), 22);
        let page = picker.page_of(&filtered);
        assert_eq!(page.len(), 20);
        assert!(page.iter().all(|s| s.code % 2 == 0));
    }

    #[test]
    fn test_query_matches_code() {
        let opts = options(45);
        let mut picker = SubgrupoPickerState::default();
        picker.set_query("44".into());
        let codes: Vec<i64> = picker.filtered(&opts).iter().map(|s| s.code).collect();
        assert_eq!(codes, vec![44]);
    }
}
