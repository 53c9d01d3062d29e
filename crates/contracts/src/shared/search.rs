//! Client-side substring search shared by the hierarchy tabs and the subgroup picker.

/// Types filtered by a search box: a numeric code plus one text column.
pub trait Searchable {
    fn search_code(&self) -> i64;
    fn search_text(&self) -> &str;

    /// Case-insensitive match on the decimal code or the text.
    fn matches_query(&self, query_lower: &str) -> bool {
        self.search_code().to_string().contains(query_lower)
            || self.search_text().to_lowercase().contains(query_lower)
    }
}

/// Filter `items` by `query`; an empty query returns the list unchanged.
pub fn filter_by_query<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    if query.is_empty() {
        return items.to_vec();
    }
    let query_lower = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.matches_query(&query_lower))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Item(i64, &'static str);

    impl Searchable for Item {
        fn search_code(&self) -> i64 {
            self.0
        }
        fn search_text(&self) -> &str {
            self.1
        }
    }

    fn items() -> Vec<Item> {
        vec![Item(101, "Bebidas"), Item(205, "Laticínios"), Item(310, "Higiene")]
    }

    #[test]
    fn test_empty_query_returns_everything() {
        assert_eq!(filter_by_query(&items(), ""), items());
    }

    #[test]
    fn test_text_match_is_case_insensitive() {
        assert_eq!(filter_by_query(&items(), "BEB"), vec![Item(101, "Bebidas")]);
        assert_eq!(filter_by_query(&items(), "laticí"), vec![Item(205, "Laticínios")]);
    }

    #[test]
    fn test_matches_code_decimal_string() {
        assert_eq!(
            filter_by_query(&items(), "10"),
            vec![Item(101, "Bebidas"), Item(310, "Higiene")]
        );
    }

    #[test]
    fn test_no_match() {
        assert!(filter_by_query(&items(), "xyz").is_empty());
    }
}
