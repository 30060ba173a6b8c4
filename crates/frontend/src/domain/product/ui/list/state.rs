/// Page-size choices offered by the selector
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 20, 50];

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// View state of the product list: search keyword, sort order and pagination.
/// Owned by the list component and handed to the pure view helpers.
#[derive(Clone, Debug)]
pub struct ProductListState {
    pub search: String,

    /// Sorted column ("title" or "price"), empty until a header is clicked
    pub sort_field: String,
    pub sort_ascending: bool,

    /// 1-based current page
    pub page: usize,
    pub page_size: usize,
}

impl Default for ProductListState {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort_field: String::new(),
            sort_ascending: true,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ProductListState {
    /// Apply a new search keyword. Searching always returns to the first page.
    pub fn set_search(&mut self, keyword: String) {
        self.search = keyword;
        self.page = 1;
    }

    /// Toggle direction on a repeated click of the same column, otherwise
    /// sort ascending on the new column. The current page is kept.
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field.to_string();
            self.sort_ascending = true;
        }
    }

    /// Switch the page size and return to the first page.
    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size;
        self.page = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_resets_to_the_first_page() {
        let mut state = ProductListState {
            page: 4,
            ..Default::default()
        };
        state.set_search("mug".to_string());
        assert_eq!(state.search, "mug");
        assert_eq!(state.page, 1);
    }

    #[test]
    fn repeated_sort_clicks_toggle_direction() {
        let mut state = ProductListState::default();
        state.toggle_sort("title");
        assert_eq!(state.sort_field, "title");
        assert!(state.sort_ascending);
        state.toggle_sort("title");
        assert!(!state.sort_ascending);
        state.toggle_sort("title");
        assert!(state.sort_ascending);
    }

    #[test]
    fn switching_column_resets_to_ascending() {
        let mut state = ProductListState::default();
        state.toggle_sort("title");
        state.toggle_sort("title");
        assert!(!state.sort_ascending);
        state.toggle_sort("price");
        assert_eq!(state.sort_field, "price");
        assert!(state.sort_ascending);
    }

    #[test]
    fn sorting_keeps_the_current_page() {
        let mut state = ProductListState {
            page: 3,
            ..Default::default()
        };
        state.toggle_sort("price");
        assert_eq!(state.page, 3);
    }

    #[test]
    fn page_size_change_resets_to_the_first_page() {
        let mut state = ProductListState {
            page: 5,
            ..Default::default()
        };
        state.set_page_size(50);
        assert_eq!(state.page_size, 50);
        assert_eq!(state.page, 1);
    }
}
