use crate::shared::list_utils::ListQuery;
use contracts::domain::a001_seller::Seller;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct SellerListState {
    pub items: Vec<Seller>,
    pub query: ListQuery,
    pub is_loaded: bool,
    pub total_count: usize,
    pub total_pages: usize,
}

impl Default for SellerListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            query: ListQuery::new(10, "sellerId"),
            is_loaded: false,
            total_count: 0,
            total_pages: 0,
        }
    }
}

pub fn create_state() -> RwSignal<SellerListState> {
    RwSignal::new(SellerListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_or_out_of_range_page_does_not_refetch() {
        let mut state = SellerListState {
            total_pages: 3,
            ..Default::default()
        };
        let total = state.total_pages;
        assert!(!state.query.go_to_page(0, total));
        assert!(!state.query.go_to_page(3, total));
        assert!(state.query.go_to_page(2, total));
        assert_eq!(state.query.page, 2);

        assert!(state.query.change_page_size(20));
        assert_eq!(state.query.page, 0);
        assert!(!state.query.change_page_size(20));
    }
}
