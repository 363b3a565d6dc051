use crate::shared::list_utils::{FilterSet, Filterable, ListQuery};
use contracts::domain::a002_branch::Branch;
use leptos::prelude::*;

pub const COL_NOMBRE: &str = "nombre";

#[derive(Clone, Debug)]
pub struct BranchListState {
    pub items: Vec<Branch>,
    pub query: ListQuery,
    pub filters: FilterSet,
    pub is_loaded: bool,
    pub total_count: usize,
    pub total_pages: usize,
}

impl Default for BranchListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            query: ListQuery::new(20, COL_NOMBRE),
            filters: FilterSet::new(),
            is_loaded: false,
            total_count: 0,
            total_pages: 0,
        }
    }
}

pub fn create_state() -> RwSignal<BranchListState> {
    RwSignal::new(BranchListState::default())
}

impl Filterable for Branch {
    fn column_value(&self, column: &str) -> Option<String> {
        match column {
            COL_NOMBRE => Some(self.nombre.clone()),
            _ => None,
        }
    }
}
