//! List-and-filter engine shared by the list pages.
//!
//! Pagination and sorting are server-driven: [`ListQuery`] holds the request
//! parameters and tells the caller when a re-fetch is due. Column filters
//! ([`FilterSet`]) only narrow the page that is already loaded; they are not a
//! substitute for server-side filtering, so counts shown while a filter is
//! active refer to the current page (see [`visible_count_label`]).

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Row lookup by column name, used by the client-side filters.
pub trait Filterable {
    fn column_value(&self, column: &str) -> Option<String>;
}

/// Comparison by column name, for lists sorted on the client.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn is_ascending(&self) -> bool {
        matches!(self, SortDirection::Asc)
    }
}

/// Server request parameters of a paginated list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: usize,
    pub size: usize,
    pub sort_field: String,
    pub sort_dir: SortDirection,
}

impl ListQuery {
    pub fn new(size: usize, sort_field: &str) -> Self {
        Self {
            page: 0,
            size,
            sort_field: sort_field.to_string(),
            sort_dir: SortDirection::Desc,
        }
    }

    /// Header click. The active column flips direction; a new column starts
    /// descending. Either way the list goes back to page 0 and must be
    /// re-fetched.
    pub fn toggle_sort(&mut self, field: &str) -> bool {
        if self.sort_field == field {
            self.sort_dir = self.sort_dir.flipped();
        } else {
            self.sort_field = field.to_string();
            self.sort_dir = SortDirection::Desc;
        }
        self.page = 0;
        true
    }

    /// Plain page navigation keeps the sort. Returns `false` (no fetch) for
    /// the current page or a page past the end.
    pub fn go_to_page(&mut self, page: usize, total_pages: usize) -> bool {
        if page == self.page || (total_pages > 0 && page >= total_pages) {
            return false;
        }
        self.page = page;
        true
    }

    pub fn change_page_size(&mut self, size: usize) -> bool {
        if size == 0 || size == self.size {
            return false;
        }
        self.size = size;
        self.page = 0;
        true
    }

    pub fn to_query_string(&self) -> String {
        format!(
            "?page={}&size={}&sortBy={}&sortDir={}",
            self.page,
            self.size,
            urlencoding::encode(&self.sort_field),
            self.sort_dir.as_str()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnFilter {
    /// Case-insensitive substring match.
    Contains(String),
    /// Exact match, e.g. a status dropdown value.
    Exact(String),
}

impl ColumnFilter {
    pub fn is_empty(&self) -> bool {
        match self {
            ColumnFilter::Contains(s) | ColumnFilter::Exact(s) => s.trim().is_empty(),
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            ColumnFilter::Contains(needle) => value
                .to_lowercase()
                .contains(&needle.trim().to_lowercase()),
            ColumnFilter::Exact(expected) => value == expected,
        }
    }
}

/// Calendar-day filter on a timestamp column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFilter {
    pub column: String,
    pub day: NaiveDate,
    /// Offset of the display locale; timestamps carrying their own offset are
    /// moved into it before taking the date.
    pub offset: FixedOffset,
}

impl DateFilter {
    pub fn matches(&self, value: &str) -> bool {
        calendar_day(value, self.offset) == Some(self.day)
    }
}

/// Calendar day of a backend timestamp as seen in `offset`.
///
/// Accepts RFC 3339 (`2025-03-10T23:30:00Z`), naive date-times already in
/// local wall time (`2025-03-10T14:22:00`) and plain dates.
pub fn calendar_day(value: &str, offset: FixedOffset) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&offset).date_naive());
    }
    for fmt in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Active client-side filters of one list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSet {
    columns: BTreeMap<String, ColumnFilter>,
    date: Option<DateFilter>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or, when the value is blank, drop a column filter.
    pub fn set(&mut self, column: &str, filter: ColumnFilter) {
        if filter.is_empty() {
            self.columns.remove(column);
        } else {
            self.columns.insert(column.to_string(), filter);
        }
    }

    pub fn set_date(&mut self, filter: Option<DateFilter>) {
        self.date = filter;
    }

    pub fn clear(&mut self) {
        self.columns.clear();
        self.date = None;
    }

    pub fn active_count(&self) -> usize {
        self.columns.len() + usize::from(self.date.is_some())
    }

    pub fn is_active(&self) -> bool {
        self.active_count() > 0
    }

    pub fn matches<T: Filterable>(&self, item: &T) -> bool {
        let columns_ok = self.columns.iter().all(|(column, filter)| {
            item.column_value(column)
                .map(|v| filter.matches(&v))
                .unwrap_or(false)
        });
        let date_ok = self.date.as_ref().map_or(true, |f| {
            item.column_value(&f.column)
                .map(|v| f.matches(&v))
                .unwrap_or(false)
        });
        columns_ok && date_ok
    }
}

/// Narrow the loaded page. Order is preserved.
pub fn apply_filters<T: Filterable + Clone>(items: &[T], filters: &FilterSet) -> Vec<T> {
    if !filters.is_active() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| filters.matches(*item))
        .cloned()
        .collect()
}

/// Client-side sort for lists held entirely in memory.
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, dir: SortDirection) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if dir.is_ascending() { cmp } else { cmp.reverse() }
    });
}

/// Count line under a list. With filters active the count is scoped to the
/// loaded page, since the server total does not reflect them.
pub fn visible_count_label(
    visible: usize,
    loaded: usize,
    total_elements: usize,
    filtered: bool,
) -> String {
    if filtered {
        format!("{} de {} visibles en esta página", visible, loaded)
    } else {
        format!("{} de {} registros", visible, total_elements)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageButton {
    Page(usize),
    Ellipsis,
}

/// Page buttons for a pagination bar: at most five pages centred on
/// `current`, clamped to `[0, total - 1]`, plus explicit first/last buttons
/// (with an ellipsis when there is a gap) when the window leaves them out.
pub fn page_window(current: usize, total: usize) -> Vec<PageButton> {
    if total == 0 {
        return Vec::new();
    }
    let last = total - 1;
    let current = current.min(last);
    let start = current.saturating_sub(2);
    let end = (current + 2).min(last);

    let mut buttons = Vec::with_capacity(9);
    if start > 0 {
        buttons.push(PageButton::Page(0));
        if start > 1 {
            buttons.push(PageButton::Ellipsis);
        }
    }
    buttons.extend((start..=end).map(PageButton::Page));
    if end < last {
        if end + 1 < last {
            buttons.push(PageButton::Ellipsis);
        }
        buttons.push(PageButton::Page(last));
    }
    buttons
}

/// Sort indicator for a header.
pub fn get_sort_indicator(current_field: &str, field: &str, dir: SortDirection) -> &'static str {
    if current_field == field {
        if dir.is_ascending() { " ▲" } else { " ▼" }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-icon table__sort-icon--active"
    } else {
        "table__sort-icon"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageButton::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        code: &'static str,
        client: &'static str,
        status: &'static str,
        created: &'static str,
    }

    impl Filterable for Row {
        fn column_value(&self, column: &str) -> Option<String> {
            match column {
                "code" => Some(self.code.to_string()),
                "client" => Some(self.client.to_string()),
                "status" => Some(self.status.to_string()),
                "created" => Some(self.created.to_string()),
                _ => None,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                code: "VENTA-001",
                client: "Juan Pérez",
                status: "BORRADOR",
                created: "2025-03-10T09:00:00",
            },
            Row {
                code: "VENTA-002",
                client: "María Juárez",
                status: "CONFIRMADA",
                created: "2025-03-10T23:30:00Z",
            },
            Row {
                code: "VENTA-003",
                client: "Pedro Ruiz",
                status: "BORRADOR",
                created: "2025-03-11T08:15:00",
            },
        ]
    }

    fn lima() -> FixedOffset {
        FixedOffset::west_opt(5 * 3600).unwrap()
    }

    #[test]
    fn test_toggle_sort_same_column_flips_and_resets_page() {
        let mut q = ListQuery::new(10, "fechaVentaCreada");
        q.page = 3;
        assert!(q.toggle_sort("fechaVentaCreada"));
        assert_eq!(q.sort_dir, SortDirection::Asc);
        assert_eq!(q.page, 0);
    }

    #[test]
    fn test_toggle_sort_new_column_starts_descending() {
        let mut q = ListQuery::new(10, "fechaVentaCreada");
        q.sort_dir = SortDirection::Asc;
        q.page = 2;
        q.toggle_sort("nombreCliente");
        assert_eq!(q.sort_field, "nombreCliente");
        assert_eq!(q.sort_dir, SortDirection::Desc);
        assert_eq!(q.page, 0);
    }

    #[test]
    fn test_page_navigation_preserves_sort() {
        let mut q = ListQuery::new(10, "numVenta");
        q.toggle_sort("numVenta");
        assert!(q.go_to_page(4, 10));
        assert_eq!(q.page, 4);
        assert_eq!(q.sort_dir, SortDirection::Asc);
        assert!(!q.go_to_page(4, 10));
        assert!(!q.go_to_page(10, 10));
        assert_eq!(q.to_query_string(), "?page=4&size=10&sortBy=numVenta&sortDir=asc");
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut q = ListQuery::new(10, "numVenta");
        q.page = 5;
        assert!(q.change_page_size(20));
        assert_eq!(q.page, 0);
        assert!(!q.change_page_size(20));
    }

    #[test]
    fn test_contains_filter_is_case_insensitive() {
        let mut f = FilterSet::new();
        f.set("client", ColumnFilter::Contains("JUÁREZ".into()));
        let out = apply_filters(&rows(), &f);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].code, "VENTA-002");
    }

    #[test]
    fn test_exact_and_contains_combine() {
        let mut f = FilterSet::new();
        f.set("status", ColumnFilter::Exact("BORRADOR".into()));
        f.set("code", ColumnFilter::Contains("003".into()));
        let out = apply_filters(&rows(), &f);
        assert_eq!(out.iter().map(|r| r.code).collect::<Vec<_>>(), vec!["VENTA-003"]);
        assert_eq!(f.active_count(), 2);
    }

    #[test]
    fn test_blank_filter_is_dropped() {
        let mut f = FilterSet::new();
        f.set("client", ColumnFilter::Contains("Juan".into()));
        f.set("client", ColumnFilter::Contains("  ".into()));
        assert!(!f.is_active());
        assert_eq!(apply_filters(&rows(), &f).len(), 3);
    }

    #[test]
    fn test_date_filter_uses_display_calendar_day() {
        // 23:30 UTC on the 10th is 18:30 on the 10th in Lima.
        let mut f = FilterSet::new();
        f.set_date(Some(DateFilter {
            column: "created".into(),
            day: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            offset: lima(),
        }));
        let out = apply_filters(&rows(), &f);
        assert_eq!(out.iter().map(|r| r.code).collect::<Vec<_>>(), vec!["VENTA-001", "VENTA-002"]);
    }

    #[test]
    fn test_calendar_day_crosses_midnight_with_offset() {
        let day = calendar_day("2025-03-11T02:00:00Z", lima());
        assert_eq!(day, NaiveDate::from_ymd_opt(2025, 3, 10));
        assert_eq!(
            calendar_day("2025-03-11", lima()),
            NaiveDate::from_ymd_opt(2025, 3, 11)
        );
        assert_eq!(calendar_day("not a date", lima()), None);
    }

    #[test]
    fn test_visible_count_label_scopes_to_page_when_filtered() {
        assert_eq!(visible_count_label(2, 10, 57, true), "2 de 10 visibles en esta página");
        assert_eq!(visible_count_label(10, 10, 57, false), "10 de 57 registros");
    }

    #[test]
    fn test_page_window_at_start() {
        assert_eq!(page_window(0, 10), vec![Page(0), Page(1), Page(2), Ellipsis, Page(9)]);
    }

    #[test]
    fn test_page_window_in_the_middle() {
        assert_eq!(
            page_window(5, 10),
            vec![Page(0), Ellipsis, Page(3), Page(4), Page(5), Page(6), Page(7), Ellipsis, Page(9)]
        );
    }

    #[test]
    fn test_page_window_edges() {
        assert_eq!(page_window(0, 0), Vec::<PageButton>::new());
        assert_eq!(page_window(0, 1), vec![Page(0)]);
        assert_eq!(page_window(9, 10), vec![Page(0), Ellipsis, Page(7), Page(8), Page(9)]);
        // window touches page 1: no ellipsis between first and window
        assert_eq!(page_window(3, 5), vec![Page(0), Page(1), Page(2), Page(3), Page(4)]);
        // out-of-range current page is clamped to the last one
        assert_eq!(page_window(42, 4), vec![Page(0), Page(1), Page(2), Page(3)]);
    }

    #[test]
    fn test_sort_list_direction() {
        #[derive(Debug)]
        struct N(i32);
        impl Sortable for N {
            fn compare_by_field(&self, other: &Self, _field: &str) -> Ordering {
                self.0.cmp(&other.0)
            }
        }
        let mut items = vec![N(2), N(3), N(1)];
        sort_list(&mut items, "n", SortDirection::Desc);
        assert_eq!(items.iter().map(|n| n.0).collect::<Vec<_>>(), vec![3, 2, 1]);
        sort_list(&mut items, "n", SortDirection::Asc);
        assert_eq!(items.iter().map(|n| n.0).collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
