pub mod field_message;
pub mod pagination_controls;
pub mod sortable_header_cell;
pub mod status_pill;
