pub mod api_utils;
pub mod async_op;
pub mod components;
pub mod date_utils;
pub mod icons;
pub mod list_utils;
pub mod modal;
pub mod page_frame;
pub mod request_guard;
pub mod transition;
