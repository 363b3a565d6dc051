pub mod list;
pub mod registration;
