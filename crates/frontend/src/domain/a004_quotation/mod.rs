pub mod catalog;
pub mod service;
pub mod ui;
