pub mod a001_seller;
pub mod a002_branch;
pub mod a003_sale;
pub mod a004_quotation;
pub mod a005_coupon;
pub mod common;
