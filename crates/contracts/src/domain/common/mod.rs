pub mod field_error;
pub mod lifecycle;
pub mod money;
pub mod page;

pub use field_error::FieldError;
pub use lifecycle::Lifecycle;
pub use money::round_currency;
pub use page::{ApiMessage, Page};
