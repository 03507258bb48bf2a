//! Value Objects

mod fact_id;
mod style;

pub use fact_id::FactId;
pub use style::Style;
