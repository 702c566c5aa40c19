pub mod effort;
pub mod range;
pub mod summary;

pub use effort::EffortRow;
pub use range::{DateColumn, DateRange, RangeMode};
pub use summary::SummaryRow;
