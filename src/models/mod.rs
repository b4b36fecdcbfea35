pub mod category;
pub mod totals;
pub mod transaction;
