pub mod add;
pub mod edit;
pub mod format;
pub mod list;
pub mod remove;
pub mod totals;
