pub mod aggregation;
pub mod grouping;
pub mod services;
pub mod utils;

pub use aggregation::{sum_amounts, totals_by_category, CategoryTotal};
pub use grouping::{day_key, group_by_day, group_by_key};
