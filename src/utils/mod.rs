pub mod colors;
pub mod formatting;
pub mod table;

pub use formatting::{fmt_metric, fmt_quantity, round2};
