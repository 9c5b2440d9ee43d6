//! The sort: ordering check and retry driver.
//!
//! - `is_ordered`: Single pass non-decreasing check
//! - `SolitaireSorter`: Runs up to `max_retries` trials through a deal strategy
//! - `solitaire_sort`: Default-configured entry point

mod driver;
mod ordering;

pub use driver::{solitaire_sort, SolitaireSorter, SortReport, SortStatus};
pub use ordering::is_ordered;
