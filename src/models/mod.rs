pub mod report;
pub mod seat;

pub use report::{AggregateReport, CacheStatus, EventResult, Summary};
pub use seat::SeatRecord;
