pub mod daily;
pub mod engine;
pub mod overlap;
pub mod period;
pub mod schedule;
