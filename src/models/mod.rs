pub mod day_record;
pub mod day_status;
pub mod ledger;
pub mod overtime_event;
pub mod schedule;
