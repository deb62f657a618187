pub mod add;
pub mod backup;
pub mod calculator;
pub mod del;
pub mod earn;
pub mod events;
pub mod export;
pub mod import;
pub mod ledger;
pub mod list;
pub mod recalc;
pub mod recover;
pub mod schedule;
pub mod status;
