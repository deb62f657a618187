//! Shared ledger recomputation, run synchronously after every mutation
//! of the entry list, the schedule, or the manual events.

use crate::core::ledger;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::ledger::Ledger;
use crate::utils::date;

/// Full deterministic recomputation from the current entry list: never
/// an incremental delta, so repeated invocation is always safe. The
/// ledger row is only rewritten when the recomputed values differ
/// (skip-if-unchanged, to avoid redundant persistence writes).
/// Returns the fresh ledger and whether a write happened.
pub fn recompute_ledger(pool: &mut DbPool) -> AppResult<(Ledger, bool)> {
    let entries = queries::load_all_entries(pool)?;
    let schedule = queries::load_schedule(pool)?;
    let current = queries::load_ledger(pool)?;

    let fresh = ledger::recalculate(current, &entries, &schedule, date::today());
    let changed = queries::save_ledger_if_changed(&pool.conn, &fresh)?;

    Ok((fresh, changed))
}
