//! The result extractor: translates the final table into the caller's scalar.
//!
//! Four read modes cover the whole problem family: an exact-target read, a
//! join-fold over the full (capacity-bounded) domain, a feasibility
//! projection, and a descending threshold scan. Partition-style
//! combine-with-complement answers are composed from these in the presets.

use crate::table::Table;
use crate::transition::FoldRule;

/// Read the cell at `target`, or `None` if it is unreachable.
///
/// # Panics
/// Panics if `target` is outside the declared table domain.
pub(crate) fn exact<R: FoldRule>(
    rule: &R,
    table: &Table<R::Cell>,
    target: &[i64],
) -> Option<R::Cell> {
    let cell = *table.get(target);
    rule.is_reachable(cell).then_some(cell)
}

/// Join-fold every reachable cell; for the optimum rules this is the best
/// value achievable anywhere within the declared capacity.
pub(crate) fn best_over<R: FoldRule>(rule: &R, table: &Table<R::Cell>) -> Option<R::Cell> {
    let mut best: Option<R::Cell> = None;
    for linear in 0..table.len() {
        let cell = *table.cell(linear);
        if !rule.is_reachable(cell) {
            continue;
        }
        best = Some(match best {
            Some(b) => rule.join(b, cell),
            None => cell,
        });
    }
    best
}

/// Feasibility projection on a single-axis table: the largest reachable
/// index not exceeding `target` ("nearest subset sum not exceeding t").
pub(crate) fn project_at_most<R: FoldRule>(
    rule: &R,
    table: &Table<R::Cell>,
    target: i64,
) -> Option<i64> {
    assert_eq!(table.arity(), 1, "projection reads a single axis");
    let (lo, hi) = table.bounds(0);
    let top = target.min(hi);
    let mut idx = top;
    while idx >= lo {
        if rule.is_reachable(*table.get(&[idx])) {
            return Some(idx);
        }
        idx -= 1;
    }
    None
}

/// Descending threshold scan on a single-axis table: the largest
/// index whose cell is reachable and satisfies `pred`.
///
/// Ties at an exact threshold are the predicate's business; the
/// probability-weighted caller passes an inclusive `>=`, carried from the
/// source problem convention.
pub(crate) fn scan_descending<R, P>(rule: &R, table: &Table<R::Cell>, pred: P) -> Option<i64>
where
    R: FoldRule,
    P: Fn(R::Cell) -> bool,
{
    assert_eq!(table.arity(), 1, "threshold scan reads a single axis");
    let (lo, hi) = table.bounds(0);
    let mut idx = hi;
    while idx >= lo {
        let cell = *table.get(&[idx]);
        if rule.is_reachable(cell) && pred(cell) {
            return Some(idx);
        }
        idx -= 1;
    }
    None
}
