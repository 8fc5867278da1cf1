//! The transition engine: folds one item at a time into the state table.
//!
//! One generic fold serves every payload kind; the differences live in small
//! [`FoldRule`] implementations (absorbing/origin elements, the extension
//! step, and the join operator). Reusability is encoded purely in the sweep
//! direction:
//!
//! - 0/1 items sweep the domain *descending*, so every update reads the
//!   pre-item table — each item is selected at most once. Reversing this
//!   silently turns the item reusable, which is why the direction is chosen
//!   in exactly one place.
//! - Reusable items sweep *ascending*, letting a cell derive from a cell
//!   already updated by the same item within the same pass.
//!
//! Permutation counting is a different loop nesting (capacity-major, items
//! inner) and lives in [`count_sequences`]; swapping the nesting silently
//! produces the other, still-plausible count, so the two never share a loop.

use crate::item::Item;
use crate::table::Table;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Aggregation rule for one payload kind. Rule objects carry per-run
/// parameters (the counting modulus); cells stay plain `Copy` scalars.
pub(crate) trait FoldRule: Sync {
    type Cell: Copy + Send + Sync;

    /// The default element every non-origin cell starts from.
    fn absorbing(&self) -> Self::Cell;
    /// The identity element at the zero capacity vector.
    fn origin(&self) -> Self::Cell;
    /// Whether a cell holds a realizable selection.
    fn is_reachable(&self, cell: Self::Cell) -> bool;
    /// Account for selecting `item` on top of the selection behind `cell`.
    fn extend(&self, cell: Self::Cell, item: &Item) -> Self::Cell;
    /// Combine "without this item" and "with this item".
    fn join(&self, a: Self::Cell, b: Self::Cell) -> Self::Cell;
}

/// Optimum-max over `i64` values: `new[c] = max(old[c], old[c-cost] + value)`.
pub(crate) struct MaxValue;

impl FoldRule for MaxValue {
    type Cell = i64;

    fn absorbing(&self) -> i64 {
        i64::MIN
    }
    fn origin(&self) -> i64 {
        0
    }
    fn is_reachable(&self, cell: i64) -> bool {
        cell != i64::MIN
    }
    fn extend(&self, cell: i64, item: &Item) -> i64 {
        cell.saturating_add(item.value())
    }
    fn join(&self, a: i64, b: i64) -> i64 {
        a.max(b)
    }
}

/// Optimum-min over `i64` accumulated cost: `new[v] = min(old[v], old[v-step] + cost)`.
pub(crate) struct MinCost;

impl FoldRule for MinCost {
    type Cell = i64;

    fn absorbing(&self) -> i64 {
        i64::MAX
    }
    fn origin(&self) -> i64 {
        0
    }
    fn is_reachable(&self, cell: i64) -> bool {
        cell != i64::MAX
    }
    fn extend(&self, cell: i64, item: &Item) -> i64 {
        cell.saturating_add(item.value())
    }
    fn join(&self, a: i64, b: i64) -> i64 {
        a.min(b)
    }
}

/// Reachability: `new[c] = old[c] OR old[c-cost]`.
pub(crate) struct Reach;

impl FoldRule for Reach {
    type Cell = bool;

    fn absorbing(&self) -> bool {
        false
    }
    fn origin(&self) -> bool {
        true
    }
    fn is_reachable(&self, cell: bool) -> bool {
        cell
    }
    fn extend(&self, cell: bool, _item: &Item) -> bool {
        cell
    }
    fn join(&self, a: bool, b: bool) -> bool {
        a || b
    }
}

/// Way counting: `new[c] = old[c] + old[c-cost]`, optionally mod M.
///
/// Without a modulus, additions saturate at `u64::MAX`; callers who need
/// exact astronomically-large counts must supply a modulus.
pub(crate) struct Ways {
    pub(crate) modulus: Option<u64>,
}

impl FoldRule for Ways {
    type Cell = u64;

    fn absorbing(&self) -> u64 {
        0
    }
    fn origin(&self) -> u64 {
        match self.modulus {
            Some(m) => 1 % m,
            None => 1,
        }
    }
    fn is_reachable(&self, cell: u64) -> bool {
        cell != 0
    }
    fn extend(&self, cell: u64, _item: &Item) -> u64 {
        cell
    }
    fn join(&self, a: u64, b: u64) -> u64 {
        match self.modulus {
            Some(m) => ((a as u128 + b as u128) % m as u128) as u64,
            None => a.saturating_add(b),
        }
    }
}

/// Maximal product of safe probabilities; cells below zero are unreachable.
pub(crate) struct SafeProb;

pub(crate) const UNREACHABLE_PROB: f64 = -1.0;

impl FoldRule for SafeProb {
    type Cell = f64;

    fn absorbing(&self) -> f64 {
        UNREACHABLE_PROB
    }
    fn origin(&self) -> f64 {
        1.0
    }
    fn is_reachable(&self, cell: f64) -> bool {
        cell >= 0.0
    }
    fn extend(&self, cell: f64, item: &Item) -> f64 {
        cell * (1.0 - item.unsafe_prob())
    }
    fn join(&self, a: f64, b: f64) -> f64 {
        a.max(b)
    }
}

/// Allocate the table for `rule` with the zero vector at the identity element
/// and everything else at the absorbing element.
pub(crate) fn init_table<R: FoldRule>(rule: &R, capacities: &[i64]) -> Table<R::Cell> {
    let mut table = Table::new(capacities, rule.absorbing());
    table.set(&vec![0; capacities.len()], rule.origin());
    table
}

/// Fold one item into the table, producing the table "as if this item had
/// been considered". Sweep direction is selected here and nowhere else.
pub(crate) fn fold_item<R: FoldRule>(rule: &R, table: &mut Table<R::Cell>, item: &Item) {
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("fold_item", reusable = item.reusable);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let costs = item.costs_as_usize();
    if item.reusable {
        // Ascending: cell c may derive from c - cost updated in this pass.
        for dest in 0..table.len() {
            step(rule, table, item, &costs, dest);
        }
    } else {
        fold_use_once(rule, table, item, &costs);
    }
}

#[cfg(not(feature = "parallel"))]
fn fold_use_once<R: FoldRule>(rule: &R, table: &mut Table<R::Cell>, item: &Item, costs: &[usize]) {
    // Descending: source indices are linearly below the destination, so every
    // read sees the pre-item table.
    for dest in (0..table.len()).rev() {
        step(rule, table, item, costs, dest);
    }
}

#[cfg(feature = "parallel")]
fn fold_use_once<R: FoldRule>(rule: &R, table: &mut Table<R::Cell>, item: &Item, costs: &[usize]) {
    // With a pre-item snapshot every cell update is independent, which is the
    // parallel equivalent of the descending sweep.
    let geo = table.geometry().clone();
    let prev = table.cells().to_vec();
    table
        .cells_mut()
        .par_iter_mut()
        .enumerate()
        .for_each(|(dest, cell)| {
            if let Some(src) = geo.source_of(dest, costs) {
                let from = prev[src];
                if rule.is_reachable(from) {
                    *cell = rule.join(*cell, rule.extend(from, item));
                }
            }
        });
}

#[inline]
fn step<R: FoldRule>(
    rule: &R,
    table: &mut Table<R::Cell>,
    item: &Item,
    costs: &[usize],
    dest: usize,
) {
    let src = table.geometry().source_of(dest, costs);
    if let Some(src) = src {
        let from = *table.cell(src);
        if rule.is_reachable(from) {
            let joined = rule.join(*table.cell(dest), rule.extend(from, item));
            table.set_linear(dest, joined);
        }
    }
}

/// Allocate, fold every item in order, and return the final table.
pub(crate) fn fold_all<R: FoldRule>(rule: &R, capacities: &[i64], items: &[Item]) -> Table<R::Cell> {
    let mut table = init_table(rule, capacities);
    for item in items {
        fold_item(rule, &mut table, item);
    }
    table
}

/// Sequence (permutation) counting: outer loop over capacity ascending, inner
/// loop over items, so distinct orderings of the same multiset count
/// separately. Requires every item reusable (enforced upstream).
pub(crate) fn count_sequences(rule: &Ways, table: &mut Table<u64>, items: &[Item]) {
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("count_sequences", items = items.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let costs: Vec<Vec<usize>> = items.iter().map(Item::costs_as_usize).collect();
    for dest in 0..table.len() {
        for (item, item_costs) in items.iter().zip(&costs) {
            step(rule, table, item, item_costs, dest);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_01_knapsack() -> Table<i64> {
        let items = vec![
            Item::valued(vec![1], 20),
            Item::valued(vec![2], 30),
            Item::valued(vec![3], 40),
        ];
        fold_all(&MaxValue, &[6], &items)
    }

    #[test]
    fn init_table_identity_and_absorbing() {
        let t = init_table(&MaxValue, &[2, 2]);
        assert_eq!(*t.get(&[0, 0]), 0);
        assert_eq!(*t.get(&[1, 2]), i64::MIN);

        let t = init_table(&Ways { modulus: None }, &[3]);
        assert_eq!(*t.get(&[0]), 1);
        assert_eq!(*t.get(&[1]), 0);
    }

    #[test]
    fn use_once_sweep_selects_each_item_at_most_once() {
        let t = table_01_knapsack();
        // Exact-cost cells: cost 2 can only be {2} (30) or {1}+nothing at 2.
        assert_eq!(*t.get(&[0]), 0);
        assert_eq!(*t.get(&[1]), 20);
        assert_eq!(*t.get(&[6]), 90);
        // Cost 2 twice (item 1 reused) would be 40; must be 30.
        assert_eq!(*t.get(&[2]), 30);
    }

    #[test]
    fn reusable_sweep_allows_repeats() {
        let items = vec![Item::valued(vec![2], 30).reusable()];
        let t = fold_all(&MaxValue, &[6], &items);
        assert_eq!(*t.get(&[6]), 90); // three copies
        assert_eq!(*t.get(&[5]), i64::MIN); // odd cost unreachable
    }

    #[test]
    fn min_cost_counts_coins() {
        let items = vec![
            Item::valued(vec![1], 1).reusable(),
            Item::valued(vec![2], 1).reusable(),
            Item::valued(vec![5], 1).reusable(),
        ];
        let t = fold_all(&MinCost, &[11], &items);
        assert_eq!(*t.get(&[11]), 3); // 5 + 5 + 1
        assert_eq!(*t.get(&[0]), 0);
    }

    #[test]
    fn ways_modulus_reduces_every_join() {
        let items = vec![
            Item::valued(vec![1], 0),
            Item::valued(vec![1], 0),
            Item::valued(vec![1], 0),
        ];
        let rule = Ways { modulus: Some(2) };
        let t = fold_all(&rule, &[2], &items);
        // C(3,2) = 3 ways to pick cost 2, reduced mod 2.
        assert_eq!(*t.get(&[2]), 1);
    }

    #[test]
    fn sequences_differ_from_combinations() {
        let items = vec![
            Item::valued(vec![1], 0).reusable(),
            Item::valued(vec![2], 0).reusable(),
        ];
        let rule = Ways { modulus: None };

        let combos = fold_all(&rule, &[3], &items);
        assert_eq!(*combos.get(&[3]), 2); // {1,1,1}, {1,2}

        let mut seqs = init_table(&rule, &[3]);
        count_sequences(&rule, &mut seqs, &items);
        assert_eq!(*seqs.get(&[3]), 3); // 1+1+1, 1+2, 2+1
    }

    #[test]
    fn two_axis_fold_respects_both_budgets() {
        // "Ones and zeroes": items cost (zeros, ones), value 1 each.
        let strs: [(i64, i64); 5] = [(1, 2), (2, 1), (3, 0), (0, 1), (1, 1)];
        let items: Vec<Item> = strs
            .iter()
            .map(|&(z, o)| Item::valued(vec![z, o], 1))
            .collect();
        let t = fold_all(&MaxValue, &[5, 3], &items);
        let best = (0..t.len())
            .map(|i| *t.cell(i))
            .filter(|&c| c != i64::MIN)
            .max()
            .unwrap();
        assert_eq!(best, 4);
    }

    #[test]
    fn safe_prob_multiplies_complements() {
        let items = vec![
            Item::probabilistic(vec![10], 0.05),
            Item::probabilistic(vec![20], 0.1),
        ];
        let t = fold_all(&SafeProb, &[30], &items);
        assert!((t.get(&[30]) - 0.95 * 0.9).abs() < 1e-12);
        assert!((t.get(&[10]) - 0.95).abs() < 1e-12);
        assert_eq!(*t.get(&[5]), UNREACHABLE_PROB);
    }
}
