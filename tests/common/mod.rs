//! The one brute-force reference, parameterized the same way as the engine.
//!
//! Exponential enumeration, only sane for roughly a dozen items; the
//! property suites drive it as the differential oracle.

use knapdp::{Answer, Item, ItemWeight, Variant};

pub fn brute_force(items: &[Item], capacity: &[i64], variant: Variant) -> Answer {
    match variant {
        Variant::Max => {
            let mut best = 0i64;
            for_each_selection(items, capacity, &mut |_, chosen| {
                best = best.max(total_value(items, chosen));
            });
            Answer::Best(best)
        }
        Variant::MinCost => {
            let mut best: Option<i64> = None;
            for_each_selection(items, capacity, &mut |used, chosen| {
                if used == capacity {
                    let cost = total_value(items, chosen);
                    best = Some(best.map_or(cost, |b: i64| b.min(cost)));
                }
            });
            Answer::Cost(best)
        }
        Variant::Feasible => {
            let mut hit = false;
            for_each_selection(items, capacity, &mut |used, _| {
                hit |= used == capacity;
            });
            Answer::Feasible(hit)
        }
        Variant::CountCombinations { modulus } => {
            let mut count = 0u64;
            for_each_selection(items, capacity, &mut |used, _| {
                if used == capacity {
                    count = add_count(count, 1, modulus);
                }
            });
            Answer::Count(count)
        }
        Variant::CountPermutations { modulus } => {
            let mut used = vec![0i64; capacity.len()];
            let count = count_sequences(items, capacity, &mut used, modulus);
            Answer::Count(count)
        }
        Variant::ProbabilitySafe { min_safe } => {
            let mut best = 0i64;
            for_each_selection(items, capacity, &mut |used, chosen| {
                let safe: f64 = chosen
                    .iter()
                    .map(|&i| 1.0 - unsafe_prob(&items[i]))
                    .product();
                if safe >= min_safe {
                    best = best.max(used[0]);
                }
            });
            Answer::SafeCapacity(best)
        }
    }
}

/// Visit every admissible selection (multiset of item indices respecting
/// reusability) whose total cost fits within `capacity`, reporting the used
/// capacity vector and the chosen indices with multiplicity.
fn for_each_selection(
    items: &[Item],
    capacity: &[i64],
    visit: &mut impl FnMut(&[i64], &[usize]),
) {
    let mut used = vec![0i64; capacity.len()];
    let mut chosen = Vec::new();
    recurse(items, capacity, 0, &mut used, &mut chosen, visit);
}

fn recurse(
    items: &[Item],
    capacity: &[i64],
    idx: usize,
    used: &mut Vec<i64>,
    chosen: &mut Vec<usize>,
    visit: &mut impl FnMut(&[i64], &[usize]),
) {
    if idx == items.len() {
        visit(used, chosen);
        return;
    }
    // Zero copies first, then as many as fit (one, for use-once items).
    let mut copies = 0usize;
    recurse(items, capacity, idx + 1, used, chosen, visit);
    loop {
        if !fits(used, &items[idx].costs, capacity) {
            break;
        }
        add(used, &items[idx].costs);
        chosen.push(idx);
        copies += 1;
        recurse(items, capacity, idx + 1, used, chosen, visit);
        if !items[idx].reusable {
            break;
        }
    }
    for _ in 0..copies {
        chosen.pop();
        sub(used, &items[idx].costs);
    }
}

fn count_sequences(
    items: &[Item],
    capacity: &[i64],
    used: &mut Vec<i64>,
    modulus: Option<u64>,
) -> u64 {
    if used.as_slice() == capacity {
        return match modulus {
            Some(m) => 1 % m,
            None => 1,
        };
    }
    let mut count = 0u64;
    for item in items {
        if fits(used, &item.costs, capacity) {
            add(used, &item.costs);
            count = add_count(count, count_sequences(items, capacity, used, modulus), modulus);
            sub(used, &item.costs);
        }
    }
    count
}

fn fits(used: &[i64], costs: &[i64], capacity: &[i64]) -> bool {
    used.iter()
        .zip(costs)
        .zip(capacity)
        .all(|((&u, &c), &cap)| u + c <= cap)
}

fn add(used: &mut [i64], costs: &[i64]) {
    for (u, &c) in used.iter_mut().zip(costs) {
        *u += c;
    }
}

fn sub(used: &mut [i64], costs: &[i64]) {
    for (u, &c) in used.iter_mut().zip(costs) {
        *u -= c;
    }
}

fn add_count(a: u64, b: u64, modulus: Option<u64>) -> u64 {
    match modulus {
        Some(m) => ((a as u128 + b as u128) % m as u128) as u64,
        None => a.saturating_add(b),
    }
}

fn total_value(items: &[Item], chosen: &[usize]) -> i64 {
    chosen
        .iter()
        .map(|&i| match items[i].weight {
            ItemWeight::Value(v) => v,
            ItemWeight::Probability(_) => panic!("value weight expected"),
        })
        .sum()
}

fn unsafe_prob(item: &Item) -> f64 {
    match item.weight {
        ItemWeight::Probability(p) => p,
        ItemWeight::Value(_) => panic!("probability weight expected"),
    }
}
