#![cfg(feature = "parallel")]

//! With `parallel` enabled the 0/1 fold updates cells from a pre-item
//! snapshot; answers must be identical to the serial recurrence, which the
//! brute oracle pins down.

mod common;

use common::brute_force;
use knapdp::presets::{knapsack_01, ones_and_zeroes};
use knapdp::{Engine, Item, Problem, Variant};
use proptest::prelude::*;

#[test]
fn regression_seeds_still_hold() {
    assert_eq!(knapsack_01(&[1, 2, 3], &[20, 30, 40], 6).unwrap(), 90);
    assert_eq!(
        ones_and_zeroes(&["10", "0001", "111001", "1", "0"], 5, 3).unwrap(),
        4
    );
}

proptest! {
    #[test]
    fn parallel_fold_matches_brute(
        items in prop::collection::vec(
            (0i64..=6, 0i64..=20).prop_map(|(w, v)| Item::valued(vec![w], v)),
            0..10,
        ),
        cap in 0i64..=15,
    ) {
        for variant in [
            Variant::Max,
            Variant::Feasible,
            Variant::CountCombinations { modulus: None },
        ] {
            let engine = Engine::new(Problem::new(items.clone(), vec![cap], variant)).unwrap();
            prop_assert_eq!(engine.run(), brute_force(&items, &[cap], variant));
        }
    }
}
