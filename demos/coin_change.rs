//! Example: coin change, three ways — fewest coins, multiset count, and
//! sequence count.
//!
//! Run with:
//! `cargo run --example coin_change`

use knapdp::presets::{coin_change_min, coin_change_ways, sequence_count};

fn main() {
    let coins = [1i64, 2, 5];
    let amount = 11;

    match coin_change_min(&coins, amount).expect("valid coins") {
        Some(n) => println!("fewest coins for {amount}: {n}"),
        None => println!("{amount} is unreachable with {coins:?}"),
    }

    let multisets = coin_change_ways(&coins, amount).expect("valid coins");
    println!("coin multisets summing to {amount}: {multisets}");

    let sequences = sequence_count(&coins, amount).expect("valid coins");
    println!("ordered sequences summing to {amount}: {sequences}");
}
