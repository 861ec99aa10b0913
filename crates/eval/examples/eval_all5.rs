// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all5
// ...
// Total hands      2598960
// ...
// high card:       1302540 (50.1177%)
// one pair:        1098240 (42.2569%)
// ...
// royal flush:     4 (0.0002%)
// ```

use std::time::Instant;

use drawdeck_eval::*;

#[rustfmt::skip]
fn main() {
    let catalog = Catalog::new();
    let ids = CardId::all().collect::<Vec<_>>();
    let n = ids.len();

    // Evaluate all 2.6M hands.
    let now = Instant::now();
    let mut counts = [0usize; 10];

    for c1 in 0..n {
        for c2 in (c1 + 1)..n {
            for c3 in (c2 + 1)..n {
                for c4 in (c3 + 1)..n {
                    for c5 in (c4 + 1)..n {
                        let hand = [ids[c1], ids[c2], ids[c3], ids[c4], ids[c5]];
                        if let Ok(hv) = HandValue::eval(&catalog, &hand) {
                            counts[hv.rank() as usize] += 1;
                        }
                    }
                }
            }
        }
    }

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for rank in HandRank::ranks() {
        let label = format!("{rank}:");
        println!(
            "{:<17}{} ({:.4}%)",
            label,
            counts[rank as usize],
            rank.probability() * 100.0
        );
    }
}
