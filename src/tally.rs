// src/tally.rs
use std::collections::BTreeMap;

use crate::weighted::WeightedRoundRobin;

/// Calls `next()` up to `rounds` times and counts picks per value.
///
/// Stops at the first `None`: nothing becomes selectable again without a
/// mutation, so further calls would only repeat it.
pub fn tally<T>(rr: &WeightedRoundRobin<T>, rounds: usize) -> BTreeMap<T, u64>
where
    T: Ord + Clone,
{
    let mut counts = BTreeMap::new();
    for _ in 0..rounds {
        let Some(node) = rr.next() else {
            tracing::debug!("selection unavailable, stopping tally");
            break;
        };
        *counts.entry(node.value).or_insert(0) += 1;
    }
    counts
}
