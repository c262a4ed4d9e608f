// src/weighted.rs

//! Smooth weighted round-robin selector.
//!
//! Every full sweep over the registry lowers an acceptance level by the GCD
//! of all weights. A node is picked whenever its weight reaches the current
//! level, so heavy nodes are accepted in more sweeps and end up spread over
//! the cycle instead of emitted back to back.
//!
//! | method                              | lock | notes                          |
//! |-------------------------------------|------|--------------------------------|
//! | [`WeightedRoundRobin::next`]        | yes  | `None` = nothing selectable    |
//! | [`WeightedRoundRobin::set_node`]    | yes  | insert / overwrite, new step   |
//! | [`WeightedRoundRobin::delete_node`] | yes  | no-op when absent, new step    |
//! | [`WeightedRoundRobin::size`]        | yes  |                                |

use std::str::FromStr;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{Result, WrrError};
use crate::utils::{calc_gcd, max_weight};

/// One selectable payload and its weight. Weight 0 is never selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node<T> {
    pub value: T,
    pub weight: u64,
}

impl<T> Node<T> {
    pub fn new(value: T, weight: u64) -> Self {
        Self { value, weight }
    }
}

#[derive(Debug)]
struct State<T> {
    /// Sorted by index. Slot `k` of the modulo scan is `nodes[k]`.
    nodes: Vec<(usize, Node<T>)>,
    /// Last visited slot; `None` before the first call.
    cursor: Option<usize>,
    current_level: u64,
    step: u64,
}

impl<T> State<T> {
    fn weights(&self) -> impl Iterator<Item = u64> + '_ {
        self.nodes.iter().map(|(_, n)| n.weight)
    }

    /// Recomputes the step and pulls the level down to the new max weight.
    fn recalc_weights(&mut self) {
        self.step = calc_gcd(self.weights());
        self.current_level = self.current_level.min(max_weight(self.weights()));
    }

    /// Advances the cursor until a node reaches the level and returns its slot.
    fn advance(&mut self) -> Option<usize> {
        // step is 0 only for an empty or all-zero registry
        if self.step == 0 {
            debug!(size = self.nodes.len(), "no selectable node");
            return None;
        }
        loop {
            let count = self.nodes.len();
            let slot = self.cursor.map_or(0, |c| (c + 1) % count);
            self.cursor = Some(slot);

            if slot == 0 {
                self.current_level = self.current_level.saturating_sub(self.step);
                trace!(level = self.current_level, "pass wrapped");
                if self.current_level == 0 {
                    self.current_level = max_weight(self.weights());
                    trace!(level = self.current_level, "level reset");
                    if self.current_level == 0 {
                        return None;
                    }
                }
            }

            // level 0 only survives mid-pass after an all-zero registry
            let weight = self.nodes[slot].1.weight;
            if weight > 0 && weight >= self.current_level {
                return Some(slot);
            }
        }
    }
}

/// Thread-safe smooth weighted round-robin over payloads of type `T`.
///
/// ```rust
/// use wrr_core_rust::{Node, WeightedRoundRobin};
///
/// let rr = WeightedRoundRobin::new(vec![Node::new("a", 1), Node::new("b", 2)]);
/// let picks: Vec<_> = (0..3).filter_map(|_| rr.next()).map(|n| n.value).collect();
/// assert_eq!(picks, vec!["b", "a", "b"]);
/// ```
#[derive(Debug)]
pub struct WeightedRoundRobin<T> {
    inner: Mutex<State<T>>,
}

impl<T> WeightedRoundRobin<T> {
    /// Builds the registry with nodes indexed by position.
    pub fn new(nodes: Vec<Node<T>>) -> Self {
        let current_level = nodes.first().map_or(0, |n| n.weight);
        let mut state = State {
            nodes: nodes.into_iter().enumerate().collect(),
            cursor: None,
            current_level,
            step: 0,
        };
        state.recalc_weights();
        debug!(size = state.nodes.len(), step = state.step, "selector built");
        Self {
            inner: Mutex::new(state),
        }
    }

    // Every critical section leaves the state consistent, so a poisoned
    // lock is still usable.
    fn lock(&self) -> MutexGuard<'_, State<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Inserts or overwrites the node at `index`.
    pub fn set_node(&self, index: usize, node: Node<T>) {
        let mut st = self.lock();
        match st.nodes.binary_search_by_key(&index, |(i, _)| *i) {
            Ok(pos) => st.nodes[pos].1 = node,
            Err(pos) => st.nodes.insert(pos, (index, node)),
        }
        st.recalc_weights();
        debug!(index, size = st.nodes.len(), step = st.step, "node set");
    }

    /// Removes the node at `index`, if any.
    pub fn delete_node(&self, index: usize) -> Option<Node<T>> {
        let mut st = self.lock();
        let pos = st.nodes.binary_search_by_key(&index, |(i, _)| *i).ok()?;
        let (_, removed) = st.nodes.remove(pos);
        st.recalc_weights();
        debug!(index, size = st.nodes.len(), step = st.step, "node deleted");
        Some(removed)
    }

    pub fn size(&self) -> usize {
        self.lock().nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// GCD of the current weights (0 when empty or all zero).
    pub fn step(&self) -> u64 {
        self.lock().step
    }

    pub fn current_level(&self) -> u64 {
        self.lock().current_level
    }
}

impl<T: Clone> WeightedRoundRobin<T> {
    /// Picks the next node, or `None` when nothing is selectable.
    pub fn next(&self) -> Option<Node<T>> {
        let mut st = self.lock();
        let slot = st.advance()?;
        Some(st.nodes[slot].1.clone())
    }

    /// Copy of the registry in ascending index order.
    pub fn snapshot(&self) -> Vec<(usize, Node<T>)> {
        self.lock().nodes.clone()
    }
}

impl<T> Default for WeightedRoundRobin<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> From<Vec<Node<T>>> for WeightedRoundRobin<T> {
    fn from(nodes: Vec<Node<T>>) -> Self {
        Self::new(nodes)
    }
}

impl<T> FromIterator<Node<T>> for WeightedRoundRobin<T> {
    fn from_iter<I: IntoIterator<Item = Node<T>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl FromStr for WeightedRoundRobin<String> {
    type Err = WrrError;

    fn from_str(s: &str) -> Result<Self> {
        parse_nodes(s).map(Self::new)
    }
}

/// Parses `value:weight[,value:weight...]`.
///
/// The weight is taken after the last `:`, so `10.0.0.1:8080:3` is the
/// value `10.0.0.1:8080` with weight 3. Blank items are skipped.
pub fn parse_nodes(spec: &str) -> Result<Vec<Node<String>>> {
    spec.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| -> Result<Node<String>> {
            let (value, weight) = item
                .rsplit_once(':')
                .ok_or_else(|| WrrError::InvalidNodeSpec(item.to_owned()))?;
            let value = value.trim();
            if value.is_empty() {
                return Err(WrrError::InvalidNodeSpec(item.to_owned()));
            }
            let weight = weight
                .trim()
                .parse::<u64>()
                .map_err(|_| WrrError::InvalidWeight(value.to_owned(), weight.to_owned()))?;
            Ok(Node::new(value.to_owned(), weight))
        })
        .collect()
}
