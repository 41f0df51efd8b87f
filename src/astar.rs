use fxhash::FxBuildHasher;
/// This module implements the search core: a variant of
/// [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html)
/// that keeps per-node bookkeeping in an [IndexMap] arena so parents can be
/// referenced by integer handle and the whole working set is dropped when the
/// search returns.
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::Zero;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

use log::debug;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use std::hash::Hash;

/// Arena handle marking a node without a predecessor (the start node).
pub const NO_PARENT: usize = usize::MAX;

/// Visitation state of a discovered node. Coordinates that were never
/// discovered have no entry in the arena at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeStatus {
    Open,
    Closed,
}

/// Per-cell bookkeeping for a single search run. The node's position is its
/// key in the arena; `parent` is the arena index of its current predecessor.
/// `g` only ever decreases, via relaxation when a cheaper route is found.
#[derive(Clone, Copy, Debug)]
pub struct SearchNode<C> {
    pub g: C,
    pub h: C,
    pub parent: usize,
    pub status: NodeStatus,
}

struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.cost.eq(&other.cost)
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // First orders per estimated cost, then creates subordering
        // based on cost, favoring exploration of deepest nodes first
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => self.cost.cmp(&other.cost),
            s => s,
        }
    }
}

/// Walks parent handles from `start` back to the search origin, collecting
/// positions in traversal order. The result is goal-first, start-last, which
/// is the order [crate::PathCursor] drains.
fn backtrack<N, C>(nodes: &FxIndexMap<N, SearchNode<C>>, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
    C: Copy,
{
    itertools::unfold(start, |i| {
        nodes.get_index(*i).map(|(node, record)| {
            *i = record.parent;
            node.clone()
        })
    })
    .collect()
}

/// A* search from `start` until `success` holds for an expanded node.
/// Returns the goal-first position sequence and the accumulated cost of its
/// endpoint, or [None] if the open set drains first. `expansion_limit` bounds
/// the number of node expansions; exceeding it aborts the search empty-handed.
pub fn astar_search<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
    expansion_limit: Option<usize>,
) -> Option<(Vec<N>, C)>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut to_see = BinaryHeap::new();
    let mut nodes: FxIndexMap<N, SearchNode<C>> = FxIndexMap::default();
    let h = heuristic(start);
    nodes.insert(
        start.clone(),
        SearchNode {
            g: Zero::zero(),
            h,
            parent: NO_PARENT,
            status: NodeStatus::Open,
        },
    );
    to_see.push(SmallestCostHolder {
        estimated_cost: h,
        cost: Zero::zero(),
        index: 0,
    });
    let mut expansions = 0;
    while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
        {
            let (node, &record) = nodes.get_index(index).unwrap();
            if success(node) {
                return Some((backtrack(&nodes, index), record.g));
            }
            // A node can sit in the heap more than once if a cheaper route to
            // it was found after it was pushed. Only the entry matching the
            // current best cost expands; the rest are stale.
            if record.status == NodeStatus::Closed || cost > record.g {
                continue;
            }
        }
        if let Some(limit) = expansion_limit {
            if expansions >= limit {
                debug!("Expansion limit of {} reached, aborting search", limit);
                return None;
            }
        }
        expansions += 1;
        nodes.get_index_mut(index).unwrap().1.status = NodeStatus::Closed;
        let successors = {
            let (node, _) = nodes.get_index(index).unwrap();
            successors(node)
        };
        for (successor, step_cost) in successors {
            let tentative_g = cost + step_cost;
            let h;
            let n;
            match nodes.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert(SearchNode {
                        g: tentative_g,
                        h,
                        parent: index,
                        status: NodeStatus::Open,
                    });
                }
                Occupied(mut e) => {
                    let record = e.get();
                    if record.status == NodeStatus::Closed || record.g <= tentative_g {
                        continue;
                    }
                    h = record.h;
                    n = e.index();
                    let record = e.get_mut();
                    record.g = tentative_g;
                    record.parent = index;
                }
            }
            to_see.push(SmallestCostHolder {
                estimated_cost: tentative_g + h,
                cost: tentative_g,
                index: n,
            });
        }
    }
    debug!("Open set drained after {} expansions, no path", expansions);
    None
}
