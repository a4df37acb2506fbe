//! Single-source shortest paths over non-negative integer weights.
//!
//! Vertices are dense indices `0..n`. The heap holds `Reverse((distance,
//! vertex))`, so ties on distance are broken by the lower vertex index and
//! the result is deterministic for a given adjacency list.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// A weighted edge to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Edge {
    pub to: usize,
    pub weight: u64,
}

/// Result of a search from one source.
#[derive(Debug)]
pub(super) struct ShortestPaths {
    source: usize,
    dist: Vec<Option<u64>>,
    prev: Vec<Option<usize>>,
}

impl ShortestPaths {
    /// Total weight to `target`, if reached.
    pub fn distance_to(&self, target: usize) -> Option<u64> {
        self.dist.get(target).copied().flatten()
    }

    /// Vertices from the source to `target` inclusive, if reached.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        self.distance_to(target)?;

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.prev[current]?;
            path.push(current);
        }
        path.reverse();
        Some(path)
    }
}

/// Run Dijkstra from `source`.
///
/// With `stop_at` set, the search ends once that vertex is settled; distances
/// to vertices not yet settled are then partial and must not be read.
pub(super) fn dijkstra(
    adjacency: &[Vec<Edge>],
    source: usize,
    stop_at: Option<usize>,
) -> ShortestPaths {
    let n = adjacency.len();
    let mut dist: Vec<Option<u64>> = vec![None; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    let mut heap: BinaryHeap<Reverse<(u64, usize)>> = BinaryHeap::new();

    if source < n {
        dist[source] = Some(0);
        heap.push(Reverse((0, source)));
    }

    while let Some(Reverse((d, u))) = heap.pop() {
        // Stale entry
        if dist[u].is_some_and(|best| d > best) {
            continue;
        }
        if stop_at == Some(u) {
            break;
        }
        for edge in &adjacency[u] {
            let candidate = d + edge.weight;
            if dist[edge.to].is_none_or(|best| candidate < best) {
                dist[edge.to] = Some(candidate);
                prev[edge.to] = Some(u);
                heap.push(Reverse((candidate, edge.to)));
            }
        }
    }

    ShortestPaths { source, dist, prev }
}
