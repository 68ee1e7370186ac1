//! Breadth-first traversal over active interactions.

use std::collections::{HashSet, VecDeque};

use super::InteractionGraph;

/// BFS from `seed` over active interactions, skipping proteins already in
/// `visited`. Proteins are marked visited when enqueued, so each is queued at
/// most once. Returns the proteins reached, in visit order, seed first.
///
/// An unknown or already visited seed yields an empty result.
pub fn bfs_traverse<'a>(
    graph: &'a InteractionGraph,
    seed: &'a str,
    visited: &mut HashSet<&'a str>,
) -> Vec<&'a str> {
    if !graph.contains_protein(seed) || !visited.insert(seed) {
        return Vec::new();
    }

    let mut order: Vec<&str> = Vec::new();
    let mut queue: VecDeque<&str> = VecDeque::new();
    queue.push_back(seed);

    while let Some(current) = queue.pop_front() {
        order.push(current);
        for (neighbor, _) in graph.active_neighbors(current) {
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    order
}

/// Every protein reachable from `start` over active interactions, `start` included.
pub fn reachable_from<'a>(graph: &'a InteractionGraph, start: &'a str) -> Vec<&'a str> {
    let mut visited = HashSet::new();
    bfs_traverse(graph, start, &mut visited)
}
