//! Directed graphs: traversal and shortest paths
//!
//! Nodes live in a vector and are referred to by their index. Removing a
//! node leaves an empty slot behind so that the other identifiers stay
//! valid.

use std::collections::VecDeque;
use std::fmt;

use log::debug;
use simple_error::SimpleError;

use crate::base::{Len, Value};
use crate::heap::{HeapKey, MinHeap};

pub type NodeId = usize;
pub type Weight = u64;

pub const DEFAULT_WEIGHT: Weight = 1;

#[derive(Debug, Clone)]
struct Node {
    value: Value,
    /// Outgoing edges, in insertion order
    adjacent: Vec<(NodeId, Weight)>,
}

#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Option<Node>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, value: Value) -> NodeId {
        self.nodes.push(Some(Node {
            value,
            adjacent: Vec::new(),
        }));
        self.nodes.len() - 1
    }

    /// Removes a node and all the edges pointing to it; returns its value
    pub fn remove_node(&mut self, id: NodeId) -> Result<Value, SimpleError> {
        let node = self
            .nodes
            .get_mut(id)
            .and_then(Option::take)
            .ok_or_else(|| unknown_node(id))?;

        for other in self.nodes.iter_mut().flatten() {
            other.adjacent.retain(|&(to, _)| to != id);
        }
        Ok(node.value)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    pub fn value(&self, id: NodeId) -> Option<Value> {
        self.node(id).map(|node| node.value)
    }

    /// Number of nodes (removed ones excluded)
    pub fn node_count(&self) -> usize {
        self.nodes.iter().flatten().count()
    }

    /// Adds an edge from `from` to `to`, with the default weight
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> Result<(), SimpleError> {
        self.add_weighted_edge(from, to, DEFAULT_WEIGHT)
    }

    /// Adds an edge from `from` to `to`, or updates its weight
    pub fn add_weighted_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        weight: Weight,
    ) -> Result<(), SimpleError> {
        if !self.contains(to) {
            return Err(unknown_node(to));
        }
        let node = self.node_mut(from)?;
        match node.adjacent.iter_mut().find(|(id, _)| *id == to) {
            Some(edge) => edge.1 = weight,
            None => node.adjacent.push((to, weight)),
        }
        Ok(())
    }

    /// Removes the edge from `from` to `to`; returns whether it existed
    pub fn remove_edge(&mut self, from: NodeId, to: NodeId) -> Result<bool, SimpleError> {
        let node = self.node_mut(from)?;
        let before = node.adjacent.len();
        node.adjacent.retain(|&(id, _)| id != to);
        Ok(node.adjacent.len() < before)
    }

    /// Nodes reachable through one outgoing edge
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.edges(id).map(|&(to, _)| to)
    }

    pub fn depth_first_search(&self, start: NodeId, target: NodeId) -> bool {
        if !self.contains(start) {
            return false;
        }

        let mut visited = vec![false; self.nodes.len()];
        let mut stack = vec![start];
        while let Some(id) = stack.pop() {
            if id == target {
                return true;
            }
            if visited[id] {
                continue;
            }
            visited[id] = true;

            // Reversed so that the first neighbor is explored first
            let neighbors: Vec<NodeId> = self.neighbors(id).collect();
            stack.extend(neighbors.into_iter().rev().filter(|&next| !visited[next]));
        }
        false
    }

    pub fn breadth_first_search(&self, start: NodeId, target: NodeId) -> bool {
        if !self.contains(start) {
            return false;
        }

        let mut visited = vec![false; self.nodes.len()];
        let mut queue = VecDeque::from([start]);
        visited[start] = true;

        while let Some(id) = queue.pop_front() {
            if id == target {
                return true;
            }
            for next in self.neighbors(id) {
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }
        false
    }

    /**
     * Dijkstra's algorithm: returns the shortest path from start to target
     * (both included) and its length, or None if the target is unreachable
     *
     * Time Complexity: O((V + E) log V)
     */
    pub fn dijkstra(&self, start: NodeId, target: NodeId) -> Option<(Vec<NodeId>, Weight)> {
        if !self.contains(start) || !self.contains(target) {
            return None;
        }

        let mut distances = vec![Weight::MAX; self.nodes.len()];
        let mut previous: Vec<Option<NodeId>> = vec![None; self.nodes.len()];
        let mut visited = vec![false; self.nodes.len()];

        let mut frontier = MinHeap::new();
        distances[start] = 0;
        frontier.push(Frontier {
            distance: 0,
            node: start,
        });

        while let Some(Frontier { distance, node }) = frontier.pop() {
            // Stale entry
            if visited[node] {
                continue;
            }
            visited[node] = true;

            if node == target {
                debug!("Reached {} at distance {}", target, distance);
                let mut path: Vec<NodeId> =
                    std::iter::successors(Some(target), |&id| previous[id]).collect();
                path.reverse();
                return Some((path, distance));
            }

            for &(next, weight) in self.edges(node) {
                if visited[next] {
                    continue;
                }
                let candidate = distance.saturating_add(weight);
                if candidate < distances[next] {
                    distances[next] = candidate;
                    previous[next] = Some(node);
                    frontier.push(Frontier {
                        distance: candidate,
                        node: next,
                    });
                }
            }
        }

        None
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, SimpleError> {
        self.nodes
            .get_mut(id)
            .and_then(Option::as_mut)
            .ok_or_else(|| unknown_node(id))
    }

    fn edges(&self, id: NodeId) -> impl Iterator<Item = &(NodeId, Weight)> + '_ {
        self.node(id).into_iter().flat_map(|node| node.adjacent.iter())
    }
}

fn unknown_node(id: NodeId) -> SimpleError {
    SimpleError::new(format!("unknown node {}", id))
}

/// Tentative distance of a node
struct Frontier {
    distance: Weight,
    node: NodeId,
}

impl HeapKey for Frontier {
    type Key = Weight;

    fn key(&self) -> Weight {
        self.distance
    }
}

impl Len for Graph {
    fn len(&self) -> usize {
        self.node_count()
    }
}

/// One line per node, with the values of its neighbors
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for node in self.nodes.iter().flatten() {
            let adjacent: Vec<String> = node
                .adjacent
                .iter()
                .filter_map(|&(to, _)| self.value(to))
                .map(|value| value.to_string())
                .collect();
            writeln!(f, "Node {}: [{}]", node.value, adjacent.join(" "))?;
        }
        Ok(())
    }
}
