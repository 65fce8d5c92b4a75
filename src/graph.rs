//! Adjacency-map directed graph
//!
//! Vertices are keyed by a `usize` id and carry a payload `E`. Each vertex
//! owns a map of outgoing edges to target ids, with an optional weight `W`.
//! Edge targets are not required to exist as vertices.
//!
//! # Example
//!
//! ```rust
//! use indexed_collections::graph::Graph;
//!
//! let mut graph = Graph::new();
//! graph.add_vertex(0, 'A');
//! graph.add_vertex(1, 'B');
//! graph.add_edge(0, 1, Some(10));
//!
//! assert_eq!(graph.weight(0, 1), Some(&10));
//! assert_eq!(graph.to_string(), "0(A) -> 1(10)\n1(B) -> ");
//! ```

use std::fmt;

use rustc_hash::FxHashMap;

/// An outgoing edge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<W> {
    pub target: usize,
    pub weight: Option<W>,
}

/// A vertex with its payload and outgoing edges
#[derive(Debug, Clone)]
pub struct Vertex<E, W> {
    pub id: usize,
    pub value: E,
    edges: FxHashMap<usize, Edge<W>>,
}

impl<E, W> Vertex<E, W> {
    fn new(id: usize, value: E) -> Self {
        Self {
            id,
            value,
            edges: FxHashMap::default(),
        }
    }

    /// Outgoing edges in arbitrary order
    pub fn edges(&self) -> impl Iterator<Item = &Edge<W>> + '_ {
        self.edges.values()
    }

    /// Number of outgoing edges
    pub fn degree(&self) -> usize {
        self.edges.len()
    }
}

/// A directed graph stored as a map of adjacency maps
#[derive(Debug, Clone)]
pub struct Graph<E, W> {
    vertices: FxHashMap<usize, Vertex<E, W>>,
}

impl<E, W> Graph<E, W> {
    pub fn new() -> Self {
        Self {
            vertices: FxHashMap::default(),
        }
    }

    /// Creates an empty graph with room for `capacity` vertices
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Adds vertex `u`; returns false and keeps the old payload if it exists
    pub fn add_vertex(&mut self, u: usize, value: E) -> bool {
        if self.vertices.contains_key(&u) {
            return false;
        }
        self.vertices.insert(u, Vertex::new(u, value));
        true
    }

    /// Removes vertex `u` and its outgoing edges
    ///
    /// For every outgoing edge `u -> v`, the reverse edge `v -> u` is removed
    /// as well. Other edges pointing at `u` are left in place.
    pub fn remove_vertex(&mut self, u: usize) -> Option<E> {
        let vertex = self.vertices.remove(&u)?;
        for &v in vertex.edges.keys() {
            self.remove_edge(v, u);
        }
        Some(vertex.value)
    }

    /// Adds or replaces edge `u -> v`; returns false if `u` is not a vertex
    pub fn add_edge(&mut self, u: usize, v: usize, weight: Option<W>) -> bool {
        match self.vertices.get_mut(&u) {
            Some(vertex) => {
                vertex.edges.insert(v, Edge { target: v, weight });
                true
            }
            None => false,
        }
    }

    /// Removes edge `u -> v`, returning its weight slot if it existed
    pub fn remove_edge(&mut self, u: usize, v: usize) -> Option<Option<W>> {
        self.vertices
            .get_mut(&u)?
            .edges
            .remove(&v)
            .map(|edge| edge.weight)
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn contains(&self, u: usize) -> bool {
        self.vertices.contains_key(&u)
    }

    pub fn contains_edge(&self, u: usize, v: usize) -> bool {
        self.vertices
            .get(&u)
            .is_some_and(|vertex| vertex.edges.contains_key(&v))
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn get(&self, u: usize) -> Option<&E> {
        self.vertices.get(&u).map(|vertex| &vertex.value)
    }

    /// Replaces the payload of `u`, returning the old one
    pub fn set(&mut self, u: usize, value: E) -> Option<E> {
        self.vertices
            .get_mut(&u)
            .map(|vertex| std::mem::replace(&mut vertex.value, value))
    }

    /// Weight of edge `u -> v`; `None` if the edge is missing or unweighted
    pub fn weight(&self, u: usize, v: usize) -> Option<&W> {
        self.vertices.get(&u)?.edges.get(&v)?.weight.as_ref()
    }

    /// Replaces the weight of an existing edge; returns false if it is missing
    pub fn set_weight(&mut self, u: usize, v: usize, weight: W) -> bool {
        match self
            .vertices
            .get_mut(&u)
            .and_then(|vertex| vertex.edges.get_mut(&v))
        {
            Some(edge) => {
                edge.weight = Some(weight);
                true
            }
            None => false,
        }
    }

    pub fn vertex(&self, u: usize) -> Option<&Vertex<E, W>> {
        self.vertices.get(&u)
    }

    /// All vertices in arbitrary order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<E, W>> + '_ {
        self.vertices.values()
    }

    /// Outgoing `(target, weight)` pairs of `u`; empty if `u` is absent
    pub fn neighbors(&self, u: usize) -> impl Iterator<Item = (usize, Option<&W>)> + '_ {
        self.vertices
            .get(&u)
            .into_iter()
            .flat_map(|vertex| vertex.edges.values())
            .map(|edge| (edge.target, edge.weight.as_ref()))
    }
}

impl<E, W> Default for Graph<E, W> {
    fn default() -> Self {
        Self::new()
    }
}

/// One line per vertex in ascending id order: `u(value) -> v(w), v2`
impl<E: fmt::Display, W: fmt::Display> fmt::Display for Graph<E, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<_> = self.vertices.keys().copied().collect();
        ids.sort_unstable();

        for (line, id) in ids.into_iter().enumerate() {
            let vertex = &self.vertices[&id];
            if line > 0 {
                writeln!(f)?;
            }
            write!(f, "{}({}) -> ", vertex.id, vertex.value)?;

            let mut targets: Vec<_> = vertex.edges.values().collect();
            targets.sort_unstable_by_key(|edge| edge.target);
            for (i, edge) in targets.into_iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                match &edge.weight {
                    Some(w) => write!(f, "{}({})", edge.target, w)?,
                    None => write!(f, "{}", edge.target)?,
                }
            }
        }
        Ok(())
    }
}
