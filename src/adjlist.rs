//! Adjacency-list representations of undirected graphs on the vertices $0,\ldots,n-1$.
//! [AdjacencyList] stores a weight with every entry and is the input of the
//! edge-sorting spanning tree algorithm, [NeighbourList] is its unweighted sibling
//! used for the bipartiteness check.
//!
//! Entries are stored as given: [AdjacencyList::add_edge] records both directions
//! while [AdjacencyList::add_arc] only records the entry `u -> v`, which is what a
//! single line of an input file describes. Vertices without an entry simply have no
//! neighbours.
//!
//! ```rust
//! use spangraph::graph::*;
//! use spangraph::adjlist::*;
//! use spangraph::iterators::*;
//!
//! let mut graph = AdjacencyList::new(4);
//! graph.add_edge(&0, &1, 4);
//! graph.add_edge(&1, &2, 1);
//! graph.add_edge(&2, &3, 2);
//! assert_eq!(graph.num_edges(), 3);
//! assert_eq!(graph.weight(&2, &1), Some(1));
//!
//! let graph = NeighbourList::cycle(4);
//! let edges:EdgeSet = vec![(0,1),(1,2),(2,3),(0,3)].into_iter().collect();
//! assert_eq!(graph.edges().collect::<EdgeSet>(), edges);
//! ```

use fxhash::FxHashMap;

use crate::adjmatrix::AdjacencyMatrix;
use crate::graph::*;
use crate::iterators::*;

/// Weighted adjacency list.
#[derive(Debug, Clone)]
pub struct AdjacencyList {
    n: usize,
    adj: FxHashMap<Vertex, Vec<(Vertex, Weight)>>,
}

impl AdjacencyList {
    pub fn new(n:usize) -> Self {
        AdjacencyList { n, adj: FxHashMap::with_capacity_and_hasher(n, Default::default()) }
    }

    /// Builds a graph on `n` vertices from undirected weighted edges.
    pub fn from_edges<I>(n:usize, edges:I) -> Self where I: IntoIterator<Item=WeightedEdge> {
        let mut res = AdjacencyList::new(n);
        for (u, v, w) in edges {
            res.add_edge(&u, &v, w);
        }
        res
    }

    /// Records the entry `u -> v` only.
    pub fn add_arc(&mut self, u:&Vertex, v:&Vertex, weight:Weight) {
        self.adj.entry(*u).or_default().push((*v, weight));
    }

    /// Records the undirected edge $uv$ in both neighbour lists.
    pub fn add_edge(&mut self, u:&Vertex, v:&Vertex, weight:Weight) {
        self.add_arc(u, v, weight);
        if u != v {
            self.add_arc(v, u, weight);
        }
    }

    /// Makes sure `u` has an (possibly empty) entry.
    pub fn add_vertex(&mut self, u:&Vertex) {
        self.adj.entry(*u).or_default();
    }

    /// Returns the stored `(neighbour, weight)` pairs of `u`.
    pub fn entries(&self, u:&Vertex) -> &[(Vertex, Weight)] {
        self.adj.get(u).map(|N| N.as_slice()).unwrap_or(&[])
    }

    /// Drops all weights.
    pub fn to_neighbour_list(&self) -> NeighbourList {
        let mut res = NeighbourList::new(self.n);
        for u in self.vertices() {
            for (v, _) in self.entries(&u) {
                res.add_arc(&u, v);
            }
        }
        res
    }

    /// Converts into a weight matrix. Parallel edges collapse to the last stored entry.
    pub fn to_matrix(&self) -> AdjacencyMatrix {
        AdjacencyMatrix::from(self)
    }
}

// Two lists are equal if they store the same entries in the same order. A vertex
// without entry equals one with an empty neighbour list.
impl PartialEq for AdjacencyList {
    fn eq(&self, other: &Self) -> bool {
        if self.n != other.n {
            return false
        }
        self.vertices().all(|u| self.entries(&u) == other.entries(&u))
    }
}
impl Eq for AdjacencyList {}

impl From<&AdjacencyMatrix> for AdjacencyList {
    fn from(matrix:&AdjacencyMatrix) -> Self {
        let mut res = AdjacencyList::new(matrix.num_vertices());
        for u in matrix.vertices() {
            res.add_vertex(&u);
            for (v, w) in matrix.weighted_neighbours(&u) {
                res.add_arc(&u, &v, w);
            }
        }
        res
    }
}

impl Graph for AdjacencyList {
    fn num_vertices(&self) -> usize {
        self.n
    }

    fn num_edges(&self) -> usize {
        self.edges().count()
    }

    fn neighbours<'a>(&'a self, u:&Vertex) -> Box<dyn Iterator<Item=Vertex> + 'a> {
        Box::new(self.entries(u).iter().map(|(v,_)| *v))
    }

    fn degree(&self, u:&Vertex) -> usize {
        self.entries(u).len()
    }
}

impl WeightedGraph for AdjacencyList {
    fn weighted_neighbours<'a>(&'a self, u:&Vertex) -> Box<dyn Iterator<Item=(Vertex,Weight)> + 'a> {
        Box::new(self.entries(u).iter().cloned())
    }
}

/// Unweighted adjacency list.
#[derive(Debug, Clone)]
pub struct NeighbourList {
    n: usize,
    adj: FxHashMap<Vertex, Vec<Vertex>>,
}

impl NeighbourList {
    pub fn new(n:usize) -> Self {
        NeighbourList { n, adj: FxHashMap::with_capacity_and_hasher(n, Default::default()) }
    }

    pub fn from_edges<I>(n:usize, edges:I) -> Self where I: IntoIterator<Item=Edge> {
        let mut res = NeighbourList::new(n);
        for (u, v) in edges {
            res.add_edge(&u, &v);
        }
        res
    }

    pub fn add_arc(&mut self, u:&Vertex, v:&Vertex) {
        self.adj.entry(*u).or_default().push(*v);
    }

    pub fn add_edge(&mut self, u:&Vertex, v:&Vertex) {
        self.add_arc(u, v);
        if u != v {
            self.add_arc(v, u);
        }
    }

    pub fn add_vertex(&mut self, u:&Vertex) {
        self.adj.entry(*u).or_default();
    }

    pub fn entries(&self, u:&Vertex) -> &[Vertex] {
        self.adj.get(u).map(|N| N.as_slice()).unwrap_or(&[])
    }

    /// Generates a path on `n` vertices.
    pub fn path(n:u32) -> NeighbourList {
        NeighbourList::from_edges(n as usize, (1..n).map(|v| (v-1, v)))
    }

    /// Generates a cycle on `n` vertices.
    pub fn cycle(n:u32) -> NeighbourList {
        NeighbourList::from_edges(n as usize, (0..n).map(|u| (u, (u+1) % n)))
    }

    /// Generates a complete graph (clique) on `n` vertices.
    pub fn clique(n:u32) -> NeighbourList {
        let mut res = NeighbourList::new(n as usize);
        for u in 0..n {
            for v in (u+1)..n {
                res.add_edge(&u, &v);
            }
        }
        res
    }

    /// Generates a complete bipartite graph (biclique) on `s`+`t` vertices.
    pub fn biclique(s:u32, t:u32) -> NeighbourList {
        let mut res = NeighbourList::new((s+t) as usize);
        for u in 0..s {
            for v in s..(s+t) {
                res.add_edge(&u, &v);
            }
        }
        res
    }

    /// Creates a new graph that is the disjoint union of `self` and `graph`.
    /// The vertices of the second graph are shifted by `self.num_vertices()`.
    pub fn disj_union(&self, graph: &impl Graph) -> NeighbourList {
        let offset = self.num_vertices() as Vertex;
        let mut res = NeighbourList::new(self.num_vertices() + graph.num_vertices());
        for (u, v) in self.edges() {
            res.add_edge(&u, &v);
        }
        for (u, v) in graph.edges() {
            res.add_edge(&(u+offset), &(v+offset));
        }
        res
    }
}

impl PartialEq for NeighbourList {
    fn eq(&self, other: &Self) -> bool {
        if self.n != other.n {
            return false
        }
        self.vertices().all(|u| self.entries(&u) == other.entries(&u))
    }
}
impl Eq for NeighbourList {}

impl Graph for NeighbourList {
    fn num_vertices(&self) -> usize {
        self.n
    }

    fn num_edges(&self) -> usize {
        self.edges().count()
    }

    fn neighbours<'a>(&'a self, u:&Vertex) -> Box<dyn Iterator<Item=Vertex> + 'a> {
        Box::new(self.entries(u).iter().cloned())
    }

    fn degree(&self, u:&Vertex) -> usize {
        self.entries(u).len()
    }
}



//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn basic_operations() {
        let mut G = AdjacencyList::new(4);
        assert_eq!(G.num_vertices(), 4);
        assert_eq!(G.num_edges(), 0);

        G.add_edge(&0, &1, 4);
        G.add_edge(&0, &2, 3);
        G.add_edge(&1, &2, 1);
        assert_eq!(G.num_edges(), 3);
        assert_eq!(G.degree(&0), 2);
        assert_eq!(G.degree(&3), 0);
        assert!(G.adjacent(&2, &1));
        assert!(!G.adjacent(&0, &3));
        assert_eq!(G.weight(&0, &2), Some(3));
        assert_eq!(G.weight(&2, &0), Some(3));
        assert_eq!(G.weight(&3, &0), None);
    }

    #[test]
    fn arcs_are_one_sided() {
        let mut G = AdjacencyList::new(3);
        G.add_arc(&0, &1, 5);
        assert_eq!(G.weight(&0, &1), Some(5));
        assert_eq!(G.weight(&1, &0), None);
        assert_eq!(G.num_edges(), 1);

        // Only entries with u < v are reported as edges
        G.add_arc(&2, &1, 7);
        assert_eq!(G.num_edges(), 1);
    }

    #[test]
    fn weighted_edge_iteration() {
        let G = AdjacencyList::from_edges(4, vec![(0,1,4), (0,2,3), (1,2,1), (1,3,2), (2,3,4)]);
        let edges:Vec<_> = G.weighted_edges().collect();
        assert_eq!(edges, vec![(0,1,4), (0,2,3), (1,2,1), (1,3,2), (2,3,4)]);
    }

    #[test]
    fn self_loops() {
        let mut G = AdjacencyList::new(2);
        G.add_edge(&1, &1, 3);
        assert_eq!(G.entries(&1), &[(1,3)]);
        assert_eq!(G.num_edges(), 0);
    }

    #[test]
    fn neighbourhoods() {
        let G = NeighbourList::path(5);
        assert_eq!( G.neighbourhood([2].iter()), [1,3].iter().cloned().collect());
        assert_eq!( G.neighbourhood([1,2].iter()), [0,3].iter().cloned().collect());
        assert_eq!( G.neighbourhood([1,3].iter()), [0,2,4].iter().cloned().collect());
    }

    #[test]
    fn named_graphs() {
        assert_eq!(NeighbourList::path(5).num_edges(), 4);
        assert_eq!(NeighbourList::cycle(5).num_edges(), 5);
        assert_eq!(NeighbourList::clique(5).num_edges(), 10);
        assert_eq!(NeighbourList::biclique(2, 3).num_edges(), 6);

        let G = NeighbourList::cycle(3).disj_union(&NeighbourList::cycle(3));
        assert_eq!(G.num_vertices(), 6);
        let edges:EdgeSet = vec![(0,1),(1,2),(0,2),(3,4),(4,5),(3,5)].into_iter().collect();
        assert_eq!(G.edges().collect::<EdgeSet>(), edges);
    }

    #[test]
    fn conversions() {
        let G = AdjacencyList::from_edges(3, vec![(0,1,2), (1,2,5)]);
        let N = G.to_neighbour_list();
        assert_eq!(N.entries(&1), &[0, 2]);

        let M = G.to_matrix();
        assert_eq!(M.weight(&1, &2), Some(5));
        assert_eq!(M.weight(&0, &2), None);

        let H = AdjacencyList::from(&M);
        assert_eq!(H.weighted_edges().collect::<Vec<_>>(), G.weighted_edges().collect::<Vec<_>>());
    }
}
