use fxhash::{FxHashMap, FxHashSet};

use crate::iterators::*;

/// Vertices are dense indices in $[0, n)$.
pub type Vertex = u32;
pub type Weight = i64;
pub type Edge = (Vertex, Vertex);
pub type WeightedEdge = (Vertex, Vertex, Weight);
pub type VertexSet = FxHashSet<Vertex>;
pub type VertexSetRef<'a> = FxHashSet<&'a Vertex>;
pub type VertexMap<T> = FxHashMap<Vertex, T>;
pub type EdgeSet = FxHashSet<Edge>;

/// Read-only access to an undirected graph whose vertices are exactly $0,\ldots,n-1$.
///
/// Implementors only need to provide the vertex count, the edge count and the
/// neighbourhood of a vertex. Everything else has a default implementation.
pub trait Graph {
    fn num_vertices(&self) -> usize;
    fn num_edges(&self) -> usize;

    /// Returns the neighbours of `u` in the order they are stored. Repeated entries
    /// (parallel edges) are reported repeatedly.
    fn neighbours<'a>(&'a self, u:&Vertex) -> Box<dyn Iterator<Item=Vertex> + 'a>;

    fn len(&self) -> usize {
        self.num_vertices()
    }

    fn is_empty(&self) -> bool {
        self.num_vertices() == 0
    }

    fn contains(&self, u:&Vertex) -> bool {
        (*u as usize) < self.num_vertices()
    }

    fn vertices(&self) -> std::ops::Range<Vertex> {
        0..(self.num_vertices() as Vertex)
    }

    fn adjacent(&self, u:&Vertex, v:&Vertex) -> bool {
        self.contains(u) && self.neighbours(u).any(|x| x == *v)
    }

    fn degree(&self, u:&Vertex) -> usize {
        self.neighbours(u).count()
    }

    fn neighbourhood<'a, I>(&self, it:I) -> VertexSet
                where I: Iterator<Item=&'a Vertex> {
        let mut res = VertexSet::default();
        let centers:VertexSet = it.cloned().collect();

        for v in &centers {
            res.extend(self.neighbours(v));
        }

        res.retain(|u| !centers.contains(u));
        res
    }
}

/// A [Graph] whose edges carry a [Weight].
pub trait WeightedGraph: Graph {
    /// Returns the weight of the edge $uv$, or `None` if the two vertices are not adjacent.
    /// If several parallel edges exist, the lightest one is reported.
    fn weight(&self, u:&Vertex, v:&Vertex) -> Option<Weight> {
        self.weighted_neighbours(u)
            .filter(|(x,_)| x == v)
            .map(|(_,w)| w)
            .min()
    }

    fn weighted_neighbours<'a>(&'a self, u:&Vertex) -> Box<dyn Iterator<Item=(Vertex,Weight)> + 'a>;

    /// Iterates over every stored edge $uv$ with $u < v$ exactly once, scanning
    /// vertices in increasing order.
    fn weighted_edges(&self) -> WeightedEdgeIterator<'_, Self> where Self: Sized {
        WeightedEdgeIterator::new(self)
    }
}

/// Sums the weights of a sequence of edges. Panics if the sum overflows,
/// see [checked_total_weight] for input that is not under the caller's control.
pub fn total_weight(edges:&[WeightedEdge]) -> Weight {
    edges.iter().map(|(_,_,w)| w).sum()
}

/// Sums the weights of a sequence of edges, or returns `None` if the sum
/// does not fit into a [Weight].
pub fn checked_total_weight(edges:&[WeightedEdge]) -> Option<Weight> {
    edges.iter().try_fold(0 as Weight, |acc, (_,_,w)| acc.checked_add(*w))
}
