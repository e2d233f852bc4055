//! Dense $n \times n$ weight matrix. An entry of `0` means that the two vertices are
//! not adjacent, hence an edge of weight zero cannot be represented. This matches
//! the matrix files this crate reads and writes.

use crate::adjlist::AdjacencyList;
use crate::graph::*;
use crate::iterators::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    n: usize,
    cells: Vec<Weight>,
}

impl AdjacencyMatrix {
    /// Creates a matrix on `n` vertices without any edges.
    pub fn new(n:usize) -> Self {
        AdjacencyMatrix { n, cells: vec![0; n*n] }
    }

    /// Creates a matrix from its rows. Returns `None` if the rows do not form a square.
    pub fn from_rows(rows:Vec<Vec<Weight>>) -> Option<Self> {
        let n = rows.len();
        if rows.iter().any(|row| row.len() != n) {
            return None
        }
        Some(AdjacencyMatrix { n, cells: rows.into_iter().flatten().collect() })
    }

    pub fn from_edges<I>(n:usize, edges:I) -> Self where I: IntoIterator<Item=WeightedEdge> {
        let mut res = AdjacencyMatrix::new(n);
        for (u, v, w) in edges {
            res.set_edge(&u, &v, w);
        }
        res
    }

    /// Raw matrix entry, `0` if there is no edge.
    pub fn get(&self, u:&Vertex, v:&Vertex) -> Weight {
        self.cells[self.index(u, v)]
    }

    /// Sets the single entry `(u,v)`.
    pub fn set(&mut self, u:&Vertex, v:&Vertex, weight:Weight) {
        let ix = self.index(u, v);
        self.cells[ix] = weight;
    }

    /// Sets both `(u,v)` and `(v,u)`. A weight of `0` removes the edge.
    pub fn set_edge(&mut self, u:&Vertex, v:&Vertex, weight:Weight) {
        self.set(u, v, weight);
        self.set(v, u, weight);
    }

    pub fn row(&self, u:&Vertex) -> &[Weight] {
        let start = (*u as usize) * self.n;
        &self.cells[start..start+self.n]
    }

    pub fn rows(&self) -> impl Iterator<Item=&[Weight]> + '_ {
        self.cells.chunks(self.n.max(1)).take(self.n)
    }

    /// Whether the matrix equals its transpose.
    pub fn is_symmetric(&self) -> bool {
        self.vertices().all(|u| (u..self.n as Vertex).all(|v| self.get(&u, &v) == self.get(&v, &u)))
    }

    fn index(&self, u:&Vertex, v:&Vertex) -> usize {
        let (u, v) = (*u as usize, *v as usize);
        assert!(u < self.n && v < self.n, "Entry ({u},{v}) outside of {0}x{0} matrix", self.n);
        u * self.n + v
    }
}

impl From<&AdjacencyList> for AdjacencyMatrix {
    fn from(graph:&AdjacencyList) -> Self {
        let mut res = AdjacencyMatrix::new(graph.num_vertices());
        for u in graph.vertices() {
            for (v, w) in graph.weighted_neighbours(&u) {
                res.set(&u, &v, w);
            }
        }
        res
    }
}

impl Graph for AdjacencyMatrix {
    fn num_vertices(&self) -> usize {
        self.n
    }

    fn num_edges(&self) -> usize {
        self.edges().count()
    }

    fn neighbours<'a>(&'a self, u:&Vertex) -> Box<dyn Iterator<Item=Vertex> + 'a> {
        Box::new(self.weighted_neighbours(u).map(|(v,_)| v))
    }

    fn adjacent(&self, u:&Vertex, v:&Vertex) -> bool {
        self.contains(u) && self.contains(v) && self.get(u, v) != 0
    }
}

impl WeightedGraph for AdjacencyMatrix {
    fn weight(&self, u:&Vertex, v:&Vertex) -> Option<Weight> {
        match self.get(u, v) {
            0 => None,
            w => Some(w)
        }
    }

    fn weighted_neighbours<'a>(&'a self, u:&Vertex) -> Box<dyn Iterator<Item=(Vertex,Weight)> + 'a> {
        Box::new(self.row(u).iter()
                    .enumerate()
                    .filter(|(_,w)| **w != 0)
                    .map(|(v,w)| (v as Vertex, *w)))
    }
}



//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
