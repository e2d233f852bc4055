//! Minimum spanning trees for weighted undirected graphs.
//!
//! Two strategies are offered. [kruskal](SpanningTreeAlgorithms::kruskal) sorts all edges and
//! greedily keeps those joining two different components. [prim](SpanningTreeAlgorithms::prim)
//! grows a single tree from vertex $0$ by repeatedly adding the cheapest edge leaving it, and
//! [prim_heap](SpanningTreeAlgorithms::prim_heap) does the same with a binary heap, which pays
//! off on large sparse graphs.
//!
//! All methods return the tree as a list of edges `(u, v, weight)`; use [total_weight] to
//! obtain its cost. On disconnected graphs Kruskal returns a spanning forest with
//! $n - c$ edges for $c$ components, while both variants of Prim only span the component
//! of the root. Callers can detect the latter by comparing the number of edges with $n-1$.
//!
//! ```rust
//! use spangraph::graph::*;
//! use spangraph::adjlist::AdjacencyList;
//! use spangraph::algorithms::SpanningTreeAlgorithms;
//!
//! let graph = AdjacencyList::from_edges(4, vec![(0,1,4), (0,2,3), (1,2,1), (1,3,2), (2,3,4)]);
//! let tree = graph.kruskal();
//! assert_eq!(tree, vec![(1,2,1), (1,3,2), (0,2,3)]);
//! assert_eq!(total_weight(&tree), graph.prim().iter().map(|e| e.2).sum::<Weight>());
//! ```

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use crate::datastructures::disjoint_set::DisjointSet;
use crate::graph::*;

pub trait SpanningTreeAlgorithms {
    /// Edge-sorting construction. Ties between equal weights are resolved by the
    /// order in which [weighted_edges](WeightedGraph::weighted_edges) reports them.
    fn kruskal(&self) -> Vec<WeightedEdge>;

    /// Frontier-growing construction rooted at vertex $0$.
    fn prim(&self) -> Vec<WeightedEdge>;

    /// Frontier-growing construction rooted at `root`. Runs in $O(n^2)$ time.
    ///
    /// Panics if `root` is not a vertex of a non-empty graph.
    fn prim_from(&self, root:Vertex) -> Vec<WeightedEdge>;

    /// Frontier-growing construction rooted at vertex $0$ using a binary heap,
    /// running in $O(m \log m)$ time. The total weight agrees with [prim](SpanningTreeAlgorithms::prim),
    /// the edges themselves may differ where weights tie.
    fn prim_heap(&self) -> Vec<WeightedEdge>;
}

impl<G> SpanningTreeAlgorithms for G where G: WeightedGraph {
    fn kruskal(&self) -> Vec<WeightedEdge> {
        let n = self.num_vertices();
        let mut edges:Vec<WeightedEdge> = self.weighted_edges().collect();
        edges.sort_by_key(|(_,_,w)| *w);
        debug!(vertices = n, candidates = edges.len(), "kruskal: sorted candidate edges");

        let mut dsets = DisjointSet::new(n);
        let mut res = Vec::with_capacity(n.saturating_sub(1));
        for (u, v, w) in edges {
            if res.len() + 1 >= n {
                break;
            }
            if dsets.union(u, v) {
                res.push((u, v, w));
            }
        }

        res
    }

    fn prim(&self) -> Vec<WeightedEdge> {
        self.prim_from(0)
    }

    fn prim_from(&self, root:Vertex) -> Vec<WeightedEdge> {
        let n = self.num_vertices();
        if n == 0 {
            return Vec::new()
        }

        // A key of `None` stands for infinity.
        let mut selected = vec![false; n];
        let mut key:Vec<Option<Weight>> = vec![None; n];
        let mut parent:Vec<Option<Vertex>> = vec![None; n];
        key[root as usize] = Some(0);

        for _ in 0..n {
            let mut next:Option<(usize, Weight)> = None;
            for v in 0..n {
                if selected[v] {
                    continue;
                }
                if let Some(k) = key[v] {
                    if next.map_or(true, |(_, best)| k < best) {
                        next = Some((v, k));
                    }
                }
            }

            let u = match next {
                Some((u,_)) => u,
                None => {
                    debug!(root, spanned = selected.iter().filter(|s| **s).count(), vertices = n,
                           "prim: remaining vertices unreachable from root");
                    break;
                }
            };
            selected[u] = true;
            trace!(vertex = u, key = ?key[u], "prim: selected");

            let u = u as Vertex;
            for (v, w) in self.weighted_neighbours(&u) {
                let iv = v as usize;
                if selected[iv] {
                    continue;
                }
                if key[iv].map_or(true, |k| w < k) {
                    key[iv] = Some(w);
                    parent[iv] = Some(u);
                }
            }
        }

        let mut res = Vec::with_capacity(n - 1);
        for v in 0..n {
            if v == root as usize {
                continue;
            }
            if let (Some(p), Some(w)) = (parent[v], key[v]) {
                res.push((p, v as Vertex, w));
            }
        }
        res
    }

    fn prim_heap(&self) -> Vec<WeightedEdge> {
        let n = self.num_vertices();
        if n == 0 {
            return Vec::new()
        }

        let mut selected = vec![false; n];
        let mut res = Vec::with_capacity(n - 1);
        let mut frontier = BinaryHeap::new();

        selected[0] = true;
        for (v, w) in self.weighted_neighbours(&0) {
            frontier.push(Reverse((w, 0, v)));
        }

        while let Some(Reverse((w, u, v))) = frontier.pop() {
            if selected[v as usize] {
                continue;
            }
            selected[v as usize] = true;
            res.push((u, v, w));
            if res.len() + 1 == n {
                break;
            }

            for (x, wx) in self.weighted_neighbours(&v) {
                if !selected[x as usize] {
                    frontier.push(Reverse((wx, v, x)));
                }
            }
        }

        if res.len() + 1 < n {
            debug!(spanned = res.len() + 1, vertices = n, "prim_heap: remaining vertices unreachable from root");
        }
        res
    }
}



//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
