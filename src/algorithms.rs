use crate::datastructures::disjoint_set::DisjointSet;
use crate::graph::*;
use crate::iterators::*;

pub mod bipartiteness;
pub mod spanning;

pub use bipartiteness::{Bipartiteness, BipartitenessCheck};
pub use spanning::SpanningTreeAlgorithms;

pub trait GraphAlgorithms {
    /// Returns the vertex sets of all connected components, ordered by their
    /// smallest vertex.
    fn components(&self) -> Vec<VertexSet>;

    fn num_components(&self) -> usize;

    fn is_connected(&self) -> bool {
        self.num_components() <= 1
    }
}

impl<G> GraphAlgorithms for G where G: Graph {
    fn components(&self) -> Vec<VertexSet> {
        let dsets = component_sets(self);
        let mut dsets = match dsets {
            Some(d) => d,
            None => return Vec::new()
        };

        let mut index = VertexMap::default();
        let mut res:Vec<VertexSet> = Vec::with_capacity(dsets.num_sets());
        for v in self.vertices() {
            let root = dsets.find(v);
            let ix = *index.entry(root).or_insert_with(|| {
                res.push(VertexSet::default());
                res.len() - 1
            });
            res[ix].insert(v);
        }
        res
    }

    fn num_components(&self) -> usize {
        component_sets(self).map_or(0, |dsets| dsets.num_sets())
    }
}

fn component_sets<G>(graph:&G) -> Option<DisjointSet> where G: Graph {
    if graph.is_empty() {
        return None
    }
    let mut dsets = DisjointSet::new(graph.num_vertices());
    for (u,v) in graph.edges() {
        dsets.union(u, v);
    }
    Some(dsets)
}



//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
