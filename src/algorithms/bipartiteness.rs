//! Two-colouring of undirected graphs.
//!
//! Every component is coloured by a breadth-first search that starts in its
//! smallest vertex, which receives colour $0$. Components are visited in order of
//! their smallest vertex. The search stops at the first edge whose endpoints
//! received the same colour.
//!
//! ```rust
//! use spangraph::graph::VertexSet;
//! use spangraph::adjlist::NeighbourList;
//! use spangraph::algorithms::BipartitenessCheck;
//!
//! let result = NeighbourList::cycle(4).bipartiteness();
//! let (left, right) = result.into_partitions().unwrap();
//! assert_eq!(left, [0,2].iter().cloned().collect::<VertexSet>());
//! assert_eq!(right, [1,3].iter().cloned().collect::<VertexSet>());
//!
//! assert!(!NeighbourList::cycle(3).is_bipartite());
//! ```

use std::collections::VecDeque;

use tracing::debug;

use crate::graph::*;

/// Outcome of a bipartiteness check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bipartiteness {
    /// The two colour classes. Together they contain every vertex of the graph.
    Bipartite(VertexSet, VertexSet),
    /// An edge whose endpoints were forced into the same colour class.
    NotBipartite(Edge),
}

impl Bipartiteness {
    pub fn is_bipartite(&self) -> bool {
        matches!(self, Bipartiteness::Bipartite(_, _))
    }

    pub fn partitions(&self) -> Option<(&VertexSet, &VertexSet)> {
        match self {
            Bipartiteness::Bipartite(left, right) => Some((left, right)),
            Bipartiteness::NotBipartite(_) => None
        }
    }

    pub fn into_partitions(self) -> Option<(VertexSet, VertexSet)> {
        match self {
            Bipartiteness::Bipartite(left, right) => Some((left, right)),
            Bipartiteness::NotBipartite(_) => None
        }
    }

    /// The conflicting edge, if the graph is not bipartite.
    pub fn conflict(&self) -> Option<Edge> {
        match self {
            Bipartiteness::Bipartite(_, _) => None,
            Bipartiteness::NotBipartite(e) => Some(*e)
        }
    }
}

pub trait BipartitenessCheck {
    fn bipartiteness(&self) -> Bipartiteness;

    fn is_bipartite(&self) -> bool {
        self.bipartiteness().is_bipartite()
    }
}

impl<G> BipartitenessCheck for G where G: Graph {
    fn bipartiteness(&self) -> Bipartiteness {
        let n = self.num_vertices();
        let mut colours:Vec<Option<u8>> = vec![None; n];
        let mut sides = [VertexSet::default(), VertexSet::default()];
        let mut queue = VecDeque::new();

        for start in self.vertices() {
            if colours[start as usize].is_some() {
                continue;
            }
            colours[start as usize] = Some(0);
            sides[0].insert(start);
            queue.push_back(start);

            while let Some(u) = queue.pop_front() {
                let cu = colours[u as usize].unwrap_or(0);
                for v in self.neighbours(&u) {
                    match colours[v as usize] {
                        None => {
                            let cv = 1 - cu;
                            colours[v as usize] = Some(cv);
                            sides[cv as usize].insert(v);
                            queue.push_back(v);
                        }
                        Some(cv) if cv == cu => {
                            debug!(u, v, colour = cu, "bipartiteness: adjacent vertices share a colour");
                            return Bipartiteness::NotBipartite((u, v))
                        }
                        Some(_) => {}
                    }
                }
            }
        }

        let [left, right] = sides;
        Bipartiteness::Bipartite(left, right)
    }
}



//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
