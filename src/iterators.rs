use crate::graph::*;

/// Allows iteration over the undirected edges of any [Graph].
pub trait EdgeIterable<G> where G: Graph {
    fn edges(&self) -> EdgeIterator<'_, G>;
}

impl<G> EdgeIterable<G> for G where G: Graph {
    fn edges(&self) -> EdgeIterator<'_, G> {
        EdgeIterator::new(self)
    }
}

/*
    Edge iterator for unweighted access. Every edge uv with u < v
    is returned once per stored entry.
*/
pub struct EdgeIterator<'a, G> where G: Graph {
    G: &'a G,
    v_it: std::ops::Range<Vertex>,
    curr_v: Vertex,
    curr_it: Option<Box<dyn Iterator<Item=Vertex> + 'a>>,
}

impl<'a, G> EdgeIterator<'a, G> where G: Graph {
    pub fn new(G: &'a G) -> EdgeIterator<'a, G> {
        let mut res = EdgeIterator {
            G,
            v_it: G.vertices(),
            curr_v: Vertex::MAX,
            curr_it: None,
        };
        res.advance();
        res
    }

    fn advance(&mut self) {
        if let Some(v) = self.v_it.next() {
            self.curr_v = v;
            self.curr_it = Some(self.G.neighbours(&v));
        } else {
            self.curr_it = None;
        }
    }
}

impl<'a, G> Iterator for EdgeIterator<'a, G> where G: Graph {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(it) = self.curr_it.as_mut() {
            let u = match it.next() {
                Some(u) => u,
                None => {
                    self.advance();
                    continue;
                }
            };

            // Tie-breaking so we only return every edge once
            if self.curr_v >= u {
                continue;
            }
            return Some((self.curr_v, u));
        }

        None
    }
}

/*
    Edge iterator for weighted graphs, same tie-breaking as above.
*/
pub struct WeightedEdgeIterator<'a, G> where G: WeightedGraph {
    G: &'a G,
    v_it: std::ops::Range<Vertex>,
    curr_v: Vertex,
    curr_it: Option<Box<dyn Iterator<Item=(Vertex,Weight)> + 'a>>,
}

impl<'a, G> WeightedEdgeIterator<'a, G> where G: WeightedGraph {
    pub fn new(G: &'a G) -> WeightedEdgeIterator<'a, G> {
        let mut res = WeightedEdgeIterator {
            G,
            v_it: G.vertices(),
            curr_v: Vertex::MAX,
            curr_it: None,
        };
        res.advance();
        res
    }

    fn advance(&mut self) {
        if let Some(v) = self.v_it.next() {
            self.curr_v = v;
            self.curr_it = Some(self.G.weighted_neighbours(&v));
        } else {
            self.curr_it = None;
        }
    }
}

impl<'a, G> Iterator for WeightedEdgeIterator<'a, G> where G: WeightedGraph {
    type Item = WeightedEdge;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(it) = self.curr_it.as_mut() {
            let (u, w) = match it.next() {
                Some(x) => x,
                None => {
                    self.advance();
                    continue;
                }
            };

            if self.curr_v >= u {
                continue;
            }
            return Some((self.curr_v, u, w));
        }

        None
    }
}
