//! Random graphs and test-case files.
//!
//! All generators take the random number generator as an argument so that test
//! cases can be reproduced from a seed.

use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use itertools::Itertools;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, info};

use crate::adjlist::{AdjacencyList, NeighbourList};
use crate::adjmatrix::AdjacencyMatrix;
use crate::error::{Error, Result};
use crate::graph::*;
use crate::io::{BipartiteCase, Expectation, WriteToFile};

/// Vertex counts used by [save_test_cases].
pub const CASE_SIZES:[usize; 7] = [10, 20, 50, 100, 200, 500, 1000];

/// Returns the same random graph as an adjacency list and as a matrix. Every pair
/// $u < v$ becomes an edge with probability `p`, weights are drawn uniformly from `weights`.
pub fn random_weighted_graph<R:Rng>(rng:&mut R, n:usize, p:f64, weights:RangeInclusive<Weight>) -> (AdjacencyList, AdjacencyMatrix) {
    let mut list = AdjacencyList::new(n);
    let mut matrix = AdjacencyMatrix::new(n);

    for (u, v) in (0..n as Vertex).tuple_combinations() {
        if rng.gen::<f64>() < p {
            let w = rng.gen_range(weights.clone());
            list.add_edge(&u, &v, w);
            matrix.set_edge(&u, &v, w);
        }
    }

    (list, matrix)
}

/// Returns a connected random graph as an adjacency list and as a matrix.
///
/// A random spanning tree guarantees connectivity, afterwards every remaining pair
/// is added with a probability that is itself drawn from $[0.1, 0.3)$.
pub fn connected_graph<R:Rng>(rng:&mut R, n:usize, weights:RangeInclusive<Weight>) -> (AdjacencyList, AdjacencyMatrix) {
    let mut list = AdjacencyList::new(n);
    let mut matrix = AdjacencyMatrix::new(n);

    let mut order:Vec<Vertex> = (0..n as Vertex).collect();
    order.shuffle(rng);

    for i in 1..order.len() {
        let u = order[rng.gen_range(0..i)];
        let v = order[i];
        let w = rng.gen_range(weights.clone());
        list.add_edge(&u, &v, w);
        matrix.set_edge(&u, &v, w);
    }

    let p = rng.gen_range(0.1..0.3);
    for (u, v) in (0..n as Vertex).tuple_combinations() {
        if !matrix.adjacent(&u, &v) && rng.gen::<f64>() < p {
            let w = rng.gen_range(weights.clone());
            list.add_edge(&u, &v, w);
            matrix.set_edge(&u, &v, w);
        }
    }

    (list, matrix)
}

/// Returns a random bipartite graph with sides $\\{0,\ldots,n/2-1\\}$ and $\\{n/2,\ldots,n-1\\}$.
/// Every pair across the sides becomes an edge with probability `p`.
pub fn bipartite_graph<R:Rng>(rng:&mut R, n:usize, p:f64) -> (NeighbourList, (VertexSet, VertexSet)) {
    let half = (n / 2) as Vertex;
    let left:VertexSet = (0..half).collect();
    let right:VertexSet = (half..n as Vertex).collect();

    let mut G = NeighbourList::new(n);
    for u in 0..half {
        for v in half..n as Vertex {
            if rng.gen::<f64>() < p {
                G.add_edge(&u, &v);
            }
        }
    }

    (G, (left, right))
}

/// Returns a random graph that contains the triangle $0,1,2$ and is therefore not bipartite.
/// Every other pair becomes an edge with probability `p`.
pub fn non_bipartite_graph<R:Rng>(rng:&mut R, n:usize, p:f64) -> Result<NeighbourList> {
    if n < 3 {
        return Err(Error::InvalidArgument(format!("a non-bipartite graph needs at least 3 vertices, got {n}")))
    }

    let mut G = NeighbourList::from_edges(n, vec![(0,1), (1,2), (2,0)]);
    for (u, v) in (0..n as Vertex).tuple_combinations() {
        if v <= 2 {
            continue;
        }
        if rng.gen::<f64>() < p {
            G.add_edge(&u, &v);
        }
    }

    Ok(G)
}

/// Writes `cases` random test cases below `dir`:
///
/// - `problema2/kruskal/case_i.txt` holds a weighted adjacency list,
/// - `problema2/prim/case_i.txt` the same graph as a matrix,
/// - `problema3/bipartite/case_i.txt` an unrelated graph, bipartite or not, annotated
///   with the expected answer.
pub fn save_test_cases<R:Rng>(rng:&mut R, dir:&Path, cases:usize) -> Result<()> {
    let kruskal_dir = dir.join("problema2").join("kruskal");
    let prim_dir = dir.join("problema2").join("prim");
    let bipartite_dir = dir.join("problema3").join("bipartite");
    for d in [&kruskal_dir, &prim_dir, &bipartite_dir] {
        fs::create_dir_all(d)?;
    }

    for i in 1..=cases {
        let n = *CASE_SIZES.choose(rng).unwrap_or(&CASE_SIZES[0]);
        let name = format!("case_{i}.txt");

        let (list, matrix) = random_weighted_graph(rng, n, 0.3, 1..=100);
        list.write_txt(&path_str(&kruskal_dir.join(&name))?)?;
        matrix.write_txt(&path_str(&prim_dir.join(&name))?)?;

        let case = if rng.gen::<bool>() {
            let (graph, (left, right)) = bipartite_graph(rng, n, 0.3);
            let expected = Expectation {
                bipartite: Some(true),
                partition_a: Some(left),
                partition_b: Some(right),
            };
            BipartiteCase{ graph, expected }
        } else {
            let graph = non_bipartite_graph(rng, n, 0.2)?;
            let expected = Expectation { bipartite: Some(false), ..Default::default() };
            BipartiteCase{ graph, expected }
        };
        case.write_txt(&path_str(&bipartite_dir.join(&name))?)?;
        debug!(case = i, vertices = n, bipartite = ?case.expected.bipartite, "wrote test case");
    }

    info!(cases, dir = %dir.display(), "generated test cases");
    Ok(())
}

fn path_str(path:&Path) -> Result<String> {
    path.to_str()
        .map(str::to_string)
        .ok_or_else(|| Error::InvalidArgument(format!("path {} is not valid UTF-8", path.display())))
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
    use crate::algorithms::{BipartitenessCheck, GraphAlgorithms, SpanningTreeAlgorithms};
    use crate::io::LoadFromFile;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn list_and_matrix_agree() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let (list, matrix) = random_weighted_graph(&mut rng, 40, 0.3, 1..=100);
        assert_eq!(list.to_matrix(), matrix);
        assert_eq!(list.num_edges(), matrix.num_edges());
        for (_, _, w) in list.weighted_edges() {
            assert!((1..=100).contains(&w));
        }
    }

    #[test]
    fn connected() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for n in [1, 2, 3, 20, 100] {
            let (list, matrix) = connected_graph(&mut rng, n, 1..=10);
            assert!(list.is_connected());
            assert!(matrix.is_connected());
            assert!(matrix.is_symmetric());
        }
    }

    #[test]
    fn bipartite_sides() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let (G, (left, right)) = bipartite_graph(&mut rng, 11, 0.5);
        assert_eq!(left.len(), 5);
        assert_eq!(right.len(), 6);
        assert!(G.is_bipartite());
    }

    #[test]
    fn non_bipartite_needs_three_vertices() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        assert!(matches!(non_bipartite_graph(&mut rng, 2, 0.5), Err(Error::InvalidArgument(_))));
        let G = non_bipartite_graph(&mut rng, 3, 0.5).unwrap();
        assert_eq!(G.num_edges(), 3);
        assert!(!G.is_bipartite());
    }

    #[test]
    fn write_cases() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let dir = Path::new("resources/temp_cases");
        save_test_cases(&mut rng, dir, 3).unwrap();

        for i in 1..=3 {
            let name = format!("case_{i}.txt");
            let list = AdjacencyList::from_txt(&path_str(&dir.join("problema2/kruskal").join(&name)).unwrap()).unwrap();
            let matrix = AdjacencyMatrix::from_txt(&path_str(&dir.join("problema2/prim").join(&name)).unwrap()).unwrap();
            assert_eq!(list.to_matrix(), matrix);
            assert_eq!(list.kruskal().len(), list.num_vertices() - list.num_components());

            let case = BipartiteCase::from_txt(&path_str(&dir.join("problema3/bipartite").join(&name)).unwrap()).unwrap();
            assert_eq!(case.expected.bipartite, Some(case.graph.is_bipartite()));
            if let Some((left, _)) = case.graph.bipartiteness().into_partitions() {
                assert!(left.contains(&0));
            }
        }
    }
}
