//! Minimum spanning trees and bipartiteness for undirected graphs read from flat text files.
//!
//! Graphs live on the dense vertex set $\\{0,\ldots,n-1\\}$ and come in three shapes:
//! weighted adjacency lists ([adjlist::AdjacencyList]), unweighted neighbour lists
//! ([adjlist::NeighbourList]) and weight matrices ([adjmatrix::AdjacencyMatrix]).
//!
//! ```rust
//! use spangraph::graph::*;
//! use spangraph::adjmatrix::AdjacencyMatrix;
//! use spangraph::algorithms::*;
//!
//! let matrix = AdjacencyMatrix::from_rows(vec![
//!     vec![0, 2, 0, 6, 0],
//!     vec![2, 0, 3, 8, 5],
//!     vec![0, 3, 0, 0, 7],
//!     vec![6, 8, 0, 0, 9],
//!     vec![0, 5, 7, 9, 0],
//! ]).unwrap();
//!
//! assert_eq!(total_weight(&matrix.prim()), 16);
//! assert_eq!(total_weight(&matrix.kruskal()), 16);
//! assert!(!matrix.is_bipartite());
//! ```
#![allow(non_snake_case)]

pub mod adjlist;
pub mod adjmatrix;
pub mod algorithms;
pub mod datastructures;
pub mod error;
pub mod generate;
pub mod graph;
pub mod io;
pub mod iterators;
