//! Reading and writing the plain-text graph formats.
//!
//! All formats start with a line holding the number of vertices $n$, followed by
//!
//! - for an [AdjacencyList]: lines `vertex: neighbour-weight, neighbour-weight, ...`,
//! - for an [AdjacencyMatrix]: $n$ rows of $n$ whitespace-separated weights, `0` meaning *no edge*,
//! - for a [NeighbourList]: $n$ lines where line $i$ lists the neighbours of vertex $i-1$,
//!   optionally followed by annotations (see [Expectation]).
//!
//! Files ending in `.gz` are transparently decompressed.
//!
//! ```rust,no_run
//! use spangraph::graph::*;
//! use spangraph::io::*;
//! use spangraph::adjlist::AdjacencyList;
//!
//! let graph = AdjacencyList::from_file("tests/problema2/kruskal/case_1.txt").expect("Could not open file");
//! println!("Edges: {:?}", graph.weighted_edges().collect::<Vec<WeightedEdge>>());
//! ```

use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use itertools::Itertools;
use tracing::debug;

use crate::adjlist::{AdjacencyList, NeighbourList};
use crate::adjmatrix::AdjacencyMatrix;
use crate::algorithms::Bipartiteness;
use crate::error::{Error, Result};
use crate::graph::*;

pub trait WriteToFile {
    fn write_txt(&self, filename:&str) -> Result<()> {
        let file = File::create(filename)?;
        let buf = BufWriter::new(file);
        self.write_buf(Box::new(buf))
    }

    fn write_gzipped(&self, filename:&str) -> Result<()> {
        let file = File::create(filename)?;
        let gz = GzEncoder::new(file, Compression::default());
        let buf = BufWriter::new(gz);
        self.write_buf(Box::new(buf))
    }

    fn write_buf(&self, buf:Box<dyn Write>) -> Result<()>;
}

pub trait LoadFromFile {
    fn from_txt(filename:&str) -> Result<Self> where Self: Sized {
        let buf = open_reader_txt(filename)?;
        Self::from_buf(buf)
    }

    fn from_gzipped(filename:&str) -> Result<Self> where Self: Sized {
        let buf = open_reader_gzip(filename)?;
        Self::from_buf(buf)
    }

    /// Picks the decoder from the file extension (`.txt` or `.gz`).
    fn from_file(filename:&str) -> Result<Self> where Self: Sized {
        let buf = open_reader(filename)?;
        Self::from_buf(buf)
    }

    fn from_buf(buf:Box<dyn BufRead>) -> Result<Self> where Self: Sized;
}

/// The annotations that generated neighbour-list files carry after the graph:
/// ```text
/// IS_BIPARTITE: True
/// PARTITION_A: [0, 1, 2]
/// PARTITION_B: [3, 4, 5]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Expectation {
    pub bipartite: Option<bool>,
    pub partition_a: Option<VertexSet>,
    pub partition_b: Option<VertexSet>,
}

impl Expectation {
    pub fn is_empty(&self) -> bool {
        self.bipartite.is_none() && self.partition_a.is_none() && self.partition_b.is_none()
    }

    /// Whether `result` agrees with the `IS_BIPARTITE` annotation, or `None`
    /// if the file carried no such annotation.
    pub fn agrees_with(&self, result:&Bipartiteness) -> Option<bool> {
        self.bipartite.map(|expected| expected == result.is_bipartite())
    }

    fn parse_line(&mut self, line:&str, lineno:usize) -> Result<bool> {
        let (key, value) = match line.split_once(':') {
            Some(kv) => kv,
            None => return Ok(false)
        };
        let value = value.trim();
        match key.trim() {
            "IS_BIPARTITE" => self.bipartite = Some(parse_bool(value, lineno)?),
            "PARTITION_A" => self.partition_a = Some(parse_vertex_list(value, lineno)?),
            "PARTITION_B" => self.partition_b = Some(parse_vertex_list(value, lineno)?),
            _ => return Ok(false)
        }
        Ok(true)
    }
}

/// A neighbour list together with the annotations found in its file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BipartiteCase {
    pub graph: NeighbourList,
    pub expected: Expectation,
}

impl LoadFromFile for AdjacencyList {
    fn from_buf(buf:Box<dyn BufRead>) -> Result<Self> where Self: Sized {
        let mut lines = buf.lines().enumerate();
        let n = parse_header(&mut lines)?;
        let mut G = AdjacencyList::new(n);

        for (i, line) in lines {
            let l = line?;
            let lineno = i + 1;
            if l.trim().is_empty() {
                continue;
            }
            let (vertex, entries) = l.split_once(':').ok_or_else(|| Error::InvalidToken{ line: lineno, token: l.trim().to_string() })?;
            let u = parse_vertex(vertex.trim(), lineno, n)?;
            G.add_vertex(&u);

            for entry in entries.split(',').map(str::trim).filter(|e| !e.is_empty()) {
                let (v, w) = entry.split_once('-').ok_or_else(|| Error::InvalidEntry{ line: lineno, entry: entry.to_string() })?;
                let v = parse_vertex(v.trim(), lineno, n)?;
                let w = parse_weight(w.trim(), lineno)?;
                G.add_arc(&u, &v, w);
            }
        }

        debug!(vertices = n, edges = G.num_edges(), "loaded adjacency list");
        Ok(G)
    }
}

impl WriteToFile for AdjacencyList {
    fn write_buf(&self, mut buf:Box<dyn Write>) -> Result<()> {
        writeln!(buf, "{}", self.num_vertices())?;
        for u in self.vertices() {
            let entries = self.entries(&u).iter().map(|(v,w)| format!("{v}-{w}")).join(", ");
            writeln!(buf, "{u}: {entries}")?;
        }
        buf.flush()?;
        Ok(())
    }
}

impl LoadFromFile for AdjacencyMatrix {
    fn from_buf(buf:Box<dyn BufRead>) -> Result<Self> where Self: Sized {
        let mut lines = buf.lines().enumerate();
        let n = parse_header(&mut lines)?;
        let mut rows = Vec::with_capacity(n);

        for (i, line) in lines {
            if rows.len() == n {
                break;
            }
            let l = line?;
            let lineno = i + 1;
            if l.trim().is_empty() {
                continue;
            }
            let row = l.split_whitespace()
                       .map(|t| parse_weight(t, lineno))
                       .collect::<Result<Vec<Weight>>>()?;
            if row.len() != n {
                return Err(Error::RowLength{ line: lineno, expected: n, found: row.len() })
            }
            rows.push(row);
        }

        if rows.len() != n {
            return Err(Error::MissingRows{ expected: n, found: rows.len() })
        }

        // Rows have been checked above.
        let M = AdjacencyMatrix::from_rows(rows).ok_or(Error::MissingRows{ expected: n, found: 0 })?;
        debug!(vertices = n, edges = M.num_edges(), "loaded adjacency matrix");
        Ok(M)
    }
}

impl WriteToFile for AdjacencyMatrix {
    fn write_buf(&self, mut buf:Box<dyn Write>) -> Result<()> {
        writeln!(buf, "{}", self.num_vertices())?;
        for row in self.rows() {
            writeln!(buf, "{}", row.iter().join(" "))?;
        }
        buf.flush()?;
        Ok(())
    }
}

impl LoadFromFile for BipartiteCase {
    fn from_buf(buf:Box<dyn BufRead>) -> Result<Self> where Self: Sized {
        let mut lines = buf.lines().enumerate();
        let n = parse_header(&mut lines)?;
        let mut G = NeighbourList::new(n);
        let mut expected = Expectation::default();
        let mut next:usize = 0;

        for (i, line) in lines {
            let l = line?;
            let lineno = i + 1;
            if expected.parse_line(&l, lineno)? {
                continue;
            }

            // Lines are positional, an empty line is a vertex without neighbours.
            if next < n {
                let u = next as Vertex;
                G.add_vertex(&u);
                for token in l.split_whitespace() {
                    let v = parse_vertex(token, lineno, n)?;
                    G.add_arc(&u, &v);
                }
                next += 1;
            } else if !l.trim().is_empty() {
                return Err(Error::InvalidToken{ line: lineno, token: l.trim().to_string() })
            }
        }

        debug!(vertices = n, edges = G.num_edges(), annotated = !expected.is_empty(), "loaded neighbour list");
        Ok(BipartiteCase{ graph: G, expected })
    }
}

impl LoadFromFile for NeighbourList {
    fn from_buf(buf:Box<dyn BufRead>) -> Result<Self> where Self: Sized {
        BipartiteCase::from_buf(buf).map(|case| case.graph)
    }
}

impl WriteToFile for NeighbourList {
    fn write_buf(&self, mut buf:Box<dyn Write>) -> Result<()> {
        write_neighbours(self, &mut buf)?;
        buf.flush()?;
        Ok(())
    }
}

impl WriteToFile for BipartiteCase {
    fn write_buf(&self, mut buf:Box<dyn Write>) -> Result<()> {
        write_neighbours(&self.graph, &mut buf)?;
        if let Some(b) = self.expected.bipartite {
            writeln!(buf, "IS_BIPARTITE: {}", if b { "True" } else { "False" })?;
        }
        if let Some(A) = &self.expected.partition_a {
            writeln!(buf, "PARTITION_A: [{}]", A.iter().sorted().join(", "))?;
        }
        if let Some(B) = &self.expected.partition_b {
            writeln!(buf, "PARTITION_B: [{}]", B.iter().sorted().join(", "))?;
        }
        buf.flush()?;
        Ok(())
    }
}

fn write_neighbours(G:&NeighbourList, buf:&mut Box<dyn Write>) -> Result<()> {
    writeln!(buf, "{}", G.num_vertices())?;
    for u in G.vertices() {
        writeln!(buf, "{}", G.entries(&u).iter().join(" "))?;
    }
    Ok(())
}

fn open_reader(filename:&str) -> Result<Box<dyn BufRead>> {
    let path = Path::new(&filename);
    let extension = path.extension().and_then(OsStr::to_str);
    match extension {
        Some("txt") => open_reader_txt(filename),
        Some("gz") => open_reader_gzip(filename),
        _ => Err(Error::UnsupportedFormat(filename.to_string()))
    }
}

fn open_reader_txt(filename:&str) -> Result<Box<dyn BufRead>> {
    let file = File::open(Path::new(&filename))?;
    Ok(Box::new(BufReader::new(file)))
}

fn open_reader_gzip(filename:&str) -> Result<Box<dyn BufRead>> {
    let file = File::open(Path::new(&filename))?;
    let gz = GzDecoder::new(file);
    Ok(Box::new(BufReader::new(gz)))
}

/// Reads the vertex count from the first non-empty line.
fn parse_header<I>(lines:&mut I) -> Result<usize> where I: Iterator<Item=(usize, std::io::Result<String>)> {
    for (i, line) in lines {
        let l = line?;
        let token = l.trim();
        if token.is_empty() {
            continue;
        }
        return token.parse::<usize>().map_err(|_| Error::InvalidHeader{ line: i + 1, token: token.to_string() })
    }
    Err(Error::MissingHeader)
}

fn parse_vertex(s:&str, lineno:usize, n:usize) -> Result<Vertex> {
    let v = s.parse::<Vertex>().map_err(|_| Error::InvalidToken{ line: lineno, token: s.to_string() })?;
    if (v as usize) >= n {
        return Err(Error::VertexOutOfRange{ line: lineno, vertex: v, n })
    }
    Ok(v)
}

fn parse_weight(s:&str, lineno:usize) -> Result<Weight> {
    s.parse::<Weight>().map_err(|_| Error::InvalidToken{ line: lineno, token: s.to_string() })
}

fn parse_bool(s:&str, lineno:usize) -> Result<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(Error::InvalidToken{ line: lineno, token: s.to_string() })
    }
}

fn parse_vertex_list(s:&str, lineno:usize) -> Result<VertexSet> {
    let inner = s.trim().trim_start_matches('[').trim_end_matches(']');
    inner.split(',')
         .map(str::trim)
         .filter(|t| !t.is_empty())
         .map(|t| t.parse::<Vertex>().map_err(|_| Error::InvalidToken{ line: lineno, token: t.to_string() }))
         .collect()
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
    use crate::algorithms::{BipartitenessCheck, SpanningTreeAlgorithms};

    fn reader(s:&'static str) -> Box<dyn BufRead> {
        Box::new(s.as_bytes())
    }

    #[test]
    fn read_adjacency_list() {
        let G = AdjacencyList::from_txt("resources/kruskal_small.txt").unwrap();
        assert_eq!(G.num_vertices(), 4);
        assert_eq!(G.num_edges(), 5);
        assert_eq!(G.weight(&1, &3), Some(2));
        assert_eq!(total_weight(&G.kruskal()), 6);

        let H = AdjacencyList::from_gzipped("resources/kruskal_small.txt.gz").unwrap();
        assert_eq!(G, H);
        let H = AdjacencyList::from_file("resources/kruskal_small.txt.gz").unwrap();
        assert_eq!(G, H);
    }

    #[test]
    fn read_adjacency_matrix() {
        let M = AdjacencyMatrix::from_file("resources/prim_small.txt").unwrap();
        assert_eq!(M.num_vertices(), 5);
        assert_eq!(M.num_edges(), 7);
        assert_eq!(total_weight(&M.prim()), 16);
    }

    #[test]
    fn read_neighbour_lists() {
        let case = BipartiteCase::from_file("resources/bipartite_even_cycle.txt").unwrap();
        assert_eq!(case.graph, NeighbourList::cycle(4));
        assert_eq!(case.expected.bipartite, Some(true));
        assert_eq!(case.expected.partition_a, Some([0,2].iter().cloned().collect()));
        assert_eq!(case.expected.partition_b, Some([1,3].iter().cloned().collect()));

        let G = NeighbourList::from_file("resources/bipartite_triangle.txt").unwrap();
        assert!(!G.is_bipartite());
    }

    #[test]
    fn isolated_vertex_lines() {
        let case = BipartiteCase::from_buf(reader("3\n1\n0\n\nIS_BIPARTITE: True\n")).unwrap();
        assert_eq!(case.graph.num_vertices(), 3);
        assert_eq!(case.graph.entries(&2), &[] as &[Vertex]);
        assert_eq!(case.expected.bipartite, Some(true));
        assert_eq!(case.expected.partition_a, None);
    }

    #[test]
    fn malformed_input() {
        assert!(matches!(AdjacencyList::from_buf(reader("")), Err(Error::MissingHeader)));
        assert!(matches!(AdjacencyList::from_buf(reader("x\n")), Err(Error::InvalidHeader{ line: 1, .. })));
        assert!(matches!(AdjacencyList::from_buf(reader("2\n0: 1-x\n")), Err(Error::InvalidToken{ line: 2, .. })));
        assert!(matches!(AdjacencyList::from_buf(reader("2\n0: 1 4\n")), Err(Error::InvalidEntry{ line: 2, .. })));
        assert!(matches!(AdjacencyList::from_buf(reader("2\n0: 2-4\n")), Err(Error::VertexOutOfRange{ vertex: 2, n: 2, .. })));
        assert!(matches!(AdjacencyList::from_buf(reader("2\n0 1-4\n")), Err(Error::InvalidToken{ line: 2, .. })));

        assert!(matches!(AdjacencyMatrix::from_buf(reader("2\n0 1\n1\n")), Err(Error::RowLength{ line: 3, expected: 2, found: 1 })));
        assert!(matches!(AdjacencyMatrix::from_buf(reader("2\n0 1\n")), Err(Error::MissingRows{ expected: 2, found: 1 })));

        assert!(matches!(NeighbourList::from_buf(reader("1\n\n5\n")), Err(Error::InvalidToken{ line: 3, .. })));
        assert!(matches!(NeighbourList::from_buf(reader("2\n1\n0\nIS_BIPARTITE: maybe\n")), Err(Error::InvalidToken{ line: 4, .. })));

        assert!(matches!(AdjacencyList::from_file("resources/kruskal_small.csv"), Err(Error::UnsupportedFormat(_))));
    }

    #[test]
    fn negative_weights() {
        let G = AdjacencyList::from_buf(reader("2\n0: 1--3\n1: 0--3\n")).unwrap();
        assert_eq!(G.weight(&0, &1), Some(-3));
    }

    #[test]
    fn write_adjacency_list() {
        let G = AdjacencyList::from_edges(3, vec![(0,1,7), (1,2,3)]);
        G.write_txt("resources/temp_list.txt").unwrap();
        G.write_gzipped("resources/temp_list.txt.gz").unwrap();

        let H1 = AdjacencyList::from_txt("resources/temp_list.txt").unwrap();
        let H2 = AdjacencyList::from_gzipped("resources/temp_list.txt.gz").unwrap();
        assert_eq!(H1, G);
        assert_eq!(H2, G);
    }

    #[test]
    fn write_adjacency_matrix() {
        let M = AdjacencyMatrix::from_edges(3, vec![(0,1,7), (1,2,3)]);
        M.write_txt("resources/temp_matrix.txt").unwrap();
        let H = AdjacencyMatrix::from_txt("resources/temp_matrix.txt").unwrap();
        assert_eq!(H, M);
    }

    #[test]
    fn write_bipartite_case() {
        let graph = NeighbourList::biclique(2, 2);
        let expected = Expectation {
            bipartite: Some(true),
            partition_a: Some([0,1].iter().cloned().collect()),
            partition_b: Some([2,3].iter().cloned().collect()),
        };
        let case = BipartiteCase{ graph, expected };
        case.write_gzipped("resources/temp_case.txt.gz").unwrap();

        let H = BipartiteCase::from_file("resources/temp_case.txt.gz").unwrap();
        assert_eq!(H, case);
    }

    #[test]
    fn annotations_agree() {
        let case = BipartiteCase::from_file("resources/bipartite_even_cycle.txt").unwrap();
        assert_eq!(case.expected.agrees_with(&case.graph.bipartiteness()), Some(true));

        let case = BipartiteCase::from_file("resources/bipartite_triangle.txt").unwrap();
        let result = case.graph.bipartiteness();
        assert_eq!(case.expected.agrees_with(&result), Some(true));

        let flipped = Expectation{ bipartite: Some(true), ..Expectation::default() };
        assert_eq!(flipped.agrees_with(&result), Some(false));
        assert_eq!(Expectation::default().agrees_with(&result), None);
    }
}
