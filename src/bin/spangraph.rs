use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{ArgAction, Parser, Subcommand};
use itertools::Itertools;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use spangraph::adjlist::AdjacencyList;
use spangraph::adjmatrix::AdjacencyMatrix;
use spangraph::algorithms::*;
use spangraph::error::{Error, Result};
use spangraph::generate::save_test_cases;
use spangraph::graph::*;
use spangraph::io::{BipartiteCase, LoadFromFile};

/// Minimum spanning trees and bipartiteness checks on graph files.
#[derive(Parser, Debug)]
#[command(name = "spangraph", version, about)]
struct Cli {
    /// Raise the log level (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Edge-sorting MST on a weighted adjacency list file.
    #[command(alias = "1")]
    Kruskal {
        file: String,
    },

    /// Frontier-growing MST on an adjacency matrix file.
    #[command(alias = "2")]
    Prim {
        file: String,

        /// Vertex the tree is grown from.
        #[arg(long, default_value_t = 0)]
        root: Vertex,

        /// Use the binary-heap variant (always rooted at vertex 0).
        #[arg(long, conflicts_with = "root")]
        heap: bool,
    },

    /// Two-colouring of a neighbour list file.
    #[command(alias = "3")]
    Bipartite {
        file: String,
    },

    /// Generate random test cases.
    #[command(alias = "4")]
    Generate {
        /// Number of cases per algorithm.
        #[arg(default_value_t = 100)]
        cases: usize,

        /// Output directory.
        #[arg(long, default_value = "tests")]
        dir: PathBuf,

        /// Seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command:Command) -> Result<()> {
    match command {
        Command::Kruskal { file } => {
            println!("\nRunning Kruskal on {file}...");
            let graph = AdjacencyList::from_file(&file)?;

            let start = Instant::now();
            let tree = graph.kruskal();
            let elapsed = start.elapsed();

            report_tree(&tree, graph.num_vertices());
            println!("Elapsed time: {:.6} seconds", elapsed.as_secs_f64());
        }
        Command::Prim { file, root, heap } => {
            println!("\nRunning Prim on {file}...");
            let matrix = AdjacencyMatrix::from_file(&file)?;
            if !matrix.is_empty() && !matrix.contains(&root) {
                return Err(Error::InvalidArgument(
                    format!("root {root} is not a vertex of a graph with {} vertices", matrix.num_vertices())))
            }

            let start = Instant::now();
            let tree = if heap { matrix.prim_heap() } else { matrix.prim_from(root) };
            let elapsed = start.elapsed();

            report_tree(&tree, matrix.num_vertices());
            println!("Elapsed time: {:.6} seconds", elapsed.as_secs_f64());
        }
        Command::Bipartite { file } => {
            println!("\nChecking bipartiteness of {file}...");
            let case = BipartiteCase::from_file(&file)?;

            let start = Instant::now();
            let result = case.graph.bipartiteness();
            let elapsed = start.elapsed();

            match &result {
                Bipartiteness::Bipartite(left, right) => {
                    println!("The graph IS bipartite.");
                    println!("Set A: [{}]", left.iter().sorted().join(", "));
                    println!("Set B: [{}]", right.iter().sorted().join(", "));
                }
                Bipartiteness::NotBipartite((u, v)) => {
                    println!("The graph is NOT bipartite.");
                    println!("Conflicting edge: {u} - {v}");
                }
            }
            if let Some(agrees) = case.expected.agrees_with(&result) {
                let verdict = if agrees { "matches" } else { "DOES NOT match" };
                println!("Result {verdict} the annotation in the file.");
            }
            println!("Elapsed time: {:.6} seconds", elapsed.as_secs_f64());
        }
        Command::Generate { cases, dir, seed } => {
            println!("Generating {cases} test cases...");
            let mut rng = match seed {
                Some(s) => StdRng::seed_from_u64(s),
                None => StdRng::from_entropy(),
            };
            save_test_cases(&mut rng, &dir, cases)?;
            println!("Test cases written to {}.", dir.display());
        }
    }

    Ok(())
}

fn report_tree(tree:&[WeightedEdge], n:usize) {
    println!("MST found with {} edges", tree.len());
    match checked_total_weight(tree) {
        Some(total) => println!("Total MST weight: {total}"),
        None => {
            warn!(edges = tree.len(), "total weight overflows");
            println!("Total MST weight: exceeds {}", Weight::MAX);
        }
    }
    if tree.len() + 1 < n {
        info!(edges = tree.len(), vertices = n, "graph is disconnected, result is partial");
        println!("Note: the graph is disconnected, a spanning tree would have {} edges.", n - 1);
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
    fn numeric_aliases() {
        let cli = Cli::try_parse_from(["spangraph", "1", "graph.txt"]).unwrap();
        assert!(matches!(cli.command, Command::Kruskal{ ref file } if file == "graph.txt"));

        let cli = Cli::try_parse_from(["spangraph", "2", "m.txt", "--root", "3"]).unwrap();
        assert!(matches!(cli.command, Command::Prim{ root: 3, heap: false, .. }));

        let cli = Cli::try_parse_from(["spangraph", "-v", "3", "case.txt"]).unwrap();
        assert_eq!(cli.verbose, 1);
        assert!(matches!(cli.command, Command::Bipartite{ .. }));

        let cli = Cli::try_parse_from(["spangraph", "4", "5", "--seed", "1"]).unwrap();
        assert!(matches!(cli.command, Command::Generate{ cases: 5, seed: Some(1), .. }));

        assert!(Cli::try_parse_from(["spangraph", "2", "m.txt", "--root", "1", "--heap"]).is_err());
        assert!(Cli::try_parse_from(["spangraph", "5"]).is_err());
    }

    #[test]
    fn root_out_of_range() {
        let command = Command::Prim{ file: "resources/prim_small.txt".to_string(), root: 5, heap: false };
        assert!(matches!(run(command), Err(Error::InvalidArgument(_))));

        let command = Command::Prim{ file: "resources/prim_small.txt".to_string(), root: 4, heap: false };
        assert!(run(command).is_ok());
    }

    #[test]
    fn missing_file() {
        let command = Command::Kruskal{ file: "resources/does_not_exist.txt".to_string() };
        assert!(matches!(run(command), Err(Error::Io(_))));
    }

    #[test]
    fn overflowing_weights() {
        let big = Weight::MAX / 2 + 1;
        report_tree(&[(0,1,big), (1,2,big)], 3);
        assert_eq!(checked_total_weight(&[(0,1,big), (1,2,big)]), None);
    }
}
