//! Graph traversal and path search tool

use std::path::PathBuf;

use anyhow::{anyhow, Error};
use clap::Parser;
use log::{debug, warn};

use arcgraph_loader::load_graph;

use crate::config::{Algorithm, Opts, DEFAULT_ALGORITHM};
use crate::report::{run_search, select_node};

mod config;
mod report;

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let args: Args = Args::parse();
    let opts = args.opts().or(Opts::load(args.config.as_deref())?);
    debug!("Effective options: {:?}", opts);

    let nodes = opts.nodes.ok_or_else(|| anyhow!("node list file is not set (use --nodes or the config file)"))?;
    let arcs = opts.arcs.ok_or_else(|| anyhow!("arc list file is not set (use --arcs or the config file)"))?;
    let algorithm = opts.algorithm.unwrap_or(DEFAULT_ALGORITHM);

    let mut graph = load_graph(&nodes, &arcs, opts.capacity)?;
    let start = select_node(&graph, &args.from)?;
    let goal = match args.to {
        Some(ref to) => Some(select_node(&graph, to)?),
        None => None,
    };
    if goal.is_some() && !algorithm.needs_goal() {
        warn!("{:?} is a plain traversal, the goal node is ignored", algorithm);
    }

    let report = run_search(&mut graph, algorithm, start, goal)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in report.plain_lines() {
            println!("{}", line);
        }
    }

    Ok(())
}

/// Graph traversals and shortest path searches.
#[derive(Parser, Debug)]
#[command(version, author = "The arcgraph developers")]
struct Args {
    /// Node list file, one `name x y` record per line
    #[arg(long)]
    nodes: Option<PathBuf>,

    /// Arc list file, one `from to weight` record per line
    #[arg(long)]
    arcs: Option<PathBuf>,

    /// Graph capacity (default is the number of nodes)
    #[arg(long)]
    capacity: Option<usize>,

    /// Algorithm to run (default `astar`)
    #[arg(long, value_enum)]
    algorithm: Option<Algorithm>,

    /// Start node, by slot index or name
    #[arg(long)]
    from: String,

    /// Goal node, by slot index or name
    #[arg(long)]
    to: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Config file path (default `./arcgraph.json`, if present)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Args {
    /// Options given on the command line. They take precedence over the config file.
    fn opts(&self) -> Opts {
        Opts {
            nodes: self.nodes.clone(),
            arcs: self.arcs.clone(),
            capacity: self.capacity,
            algorithm: self.algorithm,
        }
    }
}

#[test]
fn test_parse_args() {
    let args = Args::try_parse_from(&["arcgraph", "--nodes", "n.txt", "--from", "A", "--to", "3", "--algorithm", "bfs-path", "--json"]).unwrap();
    assert_eq!(args.from, "A");
    assert_eq!(args.to.as_deref(), Some("3"));
    assert!(args.json);
    assert_eq!(
        args.opts(),
        Opts {
            nodes: Some(PathBuf::from("n.txt")),
            algorithm: Some(Algorithm::BfsPath),
            ..Opts::default()
        }
    );

    assert!(Args::try_parse_from(&["arcgraph", "--nodes", "n.txt"]).is_err());
    assert!(Args::try_parse_from(&["arcgraph", "--from", "A", "--algorithm", "dijkstra"]).is_err());
}
