//! Configuration options.

use std::io;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE_NAME: &str = "./arcgraph.json";
pub const DEFAULT_ALGORITHM: Algorithm = Algorithm::Astar;

/// Traversal or search to run.
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Depth-first walk
    Dfs,
    /// Breadth-first walk
    Bfs,
    /// Breadth-first search for the path with the fewest arcs
    BfsPath,
    /// Uniform-cost search
    Ucs,
    /// A* search with the Euclidean heuristic
    Astar,
}

impl Algorithm {
    /// Whether the algorithm searches for a path to a goal node.
    pub fn needs_goal(self) -> bool {
        match self {
            Algorithm::Dfs | Algorithm::Bfs => false,
            Algorithm::BfsPath | Algorithm::Ucs | Algorithm::Astar => true,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Can't read config file: {0}")]
    ConfigFileRead(#[source] io::Error),

    #[error("Bad config file: {0}")]
    BadConfigFile(#[source] serde_json::Error),
}

/// Graph and search options. Can be loaded from a JSON config file.
#[derive(Clone, Default, PartialEq, Eq, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Opts {
    /// Node list file.
    pub nodes: Option<PathBuf>,

    /// Arc list file.
    pub arcs: Option<PathBuf>,

    /// Graph capacity, defaults to the number of nodes.
    pub capacity: Option<usize>,

    pub algorithm: Option<Algorithm>,
}

impl Opts {
    /// Read the config file at `path`, or the default one if no path is given.
    /// A missing default file yields empty options.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::read_config_file(path),
            None => Ok(Self::read_optional_config_file(Path::new(DEFAULT_CONFIG_FILE_NAME))?.unwrap_or_default()),
        }
    }

    /// Fill every unset option from `other`.
    pub fn or(self, other: Opts) -> Opts {
        Opts {
            nodes: self.nodes.or(other.nodes),
            arcs: self.arcs.or(other.arcs),
            capacity: self.capacity.or(other.capacity),
            algorithm: self.algorithm.or(other.algorithm),
        }
    }

    fn parse_config(json: &[u8]) -> Result<Self, ConfigError> {
        serde_json::from_slice(json).map_err(|e| ConfigError::BadConfigFile(e))
    }

    fn read_config_file(file_path: &Path) -> Result<Self, ConfigError> {
        debug!("Reading config file {:?}", file_path);
        let json = std::fs::read(file_path).map_err(|e| ConfigError::ConfigFileRead(e))?;
        Self::parse_config(&json)
    }

    fn read_optional_config_file(file_path: &Path) -> Result<Option<Self>, ConfigError> {
        match Self::read_config_file(file_path) {
            Ok(conf) => Ok(Some(conf)),
            Err(ConfigError::ConfigFileRead(err)) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }
}

#[test]
fn test_parse_config() {
    let p = |s: &str| Some(PathBuf::from(s));

    assert_eq!(Opts::parse_config(b"{}").unwrap(), Opts::default());
    assert_eq!(
        Opts::parse_config(br#"{"nodes": "nodes.txt", "arcs": "arcs.txt", "capacity": 30, "algorithm": "bfs-path"}"#).unwrap(),
        Opts {
            nodes: p("nodes.txt"),
            arcs: p("arcs.txt"),
            capacity: Some(30),
            algorithm: Some(Algorithm::BfsPath),
        }
    );
    assert_eq!(
        Opts::parse_config(br#"{"algorithm": "astar"}"#).unwrap(),
        Opts { algorithm: Some(Algorithm::Astar), ..Opts::default() }
    );

    assert!(matches!(Opts::parse_config(br#"{"algorithm": "dijkstra"}"#), Err(ConfigError::BadConfigFile(_))));
    assert!(matches!(Opts::parse_config(br#"{"node": "typo.txt"}"#), Err(ConfigError::BadConfigFile(_))));
    assert!(matches!(Opts::parse_config(b"not json"), Err(ConfigError::BadConfigFile(_))));
}

#[test]
fn test_opts_or() {
    let p = |s: &str| Some(PathBuf::from(s));

    let flags = Opts { nodes: p("cli-nodes.txt"), algorithm: Some(Algorithm::Ucs), ..Opts::default() };
    let file = Opts {
        nodes: p("file-nodes.txt"),
        arcs: p("file-arcs.txt"),
        capacity: Some(8),
        algorithm: Some(Algorithm::Dfs),
    };
    assert_eq!(
        flags.or(file),
        Opts {
            nodes: p("cli-nodes.txt"),
            arcs: p("file-arcs.txt"),
            capacity: Some(8),
            algorithm: Some(Algorithm::Ucs),
        }
    );
}

#[test]
fn test_optional_config_file() {
    let missing = std::env::temp_dir().join("arcgraph-no-such-config.json");
    assert_eq!(Opts::read_optional_config_file(&missing).unwrap(), None);
    assert!(matches!(Opts::load(Some(missing.as_path())), Err(ConfigError::ConfigFileRead(_))));

    let path = std::env::temp_dir().join(format!("arcgraph-config-{}.json", std::process::id()));
    std::fs::write(&path, br#"{"capacity": 12}"#).unwrap();
    assert_eq!(Opts::load(Some(path.as_path())).unwrap(), Opts { capacity: Some(12), ..Opts::default() });
    std::fs::remove_file(path).unwrap();
}
