use std::path::PathBuf;

use clap::Parser;

use crate::{config::CampusMap, graph::Graph, search::Engine};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Location table (`id,name`). Uses the built-in campus map if omitted
    #[arg(long, value_name = "csv", requires = "edges")]
    locations: Option<PathBuf>,

    /// Edge table (`a,b,weight`)
    #[arg(long, value_name = "csv", requires = "locations")]
    edges: Option<PathBuf>,

    /// Shortest path implementation
    #[arg(long, value_enum, default_value_t = Engine::Linear)]
    engine: Engine,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dataset {
    Reference,
    Csv { locations: PathBuf, edges: PathBuf },
}

#[derive(Debug, Clone)]
pub struct Cfg {
    pub dataset: Dataset,
    pub engine: Engine,
}

impl Cfg {
    pub fn load_graph(&self) -> anyhow::Result<Graph> {
        let map = match &self.dataset {
            Dataset::Reference => CampusMap::reference(),
            Dataset::Csv { locations, edges } => CampusMap::from_csv(locations, edges)?,
        };
        Ok(Graph::from_config(&map)?)
    }
}

fn into_cfg(cli: Cli) -> Cfg {
    let dataset = match (cli.locations, cli.edges) {
        (Some(locations), Some(edges)) => Dataset::Csv { locations, edges },
        _ => Dataset::Reference,
    };

    Cfg {
        dataset,
        engine: cli.engine,
    }
}

pub fn parse() -> Cfg {
    into_cfg(Cli::parse())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_from(args: &[&str]) -> Result<Cfg, clap::Error> {
        Cli::try_parse_from(args).map(into_cfg)
    }

    #[test]
    fn defaults_to_reference_map() {
        let cfg = parse_from(&["campus"]).unwrap();

        assert_eq!(cfg.dataset, Dataset::Reference);
        assert_eq!(cfg.engine, Engine::Linear);
        assert_eq!(cfg.load_graph().unwrap().num_locations(), 23);
    }

    #[test]
    fn csv_paths_come_in_pairs() {
        assert!(parse_from(&["campus", "--locations", "l.csv"]).is_err());

        let cfg = parse_from(&[
            "campus",
            "--locations",
            "l.csv",
            "--edges",
            "e.csv",
            "--engine",
            "heap",
        ])
        .unwrap();

        assert_eq!(
            cfg.dataset,
            Dataset::Csv {
                locations: PathBuf::from("l.csv"),
                edges: PathBuf::from("e.csv")
            }
        );
        assert_eq!(cfg.engine, Engine::Heap);
    }

    #[test]
    fn load_bundled_csv() {
        let data = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        let cfg = Cfg {
            dataset: Dataset::Csv {
                locations: data.join("locations.csv"),
                edges: data.join("edges.csv"),
            },
            engine: Engine::Heap,
        };

        let g = cfg.load_graph().unwrap();
        assert_eq!(g.num_edges(), 39);
    }
}
