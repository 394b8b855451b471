//! Interactive route finder for the campus map
use std::path::PathBuf;

use campus_core::{
    graph::{Graph, NodeIndex},
    search::{shortest_path::ShortestPath, Engine},
    statistics::{average_degree, format_degree_hist},
    util::cli,
};
use log::info;
use reedline_repl_rs::clap::{value_parser, Arg, ArgMatches, Command};
use reedline_repl_rs::{Repl, Result};

/// Print graph info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let hist = format_degree_hist(&context.graph).unwrap_or_else(|e| format!("{e:#}\n"));
    Ok(Some(format!(
        "Graph has {} locations and {} edges\nAverage degree: {:.2}\n{}",
        context.graph.num_locations(),
        context.graph.num_edges(),
        average_degree(&context.graph),
        hist.trim_end()
    )))
}

/// Print all locations
fn list(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let rows: Vec<String> = context
        .graph
        .locations()
        .map(|location| format!("{:>3}: {}", location.id, location.name))
        .collect();
    Ok(Some(rows.join("\n")))
}

/// Print the id/name table and the distance matrix
fn matrix(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(context.graph.format_matrix().trim_end().to_string()))
}

fn run_route(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let from = args.get_one::<String>("from").map(String::as_str).unwrap_or_default();
    let to = args.get_one::<String>("to").map(String::as_str).unwrap_or_default();

    let (Some(src), Some(dst)) = (context.resolve(from), context.resolve(to)) else {
        let unknown = if context.resolve(from).is_none() { from } else { to };
        return Ok(Some(format!("Unknown location: {unknown}")));
    };

    match context.engine.search(&context.graph, src, dst) {
        Ok((sp, stats)) => Ok(Some(format!(
            "{}\nTook: {:?}",
            context.describe(&sp),
            stats.duration
        ))),
        Err(e) => Ok(Some(e.to_string())),
    }
}

fn measure(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    use rand::Rng;

    let n = *args.get_one::<usize>("n").unwrap_or(&10);
    let num_locations = context.graph.num_locations();
    if num_locations == 0 {
        return Ok(Some("Graph is empty".to_string()));
    }

    // Select n random start and end locations
    let mut rng = rand::thread_rng();
    let mut res = String::new();
    for _ in 0..n {
        let src = NodeIndex::new(rng.gen_range(0..num_locations));
        let dst = NodeIndex::new(rng.gen_range(0..num_locations));
        if let Ok((sp, stats)) = context.engine.search(&context.graph, src, dst) {
            res.push_str(&format!(
                "{} -> {}: {:?} ({} nodes settled, {}m)\n",
                src,
                dst,
                stats.duration,
                stats.nodes_settled,
                sp.weight
            ));
        }
    }

    Ok(Some(res.trim_end().to_string()))
}

struct Context {
    graph: Graph,
    engine: Engine,
}

impl Context {
    fn new(graph: Graph, engine: Engine) -> Self {
        Self { graph, engine }
    }

    /// Accepts either a location id or a location name
    fn resolve(&self, raw: &str) -> Option<NodeIndex> {
        match raw.trim().parse::<usize>() {
            Ok(id) => Some(NodeIndex::new(id)).filter(|n| self.graph.contains(*n)),
            Err(_) => self.graph.find_location(raw),
        }
    }

    fn describe(&self, sp: &ShortestPath) -> String {
        let Some(distance) = sp.distance() else {
            return "No path found between these locations.".to_string();
        };

        let names: Vec<&str> = sp
            .nodes
            .iter()
            .filter_map(|n| self.graph.location_name(*n).ok())
            .collect();
        format!("{}m total\n{}", distance, names.join(" -> "))
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Init Graph
    let cfg = cli::parse();
    let graph = cfg.load_graph()?;
    info!("Using {:?} search", cfg.engine);
    let context = Context::new(graph, cfg.engine);

    let mut repl = Repl::new(context)
        .with_name("Campus Navigator")
        .with_version("v0.1.0")
        .with_description("Find the shortest walking route between two campus locations")
        .with_banner("Welcome to Campus Navigator")
        .with_history(PathBuf::from("history"), 100)
        .with_command(Command::new("info").about("Print graph info"), info)
        .with_command(Command::new("list").about("List all locations"), list)
        .with_command(
            Command::new("matrix").about("Print the distance matrix"),
            matrix,
        )
        .with_command(
            Command::new("route")
                .arg(
                    Arg::new("from")
                        .required(true)
                        .help("ID or name of the start location"),
                )
                .arg(
                    Arg::new("to")
                        .required(true)
                        .help("ID or name of the destination"),
                )
                .about("Calculate the shortest route between two locations"),
            run_route,
        )
        .with_command(
            Command::new("measure")
                .arg(
                    Arg::new("n")
                        .value_parser(value_parser!(usize))
                        .required(false)
                        .help("Number of random routes to calculate"),
                )
                .about("Measure `n` random shortest path calculations"),
            measure,
        );

    repl.run()
        .map_err(|e| anyhow::anyhow!("Campus Navigator stopped: {e}"))
}
