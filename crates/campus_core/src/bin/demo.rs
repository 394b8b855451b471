use campus_core::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Build the graph from the built-in campus map
    let g = Graph::reference()?;
    g.print_info();
    println!("{}", g.format_matrix());

    // Tuck Shop -> Quick Bite Cafe
    let mut dijkstra = search::dijkstra::Dijkstra::new(&g);
    let s = node_index(0);
    let t = node_index(14);

    let shortest_path = dijkstra.search(s, t)?;
    let names = shortest_path
        .nodes
        .iter()
        .map(|n| g.location_name(*n))
        .collect::<Result<Vec<_>, _>>()?;

    println!("Costs: {}m", shortest_path.weight);
    println!("Path: {}", names.join(" -> "));
    println!("{}", dijkstra.stats);
    Ok(())
}
