use crate::graph::{Graph, GraphBuilder};

/// Builder holding `n` locations named `L0..L{n-1}` and no edges yet
pub(crate) fn builder_with_locations(n: usize) -> GraphBuilder {
    let mut b = GraphBuilder::with_capacity(n, 0);
    for i in 0..n {
        b.add_location(i, &format!("L{i}")).unwrap();
    }
    b
}

pub(crate) fn generate_disconnected_graph() -> Graph {
    // 0 -- 1 -- 2
    // 3 -- 4 -- 5
    let mut b = builder_with_locations(6);

    b.add_edge(0, 1, 1).unwrap();
    b.add_edge(1, 2, 1).unwrap();
    b.add_edge(3, 4, 3).unwrap();
    b.add_edge(4, 5, 1).unwrap();

    b.build()
}
