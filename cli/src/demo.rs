//! Records and edges preloaded at startup.

use recgraph_core::{GraphStore, Record, Result};

const DEMO_RECORDS: [(i32, &str, f64, &str); 5] = [
    (5, "apple", 15.5, "pear"),
    (3, "cat", 12.3, "bird"),
    (7, "dog", 20.1, "fish"),
    (2, "ant", 9.8, "moth"),
    (9, "zebra", 25.6, "lion"),
];

const DEMO_EDGES: [(usize, usize); 3] = [(0, 1), (0, 2), (1, 3)];

pub fn demo_graph() -> Result<GraphStore> {
    let mut graph = GraphStore::new();
    for (a, b, c, d) in DEMO_RECORDS {
        graph.add_node(Record::new(a, b, c, d))?;
    }
    for (from, to) in DEMO_EDGES {
        graph.add_edge(from, to)?;
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_graph() {
        let g = demo_graph().unwrap();
        assert_eq!(g.node_count(), 5);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.neighbor_indices_of(0).unwrap(), &[1, 2]);
        assert_eq!(g.neighbor_indices_of(1).unwrap(), &[3]);
        assert_eq!(g.node(4).unwrap().b.to_string(), "zebra");
    }
}
