//! Console formatting for the graph, the array, and inspection results.

use std::io::{self, Write};

use recgraph_core::{FlatCollection, GraphStore, Match};

pub fn graph<W: Write>(out: &mut W, graph: &GraphStore) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Graph Nodes ---")?;
    writeln!(out, "Node count: {}", graph.node_count())?;
    for (index, node) in graph.iter() {
        writeln!(out, "[{}] {}", index, node.data)?;
        if !node.neighbors().is_empty() {
            let list: Vec<String> = node.neighbors().iter().map(|n| n.to_string()).collect();
            writeln!(out, "    Neighbors: {}", list.join(", "))?;
        }
    }
    writeln!(out)
}

pub fn array<W: Write>(out: &mut W, array: &FlatCollection) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Array Contents ---")?;
    writeln!(out, "Count: {}", array.len())?;
    for (index, record) in array.iter().enumerate() {
        writeln!(out, "[{}] {}", index, record)?;
    }
    writeln!(out)
}

pub fn matches<'a, W, I>(out: &mut W, found: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = Match<'a>>,
{
    writeln!(out)?;
    writeln!(out, "--- Processing Array ---")?;
    writeln!(out, "Elements where b has 3 characters and d has 4 characters:")?;
    let mut any = false;
    for m in found {
        writeln!(
            out,
            "Index {}: b={}, d={}, difference (c - a) = {:.2}",
            m.index, m.record.b, m.record.d, m.value
        )?;
        any = true;
    }
    if !any {
        writeln!(out, "No elements found matching the criteria")?;
    }
    writeln!(out)
}
