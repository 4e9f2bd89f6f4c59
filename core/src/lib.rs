//! recgraph-core: record graph engine.
//!
//! A pure Rust library that maintains a bounded directed graph of fixed-shape
//! records, flattens it into an ordered collection, sorts and inspects that
//! collection, and persists it in a flat binary layout.
//! No terminal I/O here; the `recgraph` binary drives these operations.

mod codec;
mod collection;
mod error;
mod flatten;
mod graph;
mod inspect;
mod order;
mod record;

pub use codec::{
    load, load_from_path, save, save_to_path, COUNT_SIZE, DEFAULT_FILE_NAME, RECORD_SIZE,
};
pub use collection::FlatCollection;
pub use error::{Error, Result};
pub use flatten::flatten;
pub use graph::{
    GraphNode, GraphStore, NodeIndex, INITIAL_NEIGHBOR_CAPACITY, INITIAL_NODE_CAPACITY, MAX_NODES,
};
pub use inspect::{find_matching, LengthRule, Match, Matches, Rule};
pub use order::{compare_records, sort};
pub use record::{Record, Text, MAX_TEXT_LEN, TEXT_WIDTH};
