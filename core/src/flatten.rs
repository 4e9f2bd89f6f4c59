use tracing::{debug, warn};

use crate::collection::FlatCollection;
use crate::error::{Error, Result};
use crate::graph::{GraphStore, MAX_NODES};

/// Copy every node's record, in node-index order, into a new collection.
///
/// The store is not modified and the result shares nothing with it. A store
/// can never exceed [`MAX_NODES`] on its own; the check covers the two types
/// drifting apart.
pub fn flatten(store: &GraphStore) -> Result<FlatCollection> {
    let node_count = store.node_count();
    if node_count > MAX_NODES {
        warn!(node_count, max = MAX_NODES, "flatten rejected: too many nodes");
        return Err(Error::CapacityExceeded {
            len: node_count,
            max: MAX_NODES,
        });
    }

    let records = store.iter().map(|(_, node)| node.data).collect();
    let collection = FlatCollection::from_records(records)?;
    debug!(len = collection.len(), "graph flattened");
    Ok(collection)
}
