use std::cmp::Ordering;

use tracing::debug;

use crate::collection::FlatCollection;
use crate::error::{Error, Result};
use crate::record::Record;

/// Lexicographic total order over `(a, b, c, d)`.
///
/// Text fields compare byte-wise. `c` compares numerically, with NaN placed
/// after every number and equal to any other NaN; `-0.0 == 0.0`.
pub fn compare_records(x: &Record, y: &Record) -> Ordering {
    x.a.cmp(&y.a)
        .then_with(|| x.b.cmp(&y.b))
        .then_with(|| compare_f64(x.c, y.c))
        .then_with(|| x.d.cmp(&y.d))
}

fn compare_f64(x: f64, y: f64) -> Ordering {
    match x.partial_cmp(&y) {
        Some(ord) => ord,
        None => match (x.is_nan(), y.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            _ => Ordering::Less,
        },
    }
}

/// Sort a collection in place with [`compare_records`].
///
/// Stable. Fails with [`Error::Empty`] when there is nothing to sort.
pub fn sort(collection: &mut FlatCollection) -> Result<()> {
    if collection.is_empty() {
        return Err(Error::Empty);
    }
    collection.as_mut_slice().sort_by(compare_records);
    debug!(len = collection.len(), "collection sorted");
    Ok(())
}
