use std::ops::Index;

use crate::error::{Error, Result};
use crate::graph::MAX_NODES;
use crate::record::Record;

/// Ordered, bounded sequence of records detached from any graph.
///
/// Holds at most [`MAX_NODES`] records. Produced by flattening or loading,
/// sorted in place, and read by the inspector and the codec.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatCollection {
    records: Vec<Record>,
}

impl FlatCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap records, rejecting more than [`MAX_NODES`].
    pub fn from_records(records: Vec<Record>) -> Result<Self> {
        if records.len() > MAX_NODES {
            return Err(Error::CapacityExceeded {
                len: records.len(),
                max: MAX_NODES,
            });
        }
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Record] {
        &mut self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl Index<usize> for FlatCollection {
    type Output = Record;

    fn index(&self, index: usize) -> &Record {
        &self.records[index]
    }
}

impl<'a> IntoIterator for &'a FlatCollection {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
