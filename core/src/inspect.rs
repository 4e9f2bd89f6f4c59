//! Filtered, computed views over a flat collection.
//!
//! A [`Rule`] selects records and derives one value per selected record.
//! [`find_matching`] applies a rule lazily; calling it again re-evaluates
//! from the start.

use crate::collection::FlatCollection;
use crate::error::{Error, Result};
use crate::record::Record;

/// Selection predicate plus per-row computed value.
pub trait Rule {
    fn matches(&self, record: &Record) -> bool;

    fn value(&self, record: &Record) -> f64;
}

/// Select records by exact byte length of `b` and `d`; value is `c - a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRule {
    pub b_len: usize,
    pub d_len: usize,
}

impl Default for LengthRule {
    /// `b` of 3 bytes and `d` of 4 bytes.
    fn default() -> Self {
        Self { b_len: 3, d_len: 4 }
    }
}

impl Rule for LengthRule {
    fn matches(&self, record: &Record) -> bool {
        record.b.len() == self.b_len && record.d.len() == self.d_len
    }

    fn value(&self, record: &Record) -> f64 {
        record.c - f64::from(record.a)
    }
}

/// A selected record, its collection position, and its computed value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match<'a> {
    pub index: usize,
    pub record: &'a Record,
    pub value: f64,
}

/// Lazy iterator returned by [`find_matching`].
pub struct Matches<'a, R> {
    inner: std::iter::Enumerate<std::slice::Iter<'a, Record>>,
    rule: &'a R,
}

impl<'a, R: Rule> Iterator for Matches<'a, R> {
    type Item = Match<'a>;

    fn next(&mut self) -> Option<Match<'a>> {
        let rule = self.rule;
        self.inner
            .by_ref()
            .find(|(_, record)| rule.matches(record))
            .map(|(index, record)| Match {
                index,
                record,
                value: rule.value(record),
            })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

/// Apply `rule` to `collection` in collection order.
///
/// Fails with [`Error::Empty`] on an empty collection. A non-empty
/// collection with no matches yields an empty iterator.
pub fn find_matching<'a, R: Rule>(
    collection: &'a FlatCollection,
    rule: &'a R,
) -> Result<Matches<'a, R>> {
    if collection.is_empty() {
        return Err(Error::Empty);
    }
    Ok(Matches {
        inner: collection.as_slice().iter().enumerate(),
        rule,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> FlatCollection {
        FlatCollection::from_records(vec![
            Record::new(5, "apple", 15.5, "pear"),
            Record::new(3, "cat", 12.3, "bird"),
            Record::new(7, "dog", 20.1, "fish"),
            Record::new(2, "ant", 9.8, "moth"),
            Record::new(9, "zebra", 25.6, "lion"),
        ])
        .unwrap()
    }

    #[test]
    fn test_default_rule() {
        let c = scenario();
        let rule = LengthRule::default();
        let found: Vec<_> = find_matching(&c, &rule).unwrap().collect();
        let indices: Vec<_> = found.iter().map(|m| m.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        assert!((found[0].value - 9.3).abs() < 1e-9);
        assert!((found[1].value - 13.1).abs() < 1e-9);
        assert!((found[2].value - 7.8).abs() < 1e-9);
        assert_eq!(found[1].record.b.to_string(), "dog");
    }

    #[test]
    fn test_restartable() {
        let c = scenario();
        let rule = LengthRule::default();
        let first = find_matching(&c, &rule).unwrap().count();
        let second = find_matching(&c, &rule).unwrap().count();
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_matches_is_not_error() {
        let c = FlatCollection::from_records(vec![Record::new(1, "apple", 2.0, "pear")]).unwrap();
        let rule = LengthRule::default();
        assert_eq!(find_matching(&c, &rule).unwrap().count(), 0);
    }

    #[test]
    fn test_empty_collection() {
        let c = FlatCollection::new();
        let rule = LengthRule::default();
        assert!(find_matching(&c, &rule).err().unwrap().is_empty());
    }

    #[test]
    fn test_length_is_bytes() {
        // "né" is 3 bytes but 2 characters
        let c = FlatCollection::from_records(vec![Record::new(0, "né", 1.0, "bird")]).unwrap();
        let rule = LengthRule::default();
        assert_eq!(find_matching(&c, &rule).unwrap().count(), 1);
    }

    #[test]
    fn test_custom_rule() {
        struct Negative;

        impl Rule for Negative {
            fn matches(&self, record: &Record) -> bool {
                record.a < 0
            }

            fn value(&self, record: &Record) -> f64 {
                record.c
            }
        }

        let c = FlatCollection::from_records(vec![
            Record::new(-1, "x", 4.0, "y"),
            Record::new(1, "x", 5.0, "y"),
        ])
        .unwrap();
        let found: Vec<_> = find_matching(&c, &Negative).unwrap().collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].value, 4.0);
    }
}
