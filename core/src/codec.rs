//! Binary persistence for flat collections.
//!
//! Layout, host-native endianness and widths:
//!
//! ```text
//! [count: usize]
//! [count x record: a (i32, 4B) | b (256B) | c (f64, 8B) | d (256B)]
//! ```
//!
//! No magic, version, or checksum, and no padding between fields. Files are
//! only portable between builds with the same pointer width and byte order.
//! Text fields are NUL-padded; a field with no NUL decodes to all 256 bytes.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::mem::size_of;
use std::path::Path;

use tracing::{debug, warn};

use crate::collection::FlatCollection;
use crate::error::{Error, Result};
use crate::graph::MAX_NODES;
use crate::record::{Record, Text, TEXT_WIDTH};

/// Bytes in the leading count field.
pub const COUNT_SIZE: usize = size_of::<usize>();

/// Bytes per encoded record.
pub const RECORD_SIZE: usize = size_of::<i32>() + TEXT_WIDTH + size_of::<f64>() + TEXT_WIDTH;

/// Default file name used by the interactive driver.
pub const DEFAULT_FILE_NAME: &str = "array.bin";

/// Write `collection` to `sink`. Any failed or short write is [`Error::Io`].
pub fn save<W: Write>(collection: &FlatCollection, mut sink: W) -> Result<()> {
    sink.write_all(&collection.len().to_ne_bytes())?;
    for record in collection {
        sink.write_all(&encode_record(record))?;
    }
    sink.flush()?;
    debug!(len = collection.len(), "collection saved");
    Ok(())
}

/// Read a collection from `source`.
///
/// A stored count above [`MAX_NODES`] is [`Error::CorruptData`]; the stream
/// ending early, including inside the count, is [`Error::Io`].
pub fn load<R: Read>(mut source: R) -> Result<FlatCollection> {
    let mut count_buf = [0u8; COUNT_SIZE];
    source.read_exact(&mut count_buf)?;
    let count = usize::from_ne_bytes(count_buf);
    if count > MAX_NODES {
        warn!(count, max = MAX_NODES, "load rejected: stored count out of range");
        return Err(Error::corrupt(format!(
            "stored count {count} exceeds capacity {MAX_NODES}"
        )));
    }

    let mut records = Vec::with_capacity(count);
    let mut buf = [0u8; RECORD_SIZE];
    for _ in 0..count {
        source.read_exact(&mut buf)?;
        records.push(decode_record(&buf));
    }
    debug!(len = count, "collection loaded");
    FlatCollection::from_records(records)
}

/// Create or truncate `path` and save into it.
///
/// A failure can leave a partial file behind; treat its contents as
/// undefined.
pub fn save_to_path(collection: &FlatCollection, path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path.as_ref())?;
    save(collection, BufWriter::new(file))
}

/// Open `path` and load from it.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<FlatCollection> {
    let file = File::open(path.as_ref())?;
    load(BufReader::new(file))
}

fn encode_record(record: &Record) -> [u8; RECORD_SIZE] {
    let mut buf = [0u8; RECORD_SIZE];
    let mut at = 0;
    let mut put = |bytes: &[u8]| {
        buf[at..at + bytes.len()].copy_from_slice(bytes);
        at += bytes.len();
    };
    put(&record.a.to_ne_bytes());
    put(&record.b.to_field());
    put(&record.c.to_ne_bytes());
    put(&record.d.to_field());
    buf
}

fn decode_record(buf: &[u8; RECORD_SIZE]) -> Record {
    let (a, rest) = buf.split_at(size_of::<i32>());
    let (b, rest) = rest.split_at(TEXT_WIDTH);
    let (c, d) = rest.split_at(size_of::<f64>());
    Record {
        a: i32::from_ne_bytes(fixed(a)),
        b: Text::from_field(&fixed(b)),
        c: f64::from_ne_bytes(fixed(c)),
        d: Text::from_field(&fixed(d)),
    }
}

/// Copy a slice whose length is fixed by the layout into an array.
fn fixed<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(bytes);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scenario() -> FlatCollection {
        FlatCollection::from_records(vec![
            Record::new(5, "apple", 15.5, "pear"),
            Record::new(3, "cat", 12.3, "bird"),
            Record::new(7, "dog", 20.1, "fish"),
        ])
        .unwrap()
    }

    fn encoded(c: &FlatCollection) -> Vec<u8> {
        let mut out = Vec::new();
        save(c, &mut out).unwrap();
        out
    }

    #[test]
    fn test_record_size() {
        assert_eq!(RECORD_SIZE, 524);
    }

    #[test]
    fn test_layout() {
        let bytes = encoded(&scenario());
        assert_eq!(bytes.len(), COUNT_SIZE + 3 * RECORD_SIZE);
        assert_eq!(usize::from_ne_bytes(fixed(&bytes[..COUNT_SIZE])), 3);

        let first = &bytes[COUNT_SIZE..COUNT_SIZE + RECORD_SIZE];
        assert_eq!(i32::from_ne_bytes(fixed(&first[..4])), 5);
        assert_eq!(&first[4..9], b"apple");
        assert_eq!(first[9], 0);
        assert_eq!(f64::from_ne_bytes(fixed(&first[260..268])), 15.5);
        assert_eq!(&first[268..272], b"pear");
    }

    #[test]
    fn test_roundtrip_scenario() {
        let c = scenario();
        let back = load(Cursor::new(encoded(&c))).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_roundtrip_empty() {
        let bytes = encoded(&FlatCollection::new());
        assert_eq!(bytes.len(), COUNT_SIZE);
        assert!(load(Cursor::new(bytes)).unwrap().is_empty());
    }

    #[test]
    fn test_roundtrip_truncated_text() {
        let long = "q".repeat(300);
        let c = FlatCollection::from_records(vec![Record::new(1, &long, 0.5, &long)]).unwrap();
        let back = load(Cursor::new(encoded(&c))).unwrap();
        assert_eq!(back[0].b.len(), 255);
        assert_eq!(back, c);
    }

    #[test]
    fn test_count_over_capacity() {
        let mut bytes = (MAX_NODES + 1).to_ne_bytes().to_vec();
        bytes.resize(COUNT_SIZE + (MAX_NODES + 1) * RECORD_SIZE, 0);
        let err = load(Cursor::new(bytes)).unwrap_err();
        assert!(err.is_corrupt());
    }

    #[test]
    fn test_short_count() {
        let err = load(Cursor::new(vec![1u8, 0])).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_short_records() {
        let mut bytes = encoded(&scenario());
        bytes.truncate(COUNT_SIZE + RECORD_SIZE + 10);
        let err = load(Cursor::new(bytes)).unwrap_err();
        match err {
            Error::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::UnexpectedEof),
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn test_unterminated_text_field() {
        let mut bytes = 1usize.to_ne_bytes().to_vec();
        let mut rec = [0u8; RECORD_SIZE];
        rec[4..260].fill(b'k');
        bytes.extend_from_slice(&rec);
        let c = load(Cursor::new(bytes)).unwrap();
        assert_eq!(c[0].b.len(), TEXT_WIDTH);
        assert!(c[0].d.is_empty());
    }

    #[test]
    fn test_short_write() {
        let mut buf = [0u8; 16];
        let err = save(&scenario(), &mut buf[..]).unwrap_err();
        match err {
            Error::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::WriteZero),
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn test_path_roundtrip_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);

        save_to_path(&scenario(), &path).unwrap();
        let one = FlatCollection::from_records(vec![Record::new(1, "ant", 9.8, "moth")]).unwrap();
        save_to_path(&one, &path).unwrap();

        assert_eq!(
            std::fs::metadata(&path).unwrap().len() as usize,
            COUNT_SIZE + RECORD_SIZE
        );
        assert_eq!(load_from_path(&path).unwrap(), one);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from_path(dir.path().join("absent.bin")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
