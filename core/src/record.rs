use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

/// Width of a text field on the wire, terminator included.
pub const TEXT_WIDTH: usize = 256;

/// Longest text a caller can store; one byte is reserved for the terminator.
pub const MAX_TEXT_LEN: usize = TEXT_WIDTH - 1;

/// Bounded byte string backing the `b` and `d` record fields.
///
/// Built from caller input it keeps the bytes before the first NUL, capped at
/// [`MAX_TEXT_LEN`]; anything longer is dropped silently. Decoded from a
/// fixed-width field with no terminator it holds all [`TEXT_WIDTH`] bytes.
/// Truncation is at byte granularity, so a cut can split a UTF-8 sequence;
/// [`Text::to_string_lossy`] handles that for display.
#[derive(Clone, Copy)]
pub struct Text {
    len: u16,
    buf: [u8; TEXT_WIDTH],
}

impl Text {
    pub fn new(s: &str) -> Self {
        Self::from_bytes(s.as_bytes())
    }

    /// Build from raw bytes with the caller-input truncation rule.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let end = nul_position(bytes).min(MAX_TEXT_LEN);
        Self::copy_from(&bytes[..end])
    }

    /// Decode a fixed-width field. No terminator means all 256 bytes are text.
    pub(crate) fn from_field(field: &[u8; TEXT_WIDTH]) -> Self {
        let end = nul_position(field);
        Self::copy_from(&field[..end])
    }

    /// Encode as a NUL-padded fixed-width field.
    pub(crate) fn to_field(&self) -> [u8; TEXT_WIDTH] {
        let mut field = [0u8; TEXT_WIDTH];
        field[..self.len()].copy_from_slice(self.as_bytes());
        field
    }

    fn copy_from(bytes: &[u8]) -> Self {
        let mut buf = [0u8; TEXT_WIDTH];
        buf[..bytes.len()].copy_from_slice(bytes);
        Self {
            len: bytes.len() as u16,
            buf,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len()]
    }

    /// Length in bytes, not characters.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_bytes())
    }
}

fn nul_position(bytes: &[u8]) -> usize {
    bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len())
}

impl Default for Text {
    fn default() -> Self {
        Self {
            len: 0,
            buf: [0u8; TEXT_WIDTH],
        }
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl PartialEq for Text {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Text {}

impl PartialOrd for Text {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Text {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.to_string_lossy(), f)
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

/// The four-field value stored at every graph node and collection slot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Record {
    pub a: i32,
    pub b: Text,
    pub c: f64,
    pub d: Text,
}

impl Record {
    pub fn new(a: i32, b: &str, c: f64, d: &str) -> Self {
        Self {
            a,
            b: Text::new(b),
            c,
            d: Text::new(d),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a={}, b={}, c={:.2}, d={}", self.a, self.b, self.c, self.d)
    }
}
