//! The self-describing serialized form of a compressed stream.

use std::io;

use crate::error::CodingError;
use crate::frequencies::FrequencyTable;

/// Exact size, in bytes, of the container header for a frequency table
/// with `n` occurring byte values: the `u16` symbol count, `n`
/// five-byte table entries and the padding byte.
pub const fn header_bytes(n: usize) -> usize {
    2 + 5 * n + 1
}

/// Everything decompression needs, in the order it is written out:
/// the frequency table that deterministically rebuilds the prefix
/// tree, the number of padding bits in the last payload byte, and the
/// packed payload itself.
///
/// Wire layout, all integers big-endian:
///
/// ```text
/// u16 N | N × { u8 byte, u32 frequency } | u8 padding | payload…
/// ```
#[derive(Debug, Clone)]
pub struct Container {
    pub frequencies: FrequencyTable,
    pub padding: u8,
    pub payload: Vec<u8>,
}

impl Container {
    /// Returns the number of bytes which `write` will write.
    pub fn write_bytes(&self) -> usize {
        header_bytes(self.frequencies.number_of_occurring_values()) + self.payload.len()
    }

    /// Writes `self` to `output`. Table entries go out in ascending
    /// byte order, so the same input always serializes identically.
    pub fn write(&self, output: &mut dyn io::Write) -> io::Result<()> {
        write_int!(output, self.frequencies.number_of_occurring_values() as u16)?;
        for (byte, count) in self.frequencies.occurring() {
            write_int!(output, byte)?;
            write_int!(output, count)?;
        }
        write_int!(output, self.padding)?;
        output.write_all(&self.payload)
    }

    /// Parses a container written by [`write`](Container::write),
    /// validating the declared structure against what `bytes` holds:
    /// the table and padding byte must fit the buffer, byte values
    /// must be unique (strictly ascending), frequencies non-zero, the
    /// padding in `0..=7`, and an empty table admits no payload.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodingError> {
        if bytes.len() < 2 {
            return Err(CodingError::TruncatedContainer {
                what: "symbol count",
                expected: 2,
                actual: bytes.len(),
            });
        }
        let mut input = bytes;
        let n = read_int!(&mut input, u16)? as usize;
        if n > 256 {
            return Err(CodingError::TooManySymbols { count: n });
        }
        if bytes.len() < header_bytes(n) {
            return Err(CodingError::TruncatedContainer {
                what: "frequency table",
                expected: header_bytes(n),
                actual: bytes.len(),
            });
        }

        let mut frequencies = FrequencyTable::new();
        let mut previous: Option<u8> = None;
        for _ in 0..n {
            let byte = read_int!(&mut input, u8)?;
            let count = read_int!(&mut input, u32)?;
            if previous.is_some_and(|p| p >= byte) {
                return Err(CodingError::UnorderedTable { byte });
            }
            if count == 0 {
                return Err(CodingError::ZeroFrequency { byte });
            }
            frequencies.set_occurrences_of(byte, count);
            previous = Some(byte);
        }

        let padding = read_int!(&mut input, u8)?;
        let payload = input.to_vec();

        if n == 0 && (padding != 0 || !payload.is_empty()) {
            return Err(CodingError::UnexpectedPayload);
        }
        if padding > 7 || (payload.is_empty() && padding != 0) {
            return Err(CodingError::InvalidPadding { padding, payload_len: payload.len() });
        }

        Ok(Container { frequencies, padding, payload })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(container: &Container) -> Container {
        let mut bytes = Vec::new();
        container.write(&mut bytes).unwrap();
        assert_eq!(bytes.len(), container.write_bytes());
        Container::from_bytes(&bytes).unwrap()
    }

    #[test]
    fn writes_the_documented_layout() {
        let container = Container {
            frequencies: FrequencyTable::with_occurrences_of(b"ABAB"),
            padding: 4,
            payload: vec![0b0101_0000],
        };
        let mut bytes = Vec::new();
        container.write(&mut bytes).unwrap();
        assert_eq!(
            bytes,
            [
                0, 2, // two distinct symbols
                b'A', 0, 0, 0, 2, // A occurs twice
                b'B', 0, 0, 0, 2, // B occurs twice
                4, // four padding bits
                0b0101_0000,
            ]
        );
        assert_eq!(bytes.len(), header_bytes(2) + 1);
    }

    #[test]
    fn round_trips_table_padding_and_payload() {
        let container = Container {
            frequencies: FrequencyTable::with_occurrences_of(b"mississippi"),
            padding: 3,
            payload: vec![0xde, 0xad, 0xbe, 0xe0],
        };
        let read = round_trip(&container);
        assert_eq!(read.frequencies, container.frequencies);
        assert_eq!(read.padding, 3);
        assert_eq!(read.payload, container.payload);
    }

    #[test]
    fn empty_table_container_is_three_bytes() {
        let container = Container {
            frequencies: FrequencyTable::new(),
            padding: 0,
            payload: Vec::new(),
        };
        let mut bytes = Vec::new();
        container.write(&mut bytes).unwrap();
        assert_eq!(bytes, [0, 0, 0]);
        let read = round_trip(&container);
        assert!(read.frequencies.is_empty());
        assert!(read.payload.is_empty());
    }

    #[test]
    fn rejects_buffer_shorter_than_the_count_field() {
        assert!(matches!(
            Container::from_bytes(&[0]),
            Err(CodingError::TruncatedContainer { what: "symbol count", expected: 2, actual: 1 })
        ));
    }

    #[test]
    fn rejects_table_larger_than_the_buffer() {
        // declares 2 entries but holds barely one
        let bytes = [0, 2, b'A', 0, 0, 0, 2];
        let err = Container::from_bytes(&bytes).unwrap_err();
        assert!(matches!(
            err,
            CodingError::TruncatedContainer { what: "frequency table", expected: 13, actual: 7 }
        ));
        assert!(err.is_malformed());
    }

    #[test]
    fn rejects_more_symbols_than_byte_values() {
        let mut bytes = vec![1, 4]; // 260 declared entries
        bytes.resize(header_bytes(260), 0);
        assert!(matches!(
            Container::from_bytes(&bytes),
            Err(CodingError::TooManySymbols { count: 260 })
        ));
    }

    #[test]
    fn rejects_unordered_and_duplicate_entries() {
        let duplicated = [0, 2, b'A', 0, 0, 0, 2, b'A', 0, 0, 0, 1, 0];
        assert!(matches!(
            Container::from_bytes(&duplicated),
            Err(CodingError::UnorderedTable { byte: b'A' })
        ));
        let descending = [0, 2, b'B', 0, 0, 0, 2, b'A', 0, 0, 0, 1, 0];
        assert!(matches!(
            Container::from_bytes(&descending),
            Err(CodingError::UnorderedTable { byte: b'A' })
        ));
    }

    #[test]
    fn rejects_zero_frequency() {
        let bytes = [0, 1, b'A', 0, 0, 0, 0, 0];
        assert!(matches!(
            Container::from_bytes(&bytes),
            Err(CodingError::ZeroFrequency { byte: b'A' })
        ));
    }

    #[test]
    fn rejects_padding_out_of_range() {
        let bytes = [0, 1, b'A', 0, 0, 0, 4, 9, 0xff];
        assert!(matches!(
            Container::from_bytes(&bytes),
            Err(CodingError::InvalidPadding { padding: 9, payload_len: 1 })
        ));
    }

    #[test]
    fn rejects_padding_without_payload() {
        let bytes = [0, 1, b'A', 0, 0, 0, 4, 3];
        assert!(matches!(
            Container::from_bytes(&bytes),
            Err(CodingError::InvalidPadding { padding: 3, payload_len: 0 })
        ));
    }

    #[test]
    fn rejects_payload_after_empty_table() {
        assert!(matches!(
            Container::from_bytes(&[0, 0, 0, 0xff]),
            Err(CodingError::UnexpectedPayload)
        ));
        assert!(matches!(
            Container::from_bytes(&[0, 0, 1]),
            Err(CodingError::UnexpectedPayload)
        ));
    }
}
