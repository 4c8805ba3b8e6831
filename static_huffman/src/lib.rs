#![doc = include_str!("../README.md")]

mod io;

mod error;
pub use error::CodingError;
mod frequencies;
pub use frequencies::FrequencyTable;
mod tree;
pub use tree::{Node, Tree};
mod code;
pub use code::{Code, CodeBook};
mod bits;
pub use bits::{pack, unpack};
mod container;
pub use container::{header_bytes, Container};

use bit_vec::BitVec;

/// Builds the [`Container`] that compresses `input`.
///
/// Counts byte occurrences, builds the prefix tree and codebook, and
/// concatenates the per-byte codewords in input order into the packed
/// payload. An empty input yields the empty container. Inputs longer
/// than `u32::MAX` bytes do not fit the container's frequency fields
/// and are rejected with [`CodingError::InputTooLong`].
///
/// The returned container exposes the frequency table, padding and
/// payload directly; [`compress`] serializes it in one step.
pub fn encode(input: &[u8]) -> Result<Container, CodingError> {
    if input.len() > u32::MAX as usize {
        return Err(CodingError::InputTooLong { len: input.len() });
    }
    let frequencies = FrequencyTable::with_occurrences_of(input);
    if input.is_empty() {
        return Ok(Container { frequencies, padding: 0, payload: Vec::new() });
    }

    let tree = Tree::from_frequencies(&frequencies)?;
    let book = CodeBook::from_tree(&tree);
    let mut encoded = BitVec::new();
    for byte in input {
        book.encode(&mut encoded, *byte)?;
    }
    let (payload, padding) = pack(&encoded);
    Ok(Container { frequencies, padding, payload })
}

/// Decodes `container` back into the byte sequence it was built from.
///
/// The prefix tree is rebuilt from the stored frequency table with the
/// same deterministic construction that [`encode`] ran; the tree shape
/// itself is never part of the container. A payload whose bits end
/// mid-codeword surfaces as [`CodingError::TruncatedStream`].
pub fn decode(container: &Container) -> Result<Vec<u8>, CodingError> {
    if container.frequencies.is_empty() {
        return Ok(Vec::new());
    }
    let tree = Tree::from_frequencies(&container.frequencies)?;
    let encoded = unpack(&container.payload, container.padding)?;
    tree.decode(&encoded, container.frequencies.total())
}

/// Compresses `input` into a serialized self-describing container
/// (see the crate docs for the wire layout): [`encode`] followed by
/// [`Container::write`].
pub fn compress(input: &[u8]) -> Result<Vec<u8>, CodingError> {
    let container = encode(input)?;
    let mut output = Vec::with_capacity(container.write_bytes());
    container.write(&mut output)?;
    Ok(output)
}

/// Decompresses a container serialized by [`compress`], reproducing
/// the original input byte for byte: [`Container::from_bytes`]
/// followed by [`decode`]. Structural problems surface as the
/// [`CodingError`] malformed-container variants.
pub fn decompress(bytes: &[u8]) -> Result<Vec<u8>, CodingError> {
    decode(&Container::from_bytes(bytes)?)
}
