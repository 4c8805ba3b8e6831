//! Codeword assignment: from a prefix tree to per-byte bit codes.

use bit_vec::BitVec;

use crate::error::CodingError;
use crate::tree::{Node, Tree};

/// A single binary codeword of up to 64 bits.
///
/// The container stores frequencies as `u32`, which bounds the total
/// weight and with it the deepest leaf of the merge tree to well under
/// 64 edges (the weight along a chain of internal nodes grows at least
/// as fast as the Fibonacci numbers), so `u64` storage cannot overflow.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
pub struct Code {
    /// Codeword bits. The lowest `len` bits are used; the first edge
    /// from the root sits in the highest of them.
    pub bits: u64,
    /// Codeword length in bits.
    pub len: u32,
}

impl Code {
    /// Returns `self` extended by one edge: 0 for left, 1 for right.
    #[inline]
    pub fn with(self, right: bool) -> Self {
        Code { bits: self.bits << 1 | right as u64, len: self.len + 1 }
    }

    /// Returns the `nr`-th bit of the codeword, counting from the root end.
    #[inline]
    pub fn get(&self, nr: u32) -> bool {
        (self.bits >> (self.len - nr - 1)) & 1 == 1
    }

    /// Returns whether `self` is a proper prefix of `other`.
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        self.len < other.len && other.bits >> (other.len - self.len) == self.bits
    }
}

/// Codewords for every occurring byte value, indexed by byte.
#[derive(Clone)]
pub struct CodeBook {
    codes: [Code; 256],
}

impl CodeBook {
    /// Assigns codewords by descending the tree with an explicit
    /// stack: each left edge appends a 0, each right edge a 1, and a
    /// leaf's codeword is the edge sequence from the root down to it.
    ///
    /// A tree that is a single leaf has no edges; its byte receives
    /// the reserved one-bit codeword `0`, so that every occurrence
    /// still occupies exactly one bit of the packed stream.
    pub fn from_tree(tree: &Tree) -> Self {
        let mut codes = [Code::default(); 256];
        let mut stack = vec![(tree.root(), Code::default())];
        while let Some((index, code)) = stack.pop() {
            match tree.node(index) {
                Node::Leaf { byte } => {
                    codes[byte as usize] = if code.len == 0 {
                        Code { bits: 0, len: 1 }
                    } else {
                        code
                    };
                }
                Node::Internal { left, right } => {
                    stack.push((right, code.with(true)));
                    stack.push((left, code.with(false)));
                }
            }
        }
        CodeBook { codes }
    }

    /// Returns the codeword of `byte`, or `None` if `byte` has none.
    #[inline]
    pub fn get(&self, byte: u8) -> Option<Code> {
        let code = self.codes[byte as usize];
        (code.len != 0).then_some(code)
    }

    /// Appends the codeword of `byte` to `output`, first bit first.
    ///
    /// Returns [`CodingError::MissingCodeword`] if `byte` did not occur
    /// in the frequencies the book was built from.
    pub fn encode(&self, output: &mut BitVec, byte: u8) -> Result<(), CodingError> {
        let code = self.get(byte).ok_or(CodingError::MissingCodeword { byte })?;
        for nr in 0..code.len {
            output.push(code.get(nr));
        }
        Ok(())
    }

    /// Returns an iterator over `(byte, codeword)` pairs in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Code)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter(|(_, code)| code.len != 0)
            .map(|(byte, code)| (byte as u8, *code))
    }
}
