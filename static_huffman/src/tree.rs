//! Prefix tree construction and bit-by-bit decoding.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use bit_vec::BitVec;

use crate::error::CodingError;
use crate::frequencies::FrequencyTable;

/// A node of the prefix tree. Children are indices into the tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    Leaf { byte: u8 },
    Internal { left: u32, right: u32 },
}

/// Binary prefix tree built by repeatedly merging the two lightest nodes.
///
/// Nodes live in a flat arena addressed by index, so construction,
/// codeword assignment and decoding are all plain loops; no traversal
/// recurses, whatever the frequency distribution.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
    root: u32,
}

impl Tree {
    /// Builds the prefix tree for the given frequencies.
    ///
    /// Leaves enter the heap in ascending byte order and merged nodes
    /// in creation order; ties on equal weight go to the node created
    /// earlier, and of the two extracted nodes the first becomes the
    /// left child. Running this exact construction on both the encode
    /// and the decode side is what lets a container carry only the
    /// frequency table and never the tree shape.
    ///
    /// Returns [`CodingError::EmptyInput`] for a table with no symbols.
    pub fn from_frequencies(frequencies: &FrequencyTable) -> Result<Self, CodingError> {
        let leaves = frequencies.number_of_occurring_values();
        let mut nodes = Vec::with_capacity(2 * leaves.max(1) - 1);
        let mut heap = BinaryHeap::with_capacity(leaves);
        for (byte, count) in frequencies.occurring() {
            let index = nodes.len() as u32;
            nodes.push(Node::Leaf { byte });
            heap.push(Reverse((count as u64, index)));
        }

        while let Some(Reverse((first_weight, first))) = heap.pop() {
            let Some(Reverse((second_weight, second))) = heap.pop() else {
                return Ok(Tree { nodes, root: first });
            };
            let merged = nodes.len() as u32;
            nodes.push(Node::Internal { left: first, right: second });
            heap.push(Reverse((first_weight + second_weight, merged)));
        }

        Err(CodingError::EmptyInput)
    }

    /// Returns the index of the root node.
    #[inline]
    pub fn root(&self) -> u32 {
        self.root
    }

    /// Returns the node stored at `index`.
    #[inline]
    pub fn node(&self, index: u32) -> Node {
        self.nodes[index as usize]
    }

    /// Returns the total number of nodes, leaves and internal.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree has no nodes. Never true for a built tree.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Decodes `bits` by walking from the root, going left on 0 and
    /// right on 1, emitting a byte and restarting at the root whenever
    /// a leaf is reached. A tree that is a single leaf consumes one bit
    /// per emitted byte without inspecting its value.
    ///
    /// `expected` is the total symbol count recorded in the container.
    /// Returns [`CodingError::TruncatedStream`] if the bits end in the
    /// middle of a codeword or decode to a different number of symbols.
    pub fn decode(&self, bits: &BitVec, expected: u64) -> Result<Vec<u8>, CodingError> {
        // the declared total is untrusted, every symbol costs at least one bit
        let capacity = expected.min(bits.len() as u64) as usize;
        let mut output = Vec::with_capacity(capacity);

        let mut current = self.root;
        for bit in bits.iter() {
            if let Node::Internal { left, right } = self.node(current) {
                current = if bit { right } else { left };
            }
            if let Node::Leaf { byte } = self.node(current) {
                output.push(byte);
                current = self.root;
            }
        }

        if current != self.root || output.len() as u64 != expected {
            return Err(CodingError::TruncatedStream {
                decoded: output.len() as u64,
                expected,
            });
        }
        Ok(output)
    }
}
