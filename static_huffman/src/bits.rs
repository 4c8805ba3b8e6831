//! Packing a logical bit sequence into whole bytes and back.

use bit_vec::BitVec;

use crate::error::CodingError;

/// Packs `bits` into whole bytes, most significant bit first.
///
/// Returns the packed bytes together with the number of zero bits
/// appended to fill the last byte, always in `0..=7`; the count is
/// zero exactly when the bit length is already a multiple of 8. The
/// count must travel with the bytes: trailing filler is
/// indistinguishable from codeword bits by content alone.
pub fn pack(bits: &BitVec) -> (Vec<u8>, u8) {
    let padding = ((8 - bits.len() % 8) % 8) as u8;
    (bits.to_bytes(), padding)
}

/// Reverses [`pack`]: restores the bit sequence from `bytes`, stripping
/// exactly `padding` trailing filler bits.
///
/// Returns [`CodingError::InvalidPadding`] if `padding` is outside
/// `0..=7` or exceeds the number of available bits.
pub fn unpack(bytes: &[u8], padding: u8) -> Result<BitVec, CodingError> {
    let total = bytes.len() * 8;
    if padding > 7 || padding as usize > total {
        return Err(CodingError::InvalidPadding { padding, payload_len: bytes.len() });
    }
    let mut bits = BitVec::from_bytes(bytes);
    bits.truncate(total - padding as usize);
    Ok(bits)
}
