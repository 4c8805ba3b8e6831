//! Tools to count how often each byte value occurs.

use fsum::FSum;

/// Number of occurrences of each of the 256 possible byte values.
///
/// Backed by a fixed array, so iteration with [`occurring`] always
/// runs in ascending byte order. That order is what makes the
/// serialized frequency table, and therefore whole containers,
/// byte-identical across repeated encodes of the same input.
///
/// [`occurring`]: FrequencyTable::occurring
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FrequencyTable {
    counts: [u32; 256],
}

impl FrequencyTable {
    /// Returns a table with all counts zero.
    pub fn new() -> Self {
        FrequencyTable { counts: [0; 256] }
    }

    /// Constructs the table counting the occurrences of all values in `bytes`.
    pub fn with_occurrences_of(bytes: &[u8]) -> Self {
        let mut result = Self::new();
        for byte in bytes {
            result.count(*byte);
        }
        result
    }

    /// Adds one to the stored number of `byte` occurrences.
    #[inline]
    pub fn count(&mut self, byte: u8) {
        self.counts[byte as usize] += 1;
    }

    /// Returns the stored number of `byte` occurrences.
    #[inline]
    pub fn occurrences_of(&self, byte: u8) -> u32 {
        self.counts[byte as usize]
    }

    /// Sets the stored number of `byte` occurrences.
    #[inline]
    pub fn set_occurrences_of(&mut self, byte: u8, count: u32) {
        self.counts[byte as usize] = count;
    }

    /// Returns an iterator over `(byte, count)` pairs with non-zero
    /// counts, in ascending byte order.
    pub fn occurring(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, count)| **count != 0)
            .map(|(byte, count)| (byte as u8, *count))
    }

    /// Returns the number of distinct byte values with non-zero counts.
    pub fn number_of_occurring_values(&self) -> usize {
        self.counts.iter().filter(|count| **count != 0).count()
    }

    /// Returns the sum of all counts, i.e. the length of the counted input.
    ///
    /// `u64` because a deserialized table may hold up to 256 counts
    /// close to `u32::MAX`.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|count| *count as u64).sum()
    }

    /// Returns true if no byte value occurs.
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|count| *count == 0)
    }

    /// Returns the Shannon entropy, in bits per byte, of the values counted so far.
    pub fn entropy(&self) -> f64 {
        let total = self.total() as f64;
        -FSum::with_all(self.occurring().map(|(_, count)| {
            let p = count as f64 / total;
            p * p.log2()
        }))
        .value()
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_every_occurrence() {
        let table = FrequencyTable::with_occurrences_of(b"abracadabra");
        assert_eq!(table.occurrences_of(b'a'), 5);
        assert_eq!(table.occurrences_of(b'b'), 2);
        assert_eq!(table.occurrences_of(b'r'), 2);
        assert_eq!(table.occurrences_of(b'c'), 1);
        assert_eq!(table.occurrences_of(b'd'), 1);
        assert_eq!(table.occurrences_of(b'z'), 0);
        assert_eq!(table.number_of_occurring_values(), 5);
        assert_eq!(table.total(), 11);
    }

    #[test]
    fn occurring_is_in_ascending_byte_order() {
        let table = FrequencyTable::with_occurrences_of(b"cab");
        let pairs: Vec<_> = table.occurring().collect();
        assert_eq!(pairs, [(b'a', 1), (b'b', 1), (b'c', 1)]);
    }

    #[test]
    fn empty_input_yields_empty_table() {
        let table = FrequencyTable::with_occurrences_of(b"");
        assert!(table.is_empty());
        assert_eq!(table.number_of_occurring_values(), 0);
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn entropy_of_two_equiprobable_values() {
        let table = FrequencyTable::with_occurrences_of(b"ABAB");
        assert!((table.entropy() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn entropy_of_single_value_is_zero() {
        let table = FrequencyTable::with_occurrences_of(b"AAAA");
        assert!(table.entropy().abs() < 1e-10);
    }
}
