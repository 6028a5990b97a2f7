//! Dense one-bit-per-pixel set over a `width × height` rectangle.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackedBitset {
    words: Vec<u64>,
    width: usize,
    height: usize,
    count: usize,
}

impl PackedBitset {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            words: vec![0; (width * height).div_ceil(64)],
            width,
            height,
            count: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of distinct coordinates currently set.
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    fn locate(&self, x: usize, y: usize) -> (usize, u64) {
        debug_assert!(
            x < self.width && y < self.height,
            "({x}, {y}) outside {}x{} bitset",
            self.width,
            self.height
        );
        let bit = y * self.width + x;
        (bit / 64, 1u64 << (bit % 64))
    }

    /// Sets `(x, y)`; returns `true` if it was not already set.
    pub fn set(&mut self, x: usize, y: usize) -> bool {
        let (word, mask) = self.locate(x, y);
        let fresh = self.words[word] & mask == 0;
        if fresh {
            self.words[word] |= mask;
            self.count += 1;
        }
        fresh
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        let (word, mask) = self.locate(x, y);
        self.words[word] & mask != 0
    }

    pub fn clear(&mut self) {
        self.words.fill(0);
        self.count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn set_then_get_across_word_boundaries() {
        let to_set: HashSet<(usize, usize)> =
            [(0, 2), (49, 2), (19, 2), (1, 1), (13, 1)].into_iter().collect();
        let mut bits = PackedBitset::new(50, 3);
        for &(x, y) in &to_set {
            assert!(bits.set(x, y));
        }
        for y in 0..3 {
            for x in 0..50 {
                assert_eq!(
                    bits.get(x, y),
                    to_set.contains(&(x, y)),
                    "mismatch at ({x}, {y})"
                );
            }
        }
        assert_eq!(bits.count(), to_set.len());
    }

    #[test]
    fn repeated_set_is_counted_once() {
        let mut bits = PackedBitset::new(8, 8);
        assert!(bits.set(3, 3));
        assert!(!bits.set(3, 3));
        assert_eq!(bits.count(), 1);
    }

    #[test]
    fn clear_resets_everything() {
        let mut bits = PackedBitset::new(10, 10);
        for i in 0..10 {
            bits.set(i, i);
        }
        assert_eq!(bits.count(), 10);
        bits.clear();
        assert_eq!(bits.count(), 0);
        assert!((0..10).all(|i| !bits.get(i, i)));
    }
}
