//! Bag module - shuffled piece supply
//!
//! A bag holds four copies of each of the seven kinds (28 pieces), shuffled
//! uniformly. Pieces are drawn until the bag is empty; only then is a fresh
//! bag shuffled in. Every run of 28 draws following a refill therefore
//! contains exactly four of each kind.
//!
//! The RNG is owned by the caller so the same generator can also pick spawn
//! columns, which keeps a seeded game fully reproducible.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::{PieceKind, BAG_COPIES_PER_KIND, BAG_SIZE};

#[derive(Debug, Clone, Default)]
pub struct PieceBag {
    /// Remaining pieces; draws pop from the end
    pieces: Vec<PieceKind>,
    /// Number of times the bag has been filled
    refills: u64,
}

impl PieceBag {
    /// Create an empty bag; the first draw fills it
    pub fn new() -> Self {
        Self {
            pieces: Vec::with_capacity(BAG_SIZE),
            refills: 0,
        }
    }

    /// Discard the remaining pieces and shuffle in a full bag
    pub fn refill<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.pieces.clear();
        for _ in 0..BAG_COPIES_PER_KIND {
            self.pieces.extend_from_slice(&PieceKind::ALL);
        }
        self.pieces.shuffle(rng);
        self.refills += 1;
    }

    /// Draw the next piece, refilling only when the bag is empty
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> PieceKind {
        if self.pieces.is_empty() {
            self.refill(rng);
        }
        match self.pieces.pop() {
            Some(kind) => kind,
            // A refilled bag is never empty.
            None => PieceKind::I,
        }
    }

    /// Pieces left before the next refill
    pub fn remaining(&self) -> usize {
        self.pieces.len()
    }

    pub fn refills(&self) -> u64 {
        self.refills
    }

    /// Count of a kind still in the bag
    pub fn count_of(&self, kind: PieceKind) -> usize {
        self.pieces.iter().filter(|&&k| k == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_refill_holds_four_of_each() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut bag = PieceBag::new();
        bag.refill(&mut rng);

        assert_eq!(bag.remaining(), 28);
        for kind in PieceKind::ALL {
            assert_eq!(bag.count_of(kind), 4, "{:?}", kind);
        }
    }

    #[test]
    fn test_draws_all_28_before_refilling() {
        let mut rng = StdRng::seed_from_u64(12345);
        let mut bag = PieceBag::new();

        let mut drawn = Vec::new();
        for _ in 0..BAG_SIZE {
            drawn.push(bag.draw(&mut rng));
            assert_eq!(bag.refills(), 1);
        }
        assert_eq!(bag.remaining(), 0);
        for kind in PieceKind::ALL {
            assert_eq!(drawn.iter().filter(|&&k| k == kind).count(), 4);
        }

        // 29th draw triggers exactly one more refill.
        bag.draw(&mut rng);
        assert_eq!(bag.refills(), 2);
        assert_eq!(bag.remaining(), BAG_SIZE - 1);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);
        let mut bag1 = PieceBag::new();
        let mut bag2 = PieceBag::new();

        for _ in 0..60 {
            assert_eq!(bag1.draw(&mut rng1), bag2.draw(&mut rng2));
        }
    }
}
