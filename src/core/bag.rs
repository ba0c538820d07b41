//! 7-bag piece randomizer.
//!
//! Every bag holds one of each of the seven kinds, Fisher-Yates shuffled and
//! consumed in order; a fresh bag is shuffled when the previous one runs out.
//! Any aligned run of seven draws therefore contains every kind exactly once.
//!
//! Randomness comes from a small seedable LCG so games can be reproduced;
//! the engine does not mandate any particular seed choice.

use crate::types::PieceKind;

/// Linear congruential generator (Numerical Recipes constants).
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        // A zero state would collapse the low-quality tail of the sequence.
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        self.state
    }

    /// Uniform-enough value in `[0, max)`.
    pub fn next_below(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Fisher-Yates shuffle.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_below(i as u32 + 1) as usize;
            slice.swap(i, j);
        }
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Shuffle-and-consume bag of the seven piece kinds.
#[derive(Debug, Clone)]
pub struct PieceBag {
    bag: [PieceKind; 7],
    next: usize,
    rng: Lcg,
}

impl PieceBag {
    pub fn new(seed: u32) -> Self {
        let mut bag = Self {
            bag: PieceKind::ALL,
            next: 0,
            rng: Lcg::new(seed),
        };
        bag.rng.shuffle(&mut bag.bag);
        bag
    }

    /// Draw the next kind, reshuffling a full bag when this one empties.
    pub fn draw(&mut self) -> PieceKind {
        let kind = self.bag[self.next];
        self.next += 1;
        if self.next == self.bag.len() {
            self.bag = PieceKind::ALL;
            self.rng.shuffle(&mut self.bag);
            self.next = 0;
        }
        kind
    }

    /// The kind the next `draw` will return, without consuming it.
    pub fn peek(&self) -> PieceKind {
        self.bag[self.next]
    }

    /// Kinds left in the current bag before the next reshuffle.
    pub fn remaining(&self) -> usize {
        self.bag.len() - self.next
    }

    /// Current RNG state, usable as a seed to replay the tail of a game.
    pub fn rng_state(&self) -> u32 {
        self.rng.state()
    }
}
