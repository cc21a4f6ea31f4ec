//! RNG module - piece selection
//!
//! Every new piece is drawn uniformly from the seven shapes. The source is
//! seeded once at construction and owned by the game, so the same seed
//! always replays the same sequence of pieces.
//!
//! A scripted source is also provided for tests and replays that need an
//! exact piece order.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::{PieceKind, SHAPE_COUNT};

/// Seeded uniform shape generator backed by ChaCha8
#[derive(Debug, Clone)]
pub struct SeededRandom {
    inner: ChaCha8Rng,
    seed: u64,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw the next shape, uniformly over all seven
    pub fn next_kind(&mut self) -> PieceKind {
        let id = self.inner.gen_range(0..SHAPE_COUNT);
        PieceKind::ALL[id as usize]
    }
}

/// Where new pieces come from
#[derive(Debug, Clone)]
pub enum PieceSource {
    Random(SeededRandom),
    /// Cycles through a fixed, non-empty sequence
    Scripted { sequence: Vec<PieceKind>, next: usize },
}

impl PieceSource {
    pub fn seeded(seed: u64) -> Self {
        PieceSource::Random(SeededRandom::new(seed))
    }

    /// Scripted source; an empty sequence falls back to a single I piece
    pub fn scripted(sequence: impl IntoIterator<Item = PieceKind>) -> Self {
        let mut sequence: Vec<PieceKind> = sequence.into_iter().collect();
        if sequence.is_empty() {
            sequence.push(PieceKind::I);
        }
        PieceSource::Scripted { sequence, next: 0 }
    }

    /// Seed of a random source; `None` when scripted
    pub fn seed(&self) -> Option<u64> {
        match self {
            PieceSource::Random(rng) => Some(rng.seed()),
            PieceSource::Scripted { .. } => None,
        }
    }

    pub fn next_kind(&mut self) -> PieceKind {
        match self {
            PieceSource::Random(rng) => rng.next_kind(),
            PieceSource::Scripted { sequence, next } => {
                let kind = sequence[*next % sequence.len()];
                *next = (*next + 1) % sequence.len();
                kind
            }
        }
    }
}

impl From<SeededRandom> for PieceSource {
    fn from(value: SeededRandom) -> Self {
        PieceSource::Random(value)
    }
}

impl From<u64> for PieceSource {
    fn from(seed: u64) -> Self {
        PieceSource::seeded(seed)
    }
}
