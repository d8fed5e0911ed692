//! Seeded randomness for reference agents.
//!
//! A game host forks one stream per seated agent from a single seed, so a
//! whole game replays from that seed. Stream positions can be saved and
//! restored.
//!
//! ```
//! use rust_pursuit::core::GameRng;
//!
//! let mut table = GameRng::new(42);
//! let mut red = table.fork();
//!
//! let mut again = GameRng::new(42);
//! let mut red_again = again.fork();
//! assert_eq!(red.choose(&[1, 2, 3]), red_again.choose(&[1, 2, 3]));
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Odd constant spreading fork seeds apart.
const FORK_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// ChaCha8 stream that remembers its seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    /// Derive an independent stream. The n-th fork of a seed is always the same.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(self.seed.wrapping_add(self.forks.wrapping_mul(FORK_STRIDE)))
    }

    /// Uniform pick; `None` for an empty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.inner)
    }

    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            forks: self.forks,
        }
    }

    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut rng = Self::new(state.seed);
        rng.inner.set_word_pos(state.word_pos);
        rng.forks = state.forks;
        rng
    }
}

/// Saved stream position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    pub word_pos: u128,
    pub forks: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEMS: [u32; 8] = [0, 1, 2, 3, 4, 5, 6, 7];

    fn draw(rng: &mut GameRng, n: usize) -> Vec<u32> {
        (0..n).filter_map(|_| rng.choose(&ITEMS).copied()).collect()
    }

    #[test]
    fn test_same_seed_same_stream() {
        let first = draw(&mut GameRng::new(5), 32);
        assert_eq!(first, draw(&mut GameRng::new(5), 32));
    }

    #[test]
    fn test_forks_differ_from_parent_and_each_other() {
        let mut rng = GameRng::new(5);
        let mut first = rng.fork();
        let mut second = rng.fork();

        let a = draw(&mut first, 32);
        assert_ne!(a, draw(&mut second, 32));
        assert_ne!(a, draw(&mut rng, 32));
    }

    #[test]
    fn test_choose_empty() {
        let empty: [u32; 0] = [];
        assert!(GameRng::new(1).choose(&empty).is_none());
    }

    #[test]
    fn test_restore_continues_stream() {
        let mut rng = GameRng::new(7);
        draw(&mut rng, 10);
        rng.fork();

        let saved = rng.state();
        let mut restored = GameRng::from_state(&saved);
        assert_eq!(draw(&mut rng, 16), draw(&mut restored, 16));
        assert_eq!(rng.fork().state(), restored.fork().state());
    }

    #[test]
    fn test_state_serde() {
        let state = GameRng::new(3).state();
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(serde_json::from_str::<GameRngState>(&json).unwrap(), state);
    }
}
