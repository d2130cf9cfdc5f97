//! RNG oracle for deterministic battle rolls.
//!
//! Every roll a tag makes (confusion coin flip, damage variance) is derived
//! from the battle seed, the turn number, the holder's side and a per-call
//! counter. Replaying a battle with the same seed replays every roll.

use crate::state::Side;

/// RNG oracle for deterministic random number generation.
///
/// Implementations must produce the same value for the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Fair coin: `true` on an odd draw.
    fn coin_flip(&self, seed: u64) -> bool {
        self.next_u32(seed) % 2 == 1
    }

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = u64::from(max - min) + 1;
        let offset = u64::from(self.next_u32(seed)) % span;
        // offset <= max - min, so the sum stays within u32
        min + offset as u32
    }
}

/// PCG-XSH-RR generator: 64-bit LCG state, 32-bit permuted output.
///
/// The seed is treated as the state, so the generator itself is stateless
/// and can be shared freely between combatants.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::output(Self::step(seed))
    }
}

/// Oracle that answers every draw with the same value.
///
/// Used to script known outcomes: `FixedRng(15)` flips heads and rolls the
/// top of an 85..=100 window, `FixedRng(0)` flips tails and rolls the bottom.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedRng(pub u32);

impl RngOracle for FixedRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        self.0
    }
}

/// Compute a deterministic seed for one roll.
///
/// # Arguments
///
/// * `battle_seed` - Base seed fixed when the battle starts
/// * `turn` - Turn number the roll happens in
/// * `side` - Holder of the tag making the roll
/// * `roll` - Index of the roll within the same turn and holder
pub fn compute_seed(battle_seed: u64, turn: u64, side: Side, roll: u32) -> u64 {
    // SplitMix64 / FxHash style combiners
    let mut hash = battle_seed;
    hash ^= turn.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (side.index() as u64 + 1).wrapping_mul(0x517cc1b727220a95);
    hash ^= (roll as u64).wrapping_mul(0x85ebca6b);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

/// Per-holder, per-turn stream of rolls handed to tag hooks.
pub struct RollSource<'a> {
    rng: &'a dyn RngOracle,
    battle_seed: u64,
    turn: u64,
    side: Side,
    next_roll: u32,
}

impl<'a> RollSource<'a> {
    pub fn new(rng: &'a dyn RngOracle, battle_seed: u64, turn: u64, side: Side) -> Self {
        Self {
            rng,
            battle_seed,
            turn,
            side,
            next_roll: 0,
        }
    }

    /// Resumes a stream after `drawn` rolls were already taken this turn.
    #[must_use]
    pub fn with_offset(mut self, drawn: u32) -> Self {
        self.next_roll = drawn;
        self
    }

    fn next_seed(&mut self) -> u64 {
        let seed = compute_seed(self.battle_seed, self.turn, self.side, self.next_roll);
        self.next_roll = self.next_roll.wrapping_add(1);
        seed
    }

    pub fn coin_flip(&mut self) -> bool {
        let seed = self.next_seed();
        self.rng.coin_flip(seed)
    }

    pub fn range(&mut self, min: u32, max: u32) -> u32 {
        let seed = self.next_seed();
        self.rng.range(seed, min, max)
    }

    /// Number of rolls drawn so far.
    pub fn rolls_drawn(&self) -> u32 {
        self.next_roll
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcg_is_deterministic() {
        let rng = PcgRng;
        assert_eq!(rng.next_u32(42), rng.next_u32(42));
        assert_ne!(rng.next_u32(42), rng.next_u32(43));
    }

    #[test]
    fn range_stays_inside_bounds() {
        let rng = PcgRng;
        for seed in 0..500 {
            let value = rng.range(seed, 85, 100);
            assert!((85..=100).contains(&value));
        }
        assert_eq!(rng.range(7, 90, 90), 90);
    }

    #[test]
    fn range_accepts_full_u32_window() {
        let rng = PcgRng;
        for seed in 0..100 {
            let _ = rng.range(seed, 0, u32::MAX);
        }
        assert_eq!(FixedRng(u32::MAX).range(0, 0, u32::MAX), u32::MAX);
        assert_eq!(FixedRng(7).range(0, 1, u32::MAX), 8);
    }

    #[test]
    fn seeds_differ_per_side_and_roll() {
        let a = compute_seed(1, 3, Side::Player, 0);
        assert_ne!(a, compute_seed(1, 3, Side::Enemy, 0));
        assert_ne!(a, compute_seed(1, 3, Side::Player, 1));
        assert_ne!(a, compute_seed(1, 4, Side::Player, 0));
    }

    #[test]
    fn fixed_rng_scripts_outcomes() {
        let high = FixedRng(15);
        let mut rolls = RollSource::new(&high, 0, 0, Side::Player);
        assert!(rolls.coin_flip());
        assert_eq!(rolls.range(85, 100), 100);
        assert_eq!(rolls.rolls_drawn(), 2);

        let low = FixedRng(0);
        let mut rolls = RollSource::new(&low, 0, 0, Side::Player);
        assert!(!rolls.coin_flip());
        assert_eq!(rolls.range(85, 100), 85);
    }

    #[test]
    fn offset_stream_continues_where_the_last_stopped() {
        let rng = PcgRng;
        let mut fresh = RollSource::new(&rng, 9, 2, Side::Enemy);
        fresh.coin_flip();
        fresh.coin_flip();
        let expected = fresh.range(0, 1_000_000);

        let mut resumed = RollSource::new(&rng, 9, 2, Side::Enemy).with_offset(2);
        assert_eq!(resumed.range(0, 1_000_000), expected);
        assert_eq!(resumed.rolls_drawn(), 3);
    }
}
