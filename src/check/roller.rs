//! Die roll sources

use rand::rngs::ThreadRng;
use rand::Rng;

pub const D20_MIN: i32 = 1;
pub const D20_MAX: i32 = 20;

/// Source of twenty-sided die rolls
pub trait DieRoller {
    /// Uniform roll in `1..=20`
    fn roll_d20(&mut self) -> i32;
}

/// Roller backed by any `rand` generator
#[derive(Debug, Clone)]
pub struct RandRoller<R = ThreadRng> {
    rng: R,
}

impl RandRoller<ThreadRng> {
    /// Roller on the thread-local generator
    pub fn thread() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl<R: Rng> RandRoller<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> DieRoller for RandRoller<R> {
    #[inline]
    fn roll_d20(&mut self) -> i32 {
        self.rng.gen_range(D20_MIN..=D20_MAX)
    }
}

/// Replays a fixed sequence of rolls, cycling when exhausted
///
/// Values are clamped into `1..=20`.
#[derive(Debug, Clone)]
pub struct FixedRolls {
    rolls: Vec<i32>,
    next: usize,
}

impl FixedRolls {
    pub fn new(rolls: impl IntoIterator<Item = i32>) -> Self {
        Self {
            rolls: rolls
                .into_iter()
                .map(|r| r.clamp(D20_MIN, D20_MAX))
                .collect(),
            next: 0,
        }
    }
}

impl DieRoller for FixedRolls {
    fn roll_d20(&mut self) -> i32 {
        if self.rolls.is_empty() {
            return D20_MIN;
        }
        let roll = self.rolls[self.next % self.rolls.len()];
        self.next += 1;
        roll
    }
}
