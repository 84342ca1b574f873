use rand::Rng;

/// Acceptance probability that grows by a fixed step after every rejection
///
/// Used for gate and landmark selection, where later candidates in the
/// iteration order should be increasingly likely to win. With `n` candidates
/// and `uniform_ramp(n)` the last candidate is reached with chance `n/n`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RisingChance {
    chance: f64,
    step: f64,
}

impl RisingChance {
    /// Start at `initial` and grow by `step` per rejection
    pub const fn new(initial: f64, step: f64) -> Self {
        Self {
            chance: initial,
            step,
        }
    }

    /// Ramp whose initial chance and step are both `1/count`
    pub fn uniform_ramp(count: usize) -> Self {
        let step = 1.0 / count.max(1) as f64;
        Self::new(step, step)
    }

    /// Current acceptance probability
    pub const fn chance(&self) -> f64 {
        self.chance
    }

    /// Draw once; on rejection the chance rises for the next trial
    pub fn trial<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let accepted = rng.random::<f64>() < self.chance;
        if !accepted {
            self.chance += self.step;
        }
        accepted
    }
}
