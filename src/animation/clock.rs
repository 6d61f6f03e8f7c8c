/// Monotonic animation phase advanced by a fixed step once per rendered frame.
///
/// The phase is derived from the tick count rather than accumulated, so after
/// `n` frames it is exactly `n as f64 * step`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationClock {
    ticks: u64,
    step: f64,
}

impl AnimationClock {
    pub const DEFAULT_STEP: f64 = 0.005;

    pub fn new(step: f64) -> Self {
        Self { ticks: 0, step }
    }

    pub fn advance(&mut self) -> f64 {
        self.ticks += 1;
        self.phase()
    }

    pub fn phase(&self) -> f64 {
        self.ticks as f64 * self.step
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn step(&self) -> f64 {
        self.step
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STEP)
    }
}
