//! Fixed-timestep accumulator
//!
//! Converts variable frame times into a whole number of simulation ticks.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Longest frame time fed into the accumulator (seconds)
const MAX_FRAME_DT: f32 = 0.1;

#[derive(Debug, Clone, Default)]
pub struct FixedTimestep {
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add elapsed wall time and return how many ticks to run now
    ///
    /// At most `MAX_SUBSTEPS` per call; any backlog beyond that is dropped
    /// so a stall does not turn into a burst of catch-up ticks.
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            substeps += 1;
        }

        if substeps == MAX_SUBSTEPS && self.accumulator >= SIM_DT {
            log::debug!("Dropping {:.3}s of simulation backlog", self.accumulator);
            self.accumulator %= SIM_DT;
        }

        substeps
    }

    /// Forget any partial tick (after a phase change or pause)
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
