/// Mapping from score to the time between snake movements.  The interval
/// starts at `start_ms`, shrinks by `step_ms` per point scored, and never
/// drops below `limit_ms`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct SpeedCurve {
    pub(crate) start_ms: u32,
    pub(crate) step_ms: u32,
    pub(crate) limit_ms: u32,
}

impl SpeedCurve {
    /// Return the tick interval in milliseconds for the given score
    pub(crate) fn interval_ms(self, score: u32) -> u32 {
        self.start_ms
            .saturating_sub(score.saturating_mul(self.step_ms))
            .max(self.limit_ms)
    }
}

impl Default for SpeedCurve {
    fn default() -> SpeedCurve {
        SpeedCurve {
            start_ms: 180,
            step_ms: 1,
            limit_ms: 50,
        }
    }
}
