use crate::consts;
use crate::game::Bounds;
use crate::speed::SpeedCurve;
use serde::Deserialize;
use thiserror::Error;

/// The fixed parameters of a game.  A `Rules` value is handed to each new
/// round and never changes during it.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(try_from = "RawRules")]
pub(crate) struct Rules {
    /// Number of cells along each side of the square field
    pub(crate) cells: u16,

    /// How the tick interval shrinks as the score grows
    pub(crate) speed: SpeedCurve,
}

impl Rules {
    pub(crate) const MIN_CELLS: u16 = 3;
    pub(crate) const MAX_CELLS: u16 = consts::MAX_CELLS;

    /// Return a copy of the rules with the field size replaced
    pub(crate) fn with_cells(self, cells: u16) -> Result<Rules, RulesError> {
        if !(Self::MIN_CELLS..=Self::MAX_CELLS).contains(&cells) {
            return Err(RulesError::Cells(cells));
        }
        Ok(Rules { cells, ..self })
    }

    pub(crate) fn bounds(self) -> Bounds {
        Bounds::square(self.cells)
    }

    /// The score at which the game is won: once the snake covers half of the
    /// field, there's no point in dragging it out.
    pub(crate) fn max_score(self) -> u32 {
        u32::from(self.cells) * u32::from(self.cells) / 2
    }
}

impl Default for Rules {
    fn default() -> Rules {
        Rules {
            cells: 16,
            speed: SpeedCurve::default(),
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawRules {
    cells: u16,
    start_speed: u32,
    speed_step: u32,
    speed_limit: u32,
}

impl Default for RawRules {
    fn default() -> RawRules {
        let Rules { cells, speed } = Rules::default();
        RawRules {
            cells,
            start_speed: speed.start_ms,
            speed_step: speed.step_ms,
            speed_limit: speed.limit_ms,
        }
    }
}

impl TryFrom<RawRules> for Rules {
    type Error = RulesError;

    fn try_from(value: RawRules) -> Result<Rules, RulesError> {
        if value.speed_limit == 0 {
            return Err(RulesError::SpeedLimit);
        }
        let speed = SpeedCurve {
            start_ms: value.start_speed,
            step_ms: value.speed_step,
            limit_ms: value.speed_limit,
        };
        Rules {
            speed,
            ..Rules::default()
        }
        .with_cells(value.cells)
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum RulesError {
    #[error("number of cells must be between {min} and {max}, got {0}", min = Rules::MIN_CELLS, max = Rules::MAX_CELLS)]
    Cells(u16),
    #[error("speed limit must be at least 1 millisecond")]
    SpeedLimit,
}
