use crate::config::InterfaceConfig;
use std::io::{self, Write};

/// Events that make a noise
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum SoundEffect {
    /// The snake ate a piece of food
    FoodEaten,
    /// The snake ran into itself
    GameLost,
}

/// Plays sound effects, as far as a terminal can.  Playing is
/// fire-and-forget: failures are logged and otherwise ignored.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Speaker {
    bell: bool,
}

impl Speaker {
    pub(crate) fn new(config: InterfaceConfig) -> Speaker {
        Speaker { bell: config.bell }
    }

    pub(crate) fn play(&self, effect: SoundEffect) {
        log::debug!("Playing {effect:?}");
        if self.bell {
            if let Err(e) = ring(io::stdout()) {
                log::warn!("Failed to ring terminal bell: {e}");
            }
        }
    }
}

fn ring<W: Write>(mut out: W) -> io::Result<()> {
    out.write_all(b"\x07")?;
    out.flush()
}
