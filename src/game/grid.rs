use ratatui::layout::{Position, Size};

/// The extent of the playing field.  Both edges wrap around: leaving the
/// field on one side re-enters it on the opposite side.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Bounds {
    pub(crate) width: u16,
    pub(crate) height: u16,
}

impl Bounds {
    pub(crate) fn square(cells: u16) -> Bounds {
        Bounds {
            width: cells,
            height: cells,
        }
    }

    pub(crate) fn size(self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Total number of cells in the field
    pub(crate) fn area(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    pub(crate) fn center(self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    pub(crate) fn contains(self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Bring a possibly out-of-range coordinate pair back onto the field,
    /// wrapping each axis independently.
    pub(crate) fn wrap(self, x: i32, y: i32) -> Position {
        Position::new(wrap_axis(x, self.width), wrap_axis(y, self.height))
    }
}

fn wrap_axis(value: i32, size: u16) -> u16 {
    let wrapped = value.rem_euclid(i32::from(size));
    u16::try_from(wrapped).expect("value reduced modulo a u16 should fit in a u16")
}
