use super::grid::Bounds;
use rand::Rng;
use ratatui::layout::Position;
use std::collections::HashSet;

/// Pick a uniformly random cell within `bounds` that is not in `occupied`.
///
/// Cells are drawn from the whole field and redrawn until a free one comes
/// up, so `occupied` must leave at least one cell of the field free.
pub(crate) fn place_food<R: Rng>(
    rng: &mut R,
    bounds: Bounds,
    occupied: &HashSet<Position>,
) -> Position {
    debug_assert!(
        occupied.iter().filter(|&&p| bounds.contains(p)).count() < bounds.area(),
        "no free cell left to place food in"
    );
    loop {
        let pos = Position::new(
            rng.random_range(0..bounds.width),
            rng.random_range(0..bounds.height),
        );
        if !occupied.contains(&pos) {
            return pos;
        }
    }
}
