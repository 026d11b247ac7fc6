/// Conway's Game of Life transition (B3/S23).
///
/// Exactly 3 live neighbors: on.
/// Exactly 2 live neighbors: keep the current state.
/// Anything else: off.
#[inline]
pub const fn next_state(alive: bool, neighbors: u8) -> bool {
    neighbors == 3 || (neighbors == 2 && alive)
}
