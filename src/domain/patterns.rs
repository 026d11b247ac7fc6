use super::Grid;
use rand::Rng;

/// Seed patterns a simulation can start from.
/// Every pattern except [`Pattern::Random`] is a fixed list of offsets
/// from the grid center `(size / 2, size / 2)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Pattern {
    /// A quarter of the grid area drawn as uniform random cells
    #[default]
    Random,
    /// Two vertical bars of five joined by a top and bottom cell
    Exploder,
    /// Ten live cells in a horizontal line
    TenCellRow,
    /// Gun-like arrangement of blocks and ships
    GliderGun,
}

const EXPLODER: &[(i64, i64)] = &[
    (0, 2), (0, -2),
    (2, 2), (2, 1), (2, 0), (2, -1), (2, -2),
    (-2, 2), (-2, 1), (-2, 0), (-2, -1), (-2, -2),
];

const TEN_CELL_ROW: &[(i64, i64)] = &[
    (-5, 0), (-4, 0), (-3, 0), (-2, 0), (-1, 0),
    (0, 0),
    (1, 0), (2, 0), (3, 0), (4, 0),
];

// Literal layout, kept as-is rather than derived from the canonical Gosper gun.
const GLIDER_GUN: &[(i64, i64)] = &[
    (0, 0), (-1, 1), (-2, 1), (-2, 0), (-2, -1),
    (-9, 1), (-9, 3), (-8, 3), (-8, 2), (-10, 1), (-10, 2),
    (-17, 2), (-18, 2), (-17, 3), (-18, 3),
    (4, 3), (5, 3), (4, 4), (5, 5), (6, 5), (6, 4),
    (16, 4), (17, 4), (16, 5), (17, 5),
    (17, -2), (18, -2), (17, -3), (19, -3), (17, -4),
    (6, -7), (6, -8), (7, -7), (7, -9), (8, -7),
];

impl Pattern {
    /// Get all available patterns
    pub fn all() -> Vec<Pattern> {
        vec![
            Pattern::Random,
            Pattern::Exploder,
            Pattern::TenCellRow,
            Pattern::GliderGun,
        ]
    }

    /// Normalize a user-supplied selector.
    /// Only the first non-blank character counts, case-insensitively, so
    /// "g", "G" and "Glider Gun" all pick the gun. Anything unrecognized
    /// falls back to [`Pattern::Random`].
    pub fn from_selector(selector: &str) -> Self {
        match selector.trim().chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('e') => Pattern::Exploder,
            Some('t') => Pattern::TenCellRow,
            Some('g') => Pattern::GliderGun,
            _ => Pattern::Random,
        }
    }

    /// One-letter selector understood by [`Pattern::from_selector`]
    pub const fn selector(&self) -> char {
        match self {
            Pattern::Random => 'r',
            Pattern::Exploder => 'e',
            Pattern::TenCellRow => 't',
            Pattern::GliderGun => 'g',
        }
    }

    /// Display name
    pub const fn name(&self) -> &'static str {
        match self {
            Pattern::Random => "Random",
            Pattern::Exploder => "Exploder",
            Pattern::TenCellRow => "Ten Cell Row",
            Pattern::GliderGun => "Glider Gun",
        }
    }

    /// Short description
    pub const fn description(&self) -> &'static str {
        match self {
            Pattern::Random => "size*size/4 random draws",
            Pattern::Exploder => "12 cells, expands then settles",
            Pattern::TenCellRow => "10 cells in a row",
            Pattern::GliderGun => "Fixed 35-cell gun layout",
        }
    }

    /// Fixed offsets from the grid center. Empty for [`Pattern::Random`].
    pub const fn offsets(&self) -> &'static [(i64, i64)] {
        match self {
            Pattern::Random => &[],
            Pattern::Exploder => EXPLODER,
            Pattern::TenCellRow => TEN_CELL_ROW,
            Pattern::GliderGun => GLIDER_GUN,
        }
    }

    /// Seed the pattern onto `grid`, centered at `(width / 2, height / 2)`.
    /// Offsets that land outside the grid wrap around the torus.
    /// `rng` is only drawn from for [`Pattern::Random`].
    pub fn seed<R: Rng>(&self, grid: &mut Grid, rng: &mut R) {
        let (width, height) = grid.dimensions();

        match self {
            Pattern::Random => {
                // Duplicate draws just re-set the same cell
                for _ in 0..(width * height / 4) {
                    let x = rng.random_range(0..width) as i64;
                    let y = rng.random_range(0..height) as i64;
                    grid.set(x, y, true);
                }
            }
            _ => {
                let cx = (width / 2) as i64;
                let cy = (height / 2) as i64;
                for &(dx, dy) in self.offsets() {
                    grid.set(cx + dx, cy + dy, true);
                }
            }
        }
    }
}
