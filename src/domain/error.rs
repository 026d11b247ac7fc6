use thiserror::Error;

/// Errors raised by the simulation core.
///
/// Construction is the only fallible operation: every coordinate query wraps
/// around the torus, so nothing after construction can go out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LifeError {
    /// A grid side was zero, or the cell count does not fit in memory.
    #[error("invalid grid dimension {width}x{height}: both sides must be positive")]
    InvalidDimension { width: usize, height: usize },
}
