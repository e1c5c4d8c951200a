use thiserror::Error;

/// Input rejected at the engine boundary. The engine state is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("site {site} is outside the universe 0..{len}")]
    SiteOutOfRange { site: usize, len: usize },

    #[error("universe must contain at least one site")]
    EmptyUniverse,
}

/// A broken internal invariant. Only `Engine::validate` produces these;
/// seeing one means the engine has a bug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("id[{site}] = {value} points outside the universe 0..{len}")]
    SiteOutOfRange { site: usize, value: usize, len: usize },

    #[error("following parents from site {site} never reaches a root")]
    Cycle { site: usize },

    #[error("root {root} records size {recorded} but its tree holds {actual} sites")]
    SizeMismatch {
        root: usize,
        recorded: usize,
        actual: usize,
    },

    #[error("root sizes sum to {sum}, expected {len}")]
    SizeSum { sum: usize, len: usize },
}
