use thiserror::Error;

/// Errors returned at the public boundary of this crate.
///
/// Internal consistency checks (duplicate suffix-array entries, an
/// induced pass producing an unsorted bucket) are programmer errors and
/// are caught with `debug_assert!` instead of this type; they indicate a
/// bug in this crate, not a caller mistake.
#[derive(Debug, Error)]
pub enum Error {
    /// A precondition of the public API was violated: a missing or
    /// non-unique sentinel, an output buffer of the wrong length, or an
    /// input too long to index with a `u32`-based suffix array.
    #[error("precondition violated: {0}")]
    PreconditionViolated(String),
}

pub type Result<T> = std::result::Result<T, Error>;
